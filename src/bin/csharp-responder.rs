use hello_relay::greeting::Persona;
use std::io::Write;

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let input = std::env::args_os()
        .nth(1)
        .map(|arg| arg.to_string_lossy().into_owned());
    log::debug!("selected input: {:?}", input);

    let reply = Persona::CSharp.respond(input.as_deref());
    if let Err(err) = writeln!(std::io::stdout(), "{}", reply) {
        log::debug!("failed to write reply: {}", err);
    }
}
