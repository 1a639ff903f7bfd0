use hello_relay::greeting::{select_input, Persona};
use std::io::Write;

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    // Take arguments verbatim, flags included
    let args = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned());
    let input = select_input(args);
    log::debug!("selected input: {:?}", input);

    let reply = Persona::Java.respond(Some(&input));
    // A closed stdout is not a failure of the responder
    if let Err(err) = writeln!(std::io::stdout(), "{}", reply) {
        log::debug!("failed to write reply: {}", err);
    }
}
