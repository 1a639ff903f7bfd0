use clap_markdown::help_markdown;
use hello_relay::cli::Cli;

fn main() {
    println!("# hello-relay CLI Reference");
    println!();
    println!("This page contains the auto-generated reference documentation for the `hello-relay` command-line interface.");
    println!();

    println!("{}", help_markdown::<Cli>());
}
