use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Relay one input to several responder programs and gather their replies
#[derive(Parser, Debug)]
#[command(author, version, about, propagate_version = true)]
pub struct Cli {
    /// Relay configuration file (JSON). Built-in defaults are used if not given
    #[arg(short = 'c', long = "config", value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Send one input to every responder and report their replies
    Ask {
        /// Input passed as the single argument of each responder
        #[arg(default_value = "")]
        input: String,
        /// Write the report to this file instead of printing it
        #[arg(short = 'o', long = "output", value_name = "OUTPUT")]
        output: Option<PathBuf>,
        /// Report format (json or cbor). If not specified, inferred from file extension
        #[arg(
            short = 'f',
            long = "format",
            value_name = "FORMAT",
            value_parser = ["json", "cbor"],
            requires = "output"
        )]
        format: Option<String>,
    },
    /// Serve the relay over HTTP: `POST /` with `{"input": "..."}`
    Serve {
        /// Address to listen on, overrides the config file
        #[arg(short = 'b', long = "bind", value_name = "ADDR")]
        bind: Option<SocketAddr>,
        /// Origin allowed by CORS, overrides the config file
        #[arg(long = "allow-origin", value_name = "ORIGIN")]
        allow_origin: Option<String>,
    },
    /// Print the effective configuration as JSON
    Config,
}
