use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::relay::ResponderSpec;

pub const DEFAULT_BIND: &str = "127.0.0.1:8000";
pub const DEFAULT_ALLOW_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_NOTE: &str =
    "The relay handled all the communication between the different programs and also says hello!";

/// Settings shared by `hello-relay ask` and `hello-relay serve`.
///
/// Every field is optional in a config file; missing ones take the defaults below.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RelayConfig {
    /// Address the HTTP server listens on
    pub bind: SocketAddr,
    /// Value of `Access-Control-Allow-Origin` on every HTTP response
    pub allow_origin: String,
    /// The relay's own entry in each report
    pub note: String,
    pub responders: Vec<ResponderSpec>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8000)),
            allow_origin: DEFAULT_ALLOW_ORIGIN.to_string(),
            note: DEFAULT_NOTE.to_string(),
            responders: default_responders(),
        }
    }
}

impl RelayConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open config file at {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse config file at {}", path.display()))
    }

    /// Read `path` if given, otherwise use the defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::info!("loading config from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides on top of file values
    pub fn with_overrides(mut self, bind: Option<SocketAddr>, allow_origin: Option<String>) -> Self {
        if let Some(bind) = bind {
            self.bind = bind;
        }
        if let Some(allow_origin) = allow_origin {
            self.allow_origin = allow_origin;
        }
        self
    }
}

/// The bundled responders, looked up next to the running executable.
///
/// Falls back to bare program names, resolved through `PATH`.
pub fn default_responders() -> Vec<ResponderSpec> {
    let bin_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    vec![
        ResponderSpec::new("C# Output", sibling_program(bin_dir.as_deref(), "csharp-responder")),
        ResponderSpec::new("Java Output", sibling_program(bin_dir.as_deref(), "java-responder")),
    ]
}

fn sibling_program(bin_dir: Option<&Path>, name: &str) -> PathBuf {
    let file_name = format!("{}{}", name, std::env::consts::EXE_SUFFIX);
    match bin_dir {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}
