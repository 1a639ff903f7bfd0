use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

/// How to launch one responder program
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ResponderSpec {
    /// Key of this responder's entry in a report
    pub label: String,
    pub program: PathBuf,
    /// Arguments placed before the input
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
}

impl ResponderSpec {
    pub fn new(label: impl Into<String>, program: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Run the responder with `input` as its last argument and return its trimmed stdout.
    ///
    /// A responder that cannot be run yields `Error in <label>: <reason>` instead.
    pub async fn invoke(&self, input: &str) -> String {
        match self.run(input).await {
            Ok(output) => output,
            Err(err) => {
                log::error!("{}: {:#}", self.label, err);
                format!("Error in {}: {:#}", self.label, err)
            }
        }
    }

    async fn run(&self, input: &str) -> Result<String> {
        log::debug!(
            "running {} {:?} {:?}",
            self.program.display(),
            self.args,
            input
        );
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(input)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .output()
            .await
            .with_context(|| format!("failed to run {}", self.program.display()))?;

        if !output.status.success() {
            log::warn!("{} exited with {}", self.label, output.status);
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
