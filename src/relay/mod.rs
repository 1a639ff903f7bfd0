mod format;
mod report;
mod responder;

pub use format::ReportFormat;
pub use report::Report;
pub use responder::ResponderSpec;

use crate::config::RelayConfig;

/// Report label under which the relay adds its own note
pub const RELAY_LABEL: &str = "Relay Output";

/// Sends one input to a fixed set of responders
#[derive(Debug, Clone)]
pub struct Relay {
    responders: Vec<ResponderSpec>,
    note: String,
}

impl Relay {
    pub fn new(responders: Vec<ResponderSpec>, note: impl Into<String>) -> Self {
        Self {
            responders,
            note: note.into(),
        }
    }

    pub fn from_config(config: &RelayConfig) -> Self {
        Self::new(config.responders.clone(), config.note.clone())
    }

    /// Run every responder concurrently with `input`.
    ///
    /// Entries follow the configured responder order, followed by the relay's note.
    pub async fn ask(&self, input: &str) -> Report {
        let handles: Vec<_> = self
            .responders
            .iter()
            .cloned()
            .map(|responder| {
                let input = input.to_string();
                tokio::spawn(async move { responder.invoke(&input).await })
            })
            .collect();

        let mut report = Report::new();
        for (responder, handle) in self.responders.iter().zip(handles) {
            let output = match handle.await {
                Ok(output) => output,
                Err(err) => {
                    log::error!("responder task for {} failed: {}", responder.label, err);
                    format!("Error in {}: {}", responder.label, err)
                }
            };
            report.push(responder.label.clone(), output);
        }
        report.push(RELAY_LABEL, self.note.clone());
        report
    }
}
