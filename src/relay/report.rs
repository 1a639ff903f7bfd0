use serde::ser::{Serialize, SerializeMap, Serializer};

/// Replies gathered by one relay round, in responder order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    entries: Vec<(String, String)>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: impl Into<String>, output: impl Into<String>) {
        self.entries.push((label.into(), output.into()));
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, output)| output.as_str())
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Serialized as a map from label to output, keeping entry order
impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, output) in &self.entries {
            map.serialize_entry(label, output)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_keeps_entry_order() {
        let mut report = Report::new();
        report.push("Java Output", "b");
        report.push("C# Output", "a");
        report.push("Relay Output", "c");
        assert_eq!(
            serde_json::to_string(&report).expect("serialize report"),
            r#"{"Java Output":"b","C# Output":"a","Relay Output":"c"}"#
        );
    }

    #[test]
    fn get_finds_first_matching_label() {
        let mut report = Report::new();
        assert!(report.is_empty());
        report.push("x", "1");
        report.push("y", "2");
        assert_eq!(report.get("y"), Some("2"));
        assert_eq!(report.get("z"), None);
    }
}
