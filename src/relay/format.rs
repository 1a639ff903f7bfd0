use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::report::Report;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Cbor,
}

impl ReportFormat {
    pub fn from_path_and_option(path: &Path, format_opt: Option<&str>) -> Result<Self> {
        if let Some(format_str) = format_opt {
            return match format_str {
                "json" => Ok(ReportFormat::Json),
                "cbor" => Ok(ReportFormat::Cbor),
                _ => bail!("unsupported format: {}", format_str),
            };
        }

        // Infer from file extension
        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => Ok(ReportFormat::Json),
            Some("cbor") => Ok(ReportFormat::Cbor),
            Some(ext) => bail!("unsupported file extension: .{}", ext),
            None => bail!("cannot determine report format: no file extension"),
        }
    }

    pub fn write(self, report: &Report, writer: impl Write) -> Result<()> {
        match self {
            ReportFormat::Json => {
                serde_json::to_writer_pretty(writer, report).context("failed to write JSON report")
            }
            ReportFormat::Cbor => {
                ciborium::into_writer(report, writer).context("failed to write CBOR report")
            }
        }
    }

    pub fn write_to_file(self, report: &Report, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("failed to create report file at {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        self.write(report, &mut writer)
            .with_context(|| format!("failed to write report file at {}", path.display()))?;
        writer
            .flush()
            .with_context(|| format!("failed to flush report file at {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_format_wins_over_extension() {
        let format = ReportFormat::from_path_and_option(Path::new("out.json"), Some("cbor"))
            .expect("format");
        assert_eq!(format, ReportFormat::Cbor);
    }

    #[test]
    fn format_inferred_from_extension() {
        assert_eq!(
            ReportFormat::from_path_and_option(Path::new("a/b.cbor"), None).expect("format"),
            ReportFormat::Cbor
        );
        assert!(ReportFormat::from_path_and_option(Path::new("out.txt"), None).is_err());
        assert!(ReportFormat::from_path_and_option(Path::new("out"), None).is_err());
        assert!(ReportFormat::from_path_and_option(Path::new("out.json"), Some("yaml")).is_err());
    }

    #[test]
    fn cbor_file_decodes_to_map() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("report.cbor");

        let mut report = Report::new();
        report.push("Java Output", "Java received: hi and responds with a hello!");
        ReportFormat::Cbor
            .write_to_file(&report, &path)
            .expect("write report");

        let bytes = fs::read(&path).expect("read report");
        let value: ciborium::Value = ciborium::from_reader(bytes.as_slice()).expect("decode CBOR");
        let map = value.as_map().expect("report is a map");
        assert_eq!(map.len(), 1);
        assert_eq!(map[0].0.as_text(), Some("Java Output"));
        assert_eq!(
            map[0].1.as_text(),
            Some("Java received: hi and responds with a hello!")
        );
    }
}
