//! JSON report.

use serde::Serialize;

use crate::disclosure::DisclosedEntry;
use crate::error::Result;

use super::RunReport;

/// Machine-readable report for one run.
///
/// Records carry a `datum` only when the run was authorized.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    file: String,
    backup: String,
    backup_sha256: String,
    authorized: bool,
    records: Vec<DisclosedEntry>,
    errors: Vec<JsonError>,
    total_valid: usize,
    total_errors: usize,
}

/// One rejected line.
#[derive(Debug, Serialize)]
pub struct JsonError {
    line: usize,
    reason: &'static str,
    message: String,
}

impl JsonReport {
    /// Build the report from a finished run.
    pub fn from_run(report: &RunReport<'_>) -> Self {
        let errors = report
            .parsed
            .errors()
            .iter()
            .map(|e| JsonError {
                line: e.line_number,
                reason: e.reason.code(),
                message: e.reason.to_string(),
            })
            .collect();

        Self {
            file: report.input.display().to_string(),
            backup: report.backup.path.display().to_string(),
            backup_sha256: report.backup.sha256.clone(),
            authorized: report.disclosure.outcome.is_authorized(),
            records: report.disclosure.view.entries(),
            errors,
            total_valid: report.parsed.record_count(),
            total_errors: report.parsed.error_count(),
        }
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| anyhow::Error::from(e).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backup::Backup;
    use crate::disclosure::{DisclosureConfig, DisclosureGate};
    use crate::records::parse;
    use std::path::{Path, PathBuf};

    fn json_for(input: &str, entered: &str) -> serde_json::Value {
        let parsed = parse(input);
        let backup = Backup {
            path: PathBuf::from("/data/u.backup-20261019-142501.txt"),
            sha256: "abc".to_string(),
        };
        let disclosure = DisclosureGate::new(DisclosureConfig::with_secret("pw"))
            .disclose(parsed.records(), entered);
        let run = RunReport {
            input: Path::new("/data/u.txt"),
            parsed: &parsed,
            backup: &backup,
            disclosure: &disclosure,
        };
        let text = JsonReport::from_run(&run).to_json().unwrap();
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn authorized_json_includes_data() {
        let value = json_for("ana;123\nluis;456", "pw");
        assert_eq!(value["authorized"], true);
        assert_eq!(value["records"][0]["name"], "ana");
        assert_eq!(value["records"][0]["datum"], "123");
        assert_eq!(value["total_valid"], 2);
        assert_eq!(value["total_errors"], 0);
    }

    #[test]
    fn unauthorized_json_omits_data() {
        let value = json_for("ana;123\nluis;456", "PW");
        assert_eq!(value["authorized"], false);
        let records = value["records"].as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.get("datum").is_none()));
        let text = value.to_string();
        assert!(!text.contains("123"));
        assert!(!text.contains("456"));
    }

    #[test]
    fn errors_are_listed_with_reason_codes() {
        let value = json_for("a;b;c\n ; \nok;1", "pw");
        assert_eq!(value["errors"][0]["line"], 1);
        assert_eq!(value["errors"][0]["reason"], "malformed_delimiter");
        assert_eq!(value["errors"][1]["line"], 2);
        assert_eq!(value["errors"][1]["reason"], "empty_field");
        assert_eq!(value["total_errors"], 2);
    }

    #[test]
    fn includes_paths() {
        let value = json_for("", "pw");
        assert_eq!(value["file"], "/data/u.txt");
        assert_eq!(value["backup"], "/data/u.backup-20261019-142501.txt");
        assert_eq!(value["backup_sha256"], "abc");
    }
}
