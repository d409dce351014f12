use std::fmt;
use std::str::FromStr;

/// An output format accepted by `--format`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReportFormat {
    Json,
    Markdown,
    Html,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Markdown => "md",
            ReportFormat::Html => "html",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ReportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(ReportFormat::Json),
            "md" => Ok(ReportFormat::Markdown),
            "html" => Ok(ReportFormat::Html),
            other => anyhow::bail!("Unknown format: {other} (expected html, md or json)"),
        }
    }
}

/// Parse a comma-separated format list.
///
/// Entries are trimmed, empty entries skipped and duplicates dropped (first occurrence
/// keeps its position). Any unknown entry rejects the whole list.
pub fn parse_formats(list: &str) -> anyhow::Result<Vec<ReportFormat>> {
    let mut formats = Vec::new();
    for entry in list.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let format: ReportFormat = entry.parse()?;
        if !formats.contains(&format) {
            formats.push(format);
        }
    }
    if formats.is_empty() {
        anyhow::bail!("no report format requested (expected html, md or json)");
    }
    Ok(formats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_default_list() {
        assert_eq!(
            parse_formats("html,md,json").unwrap(),
            vec![ReportFormat::Html, ReportFormat::Markdown, ReportFormat::Json]
        );
    }

    #[test]
    fn trims_skips_empty_and_dedups() {
        assert_eq!(
            parse_formats(" json , ,md,json,").unwrap(),
            vec![ReportFormat::Json, ReportFormat::Markdown]
        );
    }

    #[test]
    fn unknown_entry_rejects_whole_list() {
        let err = parse_formats("json,pdf").unwrap_err();
        assert!(err.to_string().contains("Unknown format: pdf"));
    }

    #[test]
    fn formats_are_case_sensitive() {
        assert!(parse_formats("JSON").is_err());
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(parse_formats(" , ").is_err());
    }
}
