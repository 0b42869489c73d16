use crate::pipeline::Report;

/// How reports are written to stdout.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `<input> : <LABEL>`
    #[default]
    Plain,
    /// One JSON object per line.
    Json,
}

impl OutputFormat {
    pub fn render(self, report: &Report) -> Result<String, serde_json::Error> {
        match self {
            OutputFormat::Plain => Ok(format!("{} : {}", report.input, report.classification)),
            OutputFormat::Json => serde_json::to_string(report),
        }
    }
}
