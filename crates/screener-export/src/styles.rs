use serde::{Deserialize, Serialize};

/// Typography for the printable report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportStyles {
    /// Font for body text and transcript entries.
    pub body_font: String,

    /// Font for the title and section headings.
    pub heading_font: String,

    /// Body text size in points.
    pub body_size: usize,

    /// Report title size in points.
    pub title_size: usize,

    /// Section heading size in points.
    pub section_size: usize,

    /// Transcript section heading size in points.
    pub subsection_size: usize,
}

impl Default for ReportStyles {
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            heading_font: "Arial".to_string(),
            body_size: 11,
            title_size: 18,
            section_size: 14,
            subsection_size: 12,
        }
    }
}
