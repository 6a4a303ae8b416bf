use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use screener_core::{AnswerStore, PatternResult};
use screener_rules::predicates::{DOMAINS, TIME_COURSE, impairment};

/// Impairment band shown next to the 0–10 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    pub fn from_score(score: f64) -> Self {
        if score >= 7.0 {
            Severity::Severe
        } else if score >= 4.0 {
            Severity::Moderate
        } else {
            Severity::Mild
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
        }
    }
}

/// Personal-history questions listed on the printed report, in order.
pub const HISTORY_FIELDS: [(&str, &str); 12] = [
    ("ph_1", "Gender"),
    ("ph_2", "Date of Birth"),
    ("ph_3", "Accommodation"),
    ("ph_4", "Living Arrangements"),
    ("ph_5", "Education"),
    ("ph_6", "Employment"),
    ("ph_7", "Exam Setting"),
    ("ph_8", "Referral"),
    ("ph_9", "Course of Illness"),
    ("ph_10", "Family History"),
    ("ph_11", "Severity (CGI Self-Rate)"),
    ("ph_12", "Diagnoses"),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryField {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientHistory {
    pub gender: String,
    pub date_of_birth: String,
    pub diagnoses: String,
    /// Every history question, "Not ascertained" when skipped.
    pub fields: Vec<HistoryField>,
}

impl PatientHistory {
    /// `None` until the first history question has been answered.
    pub fn from_answers(answers: &AnswerStore) -> Option<Self> {
        if !answers.is_answered("ph_1") {
            return None;
        }

        let value_or = |id: &str, fallback: &str| {
            answers
                .get(id)
                .filter(|v| !v.is_blank())
                .map(|v| v.display())
                .unwrap_or_else(|| fallback.to_string())
        };

        let fields = HISTORY_FIELDS
            .iter()
            .map(|&(id, label)| HistoryField {
                label: label.to_string(),
                value: value_or(id, "Not ascertained"),
            })
            .collect();

        Some(Self {
            gender: value_or("ph_1", "N/A"),
            date_of_birth: value_or("ph_2", "N/A"),
            diagnoses: value_or("ph_12", "None listed"),
            fields,
        })
    }
}

/// A detected pattern as it appears in a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub name: String,
    pub message: String,
    pub differential: Option<String>,
    pub urgent: bool,
}

/// Everything a report needs, computed once from a snapshot of answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningSummary {
    pub report_date: Date,
    pub history: Option<PatientHistory>,
    pub impairment_score: f64,
    pub severity: Severity,
    pub time_course: String,
    pub domains: Vec<String>,
    pub detected: Vec<Finding>,
    pub ruled_out: Vec<String>,
    pub urgent: bool,
    pub ai_analysis: Option<String>,
}

impl ScreeningSummary {
    pub fn build(
        answers: &AnswerStore,
        patterns: &[PatternResult],
        report_date: Date,
        ai_analysis: Option<String>,
    ) -> Self {
        let impairment_score = impairment(answers);

        let detected: Vec<Finding> = patterns
            .iter()
            .filter(|p| p.detected)
            .map(|p| Finding {
                name: p.name.clone(),
                message: p.message.clone().unwrap_or_else(|| "Likely".to_string()),
                differential: p.dsm_differential.clone(),
                urgent: p.is_urgent(),
            })
            .collect();

        let ruled_out = patterns
            .iter()
            .filter(|p| !p.detected)
            .map(|p| p.name.clone())
            .collect();

        Self {
            report_date,
            history: PatientHistory::from_answers(answers),
            impairment_score,
            severity: Severity::from_score(impairment_score),
            time_course: answers
                .text(TIME_COURSE)
                .filter(|s| !s.trim().is_empty())
                .unwrap_or("Not specified")
                .to_string(),
            domains: answers.choices(DOMAINS).to_vec(),
            urgent: detected.iter().any(|f| f.urgent),
            detected,
            ruled_out,
            ai_analysis,
        }
    }

    /// Score as printed, e.g. "7" or "6.5".
    pub fn score_display(&self) -> String {
        self.impairment_score.to_string()
    }

    pub fn has_detections(&self) -> bool {
        !self.detected.is_empty()
    }
}
