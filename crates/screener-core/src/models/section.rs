use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The sections a respondent can be routed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum SectionId {
    Intro,
    PersonalHistory,
    Safety,
    Core,
    Panic,
    Intrusions,
    Trauma,
    Worry,
    Executive,
    Mood,
    Activation,
    Reality,
    Substance,
    Results,
    /// Terminal override entered from the safety screen. Never part of a route.
    Emergency,
}

impl SectionId {
    /// Sections every route starts with, in order.
    pub const PREFIX: [SectionId; 4] = [
        SectionId::Intro,
        SectionId::PersonalHistory,
        SectionId::Safety,
        SectionId::Core,
    ];

    /// Optional clinical sections in the order they appear in a route.
    pub const OPTIONAL_PRIORITY: [SectionId; 9] = [
        SectionId::Panic,
        SectionId::Intrusions,
        SectionId::Trauma,
        SectionId::Worry,
        SectionId::Executive,
        SectionId::Mood,
        SectionId::Substance,
        SectionId::Reality,
        SectionId::Activation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Intro => "INTRO",
            SectionId::PersonalHistory => "PERSONAL_HISTORY",
            SectionId::Safety => "SAFETY",
            SectionId::Core => "CORE",
            SectionId::Panic => "PANIC",
            SectionId::Intrusions => "INTRUSIONS",
            SectionId::Trauma => "TRAUMA",
            SectionId::Worry => "WORRY",
            SectionId::Executive => "EXECUTIVE",
            SectionId::Mood => "MOOD",
            SectionId::Activation => "ACTIVATION",
            SectionId::Reality => "REALITY",
            SectionId::Substance => "SUBSTANCE",
            SectionId::Results => "RESULTS",
            SectionId::Emergency => "EMERGENCY",
        }
    }

    pub fn is_optional(&self) -> bool {
        Self::OPTIONAL_PRIORITY.contains(self)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::PREFIX
            .iter()
            .chain(Self::OPTIONAL_PRIORITY.iter())
            .chain([SectionId::Results, SectionId::Emergency].iter())
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CoreError::UnknownSection(s.to_string()))
    }
}
