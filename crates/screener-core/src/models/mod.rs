pub mod answer;
pub mod pattern;
pub mod question;
pub mod section;
