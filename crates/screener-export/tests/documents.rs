use std::io::{Cursor, Read};

use jiff::civil::date;
use screener_core::{AnswerStore, AnswerValue, SectionId};
use screener_export::docx::generate_report_docx;
use screener_export::email::{Recipient, compose_referral_email};
use screener_export::render::ReportOptions;
use screener_export::styles::ReportStyles;
use screener_export::summary::ScreeningSummary;
use screener_export::transcript::{TranscriptItem, TranscriptSection};
use screener_rules::analyze_patterns;

fn document_xml(bytes: Vec<u8>) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();
    xml
}

#[test]
fn docx_report_contains_findings_and_history() {
    let mut answers = AnswerStore::new();
    answers.insert("ph_1", AnswerValue::Choice("Male".into()));
    answers.insert("s0_2", AnswerValue::Choice("Yes".into()));
    answers.insert("m1", AnswerValue::Choice("No".into()));
    let summary = ScreeningSummary::build(
        &answers,
        &analyze_patterns(&answers),
        date(2024, 5, 1),
        Some("- Grounding exercises\nDiscuss sleep.".to_string()),
    );
    let transcript = vec![TranscriptSection {
        id: SectionId::Safety,
        title: "Safety".to_string(),
        items: vec![TranscriptItem {
            question_id: "s0_2".to_string(),
            question: "Unusual experiences?".to_string(),
            answer: "Yes".to_string(),
        }],
    }];

    let bytes = generate_report_docx(
        &summary,
        &transcript,
        &ReportOptions::default(),
        &ReportStyles::default(),
    )
    .unwrap();
    assert!(bytes.starts_with(b"PK"));

    let xml = document_xml(bytes);
    assert!(xml.contains("URGENT: clinician review recommended."));
    assert!(xml.contains("Patient History (AMDP)"));
    assert!(xml.contains("Gender:"));
    assert!(xml.contains("Male"));
    assert!(xml.contains("Not ascertained"));
    assert!(xml.contains("Ruled Out"));
    assert!(xml.contains("Mood shutdown/low reward"));
    assert!(xml.contains("Grounding exercises"));
    assert!(xml.contains("Unusual experiences?"));
}

#[test]
fn docx_report_omits_history_when_disabled() {
    let mut answers = AnswerStore::new();
    answers.insert("ph_1", AnswerValue::Choice("Female".into()));
    let summary =
        ScreeningSummary::build(&answers, &analyze_patterns(&answers), date(2024, 5, 1), None);
    let options = ReportOptions {
        include_history: false,
        ..ReportOptions::default()
    };

    let xml = document_xml(
        generate_report_docx(&summary, &[], &options, &ReportStyles::default()).unwrap(),
    );
    assert!(!xml.contains("Patient History (AMDP)"));
    assert!(!xml.contains("URGENT"));
    assert!(xml.contains("No specific patterns strongly detected."));
    assert!(xml.contains("This is not a diagnosis. Please share with a clinician."));
}

#[test]
fn referral_email_wraps_summary() {
    let recipient = Recipient {
        name: "Dr. Rivera".to_string(),
        email: "rivera@example.org".to_string(),
    };
    let email = compose_referral_email(&recipient, date(2024, 5, 1), "SUMMARY");

    assert_eq!(email.to, "rivera@example.org");
    assert_eq!(email.subject, "Confidential Screening Report - 2024-05-01");
    assert!(email.body.starts_with("Dear Dr. Rivera,\n\n"));
    assert!(email.body.contains("\n\nSUMMARY\n\n"));
}

#[test]
fn referral_email_without_name_uses_generic_salutation() {
    let recipient = Recipient {
        name: " ".to_string(),
        email: "intake@example.org".to_string(),
    };
    let email = compose_referral_email(&recipient, date(2024, 5, 1), "SUMMARY");
    assert!(email.body.starts_with("Dear Clinician,"));
}
