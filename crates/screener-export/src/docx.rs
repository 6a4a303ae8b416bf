use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, Paragraph, Run, RunFonts, Style, StyleType};

use crate::error::ExportError;
use crate::render::ReportOptions;
use crate::styles::ReportStyles;
use crate::summary::ScreeningSummary;
use crate::transcript::TranscriptSection;

/// Build the printable screening report.
///
/// Layout follows the on-screen results page: history, executive summary,
/// findings, ruled-out clusters, optional companion notes, then the full
/// transcript. Values wrapped in `**` render bold.
pub fn generate_report_docx(
    summary: &ScreeningSummary,
    transcript: &[TranscriptSection],
    options: &ReportOptions,
    styles: &ReportStyles,
) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Title", "title", styles.title_size))
        .add_style(heading_style("Heading2", "heading 2", styles.section_size))
        .add_style(heading_style("Heading3", "heading 3", styles.subsection_size));

    docx = docx
        .add_paragraph(heading_paragraph("Confidential Screening Report", "Title", styles))
        .add_paragraph(body_paragraph("Patient Self-Administered Questionnaire", styles))
        .add_paragraph(body_paragraph(
            &format!(
                "**Report Date:** {}",
                summary.report_date.strftime("%B %-d, %Y")
            ),
            styles,
        ));

    if summary.urgent {
        docx = docx.add_paragraph(body_paragraph(
            "**URGENT: clinician review recommended.**",
            styles,
        ));
    }

    if let Some(history) = summary.history.as_ref().filter(|_| options.include_history) {
        docx = docx.add_paragraph(heading_paragraph("Patient History (AMDP)", "Heading2", styles));
        for field in &history.fields {
            docx = docx.add_paragraph(body_paragraph(
                &format!("**{}:** {}", field.label, field.value),
                styles,
            ));
        }
    }

    let domains = if summary.domains.is_empty() {
        "None selected".to_string()
    } else {
        summary.domains.join(", ")
    };
    docx = docx
        .add_paragraph(heading_paragraph("Executive Summary", "Heading2", styles))
        .add_paragraph(body_paragraph(
            &format!(
                "**Impairment Score:** {} / 10 ({} Impact)",
                summary.score_display(),
                summary.severity.label()
            ),
            styles,
        ))
        .add_paragraph(body_paragraph(
            &format!("**Symptom Pattern:** {}", summary.time_course),
            styles,
        ))
        .add_paragraph(body_paragraph(&format!("**Key Domains:** {domains}"), styles));

    docx = docx.add_paragraph(heading_paragraph("Findings", "Heading2", styles));
    if summary.detected.is_empty() {
        docx = docx.add_paragraph(body_paragraph(
            "No specific patterns strongly detected.",
            styles,
        ));
    }
    for finding in &summary.detected {
        let mut line = format!("**{}:** {}", finding.name, finding.message);
        if let Some(diff) = &finding.differential {
            line.push_str(&format!(" (Provisional DSM Diff: {diff})"));
        }
        docx = docx.add_paragraph(bullet_paragraph(&line, styles));
    }

    if !summary.ruled_out.is_empty() {
        docx = docx.add_paragraph(heading_paragraph("Ruled Out", "Heading3", styles));
        for name in &summary.ruled_out {
            docx = docx.add_paragraph(bullet_paragraph(name, styles));
        }
    }

    if let Some(analysis) = &summary.ai_analysis {
        docx = docx.add_paragraph(heading_paragraph("AI Clinical Companion", "Heading2", styles));
        for line in analysis.lines().map(str::trim).filter(|l| !l.is_empty()) {
            docx = match line.strip_prefix("- ") {
                Some(item) => docx.add_paragraph(bullet_paragraph(item, styles)),
                None => docx.add_paragraph(body_paragraph(line, styles)),
            };
        }
    }

    if !transcript.is_empty() {
        docx = docx.add_paragraph(heading_paragraph("Transcript", "Heading2", styles));
        for section in transcript {
            docx = docx.add_paragraph(heading_paragraph(&section.title, "Heading3", styles));
            for item in &section.items {
                docx = docx.add_paragraph(bullet_paragraph(
                    &format!("**{}** {}", item.question, item.answer),
                    styles,
                ));
            }
        }
    }

    docx = docx.add_paragraph(body_paragraph(&options.disclaimer, styles));

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    tracing::debug!(bytes = buf.get_ref().len(), "generated report docx");
    Ok(buf.into_inner())
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
        .bold()
}

fn heading_paragraph(text: &str, style_id: &str, styles: &ReportStyles) -> Paragraph {
    Paragraph::new()
        .style(style_id)
        .add_run(
            Run::new()
                .add_text(text)
                .fonts(RunFonts::new().ascii(&styles.heading_font)),
        )
}

fn bullet_paragraph(text: &str, styles: &ReportStyles) -> Paragraph {
    let mut para = Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(body_run("\u{2022} ", styles));

    for run in parse_inline(text, styles) {
        para = para.add_run(run);
    }
    para
}

fn body_paragraph(text: &str, styles: &ReportStyles) -> Paragraph {
    let mut para = Paragraph::new().align(AlignmentType::Left);
    for run in parse_inline(text, styles) {
        para = para.add_run(run);
    }
    para
}

fn body_run(text: &str, styles: &ReportStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

/// Split `text` on `**` markers; odd segments are bold. An unmatched
/// marker leaves the rest as plain text.
fn parse_inline(text: &str, styles: &ReportStyles) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut remaining = text;

    while let Some(start) = remaining.find("**") {
        let Some(len) = remaining[start + 2..].find("**") else {
            break;
        };
        if start > 0 {
            runs.push(body_run(&remaining[..start], styles));
        }
        let bold = &remaining[start + 2..start + 2 + len];
        runs.push(body_run(bold, styles).bold());
        remaining = &remaining[start + 2 + len + 2..];
    }

    if !remaining.is_empty() {
        runs.push(body_run(remaining, styles));
    }
    runs
}
