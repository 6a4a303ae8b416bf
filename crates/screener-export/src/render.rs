use serde::{Deserialize, Serialize};
use tera::{Context, Tera};

use crate::error::ExportError;
use crate::summary::ScreeningSummary;

pub const DEFAULT_DISCLAIMER: &str = "This is not a diagnosis. Please share with a clinician.";

/// Plain-text summary used for clipboard copy and e-mail bodies.
pub const SUMMARY_TEMPLATE: &str = "\
SCREENING RESULTS SUMMARY
==========================

{% if history %}PATIENT HISTORY:
DOB: {{ history.date_of_birth }}
Gender: {{ history.gender }}
Diagnoses: {{ history.diagnoses }}
--------------------------

{% endif %}Impairment Score: {{ impairment_score }}/10
Time Course: {{ time_course }}
Affected Domains: {{ domains_text }}

{% if urgent %}URGENT: clinician review recommended.

{% endif %}DETECTED PATTERNS:
{% for finding in detected %}- {{ finding.name }}: {{ finding.message }}
{% if finding.differential %}  Provisional DSM Diff: {{ finding.differential }}
{% endif %}{% endfor %}{% if not has_detections %}No specific patterns strongly detected.
{% endif %}{% if ai_analysis %}

AI CLINICAL COMPANION:
{{ ai_analysis }}{% endif %}
Disclaimer: {{ disclaimer }}";

/// Presentation choices that come from configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportOptions {
    pub disclaimer: String,
    pub include_history: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            disclaimer: DEFAULT_DISCLAIMER.to_string(),
            include_history: true,
        }
    }
}

/// Render a Tera template against an arbitrary serializable context.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    context: &Context,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let rendered = tera.render(template_name, context)?;
    Ok(rendered)
}

fn summary_context(
    summary: &ScreeningSummary,
    options: &ReportOptions,
) -> Result<Context, ExportError> {
    let value = serde_json::to_value(summary)?;
    let mut context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    // Pre-formatted so the template never prints "7.0".
    context.insert("impairment_score", &summary.score_display());
    context.insert("domains_text", &summary.domains.join(", "));
    context.insert("has_detections", &summary.has_detections());
    context.insert("disclaimer", &options.disclaimer);
    if !options.include_history {
        context.insert("history", &Option::<()>::None);
    }
    Ok(context)
}

/// Render the plain-text screening summary.
pub fn render_summary(
    summary: &ScreeningSummary,
    options: &ReportOptions,
) -> Result<String, ExportError> {
    let context = summary_context(summary, options)?;
    let text = render_template("summary.txt", SUMMARY_TEMPLATE, &context)?;
    tracing::debug!(
        detected = summary.detected.len(),
        chars = text.len(),
        "rendered screening summary"
    );
    Ok(text)
}
