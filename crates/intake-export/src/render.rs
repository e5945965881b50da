use serde::Serialize;
use tera::{Context, Tera};

use intake_core::models::report::EvaluationSummary;

use crate::error::ExportError;

pub const SUMMARY_TEMPLATE_NAME: &str = "summary.txt";

/// Default plain-text layout of an evaluation summary.
pub const SUMMARY_TEMPLATE: &str = "\
OT Evaluation Summary
=====================

Patient: {{ patient_name }} (ID {{ patient_id }})
Date of birth: {{ birth_date }}
Address: {{ address }}

Clinic: {{ clinic_name }}
Therapist: {{ therapist }}
Evaluation date: {{ evaluation_date }}

Referring physician: {{ physician }}
Referral source: {{ source }}
Diagnosis: {{ diagnosis }}

Assessments
{% if assessments | length > 0 %}{% for a in assessments %}- {{ a.name }} ({{ a.code }}): {{ a.score }}
{% endfor %}{% else %}- none scored
{% endif %}
{% if has_insights %}Functional level: {{ functional_level }}
Prognosis: {{ prognosis }}
Average score: {{ average_score }}
{% for s in strengths %}Strength: {{ s }}
{% endfor %}{% for c in concerns %}Concern: {{ c }}
{% endfor %}{% endif %}
Recommendations
{% for r in recommendations %}- {{ r }}
{% endfor %}
Goals
{% for g in goals %}- {{ g }}
{% endfor %}";

/// Flattened, null-free view of a summary for templates.
#[derive(Debug, Serialize)]
struct SummaryView<'a> {
    patient_name: String,
    patient_id: String,
    birth_date: String,
    address: String,
    clinic_name: String,
    therapist: String,
    evaluation_date: String,
    physician: String,
    source: String,
    diagnosis: String,
    assessments: Vec<AssessmentLine<'a>>,
    has_insights: bool,
    functional_level: String,
    prognosis: String,
    average_score: String,
    strengths: &'a [String],
    concerns: &'a [String],
    recommendations: &'a [String],
    goals: &'a [String],
}

#[derive(Debug, Serialize)]
struct AssessmentLine<'a> {
    name: &'a str,
    code: &'a str,
    score: String,
}

fn or_dash(value: &Option<String>) -> String {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.0}")
    } else {
        format!("{score}")
    }
}

impl<'a> SummaryView<'a> {
    fn new(summary: &'a EvaluationSummary) -> Self {
        const EMPTY: &[String] = &[];
        let insights = summary.insights.as_ref();

        Self {
            patient_name: or_dash(&summary.patient_info.name),
            patient_id: or_dash(&summary.patient_info.id),
            birth_date: or_dash(&summary.patient_info.birth_date),
            address: or_dash(&summary.patient_info.address),
            clinic_name: or_dash(&summary.clinic_info.name),
            therapist: or_dash(&summary.clinic_info.therapist),
            evaluation_date: summary.clinic_info.evaluation_date.to_string(),
            physician: or_dash(&summary.referral_info.physician),
            source: or_dash(&summary.referral_info.source),
            diagnosis: or_dash(&summary.referral_info.diagnosis),
            assessments: summary
                .assessment_results
                .iter()
                .map(|a| AssessmentLine {
                    name: &a.name,
                    code: &a.code,
                    score: a.score.map(format_score).unwrap_or_else(|| "-".to_string()),
                })
                .collect(),
            has_insights: insights.is_some(),
            functional_level: insights
                .map(|i| i.functional_level.to_string())
                .unwrap_or_default(),
            prognosis: insights.map(|i| i.prognosis.to_string()).unwrap_or_default(),
            average_score: insights
                .map(|i| format_score(i.average_score))
                .unwrap_or_default(),
            strengths: insights.map(|i| i.strengths.as_slice()).unwrap_or(EMPTY),
            concerns: insights.map(|i| i.concerns.as_slice()).unwrap_or(EMPTY),
            recommendations: &summary.recommendations,
            goals: &summary.goals,
        }
    }
}

/// Render a summary through a Tera template.
///
/// `template_content` is raw Tera (Jinja2-style) source; the summary is
/// exposed as flat string variables plus the `assessments`, `strengths`,
/// `concerns`, `recommendations` and `goals` lists.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    summary: &EvaluationSummary,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let context = Context::from_serialize(SummaryView::new(summary))
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

/// Render a summary with the default plain-text layout.
pub fn render_text(summary: &EvaluationSummary) -> Result<String, ExportError> {
    render_template(SUMMARY_TEMPLATE_NAME, SUMMARY_TEMPLATE, summary)
}
