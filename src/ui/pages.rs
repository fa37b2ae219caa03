use serde_json::Value;
use crate::config::constants::MAX_ANALYSIS_LIMIT;
use crate::enums::proxy_outcome::ProxyOutcome;
use crate::helpers::html::{escape, list, render};
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::register_form::RegisterForm;
use crate::structs::technical_analysis_report::TechnicalAnalysisReport;

const LAYOUT: &str = include_str!("templates/layout.html");
const LOGIN: &str = include_str!("templates/login.html");
const REGISTER: &str = include_str!("templates/register.html");
const DASHBOARD: &str = include_str!("templates/dashboard.html");
const TECHNICAL_ANALYSIS: &str = include_str!("templates/technical_analysis.html");

fn layout(title: &str, content: &str) -> String {
    render(LAYOUT, &[("TITLE", escape(title).as_str()), ("CONTENT", content)])
}

pub fn login_page() -> String {
    layout("Log in", LOGIN)
}

pub fn register_page(form: &RegisterForm, errors: &[String]) -> String {
    let content = render(REGISTER, &[
        ("ERRORS", list(errors, "errors").as_str()),
        ("USERNAME", escape(&form.username).as_str()),
        ("EMAIL", escape(&form.email).as_str()),
    ]);
    layout("Register", &content)
}

pub fn notice(message: &str) -> String {
    format!("<p class=\"notice\">{}</p>", escape(message))
}

/// Dashboard for the given (possibly unvalidated) inputs and outcome.
pub fn dashboard_page(topic: &str, limit: &str, outcome: &ProxyOutcome) -> String {
    let (notice_html, result_html) = match outcome {
        ProxyOutcome::Success(result) => (String::new(), result_table(result)),
        ProxyOutcome::Failure(reason) => (notice(reason), String::new()),
    };

    let content = render(DASHBOARD, &[
        ("TOPIC", escape(topic).as_str()),
        ("LIMIT", escape(limit).as_str()),
        ("MAX_LIMIT", MAX_ANALYSIS_LIMIT.to_string().as_str()),
        ("NOTICE", notice_html.as_str()),
        ("RESULT", result_html.as_str()),
    ]);
    layout("Dashboard", &content)
}

fn result_table(result: &AnalysisResult) -> String {
    if result.is_empty() {
        return notice("The analysis service returned an empty result.");
    }

    let rows: String = result
        .fields()
        .map(|(key, value)| format!("<tr><th>{}</th><td>{}</td></tr>", escape(key), value_cell(value)))
        .collect();
    format!("<table>{}</table>", rows)
}

fn value_cell(value: &Value) -> String {
    match value {
        Value::String(text) => escape(text),
        Value::Null => String::new(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(_) | Value::Object(_) => {
            let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
            format!("<pre>{}</pre>", escape(&pretty))
        }
    }
}

pub fn technical_analysis_page(report: &TechnicalAnalysisReport) -> String {
    let content = render(TECHNICAL_ANALYSIS, &[
        ("START_DATE", report.start_date.format("%Y-%m-%d").to_string().as_str()),
        ("END_DATE", report.end_date.format("%Y-%m-%d").to_string().as_str()),
        ("ANALYSIS_DATE", report.analysis_date.format("%Y-%m-%d").to_string().as_str()),
        ("ENTRY", format!("{:.2}", report.entry).as_str()),
        ("STOP_LOSS", format!("{:.2}", report.stop_loss).as_str()),
        ("TAKE_PROFIT", format!("{:.2}", report.take_profit).as_str()),
        ("RISK_REWARD", escape(&report.risk_reward).as_str()),
        ("SIGNALS", list(&report.signals_detected, "signals").as_str()),
    ]);
    layout("Technical analysis", &content)
}
