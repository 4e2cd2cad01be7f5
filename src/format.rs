//! Output formatting for plans and reports, as markdown or JSON.

use crate::materialize::MaterializeReport;
use crate::plan::Plan;
use serde_json::Value;

/// Output format for the `plan` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
}

/// Format a plan as markdown.
pub fn format_plan_markdown(plan: &Plan) -> String {
    let mut md = String::new();

    md.push_str(&format!(
        "## Plan: {} ({} variables)\n\n",
        plan.deploy_env, plan.prefix
    ));
    md.push_str("| field | variable | status |\n");
    md.push_str("|---|---|---|\n");
    for entry in &plan.entries {
        let status = if entry.set { "set" } else { "unset (null)" };
        md.push_str(&format!(
            "| `{}` | `{}` | {} |\n",
            entry.field, entry.var, status
        ));
    }

    let unset = plan.unset_count();
    if unset > 0 {
        md.push_str(&format!("\n{} field(s) will be written as null.\n", unset));
    }

    md
}

/// Format a plan as JSON.
pub fn format_plan_json(plan: &Plan) -> serde_json::Result<Value> {
    serde_json::to_value(plan)
}

/// Render a plan in the requested format.
pub fn format_plan(plan: &Plan, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Markdown => Ok(format_plan_markdown(plan)),
        OutputFormat::Json => serde_json::to_string_pretty(&format_plan_json(plan)?),
    }
}

/// Summary of a finished run as JSON.
pub fn format_report_json(report: &MaterializeReport) -> serde_json::Result<Value> {
    serde_json::to_value(report)
}
