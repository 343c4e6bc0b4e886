//! `list` view: every operation with the commands it would run

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use sitetask::application::Plan;
use sitetask::{Operation, TaskResult};

pub fn render_list(
    root: &str,
    config_source: &str,
    plans: &[(Operation, TaskResult<Plan>)],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n",
        Icon::List.colored(supports_color, supports_unicode),
        ColoredText::info("sitetask operations")
            .bold()
            .render(supports_color)
    ));
    out.push_str(&format!(
        "{} {}\n",
        ColoredText::dim("Root:").render(supports_color),
        root
    ));
    out.push_str(&format!(
        "{} {}\n",
        ColoredText::dim("Config:").render(supports_color),
        config_source
    ));

    let width = plans
        .iter()
        .map(|(op, _)| op.name().len())
        .max()
        .unwrap_or(0);

    for (operation, plan) in plans {
        out.push('\n');
        let name = format!("{:<width$}", operation.name(), width = width);
        out.push_str(&format!(
            "{}  {}\n",
            ColoredText::info(name).bold().render(supports_color),
            operation.description()
        ));

        match plan {
            Ok(plan) => {
                for step in &plan.steps {
                    out.push_str(&format!(
                        "  {} {}\n",
                        Icon::Arrow.colored(supports_color, supports_unicode),
                        step.invocation.describe()
                    ));
                }
            }
            Err(e) => {
                out.push_str(&format!(
                    "  {} {}\n",
                    Icon::Warning.colored(supports_color, supports_unicode),
                    ColoredText::warning(e.to_string()).render(supports_color)
                ));
            }
        }
    }

    out
}

/// One `list` document for `--json`
pub fn list_json(plans: &[(Operation, TaskResult<Plan>)]) -> serde_json::Value {
    let operations: Vec<serde_json::Value> = plans
        .iter()
        .map(|(operation, plan)| match plan {
            Ok(plan) => serde_json::json!({
                "name": operation.name(),
                "description": operation.description(),
                "steps": plan.steps.iter().map(|step| serde_json::json!({
                    "operation": step.operation.name(),
                    "action": step.action.name(),
                    "command": step.invocation.describe(),
                })).collect::<Vec<_>>(),
                "error": serde_json::Value::Null,
            }),
            Err(e) => serde_json::json!({
                "name": operation.name(),
                "description": operation.description(),
                "steps": [],
                "error": e.to_string(),
            }),
        })
        .collect();

    serde_json::json!({
        "event": "list",
        "operations": operations,
    })
}
