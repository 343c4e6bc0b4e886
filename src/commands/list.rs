use anyhow::Result;

use super::Session;
use crate::ui::views::list::{list_json, render_list};
use sitetask::presentation::create_dispatcher;
use sitetask::Operation;

/// Show every operation with the commands it would run
///
/// Planning errors are listed next to their operation, not raised.
pub fn cmd_list(session: &Session) -> Result<i32> {
    let dispatcher = create_dispatcher(session.config(), &session.root, session.ui.json);
    let plans: Vec<_> = Operation::ALL
        .iter()
        .map(|&op| (op, dispatcher.plan(op)))
        .collect();

    if session.ui.json {
        crate::ui::json::emit(list_json(&plans))?;
    } else {
        print!(
            "{}",
            render_list(
                &session.root.display().to_string(),
                &session.config_source(),
                &plans,
                session.ui.color,
                session.ui.unicode,
            )
        );
    }

    Ok(0)
}
