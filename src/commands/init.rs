//! Init command - write a starter sitetask.toml

use std::path::Path;

use anyhow::Result;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use sitetask::config::write_starter;

pub fn cmd_init(root: &Path, force: bool, ui: &UiContext) -> Result<i32> {
    let path = write_starter(root, force)?;

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "init",
            "path": path.display().to_string(),
        }))?;
        return Ok(0);
    }

    println!(
        "{} {}",
        Icon::Success.colored(ui.color, ui.unicode),
        ColoredText::success(format!("Created {}", path.display())).render(ui.color)
    );
    println!("  Set [deploy] remote before running 'sitetask deploy'.");
    Ok(0)
}
