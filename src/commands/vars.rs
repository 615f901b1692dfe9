//! `flatsize vars` — list the managed scaling variables.

use anyhow::Result;
use serde_json::json;

use crate::domain::SCALING_VARIABLES;
use crate::output::OutputContext;

/// Run the vars command.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn run(ctx: &OutputContext, json: bool) -> Result<()> {
    if json {
        let vars: Vec<_> = SCALING_VARIABLES
            .iter()
            .map(|v| json!({"name": v.name, "hint": v.hint}))
            .collect();
        println!("{}", serde_json::to_string_pretty(&vars)?);
        return Ok(());
    }

    ctx.header("Managed scaling variables");
    for var in &SCALING_VARIABLES {
        ctx.kv(var.name, var.hint);
    }
    Ok(())
}
