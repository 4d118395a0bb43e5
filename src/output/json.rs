//! JSON output for plan review diffs.

use crate::plan::VpcPlan;
use std::error::Error;

/// Render a plan as pretty JSON. Identical plans render to identical bytes.
pub fn plan_to_json(plan: &VpcPlan) -> Result<String, Box<dyn Error>> {
    let json =
        serde_json::to_string_pretty(plan).map_err(|e| format!("Error serializing plan: {e}"))?;
    Ok(json)
}
