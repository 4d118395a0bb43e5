//! Output formatting for planned VPCs.
//!
//! This module handles formatting and outputting a [`crate::plan::VpcPlan`]:
//! - [`table`] - Quoted CSV-like table output
//! - [`json`] - JSON output for plan review
//! - [`terminal`] - Field formatting helpers

mod json;
mod table;
mod terminal;

pub use json::plan_to_json;
pub use table::{plan_print, plan_rows};
pub use terminal::{format_count, format_field};
