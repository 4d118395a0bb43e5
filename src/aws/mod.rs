//! AWS CLI interaction.
//!
//! This module handles all AWS-related operations:
//! - [`cli`] - Command execution for the AWS CLI
//! - [`zones`] - Availability zone discovery
//! - [`cache`] - Caching of zone data

mod cache;
mod cli;
mod zones;

// Re-export public types and functions
pub use cache::{default_cache_file, read_zone_cache};
pub use cli::run;
pub use zones::{describe_availability_zones, parse_zone_list, ZoneInfo, ZoneList};
