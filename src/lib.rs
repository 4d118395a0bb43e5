//! VPC topology planner.
//!
//! Derives an EKS-style VPC subnet layout and NAT gateway routing plan from a
//! handful of inputs:
//! - [`processing::resolve_azs`] picks the availability zones
//! - [`processing::allocate_subnets`] carves the VPC CIDR into subnets
//! - [`processing::plan_nat_topology`] places NAT gateways and routes private subnets
//!
//! [`plan_vpc`] runs the whole pipeline. Planning is pure; only
//! [`get_available_zones`] talks to AWS.

pub mod aws;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod plan;
pub mod processing;

use config::PlannerConfig;
use models::AvailabilityZone;
use std::error::Error;

pub use error::PlanError;
pub use plan::{plan_vpc, VpcPlan};

/// Zones the provider reports as available, from cache or the AWS CLI.
///
/// Explicit zones in the configuration are validated against this list, so
/// discovery always runs.
pub fn get_available_zones(
    config: &PlannerConfig,
) -> Result<Vec<AvailabilityZone>, Box<dyn Error>> {
    let zones = aws::read_zone_cache(
        &config.region,
        config.az_cache_file.as_deref(),
        config.cache_timezone,
    )?;
    let available = zones.available();
    if available.is_empty() {
        return Err(format!("No available zones found in region {}", config.region).into());
    }
    log::info!("available zones in {}: {}", config.region, available.len());
    Ok(available)
}
