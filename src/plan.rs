//! Full planning pipeline.
//!
//! Composes zone resolution, subnet allocation, NAT planning, route tables
//! and tagging into one [`VpcPlan`].

use crate::config::PlannerConfig;
use crate::error::PlanError;
use crate::models::{AllocationPlan, AvailabilityZone, NatGatewayPlan, RouteTable};
use crate::processing::{
    allocate_subnets, check_for_overlapping_subnets, plan_nat_topology, plan_route_tables,
    resolve_azs, subnet_tags,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything one planning run decides.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VpcPlan {
    pub cluster_name: String,
    pub azs: Vec<AvailabilityZone>,
    pub subnets: AllocationPlan,
    pub nat: NatGatewayPlan,
    pub route_tables: Vec<RouteTable>,
    /// Subnet index -> tags.
    pub tags: BTreeMap<usize, BTreeMap<String, String>>,
}

/// Plan a VPC from configuration and the provider's available zones.
pub fn plan_vpc(
    config: &PlannerConfig,
    available: &[AvailabilityZone],
) -> Result<VpcPlan, PlanError> {
    log::info!(
        "#Start plan_vpc() {} public={} private={} az_count={} ha={}",
        config.vpc_cidr,
        config.public_subnet_count,
        config.private_subnet_count,
        config.az_count,
        config.nat_high_availability
    );

    let azs = resolve_azs(&config.availability_zones, config.az_count, available)?;
    log::info!(
        "zones: {}",
        azs.iter().map(|az| az.as_str()).collect::<Vec<_>>().join(", ")
    );

    let subnets = allocate_subnets(
        config.vpc_cidr,
        config.public_subnet_count,
        config.private_subnet_count,
        &azs,
    )?;
    check_for_overlapping_subnets(&subnets)?;

    if !config.nat_high_availability && azs.len() > 1 {
        log::warn!(
            "single NAT gateway for {} zones, private subnets outside its zone route cross-zone",
            azs.len()
        );
    }

    let nat = plan_nat_topology(&subnets, config.nat_high_availability)?;
    let route_tables = plan_route_tables(&subnets, &nat);
    let tags = subnets
        .subnets
        .iter()
        .map(|s| (s.index, subnet_tags(&config.cluster_name, s)))
        .collect();

    Ok(VpcPlan {
        cluster_name: config.cluster_name.clone(),
        azs,
        subnets,
        nat,
        route_tables,
        tags,
    })
}
