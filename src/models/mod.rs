//! Domain models for the VPC topology planner.
//!
//! This module contains the value objects produced by one planning run:
//! - [`CidrBlock`] - IPv4 network prefix with sub-block splitting
//! - [`SubnetSpec`] and [`AllocationPlan`] - the subnet layout
//! - [`NatGatewayPlan`] and [`RouteTable`] - egress routing

mod cidr;
mod nat;
mod subnet;

// Re-export public types
pub use cidr::{bits_for, broadcast_addr, cut_addr, get_cidr_mask, CidrBlock, MAX_LENGTH};
pub use nat::{NatGateway, NatGatewayId, NatGatewayPlan, RouteTable, RouteTarget};
pub use subnet::{AllocationPlan, AvailabilityZone, SubnetSpec};
