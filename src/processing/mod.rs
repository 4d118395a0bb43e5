//! VPC topology planning logic.
//!
//! This module contains the pure planning phases:
//! - [`az`] - Availability zone resolution
//! - [`allocate`] - Subnet CIDR partitioning and zone/role assignment
//! - [`nat`] - NAT gateway placement and private subnet routing
//! - [`routes`] - Route tables derived from the NAT plan
//! - [`tags`] - Subnet names and EKS discovery tags

mod allocate;
mod az;
mod nat;
mod routes;
mod tags;

// Re-export public functions
pub use allocate::{allocate_subnets, check_for_overlapping_subnets};
pub use az::resolve_azs;
pub use nat::plan_nat_topology;
pub use routes::plan_route_tables;
pub use tags::{subnet_name, subnet_tags};
