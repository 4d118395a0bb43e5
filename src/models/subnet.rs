//! Subnet layout data model.

use super::CidrBlock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque availability zone name, e.g. `us-east-1a`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct AvailabilityZone(pub String);

impl AvailabilityZone {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AvailabilityZone {
    fn from(name: &str) -> Self {
        AvailabilityZone(name.to_string())
    }
}

impl From<String> for AvailabilityZone {
    fn from(name: String) -> Self {
        AvailabilityZone(name)
    }
}

impl fmt::Display for AvailabilityZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One planned subnet.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetSpec {
    /// Position in the [`AllocationPlan`], also the sub-block index.
    pub index: usize,
    /// Address range of the subnet.
    pub cidr: CidrBlock,
    /// Availability zone the subnet is placed in.
    pub az: AvailabilityZone,
    /// Public subnets host NAT gateways and route to the internet gateway.
    pub is_public: bool,
}

impl SubnetSpec {
    pub fn role(&self) -> &'static str {
        if self.is_public {
            "public"
        } else {
            "private"
        }
    }
}

impl fmt::Display for SubnetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} ({}, {})",
            self.index,
            self.cidr,
            self.role(),
            self.az
        )
    }
}

/// Ordered subnet layout: public subnets first, then private ones.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AllocationPlan {
    /// The block all subnets were carved out of.
    pub base: CidrBlock,
    /// Prefix bits added to `base` for every subnet.
    pub new_bits: u8,
    pub public_count: usize,
    pub private_count: usize,
    pub subnets: Vec<SubnetSpec>,
}

impl AllocationPlan {
    pub fn len(&self) -> usize {
        self.subnets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subnets.is_empty()
    }

    pub fn public(&self) -> impl Iterator<Item = &SubnetSpec> {
        self.subnets.iter().filter(|s| s.is_public)
    }

    pub fn private(&self) -> impl Iterator<Item = &SubnetSpec> {
        self.subnets.iter().filter(|s| !s.is_public)
    }

    /// Sub-blocks carved but left unallocated for future growth.
    pub fn spare_slots(&self) -> usize {
        (1usize << self.new_bits).saturating_sub(self.subnets.len())
    }
}

impl fmt::Display for AllocationPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "AllocationPlan {} +{} bits ({} public, {} private):",
            self.base, self.new_bits, self.public_count, self.private_count
        )?;
        for subnet in &self.subnets {
            writeln!(f, "  - {subnet}")?;
        }
        Ok(())
    }
}
