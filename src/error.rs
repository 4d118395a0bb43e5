//! Planning errors.
//!
//! Every planning function returns one of these categories. None of them is
//! retryable: the caller fixes its inputs and re-runs the whole plan.

use crate::models::{AvailabilityZone, CidrBlock};
use itertools::Itertools;
use thiserror::Error as ThisError;

///
/// PlanError
///

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum PlanError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid availability zone(s): {}", join_zones(.invalid))]
    InvalidAvailabilityZone { invalid: Vec<AvailabilityZone> },

    #[error("cannot carve {new_bits} more prefix bits out of {base} (limit /32)")]
    PrefixExhausted { base: CidrBlock, new_bits: u8 },

    #[error("{private_count} private subnet(s) but no public subnet to host a NAT gateway")]
    NoPublicSubnet { private_count: usize },

    #[error("no NAT gateway in availability zone {az} for private subnet #{index}")]
    NoMatchingNatGateway { index: usize, az: AvailabilityZone },
}

fn join_zones(zones: &[AvailabilityZone]) -> String {
    zones.iter().map(|az| az.to_string()).join(", ")
}

impl PlanError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        PlanError::InvalidConfiguration(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_az_lists_every_entry() {
        let err = PlanError::InvalidAvailabilityZone {
            invalid: vec!["us-east-1y".into(), "us-east-1z".into()],
        };
        assert_eq!(
            err.to_string(),
            "invalid availability zone(s): us-east-1y, us-east-1z"
        );
    }

    #[test]
    fn test_no_matching_nat_names_subnet() {
        let err = PlanError::NoMatchingNatGateway {
            index: 4,
            az: "eu-west-1c".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("#4"));
        assert!(msg.contains("eu-west-1c"));
    }
}
