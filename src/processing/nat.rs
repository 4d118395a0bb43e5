//! NAT gateway topology planning.
//!
//! Decides where NAT gateways go and which gateway each private subnet
//! routes its outbound traffic through.

use crate::error::PlanError;
use crate::models::{AllocationPlan, NatGateway, NatGatewayId, NatGatewayPlan, SubnetSpec};
use std::collections::BTreeMap;

/// Plan NAT gateways for an allocation.
///
/// With `high_availability` every public subnet hosts a gateway and private
/// subnets route to the lowest-index gateway in their own zone. Without it a
/// single gateway in the lowest-index public subnet serves every private
/// subnet.
///
/// # Returns
/// * `Ok(NatGatewayPlan)` - With a route for every private subnet
/// * `Err(PlanError::NoPublicSubnet)` - Private subnets exist but no public one
/// * `Err(PlanError::NoMatchingNatGateway)` - HA mode and a private subnet's zone has no gateway
pub fn plan_nat_topology(
    plan: &AllocationPlan,
    high_availability: bool,
) -> Result<NatGatewayPlan, PlanError> {
    // subnets are ordered by index, so iteration order is lowest index first
    let public: Vec<&SubnetSpec> = plan.public().collect();
    let private: Vec<&SubnetSpec> = plan.private().collect();

    if public.is_empty() {
        if private.is_empty() {
            return Ok(NatGatewayPlan {
                high_availability,
                ..Default::default()
            });
        }
        return Err(PlanError::NoPublicSubnet {
            private_count: private.len(),
        });
    }

    let hosts: &[&SubnetSpec] = if high_availability {
        &public
    } else {
        &public[..1]
    };

    let gateways: BTreeMap<usize, NatGateway> = hosts
        .iter()
        .enumerate()
        .map(|(ordinal, subnet)| {
            (
                subnet.index,
                NatGateway {
                    id: NatGatewayId::new(ordinal),
                    az: subnet.az.clone(),
                },
            )
        })
        .collect();

    let mut routes = BTreeMap::new();
    for p in &private {
        let id = if high_availability {
            zone_gateway(&gateways, p)?
        } else {
            // exactly one gateway in non-HA mode
            let (host, gateway) = gateways
                .iter()
                .next()
                .ok_or(PlanError::NoPublicSubnet {
                    private_count: private.len(),
                })?;
            if gateway.az != p.az {
                log::debug!(
                    "private subnet #{} in {} routes cross-zone to {} in subnet #{host}",
                    p.index,
                    p.az,
                    gateway.id
                );
            }
            gateway.id.clone()
        };
        routes.insert(p.index, id);
    }

    log::info!(
        "plan_nat_topology: {} gateway(s), {} private route(s), high_availability={high_availability}",
        gateways.len(),
        routes.len()
    );

    Ok(NatGatewayPlan {
        high_availability,
        gateways,
        routes,
    })
}

/// Gateway in the same zone as `private`, lowest hosting subnet index first.
fn zone_gateway(
    gateways: &BTreeMap<usize, NatGateway>,
    private: &SubnetSpec,
) -> Result<NatGatewayId, PlanError> {
    let mut candidates = gateways.iter().filter(|(_, gw)| gw.az == private.az);
    let (host, gateway) = candidates
        .next()
        .ok_or_else(|| PlanError::NoMatchingNatGateway {
            index: private.index,
            az: private.az.clone(),
        })?;
    if let Some((skipped, _)) = candidates.next() {
        log::debug!(
            "zone {} has several gateways, subnet #{} uses the one in #{host} over #{skipped}",
            private.az,
            private.index
        );
    }
    Ok(gateway.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AvailabilityZone, CidrBlock};
    use crate::processing::allocate_subnets;

    fn zones(names: &[&str]) -> Vec<AvailabilityZone> {
        names.iter().map(|n| AvailabilityZone::from(*n)).collect()
    }

    fn allocate(public: usize, private: usize, azs: &[&str]) -> AllocationPlan {
        let base = CidrBlock::new("10.0.0.0/16").unwrap();
        allocate_subnets(base, public, private, &zones(azs)).unwrap()
    }

    #[test]
    fn test_ha_routes_by_zone() {
        let plan = allocate(3, 3, &["a", "b", "c"]);
        let nat = plan_nat_topology(&plan, true).unwrap();

        assert_eq!(nat.gateways.len(), 3);
        assert_eq!(nat.hosted_by(0).unwrap().id, NatGatewayId::new(0));
        assert_eq!(nat.hosted_by(2).unwrap().az, AvailabilityZone::from("c"));
        for p in plan.private() {
            let id = nat.route_for(p.index).unwrap();
            let (host, gw) = nat.gateways.iter().find(|(_, gw)| &gw.id == id).unwrap();
            assert_eq!(gw.az, p.az);
            assert_eq!(*host, p.index - 3);
        }
    }

    #[test]
    fn test_ha_tie_break_lowest_index() {
        // publics land in a, b, a, b
        let plan = allocate(4, 2, &["a", "b"]);
        let nat = plan_nat_topology(&plan, true).unwrap();

        assert_eq!(nat.gateways.len(), 4);
        assert_eq!(plan.subnets[4].az, AvailabilityZone::from("a"));
        assert_eq!(nat.route_for(4), Some(&nat.hosted_by(0).unwrap().id));
        assert_eq!(nat.route_for(5), Some(&nat.hosted_by(1).unwrap().id));
        assert_ne!(nat.route_for(4), Some(&nat.hosted_by(2).unwrap().id));
    }

    #[test]
    fn test_ha_zone_without_gateway() {
        // one public in a, privates in b and a
        let plan = allocate(1, 2, &["a", "b"]);
        let err = plan_nat_topology(&plan, true).unwrap_err();
        assert_eq!(
            err,
            PlanError::NoMatchingNatGateway {
                index: 1,
                az: AvailabilityZone::from("b")
            }
        );
    }

    #[test]
    fn test_single_gateway_consolidates() {
        let plan = allocate(3, 3, &["a", "b", "c"]);
        let nat = plan_nat_topology(&plan, false).unwrap();

        assert_eq!(nat.gateways.len(), 1);
        let gw = nat.hosted_by(0).unwrap();
        assert_eq!(nat.routes.len(), 3);
        assert!(nat.routes.values().all(|id| *id == gw.id));
        assert_eq!(nat.routed_to(&gw.id).collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    #[test]
    fn test_single_gateway_tolerates_uncovered_zone() {
        let plan = allocate(1, 2, &["a", "b"]);
        let nat = plan_nat_topology(&plan, false).unwrap();
        assert_eq!(nat.routes.len(), 2);
    }

    #[test]
    fn test_no_public_subnet() {
        let plan = allocate(0, 2, &["a", "b"]);
        for ha in [true, false] {
            assert_eq!(
                plan_nat_topology(&plan, ha).unwrap_err(),
                PlanError::NoPublicSubnet { private_count: 2 }
            );
        }
    }

    #[test]
    fn test_public_only() {
        let plan = allocate(2, 0, &["a", "b"]);
        let nat = plan_nat_topology(&plan, true).unwrap();
        assert_eq!(nat.gateways.len(), 2);
        assert!(nat.routes.is_empty());
    }

    #[test]
    fn test_every_private_routed_once_and_deterministic() {
        let plan = allocate(6, 9, &["a", "b", "c"]);
        for ha in [true, false] {
            let nat = plan_nat_topology(&plan, ha).unwrap();
            let private: Vec<usize> = plan.private().map(|s| s.index).collect();
            assert_eq!(nat.routes.keys().copied().collect::<Vec<_>>(), private);
            assert_eq!(nat, plan_nat_topology(&plan, ha).unwrap());
        }
    }
}
