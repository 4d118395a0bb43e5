//! Route table derivation.

use crate::models::{AllocationPlan, NatGatewayPlan, RouteTable, RouteTarget};

/// Build route tables for a planned VPC.
///
/// One shared public table pointing at the internet gateway, then one private
/// table per NAT gateway that has private subnets routed to it, in gateway
/// placement order.
pub fn plan_route_tables(plan: &AllocationPlan, nat: &NatGatewayPlan) -> Vec<RouteTable> {
    let mut tables = Vec::new();

    let public: Vec<usize> = plan.public().map(|s| s.index).collect();
    if !public.is_empty() {
        tables.push(RouteTable {
            name: "public".to_string(),
            target: RouteTarget::InternetGateway,
            subnet_indices: public,
        });
    }

    for gateway in nat.gateways.values() {
        let subnet_indices: Vec<usize> = nat.routed_to(&gateway.id).collect();
        if subnet_indices.is_empty() {
            log::debug!("{} has no private subnets, no route table", gateway.id);
            continue;
        }
        let name = if nat.high_availability {
            format!("private-{}", gateway.az)
        } else {
            "private".to_string()
        };
        tables.push(RouteTable {
            name,
            target: RouteTarget::NatGateway(gateway.id.clone()),
            subnet_indices,
        });
    }

    tables
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AvailabilityZone, CidrBlock, NatGatewayId};
    use crate::processing::{allocate_subnets, plan_nat_topology};

    fn allocate(public: usize, private: usize, azs: &[&str]) -> AllocationPlan {
        let azs: Vec<AvailabilityZone> = azs.iter().map(|n| AvailabilityZone::from(*n)).collect();
        let base = CidrBlock::new("10.0.0.0/16").unwrap();
        allocate_subnets(base, public, private, &azs).unwrap()
    }

    #[test]
    fn test_ha_tables_per_zone() {
        let plan = allocate(3, 3, &["a", "b", "c"]);
        let nat = plan_nat_topology(&plan, true).unwrap();
        let tables = plan_route_tables(&plan, &nat);

        let names: Vec<&str> = tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["public", "private-a", "private-b", "private-c"]);
        assert_eq!(tables[0].target, RouteTarget::InternetGateway);
        assert_eq!(tables[0].subnet_indices, vec![0, 1, 2]);
        assert_eq!(tables[2].target, RouteTarget::NatGateway(NatGatewayId::new(1)));
        assert_eq!(tables[2].subnet_indices, vec![4]);
    }

    #[test]
    fn test_unused_gateway_gets_no_table() {
        // gateways in subnets 2 and 3 lose the tie-break
        let plan = allocate(4, 2, &["a", "b"]);
        let nat = plan_nat_topology(&plan, true).unwrap();
        let tables = plan_route_tables(&plan, &nat);
        assert_eq!(tables.len(), 3);
    }

    #[test]
    fn test_single_private_table() {
        let plan = allocate(2, 4, &["a", "b"]);
        let nat = plan_nat_topology(&plan, false).unwrap();
        let tables = plan_route_tables(&plan, &nat);
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[1].name, "private");
        assert_eq!(tables[1].subnet_indices, vec![2, 3, 4, 5]);
    }
}
