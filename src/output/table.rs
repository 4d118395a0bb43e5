//! Table output for a planned VPC.

use super::terminal::{format_count, format_field};
use crate::plan::VpcPlan;
use colored::Colorize;

/// Print a planned VPC as quoted CSV-like rows to stdout.
pub fn plan_print(plan: &VpcPlan) {
    log::info!(
        "#Start plan_print() {} subnets, {} NAT gateway(s)",
        plan.subnets.len(),
        plan.nat.gateways.len()
    );

    println!(
        r#" "idx",     "role",     "subnet_cidr",       "broadcast", "addrs",         "az",     "nat",                         "name""#
    );
    for row in plan_rows(plan) {
        println!("{row}");
    }

    let spare = plan.subnets.spare_slots();
    if spare > 0 {
        println!(
            "#{}# {spare} /{} block(s) left unallocated in {}",
            "NOTE".on_blue(),
            plan.subnets.base.prefix + plan.subnets.new_bits,
            plan.subnets.base
        );
    }
    if !plan.nat.high_availability && plan.azs.len() > 1 {
        println!(
            "#{}# single NAT gateway, private subnets outside its zone route cross-zone",
            "NOTE".on_red()
        );
    }
    for table in &plan.route_tables {
        println!(
            "# route table {name:>16} 0.0.0.0/0 -> {target:<6} subnets {subnets:?}",
            name = table.name,
            target = table.target.to_string(),
            subnets = table.subnet_indices
        );
    }
}

/// One formatted row per subnet, in plan order.
pub fn plan_rows(plan: &VpcPlan) -> Vec<String> {
    plan.subnets
        .subnets
        .iter()
        .map(|s| {
            // public subnets show the gateway they host, private ones the gateway they use
            let nat = match s.is_public {
                true => plan.nat.hosted_by(s.index).map(|gw| format!("hosts {}", gw.id)),
                false => plan.nat.route_for(s.index).map(|id| format!("via {id}")),
            };
            let nat = nat.unwrap_or_else(|| "-".to_string());

            let name = plan
                .tags
                .get(&s.index)
                .and_then(|tags| tags.get("Name"))
                .map(String::as_str)
                .unwrap_or("-");

            format!(
                "{idx},{role},{cidr},{broadcast},{addrs},{az},{nat},{name}",
                idx = format_field(s.index, 6),
                role = format_field(s.role(), 10),
                cidr = format_field(s.cidr, 18),
                broadcast = format_field(s.cidr.hi(), 17),
                addrs = format_field(format_count(s.cidr.num_addresses()), 7),
                az = format_field(&s.az, 14),
                nat = format_field(nat, 11),
                name = format_field(name, 30),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlannerConfig;
    use crate::models::AvailabilityZone;
    use crate::plan::plan_vpc;

    #[test]
    fn test_plan_rows() {
        let available: Vec<AvailabilityZone> =
            ["a", "b", "c"].into_iter().map(AvailabilityZone::from).collect();
        let plan = plan_vpc(&PlannerConfig::default(), &available).unwrap();
        let rows = plan_rows(&plan);

        assert_eq!(rows.len(), 6);
        assert!(rows[0].contains("\"10.0.0.0/19\""));
        assert!(rows[0].contains("\"hosts nat-0\""));
        assert!(rows[0].contains("\"10.0.31.255\""));
        assert!(rows[0].contains("\"8192\""));
        assert!(rows[4].contains("\"via nat-1\""));
        assert!(rows[4].contains("\"eks-private-b-4\""));
    }
}
