//! Subnet names and EKS discovery tags.

use crate::models::SubnetSpec;
use std::collections::BTreeMap;

const ELB_ROLE_TAG: &str = "kubernetes.io/role/elb";
const INTERNAL_ELB_ROLE_TAG: &str = "kubernetes.io/role/internal-elb";

/// Resource name for a subnet, e.g. `eks-private-us-east-1a-3`.
pub fn subnet_name(cluster_name: &str, subnet: &SubnetSpec) -> String {
    format!(
        "{cluster_name}-{role}-{az}-{index}",
        role = subnet.role(),
        az = subnet.az,
        index = subnet.index
    )
}

/// Tags the load balancer controller uses to discover subnets.
pub fn subnet_tags(cluster_name: &str, subnet: &SubnetSpec) -> BTreeMap<String, String> {
    let role_tag = if subnet.is_public {
        ELB_ROLE_TAG
    } else {
        INTERNAL_ELB_ROLE_TAG
    };

    BTreeMap::from([
        ("Name".to_string(), subnet_name(cluster_name, subnet)),
        (
            format!("kubernetes.io/cluster/{cluster_name}"),
            "shared".to_string(),
        ),
        (role_tag.to_string(), "1".to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CidrBlock;

    fn subnet(index: usize, is_public: bool) -> SubnetSpec {
        SubnetSpec {
            index,
            cidr: CidrBlock::new("10.0.96.0/19").unwrap(),
            az: "us-east-1a".into(),
            is_public,
        }
    }

    #[test]
    fn test_public_tags() {
        let tags = subnet_tags("demo", &subnet(0, true));
        assert_eq!(tags["Name"], "demo-public-us-east-1a-0");
        assert_eq!(tags["kubernetes.io/cluster/demo"], "shared");
        assert_eq!(tags[ELB_ROLE_TAG], "1");
        assert!(!tags.contains_key(INTERNAL_ELB_ROLE_TAG));
    }

    #[test]
    fn test_private_tags() {
        let tags = subnet_tags("demo", &subnet(3, false));
        assert_eq!(tags["Name"], "demo-private-us-east-1a-3");
        assert_eq!(tags[INTERNAL_ELB_ROLE_TAG], "1");
        assert_eq!(tags.len(), 3);
    }
}
