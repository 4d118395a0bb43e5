//! NAT gateway and route table data model.

use super::AvailabilityZone;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Synthetic NAT gateway identifier (`nat-0`, `nat-1`, ...).
///
/// Only meaningful within one plan; the resource layer maps it to a real id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct NatGatewayId(pub String);

impl NatGatewayId {
    pub fn new(ordinal: usize) -> Self {
        NatGatewayId(format!("nat-{ordinal}"))
    }
}

impl fmt::Display for NatGatewayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A NAT gateway placed in a public subnet.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NatGateway {
    pub id: NatGatewayId,
    pub az: AvailabilityZone,
}

/// NAT gateway placements plus the private subnet routing table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct NatGatewayPlan {
    pub high_availability: bool,
    /// Hosting public subnet index -> gateway.
    pub gateways: BTreeMap<usize, NatGateway>,
    /// Private subnet index -> gateway routing its egress.
    pub routes: BTreeMap<usize, NatGatewayId>,
}

impl NatGatewayPlan {
    /// Gateway hosted by the given public subnet, if any.
    pub fn hosted_by(&self, subnet_index: usize) -> Option<&NatGateway> {
        self.gateways.get(&subnet_index)
    }

    pub fn route_for(&self, private_index: usize) -> Option<&NatGatewayId> {
        self.routes.get(&private_index)
    }

    /// Private subnet indices routed to `id`, ascending.
    pub fn routed_to<'a>(&'a self, id: &'a NatGatewayId) -> impl Iterator<Item = usize> + 'a {
        self.routes
            .iter()
            .filter(move |(_, gw)| *gw == id)
            .map(|(index, _)| *index)
    }
}

/// Default route target of a route table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RouteTarget {
    InternetGateway,
    NatGateway(NatGatewayId),
}

impl fmt::Display for RouteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteTarget::InternetGateway => f.write_str("igw"),
            RouteTarget::NatGateway(id) => write!(f, "{id}"),
        }
    }
}

/// A route table with its `0.0.0.0/0` target and associated subnets.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    pub name: String,
    pub target: RouteTarget,
    pub subnet_indices: Vec<usize>,
}
