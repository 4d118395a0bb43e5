//! Planner configuration.
//!
//! Values come from the process environment (after `dotenv` has loaded any
//! `.env` file). Unset variables fall back to the defaults below.

use crate::error::PlanError;
use crate::models::{AvailabilityZone, CidrBlock};
use std::net::Ipv4Addr;
use std::str::FromStr;

pub const DEFAULT_VPC_CIDR: CidrBlock = CidrBlock {
    addr: Ipv4Addr::new(10, 0, 0, 0),
    prefix: 16,
};
pub const DEFAULT_SUBNET_COUNT: usize = 3;
pub const DEFAULT_AZ_COUNT: usize = 3;
pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_CLUSTER_NAME: &str = "eks";

/// How the finished plan is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" | "csv" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(PlanError::invalid_config(format!(
                "PLAN_OUTPUT must be table or json, got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    pub vpc_cidr: CidrBlock,
    pub public_subnet_count: usize,
    pub private_subnet_count: usize,
    pub az_count: usize,
    /// Explicit zones; empty means discover them.
    pub availability_zones: Vec<AvailabilityZone>,
    pub nat_high_availability: bool,
    pub region: String,
    pub cluster_name: String,
    pub az_cache_file: Option<String>,
    pub output: OutputFormat,
    pub cache_timezone: chrono_tz::Tz,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            vpc_cidr: DEFAULT_VPC_CIDR,
            public_subnet_count: DEFAULT_SUBNET_COUNT,
            private_subnet_count: DEFAULT_SUBNET_COUNT,
            az_count: DEFAULT_AZ_COUNT,
            availability_zones: vec![],
            nat_high_availability: true,
            region: DEFAULT_REGION.to_string(),
            cluster_name: DEFAULT_CLUSTER_NAME.to_string(),
            az_cache_file: None,
            output: OutputFormat::Table,
            cache_timezone: chrono_tz::UTC,
        }
    }
}

impl PlannerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<PlannerConfig, PlanError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<PlannerConfig, PlanError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = PlannerConfig::default();
        // blank values count as unset
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let config = PlannerConfig {
            vpc_cidr: match get("VPC_CIDR") {
                Some(v) => CidrBlock::new(&v)?,
                None => defaults.vpc_cidr,
            },
            public_subnet_count: parse_or(
                "PUBLIC_SUBNET_COUNT",
                get("PUBLIC_SUBNET_COUNT"),
                defaults.public_subnet_count,
            )?,
            private_subnet_count: parse_or(
                "PRIVATE_SUBNET_COUNT",
                get("PRIVATE_SUBNET_COUNT"),
                defaults.private_subnet_count,
            )?,
            az_count: parse_or("AZ_COUNT", get("AZ_COUNT"), defaults.az_count)?,
            availability_zones: get("AVAILABILITY_ZONES")
                .map(|v| parse_zone_list(&v))
                .unwrap_or_default(),
            nat_high_availability: match get("NAT_HIGH_AVAILABILITY") {
                Some(v) => parse_bool("NAT_HIGH_AVAILABILITY", &v)?,
                None => defaults.nat_high_availability,
            },
            region: get("AWS_REGION").unwrap_or(defaults.region),
            cluster_name: get("CLUSTER_NAME").unwrap_or(defaults.cluster_name),
            az_cache_file: get("AZ_CACHE_FILE"),
            output: match get("PLAN_OUTPUT") {
                Some(v) => v.parse()?,
                None => defaults.output,
            },
            cache_timezone: match get("CACHE_TIMEZONE") {
                Some(v) => v.trim().parse().map_err(|_| {
                    PlanError::invalid_config(format!("CACHE_TIMEZONE '{v}' is not a timezone"))
                })?,
                None => defaults.cache_timezone,
            },
        };

        log::debug!("loaded config: {:?}", config);
        Ok(config)
    }
}

fn parse_or(key: &str, value: Option<String>, default: usize) -> Result<usize, PlanError> {
    match value {
        Some(v) => v.trim().parse().map_err(|_| {
            PlanError::invalid_config(format!("{key} must be a non-negative integer, got '{v}'"))
        }),
        None => Ok(default),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, PlanError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(PlanError::invalid_config(format!(
            "{key} must be true or false, got '{other}'"
        ))),
    }
}

/// Split a comma separated zone list, dropping blanks.
fn parse_zone_list(value: &str) -> Vec<AvailabilityZone> {
    value
        .split(',')
        .map(str::trim)
        .filter(|z| !z.is_empty())
        .map(AvailabilityZone::from)
        .collect()
}
