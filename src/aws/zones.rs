//! Availability zone discovery through `aws ec2 describe-availability-zones`.

use super::cli;
use crate::models::AvailabilityZone;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::error::Error;

/// One entry of the `AvailabilityZones` array.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct ZoneInfo {
    pub zone_name: String,
    /// `available`, `impaired`, `unavailable` or `information`.
    pub state: String,
    /// `availability-zone`, `local-zone` or `wavelength-zone`.
    #[serde(default)]
    pub zone_type: Option<String>,
    #[serde(default)]
    pub zone_id: Option<String>,
    #[serde(default)]
    pub region_name: Option<String>,
}

impl ZoneInfo {
    /// Usable for subnet placement: a regular zone in the `available` state.
    pub fn is_available(&self) -> bool {
        self.state == "available"
            && self
                .zone_type
                .as_deref()
                .map_or(true, |t| t == "availability-zone")
    }
}

/// Response of `aws ec2 describe-availability-zones --output json`.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ZoneList {
    pub availability_zones: Vec<ZoneInfo>,
}

impl ZoneList {
    /// Available zone names, sorted alphabetically and de-duplicated.
    pub fn available(&self) -> Vec<AvailabilityZone> {
        self.availability_zones
            .iter()
            .filter(|z| {
                let ok = z.is_available();
                if !ok {
                    log::debug!(
                        "skipping zone {} state={} type={:?}",
                        z.zone_name,
                        z.state,
                        z.zone_type
                    );
                }
                ok
            })
            .map(|z| z.zone_name.as_str())
            .sorted()
            .dedup()
            .map(AvailabilityZone::from)
            .collect()
    }
}

/// Parse CLI output, reporting the JSON path of any mismatch.
pub fn parse_zone_list(json: &str) -> Result<ZoneList, Box<dyn Error>> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let zones: ZoneList = serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        log::error!("OUTPUT START:\n\n{}\n\nOUTPUT END\n", json);
        format!(
            "Error parsing availability zones: path={} error={}",
            e.path(),
            e
        )
    })?;
    Ok(zones)
}

/// Query the AWS CLI for the zones of `region`.
pub fn describe_availability_zones(region: &str) -> Result<ZoneList, Box<dyn Error>> {
    if region.is_empty() || region.contains(char::is_whitespace) {
        return Err(format!("Invalid region name: '{region}'").into());
    }
    let cmd = format!("aws ec2 describe-availability-zones --region {region} --output json");
    let output = cli::run(&cmd)?;
    let zones = parse_zone_list(&output)?;

    log::info!(
        "got {} zones for {region}, {} available",
        zones.availability_zones.len(),
        zones.available().len()
    );
    Ok(zones)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "AvailabilityZones": [
            {"ZoneName": "us-east-1b", "State": "available", "ZoneType": "availability-zone"},
            {"ZoneName": "us-east-1a", "State": "available", "ZoneType": "availability-zone"},
            {"ZoneName": "us-east-1-bos-1a", "State": "available", "ZoneType": "local-zone"},
            {"ZoneName": "us-east-1c", "State": "impaired", "ZoneType": "availability-zone"},
            {"ZoneName": "us-east-1d", "State": "available"}
        ]
    }"#;

    #[test]
    fn test_available_sorted_and_filtered() {
        let zones = parse_zone_list(SAMPLE).unwrap();
        assert_eq!(zones.availability_zones.len(), 5);
        assert_eq!(
            zones.available(),
            vec![
                AvailabilityZone::from("us-east-1a"),
                AvailabilityZone::from("us-east-1b"),
                AvailabilityZone::from("us-east-1d"),
            ]
        );
    }

    #[test]
    fn test_parse_error_names_path() {
        let bad = r#"{"AvailabilityZones": [{"ZoneName": "us-east-1a", "State": 3}]}"#;
        let err = parse_zone_list(bad).unwrap_err().to_string();
        assert!(err.contains("AvailabilityZones[0].State"), "{err}");
    }

    #[test]
    fn test_invalid_region_rejected() {
        assert!(describe_availability_zones("").is_err());
        assert!(describe_availability_zones("us-east-1 --profile x").is_err());
    }
}
