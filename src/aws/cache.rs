//! Cache management for availability zone data.
//!
//! Provides caching functionality to avoid repeated AWS API calls while a
//! plan is being iterated on.

use super::zones::{describe_availability_zones, parse_zone_list, ZoneList};
use chrono_tz::Tz;
use std::error::Error;
use std::path::Path;

/// Default cache file name, one per region per day in `tz`.
pub fn default_cache_file(region: &str, tz: Tz) -> String {
    let now = chrono::Utc::now().with_timezone(&tz);
    format!("az_cache_{region}_{}.json", now.format("%Y-%m-%d"))
}

/// Read zone data from a cache file, or fetch from AWS if the cache doesn't exist.
///
/// # Arguments
/// * `region` - Region to query on a cache miss
/// * `cache_file` - Optional path to a specific cache file. If None, uses default naming.
/// * `tz` - Timezone used to date the default cache file
///
/// # Returns
/// * `Ok(ZoneList)` - The zone data from cache or AWS
/// * `Err` - If cache file specified but doesn't exist, or the AWS query fails
pub fn read_zone_cache(
    region: &str,
    cache_file: Option<&str>,
    tz: Tz,
) -> Result<ZoneList, Box<dyn Error>> {
    let cache_file = match cache_file {
        Some(file) => {
            if !Path::new(file).exists() {
                return Err(format!("Cache file does not exist: {file}").into());
            }
            log::info!("Using provided cache file: {file}");
            file.to_string()
        }
        None => default_cache_file(region, tz),
    };

    let zones = match std::fs::read_to_string(&cache_file) {
        Ok(json) => {
            log::info!("Reading from cache file: {cache_file}");
            parse_zone_list(&json)?
        }
        Err(_) => {
            log::warn!("Cache file not found: {cache_file}");
            let zones = describe_availability_zones(region)?;

            let json = serde_json::to_string_pretty(&zones)
                .map_err(|e| format!("Error serializing JSON: {e}"))?;
            log::warn!("Writing data to cache file: {cache_file}");
            std::fs::write(&cache_file, json)
                .map_err(|e| format!("Error writing cache file {cache_file}: {e}"))?;
            zones
        }
    };

    Ok(zones)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_zone_cache() {
        let zones = read_zone_cache(
            "us-east-1",
            Some("src/tests/test_data/az_test_cache_us_east_1.json"),
            chrono_tz::UTC,
        )
        .expect("Error reading zone cache");
        assert_eq!(zones.availability_zones.len(), 8);
        assert_eq!(zones.available().len(), 5);
        assert_eq!(zones.available()[0].as_str(), "us-east-1a");
    }

    #[test]
    fn test_missing_cache_file() {
        let result = read_zone_cache(
            "us-east-1",
            Some("src/tests/test_data/no_such_cache.json"),
            chrono_tz::UTC,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_default_cache_file_name() {
        let name = default_cache_file("eu-west-1", chrono_tz::Pacific::Auckland);
        assert!(name.starts_with("az_cache_eu-west-1_"));
        assert!(name.ends_with(".json"));
        assert_eq!(name.len(), "az_cache_eu-west-1_2026-01-01.json".len());
    }
}
