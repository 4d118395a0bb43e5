//! Availability zone resolution.
//!
//! Picks the ordered zones a plan uses, either from an explicit user list or
//! from the zones the provider reports as available.

use crate::error::PlanError;
use crate::models::AvailabilityZone;

/// Resolve the availability zones to plan across.
///
/// # Arguments
/// * `requested` - Explicit zones from configuration, empty to use `available`
/// * `count` - Maximum number of zones to return, at least 1
/// * `available` - Zones reported by the provider, in a deterministic order
///
/// # Returns
/// * `Ok(Vec<AvailabilityZone>)` - At most `count` zones
/// * `Err(PlanError::InvalidAvailabilityZone)` - Naming every requested zone not in `available`
pub fn resolve_azs(
    requested: &[AvailabilityZone],
    count: usize,
    available: &[AvailabilityZone],
) -> Result<Vec<AvailabilityZone>, PlanError> {
    if count < 1 {
        return Err(PlanError::invalid_config("availability zone count must be >= 1"));
    }

    if requested.is_empty() {
        let azs: Vec<AvailabilityZone> = available.iter().take(count).cloned().collect();
        log::debug!(
            "resolve_azs: using {} of {} discovered zones",
            azs.len(),
            available.len()
        );
        return Ok(azs);
    }

    let invalid: Vec<AvailabilityZone> = requested
        .iter()
        .filter(|az| !available.contains(az))
        .cloned()
        .collect();
    if !invalid.is_empty() {
        log::error!("requested zones not available: {:?}", invalid);
        return Err(PlanError::InvalidAvailabilityZone { invalid });
    }

    Ok(requested.iter().take(count).cloned().collect())
}
