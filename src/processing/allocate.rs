//! Subnet allocation.
//!
//! Splits a base CIDR into equally sized sub-blocks and assigns each one an
//! availability zone (round-robin) and a public/private role.

use crate::error::PlanError;
use crate::models::{bits_for, AllocationPlan, AvailabilityZone, CidrBlock, SubnetSpec, MAX_LENGTH};

/// Allocate `public_count + private_count` subnets out of `base`.
///
/// Uses the smallest prefix extension that fits every subnet; slots beyond
/// the requested total stay unallocated.
///
/// # Arguments
/// * `base` - The block to carve up
/// * `public_count` - Number of public subnets, placed first
/// * `private_count` - Number of private subnets, placed after the public ones
/// * `azs` - Zones assigned round-robin by subnet index
pub fn allocate_subnets(
    base: CidrBlock,
    public_count: usize,
    private_count: usize,
    azs: &[AvailabilityZone],
) -> Result<AllocationPlan, PlanError> {
    let total = public_count.checked_add(private_count).ok_or_else(|| {
        PlanError::invalid_config(format!(
            "{public_count} public + {private_count} private subnets is too many to count"
        ))
    })?;
    if total < 1 {
        return Err(PlanError::invalid_config("at least one subnet must be requested"));
    }
    if azs.is_empty() {
        return Err(PlanError::invalid_config("no availability zones to allocate into"));
    }

    let new_bits = bits_for(total);
    if base.prefix as u32 + new_bits as u32 > MAX_LENGTH as u32 {
        return Err(PlanError::PrefixExhausted { base, new_bits });
    }

    log::info!(
        "allocate_subnets: {total} subnets ({public_count} public) from {base} as /{} over {} zones",
        base.prefix + new_bits,
        azs.len()
    );

    let subnets = (0..total)
        .map(|i| {
            let cidr = base.subnet(new_bits, i as u32)?;
            let subnet = SubnetSpec {
                index: i,
                cidr,
                az: azs[i % azs.len()].clone(),
                is_public: i < public_count,
            };
            log::debug!("allocated {subnet}");
            Ok(subnet)
        })
        .collect::<Result<Vec<_>, PlanError>>()?;

    Ok(AllocationPlan {
        base,
        new_bits,
        public_count,
        private_count,
        subnets,
    })
}

/// Return an error if any two subnets in the plan share an address.
pub fn check_for_overlapping_subnets(plan: &AllocationPlan) -> Result<(), PlanError> {
    for (i, a) in plan.subnets.iter().enumerate() {
        if let Some(b) = plan.subnets[i + 1..].iter().find(|b| a.cidr.overlaps(&b.cidr)) {
            return Err(PlanError::invalid_config(format!(
                "subnet #{} {} overlaps subnet #{} {}",
                a.index, a.cidr, b.index, b.cidr
            )));
        }
    }
    Ok(())
}
