//! # Fee Rules
//!
//! Pure fee math. No I/O here; distances come from the caller.
//!
//! Quoted fees are always clean half-real amounts. The flat rule rounds UP
//! so a quote never under-charges, the tiered rule only ever produces its
//! two fixed amounts.

use crate::error::QuoteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Neighbor,
    Far,
}

/// How to treat zone strings nobody recognizes.
///
/// The storefront historically priced unknown zones as non-discounted
/// instead of rejecting them. That stays available as [`ZoneMode::Legacy`]
/// for deployments that still depend on it; [`ZoneMode::Strict`] is the
/// default everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneMode {
    Strict,
    Legacy,
}

impl Zone {
    pub fn parse(value: &str, mode: ZoneMode) -> Result<Self, QuoteError> {
        match value.to_ascii_lowercase().as_str() {
            "neighbor" => Ok(Zone::Neighbor),
            "far" => Ok(Zone::Far),
            _ => match mode {
                ZoneMode::Legacy => Ok(Zone::Far),
                ZoneMode::Strict => Err(QuoteError::UnknownZone(value.to_string())),
            },
        }
    }
}

/// Rates for the flat-rate rule. Defaults are the production values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatRates {
    pub base: f64,
    pub per_km: f64,
    pub minimum: f64,
    pub neighbor_discount: f64,
    pub discount_radius_km: f64,
}

impl Default for FlatRates {
    fn default() -> Self {
        Self {
            base: 3.5,
            per_km: 1.2,
            minimum: 5.0,
            neighbor_discount: 0.5,
            discount_radius_km: 3.0,
        }
    }
}

/// Rates for the tiered rule used with geocoded distances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierRates {
    pub free_radius_km: f64,
    pub flat_fee: f64,
}

impl Default for TierRates {
    fn default() -> Self {
        Self {
            free_radius_km: 3.0,
            flat_fee: 5.0,
        }
    }
}

pub fn round_up_to_half(value: f64) -> f64 {
    (value * 2.0).ceil() / 2.0
}

/// Flat-rate fee: base + per-km, floored at the minimum, neighbor discount
/// inside the radius, rounded up to the next 0,50.
///
/// Order matters: the floor applies before the discount, so a short
/// neighbor run ends up below the minimum (minimum 5,00 discounted to
/// 2,50). The discount radius is boundary inclusive.
///
/// `distance_km` must be finite and non-negative; validate at the edge.
pub fn flat_fee(rates: &FlatRates, zone: Zone, distance_km: f64) -> f64 {
    let raw = rates.base + distance_km * rates.per_km;
    let mut fee = raw.max(rates.minimum);

    if zone == Zone::Neighbor && distance_km <= rates.discount_radius_km {
        fee *= rates.neighbor_discount;
    }

    round_up_to_half(fee)
}

/// Tiered fee: free inside the radius (boundary inclusive), one flat
/// amount outside it.
pub fn tier_fee(rates: &TierRates, distance_km: f64) -> f64 {
    if distance_km <= rates.free_radius_km {
        0.0
    } else {
        rates.flat_fee
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn rates() -> FlatRates {
        FlatRates::default()
    }

    #[test]
    fn test_neighbor_cases() {
        assert_eq!(flat_fee(&rates(), Zone::Neighbor, 0.0), 2.5);
        assert_eq!(flat_fee(&rates(), Zone::Neighbor, 1.0), 2.5);
        assert_eq!(flat_fee(&rates(), Zone::Neighbor, 2.5), 3.5);
    }

    #[test]
    fn test_far_cases() {
        assert_eq!(flat_fee(&rates(), Zone::Far, 0.0), 5.0);
        assert_eq!(flat_fee(&rates(), Zone::Far, 2.0), 6.0);
        assert_eq!(flat_fee(&rates(), Zone::Far, 10.0), 15.5);
        assert_eq!(flat_fee(&rates(), Zone::Far, 20.0), 27.5);
    }

    #[test]
    fn test_discount_boundary() {
        // 3.0 km is still inside the discount band, 3.01 km is not.
        assert_eq!(flat_fee(&rates(), Zone::Neighbor, 3.0), 4.0);
        assert_eq!(flat_fee(&rates(), Zone::Neighbor, 3.01), 7.5);
    }

    #[test]
    fn test_far_ignores_discount_radius() {
        assert_eq!(
            flat_fee(&rates(), Zone::Far, 1.0),
            flat_fee(&rates(), Zone::Far, 0.0)
        );
        assert_eq!(flat_fee(&rates(), Zone::Far, 3.0), 7.5);
    }

    #[test]
    fn test_tier_boundary() {
        let tiers = TierRates::default();

        assert_eq!(tier_fee(&tiers, 0.0), 0.0);
        assert_eq!(tier_fee(&tiers, 3.0), 0.0);
        assert_eq!(tier_fee(&tiers, 3.01), 5.0);
        assert_eq!(tier_fee(&tiers, 12.0), 5.0);
    }

    #[test]
    fn test_zone_parse_strict() {
        assert_eq!(
            Zone::parse("neighbor", ZoneMode::Strict).unwrap(),
            Zone::Neighbor
        );
        assert_eq!(Zone::parse("FAR", ZoneMode::Strict).unwrap(), Zone::Far);
        assert!(matches!(
            Zone::parse("condo", ZoneMode::Strict),
            Err(QuoteError::UnknownZone(_))
        ));
    }

    #[test]
    fn test_zone_parse_legacy() {
        // Legacy deployments price anything unrecognized without a discount.
        assert_eq!(Zone::parse("condo", ZoneMode::Legacy).unwrap(), Zone::Far);
        assert_eq!(Zone::parse("", ZoneMode::Legacy).unwrap(), Zone::Far);
    }

    #[test]
    fn test_idempotent() {
        let first = flat_fee(&rates(), Zone::Neighbor, 2.5);
        let second = flat_fee(&rates(), Zone::Neighbor, 2.5);

        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn flat_fee_is_half_increments(distance_km in 0.0f64..80.0) {
            for zone in [Zone::Neighbor, Zone::Far] {
                let fee = flat_fee(&rates(), zone, distance_km);

                prop_assert_eq!((fee * 2.0).fract(), 0.0);
                prop_assert!(fee >= 2.5);
            }
        }

        #[test]
        fn far_fee_never_below_minimum(distance_km in 0.0f64..80.0) {
            prop_assert!(flat_fee(&rates(), Zone::Far, distance_km) >= 5.0);
        }
    }
}
