use std::{env, fmt::Display, fs::read_to_string, str::FromStr};

use tracing::{info, warn};

use pricing::{
    fee::{FlatRates, TierRates},
    geo::Coordinate,
};

pub struct Config {
    pub port: u16,
    pub strategy: Strategy,
    pub legacy_zones: bool,
    pub store_latitude: f64,
    pub store_longitude: f64,
    pub whatsapp_number: String,
    pub flat: FlatRates,
    pub tiers: TierRates,
    pub geoapify_key: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Flat,
    Geo,
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "flat" => Ok(Strategy::Flat),
            "geo" => Ok(Strategy::Geo),
            other => Err(format!("expected flat or geo, got {other}")),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let strategy: Strategy = try_load("PRICING_STRATEGY", "flat");

        Self {
            port: try_load("RUST_PORT", "1414"),
            strategy,
            legacy_zones: try_load("LEGACY_ZONES", "false"),
            store_latitude: try_load("STORE_LATITUDE", "-23.561414"),
            store_longitude: try_load("STORE_LONGITUDE", "-46.655881"),
            whatsapp_number: try_load("WHATSAPP_NUMBER", "5511999999999"),
            flat: FlatRates {
                base: try_load("FEE_BASE", "3.5"),
                per_km: try_load("FEE_PER_KM", "1.2"),
                minimum: try_load("FEE_MINIMUM", "5.0"),
                neighbor_discount: try_load("NEIGHBOR_DISCOUNT", "0.5"),
                discount_radius_km: try_load("DISCOUNT_RADIUS_KM", "3.0"),
            },
            tiers: TierRates {
                free_radius_km: try_load("FREE_RADIUS_KM", "3.0"),
                flat_fee: try_load("TIER_FEE", "5.0"),
            },
            // The key only exists for geo deployments; flat never calls out.
            geoapify_key: match strategy {
                Strategy::Geo => Some(read_secret("GEOAPIFY_KEY")),
                Strategy::Flat => None,
            },
        }
    }

    pub fn store(&self) -> Coordinate {
        Coordinate::new(self.store_latitude, self.store_longitude)
            .expect("Store coordinate misconfigured!")
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

fn read_secret(secret_name: &str) -> String {
    let path = format!("/run/secrets/{secret_name}");

    read_to_string(&path)
        .map(|s| s.trim().to_string())
        .map_err(|e| {
            warn!("Failed to read {secret_name} from file: {e}");
        })
        .expect("Secrets misconfigured!")
}
