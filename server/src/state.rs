use std::sync::Arc;

use pricing::geo::GeoapifyClient;

use super::config::{Config, Strategy};

/// The configured pricing rule. The Geoapify client only exists when the
/// deployment actually prices by geocoded distance.
pub enum Quoter {
    Flat,
    Geo(GeoapifyClient),
}

pub struct State {
    pub config: Config,
    pub quoter: Quoter,
}

impl State {
    pub fn new() -> Arc<Self> {
        let config = Config::load();

        let quoter = match config.strategy {
            Strategy::Geo => {
                let key = config.geoapify_key.clone().expect("Secrets misconfigured!");

                Quoter::Geo(GeoapifyClient::new(key))
            }
            Strategy::Flat => Quoter::Flat,
        };

        Arc::new(Self { config, quoter })
    }
}
