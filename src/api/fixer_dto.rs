use std::collections::BTreeMap;

use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;

/// Currency code to rate, relative to the requested base.
pub type RateMap = BTreeMap<String, f64>;

#[derive(Clone, Debug, Getters, PartialEq, Serialize, new)]
pub struct RatesResponse {
    base: Option<String>,
    date: Option<String>,
    rates: RateMap,
}

impl RatesResponse {
    pub fn into_rates(self) -> RateMap {
        self.rates
    }
}
