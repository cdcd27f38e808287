use log::warn;
use serde_json::{Map, Value};

use super::fixer_dto::{RateMap, RatesResponse};
use crate::error::{FixerError, Result};

pub fn parse_response(body: &str) -> Result<RatesResponse> {
    let data = serde_json::from_str::<Value>(body).map_err(|err| {
        warn!("Response is not valid JSON: {}", err);
        FixerError::Response
    })?;

    match data {
        Value::Object(obj) => parse_response_object(obj),
        _ => {
            warn!("Unexpected API response format: not an object");
            Err(FixerError::Response)
        }
    }
}

fn parse_response_object(mut obj: Map<String, Value>) -> Result<RatesResponse> {
    let rates = match obj.remove("rates") {
        Some(rates @ Value::Object(_)) => serde_json::from_value::<RateMap>(rates).map_err(|err| {
            warn!("Failed to parse 'rates': {}", err);
            FixerError::Response
        })?,
        Some(_) => {
            warn!("Unexpected 'rates' format: not an object");
            return Err(FixerError::Response);
        }
        None => {
            warn!("Failed to find 'rates' in the response");
            return Err(FixerError::Response);
        }
    };

    let field = |name: &str| obj.get(name).and_then(Value::as_str).map(str::to_owned);

    Ok(RatesResponse::new(field("base"), field("date"), rates))
}
