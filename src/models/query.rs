use chrono::NaiveDate;
use derive_getters::Getters;

use super::Protocol;

pub const DEFAULT_HOST: &str = "api.fixer.io";
pub const DEFAULT_BASE: &str = "EUR";

/// Request parameters accumulated by an [`Exchange`](crate::Exchange).
#[derive(Clone, Debug, Eq, Getters, PartialEq)]
pub struct Query {
    host: String,
    protocol: Protocol,
    base: String,
    symbols: Vec<String>,
    date: Option<NaiveDate>,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            protocol: Protocol::default(),
            base: DEFAULT_BASE.to_string(),
            symbols: Vec::new(),
            date: None,
        }
    }
}

impl Query {
    pub fn set_host(&mut self, host: String) {
        self.host = host;
    }

    pub fn set_protocol(&mut self, protocol: Protocol) {
        self.protocol = protocol;
    }

    pub fn set_base(&mut self, base: String) {
        self.base = base;
    }

    pub fn set_symbols(&mut self, symbols: Vec<String>) {
        self.symbols = symbols;
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = Some(date);
    }

    /// `{protocol}://{host}/{date|latest}?base={base}[&symbols=A,B]`
    pub fn url(&self) -> String {
        let endpoint = match &self.date {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => String::from("latest"),
        };

        let mut url = format!(
            "{}://{}/{}?base={}",
            self.protocol, self.host, endpoint, self.base
        );

        if !self.symbols.is_empty() {
            url.push_str("&symbols=");
            url.push_str(&self.symbols.join(","));
        }

        url
    }
}
