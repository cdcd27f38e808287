use std::sync::Arc;

use log::{debug, warn};

use super::{
    fixer_dto::{RateMap, RatesResponse},
    transport::{ReqwestTransport, Transport},
    utils::parse_response,
};
use crate::{
    error::{FixerError, Result},
    models::{Protocol, Query},
    utils::parse_date,
};

/// Client for the fixer.io rates endpoints.
///
/// Configuration calls mutate the instance and return it for chaining; every
/// [`get`](Exchange::get) builds a fresh URL from whatever is configured at
/// that moment and performs exactly one request.
///
/// ```no_run
/// # async fn run() -> fixerio::Result<()> {
/// let mut exchange = fixerio::Exchange::new();
/// exchange.secure();
/// exchange.base("USD").symbols(["EUR", "GBP"]);
/// let rates = exchange.get().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Exchange {
    transport: Arc<dyn Transport>,
    query: Query,
}

impl Default for Exchange {
    fn default() -> Self {
        Self::new()
    }
}

impl Exchange {
    pub fn new() -> Self {
        Self::with_transport(Arc::new(ReqwestTransport::new()))
    }

    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            query: Query::default(),
        }
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn host(&mut self, host: &str) -> &mut Self {
        self.query.set_host(host.to_string());
        self
    }

    pub fn secure(&mut self) -> &mut Self {
        self.query.set_protocol(Protocol::Https);
        self
    }

    /// The code is sent as given; unknown currencies surface as a response error.
    /// A blank code leaves the current base in place.
    pub fn base(&mut self, currency: &str) -> &mut Self {
        if currency.trim().is_empty() {
            warn!("Ignoring empty base currency, keeping {}", self.query.base());
            return self;
        }

        self.query.set_base(currency.to_string());
        self
    }

    /// Restricts the result to `currencies`, in the given order. An empty
    /// sequence removes the filter. See also [`symbols!`](crate::symbols).
    pub fn symbols<I, S>(&mut self, currencies: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.query
            .set_symbols(currencies.into_iter().map(Into::into).collect());
        self
    }

    /// Switches to the historical endpoint for the day `date` resolves to.
    /// On a parse error nothing is changed.
    pub fn historical(&mut self, date: &str) -> Result<&mut Self> {
        let date = parse_date(date)?;
        self.query.set_date(date);
        Ok(self)
    }

    pub fn url(&self) -> String {
        self.query.url()
    }

    pub async fn get(&self) -> Result<RateMap> {
        Ok(self.get_response().await?.into_rates())
    }

    /// Like [`get`](Exchange::get) but keeps the `base` and `date` echoed by the API.
    pub async fn get_response(&self) -> Result<RatesResponse> {
        let url = self.url();
        debug!("GET {}", url);

        let body = self.transport.get(&url).await.map_err(|err| {
            warn!("Request to {} failed: {}", url, err);
            FixerError::Connection(err.to_string())
        })?;

        parse_response(&body)
    }
}

/// Variadic form of [`Exchange::symbols`].
///
/// `symbols!(exchange, "USD", "GBP")` is the same as
/// `exchange.symbols(["USD", "GBP"])`, and `symbols!(exchange)` clears the filter.
#[macro_export]
macro_rules! symbols {
    ($exchange:expr $(,)?) => {
        $exchange.symbols(::std::iter::empty::<::std::string::String>())
    };
    ($exchange:expr, $($currency:expr),+ $(,)?) => {
        $exchange.symbols([$($currency),+])
    };
}
