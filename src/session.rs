//! Per-activation session state: API credentials, the cached bearer token,
//! and the last-used search selections. One session lives from plugin
//! activation to shutdown and is passed explicitly to each operation.

use crate::api::DigikeyApi;
use crate::error::Result;
use crate::format::VOLTAGE_ANY;
use crate::search::{CapacitorMounting, PowerRating, ToleranceBand};
use std::time::{Duration, Instant};

/// Tokens are reused for this long before a fresh one is requested.
const TOKEN_TTL: Duration = Duration::from_secs(300);

#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

#[derive(Debug, Clone)]
struct CachedToken {
    bearer: String,
    acquired: Instant,
}

/// Search-form selections remembered between searches so the host can
/// restore the user's previous choices.
#[derive(Debug, Clone)]
pub struct Selections {
    pub power: PowerRating,
    pub tolerance: ToleranceBand,
    pub mounting: CapacitorMounting,
    pub disc_voltage: String,
}

impl Default for Selections {
    fn default() -> Self {
        Selections {
            power: PowerRating::default(),
            tolerance: ToleranceBand::default(),
            mounting: CapacitorMounting::default(),
            disc_voltage: VOLTAGE_ANY.to_string(),
        }
    }
}

pub struct Session {
    pub credentials: Credentials,
    pub selections: Selections,
    token: Option<CachedToken>,
}

impl Session {
    pub fn new(credentials: Credentials) -> Self {
        Session {
            credentials,
            selections: Selections::default(),
            token: None,
        }
    }

    /// Returns the cached bearer token, fetching a fresh one when none is
    /// cached or the cached one has outlived its TTL.
    pub async fn bearer(&mut self, api: &DigikeyApi) -> Result<String> {
        if let Some(token) = &self.token {
            if token.acquired.elapsed() < TOKEN_TTL {
                return Ok(token.bearer.clone());
            }
        }
        self.refresh(api).await
    }

    /// Unconditionally fetches and caches a fresh bearer token.
    pub async fn refresh(&mut self, api: &DigikeyApi) -> Result<String> {
        let bearer = api.request_token(&self.credentials).await?;
        self.token = Some(CachedToken {
            bearer: bearer.clone(),
            acquired: Instant::now(),
        });
        Ok(bearer)
    }

    /// Drops the cached token, forcing the next search to re-authenticate.
    pub fn clear_token(&mut self) {
        self.token = None;
    }
}
