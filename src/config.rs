use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::error::SchoolError;

/// Runtime settings. Defaults are overridden by the raw environment
/// variables `DATABASE_URL`, `LISTEN_ADDR` and `LOGLEVEL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://school_fee.db".to_string(),
            listen_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::raw().only(&[
            "database_url",
            "listen_addr",
            "loglevel",
        ]))
    }

    pub fn load() -> Result<Self, SchoolError> {
        Ok(Self::figment().extract()?)
    }
}
