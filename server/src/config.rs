use leptos::prelude::*;

use crate::errors::{Error, Result};

pub const CACHE_MAX_AGE_VAR: &str = "PORTFOLIO_CACHE_MAX_AGE";
const DEFAULT_CACHE_MAX_AGE: u32 = 300;

/// Leptos settings come from `[[workspace.metadata.leptos]]`, overridden by the
/// `LEPTOS_*` environment variables that cargo-leptos sets.
#[derive(Clone, Debug)]
pub struct Settings {
    pub leptos_options: LeptosOptions,
    /// Seconds browsers and proxies may keep the rendered page.
    pub cache_max_age: u32,
}

impl Settings {
    pub fn load() -> Result<Self> {
        let conf =
            get_configuration(None).map_err(|error| Error::Configuration(error.to_string()))?;
        let cache_max_age = parse_cache_max_age(std::env::var(CACHE_MAX_AGE_VAR).ok().as_deref())?;

        Ok(Self {
            leptos_options: conf.leptos_options,
            cache_max_age,
        })
    }
}

pub fn parse_cache_max_age(value: Option<&str>) -> Result<u32> {
    match value.map(str::trim) {
        None | Some("") => Ok(DEFAULT_CACHE_MAX_AGE),
        Some(value) => value.parse::<u32>().map_err(|error| Error::InvalidSetting {
            name: CACHE_MAX_AGE_VAR,
            value: String::from(value),
            error: error.to_string(),
        }),
    }
}
