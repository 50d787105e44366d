//! # ava-config
//!
//! Layered configuration loading for the AVA gateway using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`AVA_*` prefix, `__` as separator)
//! 2. Plain base-URL variables `INTERNAL_API_URL` / `PUBLIC_API_URL`
//! 3. Project-level `.ava/config.toml`
//! 4. User-level `~/.config/ava/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `AVA_API__INTERNAL_URL` -> `api.internal_url`,
//! `AVA_SESSION__DIR` -> `session.dir`, etc. The `__` (double underscore)
//! separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use ava_config::AvaConfig;
//! use ava_core::ExecutionContext;
//!
//! let config = AvaConfig::load_with_dotenv().expect("config");
//! if config.api.is_configured() {
//!     println!("{}", config.api.base_url(ExecutionContext::Browser).expect("url"));
//! }
//! ```

mod api;
mod error;
mod general;
mod session;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use session::SessionConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Plain variables accepted as aliases for the two base URLs.
const INTERNAL_URL_ALIAS: &str = "INTERNAL_API_URL";
const PUBLIC_URL_ALIAS: &str = "PUBLIC_API_URL";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AvaConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl AvaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".ava/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Plain base-URL aliases
        figment = figment.merge(
            Env::raw()
                .only(&[INTERNAL_URL_ALIAS, PUBLIC_URL_ALIAS])
                .map(|key| {
                    if key.as_str().eq_ignore_ascii_case(INTERNAL_URL_ALIAS) {
                        "api.internal_url".into()
                    } else {
                        "api.public_url".into()
                    }
                }),
        );

        // Layer 4: Prefixed environment variables (highest priority)
        figment.merge(Env::prefixed("AVA_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ava").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) looking for a `.env`
    /// file, then falls back to the current directory. Silently does nothing
    /// if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
