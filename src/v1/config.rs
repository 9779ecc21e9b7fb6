/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::ZenfolioError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Version of the Zenfolio API this library talks to
pub const API_VERSION: &str = "1.7";

// Root Zenfolio API
pub const API_ENDPOINT: &str = "https://api.zenfolio.com/api/1.7/zfapi.asmx";

/// Client settings.
///
/// Loaded from a JSON file, any key left out keeps its default:
///
/// ```json
/// {
///     "min_tls_version": "1.2",
///     "auth": {"username": "jdoe", "password": "secret"}
/// }
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// JSON-RPC endpoint all calls are posted to
    pub endpoint: String,

    pub min_tls_version: TlsVersion,

    /// Overall request timeout. The transport default applies when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<Auth>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: API_ENDPOINT.to_string(),
            min_tls_version: TlsVersion::default(),
            timeout_secs: None,
            auth: None,
        }
    }
}

impl Config {
    /// Reads the config file at `path`
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ZenfolioError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|e| {
            ZenfolioError::Config(format!("Could not open config file {}: {e}", path.display()))
        })?;
        Self::from_json(&data)
    }

    /// Parses a JSON object laid over the default settings
    pub fn from_json(data: &str) -> Result<Self, ZenfolioError> {
        serde_json::from_str(data)
            .map_err(|e| ZenfolioError::Config(format!("Could not parse config: {e}")))
    }
}

/// Lowest TLS version the client will negotiate
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TlsVersion {
    #[serde(rename = "1.0")]
    Tls1_0,
    #[serde(rename = "1.1")]
    Tls1_1,
    #[default]
    #[serde(rename = "1.2")]
    Tls1_2,
    #[serde(rename = "1.3")]
    Tls1_3,
}

impl From<TlsVersion> for reqwest::tls::Version {
    fn from(v: TlsVersion) -> Self {
        match v {
            TlsVersion::Tls1_0 => reqwest::tls::Version::TLS_1_0,
            TlsVersion::Tls1_1 => reqwest::tls::Version::TLS_1_1,
            TlsVersion::Tls1_2 => reqwest::tls::Version::TLS_1_2,
            TlsVersion::Tls1_3 => reqwest::tls::Version::TLS_1_3,
        }
    }
}

/// Account credentials and the session token once one is obtained
#[derive(Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct Auth {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Auth {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            token: None,
        }
    }

    /// Credentials carrying a token from an earlier session
    pub fn with_token(username: &str, password: &str, token: &str) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::new(username, password)
        }
    }
}

impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Auth")
            .field("username", &self.username)
            .field("password", &"xxx")
            .field("token", &self.token.as_ref().map(|_| "xxx"))
            .finish()
    }
}
