/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::api::{ApiClient, Params};
use crate::v1::config::{Auth, Config};
use crate::v1::datetime::decode_datetimes;
use crate::v1::errors::ZenfolioError;
use crate::v1::value::ZfValue;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;

/// Client for the Zenfolio API.
///
/// Holds the connection pool and the authentication state. Calls block until the
/// service responds.
///
/// ```rust,no_run
/// use zenfolio::v1::{Auth, Client, Config, InformationLevel};
///
/// # fn main() -> Result<(), zenfolio::v1::ZenfolioError> {
/// let mut client = Client::with_auth(Config::default(), Auth::new("jdoe", "secret"))?;
/// client.authenticate(false)?;
/// let photo = client.load_photo(12345, InformationLevel::Full)?;
/// println!("{}", photo["Title"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    api_client: ApiClient,
    auth: Auth,
}

impl Client {
    /// Creates a client using the credentials found in `config`, if any
    pub fn new(config: Config) -> Result<Self, ZenfolioError> {
        Ok(Self {
            api_client: ApiClient::new(&config)?,
            auth: config.auth.unwrap_or_default(),
        })
    }

    /// Creates a client with explicit credentials, ignoring any in `config`
    pub fn with_auth(config: Config, auth: Auth) -> Result<Self, ZenfolioError> {
        Self::new(Config {
            auth: Some(auth),
            ..config
        })
    }

    /// Creates a client from a JSON config file.
    ///
    /// `auth` takes priority over credentials found in the file.
    pub fn from_config_file(
        path: impl AsRef<Path>,
        auth: Option<Auth>,
    ) -> Result<Self, ZenfolioError> {
        let config = Config::from_file(path)?;
        match auth {
            Some(auth) => Self::with_auth(config, auth),
            None => Self::new(config),
        }
    }

    /// Current credentials
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Session token if one is held
    pub fn token(&self) -> Option<&str> {
        self.auth.token.as_deref()
    }

    /// Drops the session token
    pub fn clear_token(&mut self) {
        self.auth.token = None;
    }

    pub(crate) fn set_token(&mut self, token: String) {
        self.auth.token = Some(token);
    }

    pub(crate) fn api_client(&self) -> &ApiClient {
        &self.api_client
    }

    // Account name, failing when no credentials were configured
    pub(crate) fn username(&self, context: &str) -> Result<&str, ZenfolioError> {
        if self.auth.username.is_empty() {
            return Err(ZenfolioError::MissingCredentials(context.to_string()));
        }
        Ok(&self.auth.username)
    }

    /// Invokes a remote method returning the result with dates decoded
    pub fn call(&self, method: &str, params: impl Into<Params>) -> Result<ZfValue, ZenfolioError> {
        decode_datetimes(self.call_raw(method, params)?)
    }

    /// Invokes a remote method returning the result exactly as sent by the service
    pub fn call_raw(
        &self,
        method: &str,
        params: impl Into<Params>,
    ) -> Result<Value, ZenfolioError> {
        self.api_client.call(method, params.into(), self.token())
    }

    /// Invokes a remote method and deserializes the result into `T`
    pub fn call_as<T: DeserializeOwned>(
        &self,
        method: &str,
        params: impl Into<Params>,
    ) -> Result<T, ZenfolioError> {
        Ok(serde_json::from_value(self.call_raw(method, params)?)?)
    }
}
