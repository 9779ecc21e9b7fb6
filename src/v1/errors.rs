/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use bytes::Bytes;
use reqwest::header::HeaderMap;
use std::io;
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum ZenfolioError {
    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No credentials configured for: {0}")]
    MissingCredentials(String),

    #[error("DateTime format error. Value `{0}` does not match `{1}`")]
    Format(String, &'static str),

    #[error("Request network error")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error from {url}: {status}")]
    Http {
        url: String,
        status: u16,
        headers: HeaderMap,
        body: Bytes,
    },

    #[error("API Response was error: {}, msg: {message}", .code.as_deref().unwrap_or("None"))]
    Remote {
        code: Option<String>,
        message: String,
    },

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("API Response is malformed: {0:?}")]
    ApiResponseMalformed(serde_json::Error),

    #[error("Failed serializing to JSON: {0}")]
    JsonSerialization(serde_json::Error),

    #[error("Deserialization error")]
    Deserialization(#[from] serde_json::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),
}

impl ZenfolioError {
    /// HTTP status code when this is an [`ZenfolioError::Http`] error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Remote error code when the service reported one
    pub fn remote_code(&self) -> Option<&str> {
        match self {
            Self::Remote { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}
