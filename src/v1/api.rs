/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::config::Config;
use crate::v1::errors::ZenfolioError;
use crate::v1::parsers::from_error_code;
use bytes::Bytes;
use log::{debug, trace, warn};
use reqwest::StatusCode;
use reqwest::blocking::Response;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// Header carrying the session token
pub const TOKEN_HEADER: &str = "X-Zenfolio-Token";

/// Directly communicates with the API.
///
/// Owns the connection pool. Every request is a blocking round-trip.
#[derive(Clone)]
pub struct ApiClient {
    endpoint: String,
    https_client: reqwest::blocking::Client,
}

impl ApiClient {
    /// Creates a new API client from the provided settings.
    ///
    /// An unusable endpoint or TLS setting is a [`ZenfolioError::Config`] error.
    pub fn new(config: &Config) -> Result<Self, ZenfolioError> {
        reqwest::Url::parse(&config.endpoint).map_err(|e| {
            ZenfolioError::Config(format!("Invalid endpoint `{}`: {e}", config.endpoint))
        })?;
        let mut builder = reqwest::blocking::Client::builder()
            .min_tls_version(config.min_tls_version.into());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let https_client = builder
            .build()
            .map_err(|e| ZenfolioError::Config(format!("Could not create HTTP client: {e}")))?;
        Ok(Self {
            endpoint: config.endpoint.clone(),
            https_client,
        })
    }

    /// URL all calls are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Invokes `method` and returns the undecoded `result` field of the response
    pub fn call(
        &self,
        method: &str,
        params: Params,
        token: Option<&str>,
    ) -> Result<Value, ZenfolioError> {
        let id = rand::random::<u16>();
        let data = serde_json::to_vec(&RequestBody {
            method,
            params: params.as_slice(),
            id,
        })
        .map_err(ZenfolioError::JsonSerialization)?;
        debug!("Calling {method} (id: {id})");
        trace!("{method} params: {:?}", params.as_slice());

        let resp = self
            .https_client
            .post(&self.endpoint)
            .headers(request_headers(token)?)
            .body(data)
            .send()?;
        let body = ok_body(&self.endpoint, resp)?;

        let body = serde_json::from_slice::<ResponseBody>(&body).map_err(|err| {
            warn!("Malformed response to {method}: {err}");
            ZenfolioError::ApiResponseMalformed(err)
        })?;

        if let Some(fault) = body.error {
            debug!("{method} failed remotely: {:?} {}", fault.code, fault.message);
            return Err(ZenfolioError::Remote {
                code: fault.code,
                message: fault.message,
            });
        }

        if body.id.as_u64() != Some(u64::from(id)) {
            return Err(ZenfolioError::Protocol(format!(
                "Response ID {} does not match request ID {id}",
                body.id
            )));
        }

        Ok(body.result)
    }

    /// Posts raw data to `url` outside of the RPC envelope, returning the response text
    pub fn post_data(
        &self,
        url: &str,
        query: &[(&str, &str)],
        content_type: &str,
        data: Bytes,
        token: Option<&str>,
    ) -> Result<String, ZenfolioError> {
        let req_url = reqwest::Url::parse_with_params(url, query)?;
        let mut headers = request_headers(token)?;
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_str(content_type).map_err(|_| {
                ZenfolioError::Validation(format!("`{content_type}` is not a valid content type"))
            })?,
        );
        debug!("Posting {} bytes to {req_url}", data.len());

        let resp = self
            .https_client
            .post(req_url.as_str())
            .headers(headers)
            .body(data)
            .send()?;
        let body = ok_body(req_url.as_str(), resp)?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// Positional parameters of a call.
///
/// A lone value becomes a single element list and `()` means no parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(Vec<Value>);

impl Params {
    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }
}

impl From<()> for Params {
    fn from(_: ()) -> Self {
        Self::default()
    }
}

impl From<Vec<Value>> for Params {
    fn from(v: Vec<Value>) -> Self {
        Self(v)
    }
}

impl From<Value> for Params {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => Self::default(),
            Value::Array(items) => Self(items),
            scalar => Self(vec![scalar]),
        }
    }
}

impl From<&str> for Params {
    fn from(v: &str) -> Self {
        Self(vec![Value::from(v)])
    }
}

impl From<String> for Params {
    fn from(v: String) -> Self {
        Self(vec![Value::from(v)])
    }
}

impl From<i64> for Params {
    fn from(v: i64) -> Self {
        Self(vec![Value::from(v)])
    }
}

fn request_headers(token: Option<&str>) -> Result<HeaderMap, ZenfolioError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Some(token) = token {
        let value = HeaderValue::from_str(token).map_err(|_| {
            ZenfolioError::Validation("Token is not a valid header value".to_string())
        })?;
        headers.insert(HeaderName::from_static("x-zenfolio-token"), value);
    }
    Ok(headers)
}

// Anything but a 200 is handed back verbatim
fn ok_body(url: &str, resp: Response) -> Result<Bytes, ZenfolioError> {
    let status = resp.status();
    if status != StatusCode::OK {
        let headers = resp.headers().clone();
        let body = resp.bytes()?;
        warn!("{url} returned HTTP {status}");
        return Err(ZenfolioError::Http {
            url: url.to_string(),
            status: status.as_u16(),
            headers,
            body,
        });
    }
    Ok(resp.bytes()?)
}

// Envelope posted for every call
#[derive(Serialize, Debug)]
struct RequestBody<'a> {
    method: &'a str,
    params: &'a [Value],
    id: u16,
}

// Envelope returned for every call
#[derive(Deserialize, Debug)]
struct ResponseBody {
    #[serde(default)]
    id: Value,

    #[serde(default)]
    result: Value,

    #[serde(default)]
    error: Option<RemoteFault>,
}

#[derive(Deserialize, Debug)]
struct RemoteFault {
    #[serde(default, deserialize_with = "from_error_code")]
    code: Option<String>,

    #[serde(default)]
    message: String,
}
