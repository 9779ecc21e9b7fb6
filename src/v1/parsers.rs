/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::datetime::{DATETIME_TYPE, TYPE_KEY, datetime_from_tagged, is_tagged_datetime};
use chrono::NaiveDateTime;
use serde::Deserialize;
use serde::de::Error;
use serde_json::Value;

// Parses error codes which the service sends as either strings or numbers
pub fn from_error_code<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v: Value = Deserialize::deserialize(deserializer)?;
    Ok(match v {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

// Parses a tagged DateTime object
pub fn from_zf_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let map: serde_json::Map<String, Value> = Deserialize::deserialize(deserializer)?;
    if !is_tagged_datetime(&map) {
        return Err(D::Error::custom(format!(
            "expected an object with {TYPE_KEY} {DATETIME_TYPE}"
        )));
    }
    datetime_from_tagged(&map).map_err(D::Error::custom)
}

// Parses a tagged DateTime object that may be null
pub fn from_opt_zf_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let map: Option<serde_json::Map<String, Value>> = Deserialize::deserialize(deserializer)?;
    match map {
        Some(map) if is_tagged_datetime(&map) => {
            datetime_from_tagged(&map).map(Some).map_err(D::Error::custom)
        }
        Some(_) => Err(D::Error::custom(format!(
            "expected an object with {TYPE_KEY} {DATETIME_TYPE}"
        ))),
        None => Ok(None),
    }
}
