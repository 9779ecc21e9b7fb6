/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Conversion between the tagged wire form of a Zenfolio date and [`NaiveDateTime`].
//!
//! On the wire a date looks like:
//!
//! ```json
//! {"$type": "DateTime", "Value": "2020-01-15 08:30:00"}
//! ```
use crate::v1::errors::ZenfolioError;
use crate::v1::value::ZfValue;
use chrono::NaiveDateTime;
use serde_json::{Value, json};

/// Format used by the service for all date values. No timezone is carried.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Key holding the type tag on typed service objects
pub const TYPE_KEY: &str = "$type";

/// Type tag value marking a date
pub const DATETIME_TYPE: &str = "DateTime";

const VALUE_KEY: &str = "Value";

/// Produces the tagged wire representation of a date
pub fn encode_datetime(dt: &NaiveDateTime) -> Value {
    json!({
        TYPE_KEY: DATETIME_TYPE,
        VALUE_KEY: dt.format(DATETIME_FORMAT).to_string(),
    })
}

/// Parses the `Value` string of a tagged date
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime, ZenfolioError> {
    NaiveDateTime::parse_from_str(s, DATETIME_FORMAT)
        .map_err(|_| ZenfolioError::Format(s.to_string(), DATETIME_FORMAT))
}

/// Returns true if the map is a tagged date
pub(crate) fn is_tagged_datetime(map: &serde_json::Map<String, Value>) -> bool {
    matches!(map.get(TYPE_KEY), Some(Value::String(t)) if t == DATETIME_TYPE)
}

/// Parses a map already known to be a tagged date
pub(crate) fn datetime_from_tagged(
    map: &serde_json::Map<String, Value>,
) -> Result<NaiveDateTime, ZenfolioError> {
    match map.get(VALUE_KEY) {
        Some(Value::String(s)) => parse_datetime(s),
        Some(other) => Err(ZenfolioError::Format(other.to_string(), DATETIME_FORMAT)),
        None => Err(ZenfolioError::Format(String::new(), DATETIME_FORMAT)),
    }
}

/// Walks the whole structure replacing every tagged date with [`ZfValue::DateTime`].
///
/// Everything that is not a tagged date is wrapped unchanged.
pub fn decode_datetimes(value: Value) -> Result<ZfValue, ZenfolioError> {
    match value {
        Value::Object(map) => {
            if is_tagged_datetime(&map) {
                return datetime_from_tagged(&map).map(ZfValue::DateTime);
            }
            map.into_iter()
                .map(|(k, v)| decode_datetimes(v).map(|v| (k, v)))
                .collect::<Result<_, _>>()
                .map(ZfValue::Object)
        }
        Value::Array(items) => items
            .into_iter()
            .map(decode_datetimes)
            .collect::<Result<_, _>>()
            .map(ZfValue::Array),
        scalar => Ok(ZfValue::from(scalar)),
    }
}
