/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Client side checks run before a request goes out.
//!
//! These only catch obvious mistakes early. The service still applies its own rules.
use crate::v1::errors::ZenfolioError;
use crate::v1::schema::{enum_values, object_schema};
use crate::v1::value::ZfValue;
use serde_json::Value;

/// Checks that `value` is a legal member of the enumeration `enum_name`
pub fn validate_value(value: &str, enum_name: &str, context: &str) -> Result<(), ZenfolioError> {
    let values = enum_values(enum_name).ok_or_else(|| {
        ZenfolioError::Validation(format!(
            "`{enum_name}` is not a known enumeration for `{context}` method."
        ))
    })?;
    if values.contains(&value) {
        Ok(())
    } else {
        Err(ZenfolioError::Validation(format!(
            "`{value}` is an invalid value for `{enum_name}` enumeration for `{context}` method."
        )))
    }
}

/// Checks the keys of `obj` against the object schema `schema_name`.
///
/// Unknown keys are rejected and keys constrained by an enumeration must hold a legal
/// value of it.
pub fn validate_object(obj: &Value, schema_name: &str, context: &str) -> Result<(), ZenfolioError> {
    let schema = object_schema(schema_name).ok_or_else(|| {
        ZenfolioError::Validation(format!(
            "`{schema_name}` is not a known object for `{context}` method."
        ))
    })?;
    let fields = obj.as_object().ok_or_else(|| {
        ZenfolioError::Validation(format!(
            "`{schema_name}` must be an object for `{context}` method."
        ))
    })?;

    for (key, value) in fields {
        let (_, enum_name) = schema
            .iter()
            .find(|(name, _)| *name == key.as_str())
            .ok_or_else(|| {
                ZenfolioError::Validation(format!(
                    "`{key}` is an invalid key for `{schema_name}` object for `{context}` method."
                ))
            })?;
        if let Some(enum_name) = enum_name {
            let value = value.as_str().ok_or_else(|| {
                ZenfolioError::Validation(format!(
                    "`{value}` is an invalid value for `{enum_name}` enumeration for `{context}` method."
                ))
            })?;
            validate_value(value, enum_name, context)?;
        }
    }
    Ok(())
}

/// Checks that a previously loaded object carries the `$type` tag `expected_type`
pub fn assert_type(
    value: &ZfValue,
    expected_type: &str,
    param: &str,
    context: &str,
) -> Result<(), ZenfolioError> {
    match value.type_tag() {
        Some(t) if t == expected_type => Ok(()),
        found => Err(ZenfolioError::Validation(format!(
            "Got `{}` instead of `{expected_type}` value for `{param}` for `{context}` method.",
            found.unwrap_or("untyped")
        ))),
    }
}
