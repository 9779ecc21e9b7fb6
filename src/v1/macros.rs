/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

// Builds the positional parameters of a call from any serializable values
macro_rules! params {
    () => {
        $crate::v1::api::Params::default()
    };
    ( $( $arg:expr ),+ $(,)? ) => {
        $crate::v1::api::Params::from(vec![ $(
            serde_json::to_value(&$arg)
                .map_err($crate::v1::errors::ZenfolioError::JsonSerialization)?
        ),+ ])
    };
}

// Lays the caller's fields over an updater template, validating for the named method
macro_rules! updater {
    ( $kind:ident, $fields:expr, $method:expr ) => {
        $crate::v1::schema::UpdaterKind::$kind.with_overrides($fields, $method)?
    };
}

pub(crate) use {params, updater};
