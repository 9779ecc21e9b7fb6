/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod datetime;
pub mod errors;
pub mod group;
pub mod helpers;
mod macros;
pub mod message;
pub mod parsers;
pub mod photo;
pub mod photoset;
pub mod properties;
pub mod schema;
pub mod search;
pub mod user;
pub mod validate;
pub mod value;

pub use api::*;
pub use auth::*;
pub use client::*;
pub use config::*;
pub use datetime::*;
pub use errors::*;
pub use helpers::*;
pub use photo::*;
pub use photoset::*;
pub use properties::*;
pub use schema::*;
pub use validate::*;
pub use value::*;
