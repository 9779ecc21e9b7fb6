/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Zenfolio
//!
//! This Zenfolio library was created for working with the Zenfolio JSON-RPC API (version 1.7).
//!
//! For further details on the API refer to the [Zenfolio API Docs](https://www.zenfolio.com/zf/tools/api)
//!
//! ## Features
//!
//! - Challenge-response, plain and visitor login
//! - Groups, photo sets and photos
//!     - Load, create, update, move, reorder and delete
//!     - Access control updates
//!     - Photo upload into a photo set
//! - Search by text or category
//! - Guestbook/comment messages
//! - Favorites sets and keyrings
//! - Client side validation of updater objects and enumerations before anything is sent
//! - Service dates are decoded into [`chrono::NaiveDateTime`] values
//! - Lower level interface for handling the raw communication
//!
//! *If you want to use this library for more than is currently implemented,
//! [`v1::Client::call`] is a way to invoke any remote method directly*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! zenfolio = "0.1.0"
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zenfolio::v1::{Auth, Client, Config, Fields, InformationLevel, PhotoSetType, ZenfolioError};
//! use serde_json::json;
//!
//! fn create_gallery(username: &str, password: &str) -> Result<(), ZenfolioError> {
//!     let mut client = Client::with_auth(Config::default(), Auth::new(username, password))?;
//!
//!     // Logs in without sending the password
//!     client.authenticate(false)?;
//!
//!     // Create a gallery in the root group of the account
//!     let hierarchy = client.load_group_hierarchy(None)?;
//!     let root_id = hierarchy["Id"].as_i64().unwrap_or_default();
//!     let mut fields = Fields::new();
//!     fields.insert("Title".into(), json!("Summer 2024"));
//!     let gallery = client.create_photo_set(root_id, PhotoSetType::Gallery, Some(fields))?;
//!
//!     // Upload into it
//!     let set_id = gallery["Id"].as_i64().unwrap_or_default();
//!     let gallery = client.load_photo_set(set_id, InformationLevel::Full, false)?;
//!     client.upload_photo(&gallery, "beach.jpg", None)?;
//!     Ok(())
//! }
//! ```
//!
pub mod v1;
