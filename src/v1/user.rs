/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::ZenfolioError;
use crate::v1::macros::params;
use crate::v1::{Client, ZfValue};

impl Client {
    /// Profile of the authenticated user, including private fields
    pub fn load_private_profile(&self) -> Result<ZfValue, ZenfolioError> {
        self.call("LoadPrivateProfile", params![])
    }

    /// Public profile of `username`, or of the configured user when `None`
    pub fn load_public_profile(&self, username: Option<&str>) -> Result<ZfValue, ZenfolioError> {
        let username = match username {
            Some(username) => username,
            None => self.username("LoadPublicProfile")?,
        };
        self.call("LoadPublicProfile", params![username])
    }

    /// The service wide list of photo categories
    pub fn get_categories(&self) -> Result<ZfValue, ZenfolioError> {
        self.call("GetCategories", params![])
    }

    pub fn load_access_realm(&self, realm_id: i64) -> Result<ZfValue, ZenfolioError> {
        self.call("LoadAccessRealm", params![realm_id])
    }

    /// Adds the password of a protected realm to `keyring`, returning the updated keyring
    pub fn keyring_add_key_plain(
        &self,
        keyring: &str,
        realm_id: i64,
        password: &str,
    ) -> Result<ZfValue, ZenfolioError> {
        self.call("KeyringAddKeyPlain", params![keyring, realm_id, password])
    }

    pub fn keyring_get_unlocked_realms(&self, keyring: &str) -> Result<ZfValue, ZenfolioError> {
        self.call("KeyringGetUnlockedRealms", params![keyring])
    }

    pub fn load_shared_favorites_sets(&self) -> Result<ZfValue, ZenfolioError> {
        self.call("LoadSharedFavoritesSets", params![])
    }

    /// Creates a favorites set of `photo_ids` on the account of `username`
    pub fn create_favorites_set(
        &self,
        name: &str,
        username: &str,
        photo_ids: &[i64],
    ) -> Result<ZfValue, ZenfolioError> {
        self.call("CreateFavoritesSet", params![name, username, photo_ids])
    }

    /// Sends a favorites set to its owner
    pub fn share_favorites_set(
        &self,
        favset_id: i64,
        favset_name: &str,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<ZfValue, ZenfolioError> {
        self.call(
            "ShareFavoritesSet",
            params![favset_id, favset_name, name, email, message],
        )
    }
}
