/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Public search.
//!
//! `search_id` identifies a search session on the service so that later pages of the same
//! query stay consistent. Pass an empty string to start a new one.
use crate::v1::errors::ZenfolioError;
use crate::v1::macros::params;
use crate::v1::{Client, PhotoSetType, SortOrder, ZfValue};

impl Client {
    pub fn search_photo_by_category(
        &self,
        search_id: &str,
        sort: SortOrder,
        category: i32,
        offset: u32,
        limit: u32,
    ) -> Result<ZfValue, ZenfolioError> {
        self.call(
            "SearchPhotoByCategory",
            params![search_id, sort, category, offset, limit],
        )
    }

    pub fn search_photo_by_text(
        &self,
        search_id: &str,
        sort: SortOrder,
        query: &str,
        offset: u32,
        limit: u32,
    ) -> Result<ZfValue, ZenfolioError> {
        self.call(
            "SearchPhotoByText",
            params![search_id, sort, query, offset, limit],
        )
    }

    pub fn search_set_by_category(
        &self,
        search_id: &str,
        set_type: PhotoSetType,
        sort: SortOrder,
        category: i32,
        offset: u32,
        limit: u32,
    ) -> Result<ZfValue, ZenfolioError> {
        self.call(
            "SearchSetByCategory",
            params![search_id, set_type, sort, category, offset, limit],
        )
    }

    pub fn search_set_by_text(
        &self,
        search_id: &str,
        set_type: PhotoSetType,
        sort: SortOrder,
        query: &str,
        offset: u32,
        limit: u32,
    ) -> Result<ZfValue, ZenfolioError> {
        self.call(
            "SearchSetByText",
            params![search_id, set_type, sort, query, offset, limit],
        )
    }
}
