/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Photo sets are galleries and collections.
use crate::v1::errors::ZenfolioError;
use crate::v1::macros::{params, updater};
use crate::v1::schema::Fields;
use crate::v1::{Client, InformationLevel, PhotoSetType, ShiftOrder, ZfValue};
use log::debug;
use std::collections::VecDeque;

impl Client {
    /// Loads a photo set. Its `UploadUrl` is what [`Client::upload_photo`] posts to.
    pub fn load_photo_set(
        &self,
        set_id: i64,
        info_level: InformationLevel,
        with_photos: bool,
    ) -> Result<ZfValue, ZenfolioError> {
        self.call("LoadPhotoSet", params![set_id, info_level, with_photos])
    }

    /// Loads up to `limit` photos of a set starting at `start_index`
    pub fn load_photo_set_photos(
        &self,
        set_id: i64,
        start_index: u32,
        limit: u32,
    ) -> Result<ZfValue, ZenfolioError> {
        self.call("LoadPhotoSetPhotos", params![set_id, start_index, limit])
    }

    /// Iterates over every photo of a set, loading `page_size` photos per call
    pub fn photoset_photos(&self, set_id: i64, page_size: u32) -> PhotoSetPhotos<'_> {
        PhotoSetPhotos {
            client: self,
            set_id,
            page_size: page_size.max(1),
            start_index: 0,
            buffer: VecDeque::new(),
            is_done: false,
        }
    }

    /// Creates a gallery or collection in `group_id` with `PhotoSetUpdater` fields
    pub fn create_photo_set(
        &self,
        group_id: i64,
        set_type: PhotoSetType,
        photoset: Option<Fields>,
    ) -> Result<ZfValue, ZenfolioError> {
        let updater = updater!(PhotoSetUpdater, photoset, "CreatePhotoSet");
        self.call("CreatePhotoSet", params![group_id, set_type, updater])
    }

    /// Updates a photo set with `PhotoSetUpdater` fields
    pub fn update_photo_set(
        &self,
        photoset_id: i64,
        photoset: Option<Fields>,
    ) -> Result<ZfValue, ZenfolioError> {
        let updater = updater!(PhotoSetUpdater, photoset, "UpdatePhotoSet");
        self.call("UpdatePhotoSet", params![photoset_id, updater])
    }

    /// Updates who can see a photo set with `AccessUpdater` fields
    pub fn update_photo_set_access(
        &self,
        photoset_id: i64,
        photoset_access: Option<Fields>,
    ) -> Result<ZfValue, ZenfolioError> {
        let updater = updater!(AccessUpdater, photoset_access, "UpdatePhotoSetAccess");
        self.call("UpdatePhotoSetAccess", params![photoset_id, updater])
    }

    pub fn move_photo_set(
        &self,
        photoset_id: i64,
        dest_group_id: i64,
        index: i32,
    ) -> Result<ZfValue, ZenfolioError> {
        self.call("MovePhotoSet", params![photoset_id, dest_group_id, index])
    }

    pub fn delete_photo_set(&self, photoset_id: i64) -> Result<ZfValue, ZenfolioError> {
        self.call("DeletePhotoSet", params![photoset_id])
    }

    pub fn set_photo_set_featured_index(
        &self,
        photoset_id: i64,
        index: i32,
    ) -> Result<ZfValue, ZenfolioError> {
        self.call("SetPhotoSetFeaturedIndex", params![photoset_id, index])
    }

    pub fn set_photo_set_title_photo(
        &self,
        photoset_id: i64,
        photo_id: i64,
    ) -> Result<ZfValue, ZenfolioError> {
        self.call("SetPhotoSetTitlePhoto", params![photoset_id, photo_id])
    }

    pub fn set_random_photo_set_title_photo(
        &self,
        photoset_id: i64,
    ) -> Result<ZfValue, ZenfolioError> {
        self.call("SetRandomPhotoSetTitlePhoto", params![photoset_id])
    }

    pub fn remove_photo_set_title_photo(&self, photoset_id: i64) -> Result<ZfValue, ZenfolioError> {
        self.call("RemovePhotoSetTitlePhoto", params![photoset_id])
    }

    /// Sorts the photos of a set
    pub fn reorder_photo_set(
        &self,
        photoset_id: i64,
        order: ShiftOrder,
    ) -> Result<ZfValue, ZenfolioError> {
        self.call("ReorderPhotoSet", params![photoset_id, order])
    }

    /// Moves the photos starting at `start_index` into the order given by `mapping`
    pub fn reindex_photo_set(
        &self,
        photoset_id: i64,
        start_index: i32,
        mapping: &[i32],
    ) -> Result<ZfValue, ZenfolioError> {
        self.call("ReindexPhotoSet", params![photoset_id, start_index, mapping])
    }

    pub fn get_popular_sets(
        &self,
        set_type: PhotoSetType,
        offset: u32,
        limit: u32,
    ) -> Result<ZfValue, ZenfolioError> {
        self.call("GetPopularSets", params![set_type, offset, limit])
    }

    pub fn get_recent_sets(
        &self,
        set_type: PhotoSetType,
        offset: u32,
        limit: u32,
    ) -> Result<ZfValue, ZenfolioError> {
        self.call("GetRecentSets", params![set_type, offset, limit])
    }

    /// Adds a photo to a collection
    pub fn collection_add_photo(
        &self,
        collection_id: i64,
        photo_id: i64,
    ) -> Result<ZfValue, ZenfolioError> {
        self.call("CollectionAddPhoto", params![collection_id, photo_id])
    }

    pub fn collection_remove_photo(
        &self,
        collection_id: i64,
        photo_id: i64,
    ) -> Result<ZfValue, ZenfolioError> {
        self.call("CollectionRemovePhoto", params![collection_id, photo_id])
    }
}

/// Pages through the photos of a set.
///
/// Stops after the first page holding fewer than the page size, or after the first error.
#[derive(Debug)]
pub struct PhotoSetPhotos<'a> {
    client: &'a Client,
    set_id: i64,
    page_size: u32,
    start_index: u32,
    buffer: VecDeque<ZfValue>,
    is_done: bool,
}

impl PhotoSetPhotos<'_> {
    fn fetch_page(&mut self) -> Result<(), ZenfolioError> {
        debug!(
            "Loading photos {}..{} of set {}",
            self.start_index,
            self.start_index + self.page_size,
            self.set_id
        );
        let page = self
            .client
            .load_photo_set_photos(self.set_id, self.start_index, self.page_size)?;
        let photos = match page {
            ZfValue::Array(photos) => photos,
            ZfValue::Null => Vec::new(),
            other => {
                return Err(ZenfolioError::Protocol(format!(
                    "Expected a list of photos, got {other}"
                )));
            }
        };
        self.is_done = photos.len() < self.page_size as usize;
        self.start_index += self.page_size;
        self.buffer.extend(photos);
        Ok(())
    }
}

impl Iterator for PhotoSetPhotos<'_> {
    type Item = Result<ZfValue, ZenfolioError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.buffer.is_empty() && !self.is_done {
            if let Err(err) = self.fetch_page() {
                self.is_done = true;
                return Some(Err(err));
            }
        }
        self.buffer.pop_front().map(Ok)
    }
}
