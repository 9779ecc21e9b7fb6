/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Groups are the folders of a Zenfolio account. They hold photo sets and other groups.
use crate::v1::errors::ZenfolioError;
use crate::v1::macros::{params, updater};
use crate::v1::schema::Fields;
use crate::v1::{Client, GroupShiftOrder, InformationLevel, ZfValue};

impl Client {
    /// Loads a group, optionally with all of its descendants
    pub fn load_group(
        &self,
        group_id: i64,
        info_level: InformationLevel,
        recursive: bool,
    ) -> Result<ZfValue, ZenfolioError> {
        self.call("LoadGroup", params![group_id, info_level, recursive])
    }

    /// Loads the whole group tree of `username`, or of the configured user when `None`
    pub fn load_group_hierarchy(&self, username: Option<&str>) -> Result<ZfValue, ZenfolioError> {
        let username = match username {
            Some(username) => username,
            None => self.username("LoadGroupHierarchy")?,
        };
        self.call("LoadGroupHierarchy", params![username])
    }

    /// Creates a group under `parent_id`. `group` holds `GroupUpdater` fields.
    pub fn create_group(
        &self,
        parent_id: i64,
        group: Option<Fields>,
    ) -> Result<ZfValue, ZenfolioError> {
        let updater = updater!(GroupUpdater, group, "CreateGroup");
        self.call("CreateGroup", params![parent_id, updater])
    }

    /// Updates a group with `GroupUpdater` fields
    pub fn update_group(
        &self,
        group_id: i64,
        group: Option<Fields>,
    ) -> Result<ZfValue, ZenfolioError> {
        let updater = updater!(GroupUpdater, group, "UpdateGroup");
        self.call("UpdateGroup", params![group_id, updater])
    }

    /// Updates who can see a group with `AccessUpdater` fields
    pub fn update_group_access(
        &self,
        group_id: i64,
        group_access: Option<Fields>,
    ) -> Result<ZfValue, ZenfolioError> {
        let updater = updater!(AccessUpdater, group_access, "UpdateGroupAccess");
        self.call("UpdateGroupAccess", params![group_id, updater])
    }

    /// Moves a group into `dest_group_id` at position `index`
    pub fn move_group(
        &self,
        group_id: i64,
        dest_group_id: i64,
        index: i32,
    ) -> Result<ZfValue, ZenfolioError> {
        self.call("MoveGroup", params![group_id, dest_group_id, index])
    }

    pub fn delete_group(&self, group_id: i64) -> Result<ZfValue, ZenfolioError> {
        self.call("DeleteGroup", params![group_id])
    }

    pub fn set_group_title_photo(
        &self,
        group_id: i64,
        photo_id: i64,
    ) -> Result<ZfValue, ZenfolioError> {
        self.call("SetGroupTitlePhoto", params![group_id, photo_id])
    }

    pub fn remove_group_title_photo(&self, group_id: i64) -> Result<ZfValue, ZenfolioError> {
        self.call("RemoveGroupTitlePhoto", params![group_id])
    }

    /// Sorts the elements of a group
    pub fn reorder_group(
        &self,
        group_id: i64,
        order: GroupShiftOrder,
    ) -> Result<ZfValue, ZenfolioError> {
        self.call("ReorderGroup", params![group_id, order])
    }
}
