/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Guestbook and comment mailboxes.
use crate::v1::datetime::encode_datetime;
use crate::v1::errors::ZenfolioError;
use crate::v1::macros::{params, updater};
use crate::v1::schema::Fields;
use crate::v1::{Client, ZfValue};
use chrono::NaiveDateTime;

impl Client {
    /// Loads the messages of a mailbox, optionally only those posted after `posted_since`
    pub fn load_messages(
        &self,
        mailbox_id: &str,
        posted_since: Option<NaiveDateTime>,
        include_deleted: bool,
    ) -> Result<ZfValue, ZenfolioError> {
        let posted_since = posted_since.as_ref().map(encode_datetime);
        self.call(
            "LoadMessages",
            params![mailbox_id, posted_since, include_deleted],
        )
    }

    /// Posts a message built from `MessageUpdater` fields
    pub fn add_message(
        &self,
        mailbox_id: &str,
        message: Option<Fields>,
    ) -> Result<ZfValue, ZenfolioError> {
        let updater = updater!(MessageUpdater, message, "AddMessage");
        self.call("AddMessage", params![mailbox_id, updater])
    }

    pub fn delete_message(
        &self,
        mailbox_id: &str,
        message_index: i32,
    ) -> Result<ZfValue, ZenfolioError> {
        self.call("DeleteMessage", params![mailbox_id, message_index])
    }

    pub fn undelete_message(
        &self,
        mailbox_id: &str,
        message_index: i32,
    ) -> Result<ZfValue, ZenfolioError> {
        self.call("UndeleteMessage", params![mailbox_id, message_index])
    }
}
