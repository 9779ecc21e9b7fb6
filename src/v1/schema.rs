/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Reference tables used to check request payloads before they are sent.
//!
//! Enumerations come straight from the typed enums in [`crate::v1::properties`] so the
//! legal values only live in one place. Updater objects are the partial objects passed to
//! the `Create*`/`Update*` calls.
use crate::v1::errors::ZenfolioError;
use crate::v1::properties::{
    AccessMask, AccessType, GroupShiftOrder, InformationLevel, PhotoRotation, PhotoSetType,
    ShiftOrder, SortOrder, VideoPlaybackMode,
};
use crate::v1::validate::validate_object;
use serde_json::{Value, json};
use strum::VariantNames;
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Fields of an updater object as sent on the wire
pub type Fields = serde_json::Map<String, Value>;

/// Schema entry: field name and the enumeration constraining it, if any
pub type FieldSpec = (&'static str, Option<&'static str>);

/// Legal values for the named enumeration
pub fn enum_values(name: &str) -> Option<&'static [&'static str]> {
    let values = match name {
        "AccessMask" => AccessMask::VARIANTS,
        "AccessType" => AccessType::VARIANTS,
        "InformationLevel" => InformationLevel::VARIANTS,
        "GroupShiftOrder" => GroupShiftOrder::VARIANTS,
        "PhotoSetType" => PhotoSetType::VARIANTS,
        "PhotoRotation" => PhotoRotation::VARIANTS,
        "ShiftOrder" => ShiftOrder::VARIANTS,
        "SortOrder" => SortOrder::VARIANTS,
        "VideoPlaybackMode" => VideoPlaybackMode::VARIANTS,
        _ => return None,
    };
    Some(values)
}

/// Shape of the named updater object
pub fn object_schema(name: &str) -> Option<&'static [FieldSpec]> {
    name.parse::<UpdaterKind>().ok().map(|kind| kind.fields())
}

/// The partial objects accepted by the create/update calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr)]
pub enum UpdaterKind {
    AccessUpdater,
    GroupUpdater,
    PhotoSetUpdater,
    PhotoUpdater,
    MessageUpdater,
}

impl UpdaterKind {
    /// Allowed fields of this updater
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Self::AccessUpdater => &[
                ("AccessMask", Some("AccessMask")),
                ("AccessType", Some("AccessType")),
                ("Viewers", None),
                ("Password", None),
                ("IsDerived", None),
                ("PasswordHint", None),
            ],
            Self::GroupUpdater => &[("Title", None), ("Caption", None), ("CustomReference", None)],
            Self::PhotoSetUpdater => &[
                ("Title", None),
                ("Caption", None),
                ("Keywords", None),
                ("Categories", None),
                ("CustomReference", None),
            ],
            Self::PhotoUpdater => &[
                ("Title", None),
                ("Caption", None),
                ("Keywords", None),
                ("Categories", None),
                ("Copyright", None),
                ("Filename", None),
            ],
            Self::MessageUpdater => &[
                ("PosterName", None),
                ("PosterUrl", None),
                ("PosterEmail", None),
                ("Body", None),
                ("IsPrivate", None),
            ],
        }
    }

    /// Template the caller's fields are laid over
    pub fn defaults(&self) -> Fields {
        let template = match self {
            Self::AccessUpdater => json!({"IsDerived": true}),
            Self::GroupUpdater | Self::PhotoSetUpdater | Self::PhotoUpdater => {
                json!({"Title": ""})
            }
            Self::MessageUpdater => json!({
                "PosterName": "",
                "PosterUrl": "",
                "PosterEmail": "",
                "Body": "",
                "IsPrivate": false,
            }),
        };
        match template {
            Value::Object(fields) => fields,
            _ => Fields::new(),
        }
    }

    /// Lays `overrides` over [`UpdaterKind::defaults`] and validates the result
    pub fn with_overrides(
        &self,
        overrides: Option<Fields>,
        context: &str,
    ) -> Result<Value, ZenfolioError> {
        let mut fields = self.defaults();
        fields.extend(overrides.unwrap_or_default());
        let updater = Value::Object(fields);
        validate_object(&updater, self.into(), context)?;
        Ok(updater)
    }
}
