/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::Serialize;
use strum_macros::{Display, EnumString, IntoStaticStr, VariantNames};

/// Flags restricting what visitors can do with an object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString, IntoStaticStr, VariantNames)]
pub enum AccessMask {
    None,
    HideDateCreated,
    HideDateModified,
    HideDateTaken,
    HideMetaData,
    HideUserStats,
    HideVisits,
    NoCollections,
    NoPrivateSearch,
    NoPublicSearch,
    NoRecentList,
    ProtectExif,
    ProtectXXLarge,
    ProtectExtraLarge,
    ProtectLarge,
    ProtectMedium,
    ProtectOriginals,
    ProtectGuestbook,
    NoPublicGuestbookPosts,
    NoPrivateGuestbookPosts,
    NoAnonymousGuestbookPosts,
    ProtectComments,
    NoPublicComments,
    NoPrivateComments,
    NoAnonymousComments,
    PasswordProtectOriginals,
    UnprotectCover,
    ProtectAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString, IntoStaticStr, VariantNames)]
pub enum AccessType {
    Private,
    Public,
    UserList,
    Password,
}

/// How much detail the service includes in a loaded object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString, IntoStaticStr, VariantNames)]
pub enum InformationLevel {
    Level1,
    Level2,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString, IntoStaticStr, VariantNames)]
pub enum GroupShiftOrder {
    CreatedAsc,
    CreatedDesc,
    ModifiedAsc,
    ModifiedDesc,
    TitleAsc,
    TitleDesc,
    GroupsTop,
    GroupsBottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString, IntoStaticStr, VariantNames)]
pub enum PhotoSetType {
    Gallery,
    Collection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString, IntoStaticStr, VariantNames)]
pub enum PhotoRotation {
    None,
    Rotate90,
    Rotate180,
    Rotate270,
    Flip,
    Rotate90Flip,
    Rotate180Flip,
    Rotate270Flip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString, IntoStaticStr, VariantNames)]
pub enum ShiftOrder {
    CreatedAsc,
    CreatedDesc,
    TakenAsc,
    TakenDesc,
    TitleAsc,
    TitleDesc,
    SizeAsc,
    SizeDesc,
    FileNameAsc,
    FileNameDesc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString, IntoStaticStr, VariantNames)]
pub enum SortOrder {
    Date,
    Popularity,
    Rank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString, IntoStaticStr, VariantNames)]
pub enum VideoPlaybackMode {
    Flash,
    #[serde(rename = "iOS")]
    #[strum(to_string = "iOS")]
    Ios,
    Http,
}

/// Photo image sizes the service can render, keyed by their numeric size code
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum PhotoSize {
    SmallThumbnail = 0,
    SquareThumbnail = 1,
    Small = 2,
    Medium = 3,
    Large = 4,
    XLarge = 5,
    XXLarge = 6,
    MediumThumbnail = 10,
    LargeThumbnail = 11,
}

impl PhotoSize {
    /// Maximum (width, height) in pixels for this size
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Self::SmallThumbnail => (80, 80),
            Self::SquareThumbnail => (60, 60),
            Self::Small => (400, 400),
            Self::Medium => (580, 450),
            Self::Large => (800, 630),
            Self::XLarge => (1100, 850),
            Self::XXLarge => (1550, 960),
            Self::MediumThumbnail | Self::LargeThumbnail => (120, 120),
        }
    }
}

/// Profile photo sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum ProfileSize {
    Large = 50,
    Small = 51,
}

impl ProfileSize {
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Self::Large => (120, 120),
            Self::Small => (80, 80),
        }
    }
}

/// Video renditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum VideoSize {
    P1080 = 200,
    P720 = 210,
    P480 = 215,
    P360 = 220,
    Original = 250,
}

impl VideoSize {
    /// Vertical resolution, `None` for the original upload
    pub fn height(&self) -> Option<u32> {
        match self {
            Self::P1080 => Some(1080),
            Self::P720 => Some(720),
            Self::P480 => Some(480),
            Self::P360 => Some(360),
            Self::Original => None,
        }
    }
}
