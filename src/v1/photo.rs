/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::ZenfolioError;
use crate::v1::macros::{params, updater};
use crate::v1::schema::Fields;
use crate::v1::validate::assert_type;
use crate::v1::{Client, InformationLevel, PhotoRotation, PhotoSize, VideoPlaybackMode, ZfValue};
use bytes::Bytes;
use std::path::Path;

impl Client {
    pub fn load_photo(
        &self,
        photo_id: i64,
        info_level: InformationLevel,
    ) -> Result<ZfValue, ZenfolioError> {
        self.call("LoadPhoto", params![photo_id, info_level])
    }

    /// Updates a photo with `PhotoUpdater` fields
    pub fn update_photo(
        &self,
        photo_id: i64,
        photo: Option<Fields>,
    ) -> Result<ZfValue, ZenfolioError> {
        let updater = updater!(PhotoUpdater, photo, "UpdatePhoto");
        self.call("UpdatePhoto", params![photo_id, updater])
    }

    /// Updates who can see a photo with `AccessUpdater` fields
    pub fn update_photo_access(
        &self,
        photo_id: i64,
        photo_access: Option<Fields>,
    ) -> Result<ZfValue, ZenfolioError> {
        let updater = updater!(AccessUpdater, photo_access, "UpdatePhotoAccess");
        self.call("UpdatePhotoAccess", params![photo_id, updater])
    }

    /// Moves one photo to `dest_photoset_id` at position `index`
    pub fn move_photo(
        &self,
        photoset_id: i64,
        photo_id: i64,
        dest_photoset_id: i64,
        index: i32,
    ) -> Result<ZfValue, ZenfolioError> {
        self.call(
            "MovePhoto",
            params![photoset_id, photo_id, dest_photoset_id, index],
        )
    }

    pub fn move_photos(
        &self,
        photoset_id: i64,
        dest_photoset_id: i64,
        photo_ids: &[i64],
    ) -> Result<ZfValue, ZenfolioError> {
        self.call("MovePhotos", params![photoset_id, dest_photoset_id, photo_ids])
    }

    pub fn delete_photo(&self, photo_id: i64) -> Result<ZfValue, ZenfolioError> {
        self.call("DeletePhoto", params![photo_id])
    }

    pub fn delete_photos(&self, photo_ids: &[i64]) -> Result<ZfValue, ZenfolioError> {
        self.call("DeletePhotos", params![photo_ids])
    }

    pub fn rotate_photo(
        &self,
        photo_id: i64,
        rotation: PhotoRotation,
    ) -> Result<ZfValue, ZenfolioError> {
        self.call("RotatePhoto", params![photo_id, rotation])
    }

    /// Replaces the image of `original_id` with the one of `replacement_id`
    pub fn replace_photo(
        &self,
        original_id: i64,
        replacement_id: i64,
    ) -> Result<ZfValue, ZenfolioError> {
        self.call("ReplacePhoto", params![original_id, replacement_id])
    }

    /// Has the service fetch a photo from `url` into a photo set.
    ///
    /// `cookies` are sent along when fetching, see [`encode_cookies`].
    pub fn create_photo_from_url(
        &self,
        photoset_id: i64,
        url: &str,
        cookies: Option<&str>,
    ) -> Result<ZfValue, ZenfolioError> {
        self.call("CreatePhotoFromUrl", params![photoset_id, url, cookies])
    }

    /// Has the service fetch a video from `url` into a photo set
    pub fn create_video_from_url(
        &self,
        photoset_id: i64,
        url: &str,
        cookies: Option<&str>,
    ) -> Result<ZfValue, ZenfolioError> {
        self.call("CreateVideoFromUrl", params![photoset_id, url, cookies])
    }

    pub fn get_download_original_key(
        &self,
        photo_ids: &[i64],
        password: &str,
    ) -> Result<ZfValue, ZenfolioError> {
        self.call("GetDownloadOriginalKey", params![photo_ids, password])
    }

    pub fn get_video_playback_url(
        &self,
        photo_id: i64,
        mode: VideoPlaybackMode,
        width: u32,
        height: u32,
    ) -> Result<ZfValue, ZenfolioError> {
        self.call("GetVideoPlaybackUrl", params![photo_id, mode, width, height])
    }

    pub fn get_popular_photos(&self, offset: u32, limit: u32) -> Result<ZfValue, ZenfolioError> {
        self.call("GetPopularPhotos", params![offset, limit])
    }

    pub fn get_recent_photos(&self, offset: u32, limit: u32) -> Result<ZfValue, ZenfolioError> {
        self.call("GetRecentPhotos", params![offset, limit])
    }

    /// Uploads the file at `path` into a loaded photo set.
    ///
    /// `photoset` must be a `PhotoSet` object as returned by [`Client::load_photo_set`]. The
    /// file name sent to the service defaults to the name of the file at `path`.
    pub fn upload_photo(
        &self,
        photoset: &ZfValue,
        path: impl AsRef<Path>,
        filename: Option<&str>,
    ) -> Result<String, ZenfolioError> {
        assert_type(photoset, "PhotoSet", "photoset", "UploadPhoto")?;
        let path = path.as_ref();
        let filename = match filename {
            Some(filename) => filename.to_string(),
            None => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .ok_or_else(|| {
                    ZenfolioError::Validation(format!("`{}` has no file name", path.display()))
                })?,
        };
        let data = std::fs::read(path)?;
        self.upload_photo_bytes(photoset, &filename, Bytes::from(data))
    }

    /// Uploads in-memory image data into a loaded photo set as `filename`
    pub fn upload_photo_bytes(
        &self,
        photoset: &ZfValue,
        filename: &str,
        data: Bytes,
    ) -> Result<String, ZenfolioError> {
        assert_type(photoset, "PhotoSet", "photoset", "UploadPhoto")?;
        let upload_url = photoset["UploadUrl"].as_str().ok_or_else(|| {
            ZenfolioError::Validation("`photoset` has no UploadUrl for `UploadPhoto` method.".into())
        })?;
        let content_type = mime_guess::from_path(filename).first_or_octet_stream();
        self.api_client().post_data(
            upload_url,
            &[("filename", filename)],
            content_type.essence_str(),
            data,
            self.token(),
        )
    }
}

/// Joins cookie name/value pairs into the `name=value;name=value` form the `*FromUrl`
/// calls expect. Names and values are URL encoded.
pub fn encode_cookies(cookies: &[(&str, &str)]) -> String {
    cookies
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join(";")
}

/// Image URL of a loaded photo at the given size
pub fn photo_image_url(photo: &ZfValue, size: PhotoSize) -> Result<String, ZenfolioError> {
    let (Some(host), Some(core)) = (photo["UrlHost"].as_str(), photo["UrlCore"].as_str()) else {
        return Err(ZenfolioError::Validation(
            "Photo is missing UrlHost or UrlCore".to_string(),
        ));
    };
    Ok(format!("https://{host}{core}-{}.jpg", u8::from(size)))
}
