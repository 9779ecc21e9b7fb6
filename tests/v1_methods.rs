/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

#[cfg(test)]
mod test {
    use crate::helpers::{MockService, Reply};
    use chrono::NaiveDate;
    use serde_json::{Value, json};
    use std::io::Write;
    use zenfolio::v1::{
        Auth, Client, Fields, GroupShiftOrder, InformationLevel, PhotoSetType, ShiftOrder,
        SortOrder, ZenfolioError, ZfValue, search_sets_by_title,
    };

    fn fields(value: Value) -> Option<Fields> {
        match value {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    #[test]
    fn invalid_updater_sends_nothing() {
        let mock = MockService::start(|_| Reply::Result(Value::Null));
        let client = mock.client();

        let err = client
            .update_photo_access(1, fields(json!({"AccessType": "Secret"})))
            .unwrap_err();
        assert!(matches!(err, ZenfolioError::Validation(_)));
        assert!(err.to_string().contains("UpdatePhotoAccess"));

        let err = client
            .update_group(1, fields(json!({"Colour": "red"})))
            .unwrap_err();
        assert!(matches!(err, ZenfolioError::Validation(_)));

        let err = client
            .update_photo_set_access(1, fields(json!({"AccessMask": 5})))
            .unwrap_err();
        assert!(matches!(err, ZenfolioError::Validation(_)));

        assert!(mock.requests().is_empty());
    }

    #[test]
    fn updaters_are_laid_over_defaults() {
        let mock = MockService::start(|_| Reply::Result(json!({"$type": "Group", "Id": 7})));
        let client = mock.client();

        let group = client.create_group(3, None).unwrap();
        assert_eq!(group["Id"].as_i64(), Some(7));
        client
            .update_photo_set_access(9, fields(json!({"AccessType": "Password", "Password": "pw"})))
            .unwrap();
        client
            .add_message("p123", fields(json!({"Body": "Lovely shots", "PosterName": "Ann"})))
            .unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].method, "CreateGroup");
        assert_eq!(requests[0].params, vec![json!(3), json!({"Title": ""})]);
        assert_eq!(
            requests[1].params,
            vec![
                json!(9),
                json!({"IsDerived": true, "AccessType": "Password", "Password": "pw"})
            ]
        );
        assert_eq!(
            requests[2].params,
            vec![
                json!("p123"),
                json!({
                    "PosterName": "Ann",
                    "PosterUrl": "",
                    "PosterEmail": "",
                    "Body": "Lovely shots",
                    "IsPrivate": false
                })
            ]
        );
    }

    #[test]
    fn enums_are_sent_by_name() {
        let mock = MockService::start(|_| Reply::Result(Value::Null));
        let client = mock.client();

        client.load_group(5, InformationLevel::Full, true).unwrap();
        client.reorder_group(5, GroupShiftOrder::TitleAsc).unwrap();
        client.reorder_photo_set(6, ShiftOrder::TakenDesc).unwrap();
        client
            .search_set_by_text("", PhotoSetType::Gallery, SortOrder::Popularity, "beach", 0, 20)
            .unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].params, vec![json!(5), json!("Full"), json!(true)]);
        assert_eq!(requests[1].params, vec![json!(5), json!("TitleAsc")]);
        assert_eq!(requests[2].params, vec![json!(6), json!("TakenDesc")]);
        assert_eq!(
            requests[3].params,
            vec![json!(""), json!("Gallery"), json!("Popularity"), json!("beach"), json!(0), json!(20)]
        );
    }

    #[test]
    fn message_dates_are_tagged() {
        let mock = MockService::start(|_| Reply::Result(json!([])));
        let client = mock.client();
        let since = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(12, 0, 5)
            .unwrap();

        client.load_messages("p123", Some(since), false).unwrap();
        client.load_messages("p123", None, true).unwrap();

        let requests = mock.requests();
        assert_eq!(
            requests[0].params,
            vec![
                json!("p123"),
                json!({"$type": "DateTime", "Value": "2024-03-01 12:00:05"}),
                json!(false)
            ]
        );
        assert_eq!(requests[1].params, vec![json!("p123"), Value::Null, json!(true)]);
    }

    #[test]
    fn upload_posts_raw_file() {
        let mock = MockService::start(|_| Reply::Result(Value::Null));
        let upload_url = format!("{}/upload/p42", mock.base_url);
        let photoset = ZfValue::from(json!({
            "$type": "PhotoSet",
            "Id": 42,
            "UploadUrl": upload_url
        }));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.jpg");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"\xff\xd8\xff\xe0fake jpeg")
            .unwrap();

        let mut client = Client::with_auth(
            mock.config(),
            Auth::with_token("jdoe", "secret", "tok"),
        )
        .unwrap();
        let response = client.upload_photo(&photoset, &path, None).unwrap();
        assert!(response.contains("null"));

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        let req = &requests[0];
        assert_eq!(req.path, "/upload/p42");
        assert_eq!(req.query.as_deref(), Some("filename=photo.jpg"));
        assert_eq!(req.content_type.as_deref(), Some("image/jpeg"));
        assert_eq!(req.token.as_deref(), Some("tok"));
        assert_eq!(&req.body[..], b"\xff\xd8\xff\xe0fake jpeg");

        // Explicit names pick the content type too
        client.clear_token();
        client
            .upload_photo(&photoset, &path, Some("clip.png"))
            .unwrap();
        let req = &mock.requests()[1];
        assert_eq!(req.query.as_deref(), Some("filename=clip.png"));
        assert_eq!(req.content_type.as_deref(), Some("image/png"));
        assert!(req.token.is_none());
    }

    #[test]
    fn upload_rejects_wrong_object() {
        let mock = MockService::start(|_| Reply::Result(Value::Null));
        let client = mock.client();
        let group = ZfValue::from(json!({"$type": "Group", "UploadUrl": mock.endpoint()}));

        let err = client
            .upload_photo(&group, "does/not/exist.jpg", None)
            .unwrap_err();
        assert!(matches!(err, ZenfolioError::Validation(_)));

        let untyped = ZfValue::from(json!({"UploadUrl": mock.endpoint()}));
        assert!(client.upload_photo_bytes(&untyped, "a.jpg", "x".into()).is_err());

        let no_url = ZfValue::from(json!({"$type": "PhotoSet"}));
        assert!(client.upload_photo_bytes(&no_url, "a.jpg", "x".into()).is_err());

        assert!(mock.requests().is_empty());
    }

    #[test]
    fn upload_of_missing_file_is_io_error() {
        let mock = MockService::start(|_| Reply::Result(Value::Null));
        let photoset = ZfValue::from(json!({"$type": "PhotoSet", "UploadUrl": mock.endpoint()}));
        let dir = tempfile::tempdir().unwrap();

        let err = mock
            .client()
            .upload_photo(&photoset, dir.path().join("gone.jpg"), None)
            .unwrap_err();
        assert!(matches!(err, ZenfolioError::Io(_)));
    }

    #[test]
    fn rejected_upload_is_http_error() {
        let mock = MockService::start(|_| Reply::Status(500, "upload failed"));
        let photoset = ZfValue::from(json!({
            "$type": "PhotoSet",
            "UploadUrl": format!("{}/up", mock.base_url)
        }));

        let err = mock
            .client()
            .upload_photo_bytes(&photoset, "a.jpg", "jpeg bytes".into())
            .unwrap_err();
        assert_eq!(err.status(), Some(500));
        match err {
            ZenfolioError::Http {
                url, status, body, ..
            } => {
                assert_eq!(status, 500);
                assert!(url.contains("/up?filename=a.jpg"), "{url}");
                assert_eq!(&body[..], b"upload failed");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(mock.requests()[0].path, "/up");
    }

    #[test]
    fn photoset_photos_pages_until_short_page() {
        let mock = MockService::start(|req| {
            let start = req.params[1].as_u64().unwrap_or_default();
            let limit = req.params[2].as_u64().unwrap_or_default();
            let total = 5;
            let photos: Vec<Value> = (start..(start + limit).min(total))
                .map(|id| json!({"$type": "Photo", "Id": id}))
                .collect();
            Reply::Result(Value::Array(photos))
        });
        let client = mock.client();

        let ids: Vec<i64> = client
            .photoset_photos(9, 2)
            .map(|p| p.unwrap()["Id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, [0, 1, 2, 3, 4]);

        let requests = mock.requests();
        assert_eq!(requests.len(), 3);
        assert!(requests.iter().all(|r| r.method == "LoadPhotoSetPhotos"));
        assert_eq!(requests[2].params, vec![json!(9), json!(4), json!(2)]);
    }

    #[test]
    fn photoset_photos_stops_on_error() {
        let mock = MockService::start(|_| Reply::Error(Some("E_NOSUCHOBJECT"), "No such set"));
        let client = mock.client();

        let mut photos = client.photoset_photos(9, 10);
        assert!(matches!(photos.next(), Some(Err(ZenfolioError::Remote { .. }))));
        assert!(photos.next().is_none());
        assert_eq!(mock.requests().len(), 1);
    }

    #[test]
    fn sets_found_by_title() {
        let mock = MockService::start(|_| {
            Reply::Result(json!({
                "$type": "Group",
                "Title": "jdoe",
                "Elements": [
                    {"$type": "PhotoSet", "Title": "Beach Day", "Id": 1},
                    {"$type": "Group", "Title": "Trips", "Elements": [
                        {"$type": "PhotoSet", "Title": "Black sand beach", "Id": 2}
                    ]}
                ]
            }))
        });
        let client = mock.client_with_auth("jdoe", "secret");

        let found = search_sets_by_title(&client, "BEACH", None).unwrap();
        let ids: Vec<_> = found.iter().filter_map(|s| s["Id"].as_i64()).collect();
        assert_eq!(ids, [1, 2]);

        search_sets_by_title(&client, "beach", Some("other")).unwrap();
        let requests = mock.requests();
        assert_eq!(requests[0].method, "LoadGroupHierarchy");
        assert_eq!(requests[0].params, vec![json!("jdoe")]);
        assert_eq!(requests[1].params, vec![json!("other")]);
    }

    #[test]
    fn photo_id_lists_stay_nested() {
        let mock = MockService::start(|_| Reply::Result(Value::Null));
        let client = mock.client();

        client.move_photos(1, 2, &[10, 11, 12]).unwrap();
        client.delete_photos(&[10]).unwrap();
        client.reindex_photo_set(1, 0, &[2, 0, 1]).unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].params, vec![json!(1), json!(2), json!([10, 11, 12])]);
        assert_eq!(requests[1].params, vec![json!([10])]);
        assert_eq!(requests[2].params, vec![json!(1), json!(0), json!([2, 0, 1])]);
    }

    #[test]
    fn client_from_config_file() {
        let mock = MockService::start(|_| Reply::Result(json!({"$type": "User", "LoginName": "jdoe"})));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zenfolio.json");
        std::fs::write(
            &path,
            format!(
                r#"{{"endpoint": "{}", "timeout_secs": 10, "auth": {{"username": "jdoe", "password": "secret"}}}}"#,
                mock.endpoint()
            ),
        )
        .unwrap();

        let client = Client::from_config_file(&path, None).unwrap();
        assert_eq!(client.auth().username, "jdoe");
        let profile = client.load_public_profile(None).unwrap();
        assert_eq!(profile["LoginName"].as_str(), Some("jdoe"));
        assert_eq!(mock.requests()[0].params, vec![json!("jdoe")]);

        let client = Client::from_config_file(&path, Some(Auth::new("ann", "pw"))).unwrap();
        assert_eq!(client.auth().username, "ann");

        let err = Client::from_config_file(dir.path().join("missing.json"), None).unwrap_err();
        assert!(matches!(err, ZenfolioError::Config(_)));
    }
}
