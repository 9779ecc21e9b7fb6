/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate zenfolio;

use anyhow::{Result, anyhow};
use dotenvy::dotenv;
use serde_json::json;
use zenfolio::v1::{
    Auth, Client, Config, Fields, InformationLevel, PhotoSetType, PhotoSize, photo_image_url,
};

// Creates a gallery named after the given title in the root group and uploads the given files
// into it.
//
// Usage: cargo run --example upload_photo -- "Gallery title" photo1.jpg photo2.jpg
fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let title = args
        .next()
        .ok_or_else(|| anyhow!("expected a gallery title"))?;
    let files: Vec<String> = args.collect();

    let mut client = Client::with_auth(get_config()?, get_auth()?)?;

    // Challenge-response login, the password never leaves this machine
    client.authenticate(false)?;

    let hierarchy = client.load_group_hierarchy(None)?;
    let root_id = hierarchy["Id"]
        .as_i64()
        .ok_or_else(|| anyhow!("group hierarchy has no root id"))?;

    let mut fields = Fields::new();
    fields.insert("Title".into(), json!(title));
    fields.insert("Caption".into(), json!("Uploaded with zenfolio-rs"));
    let gallery = client.create_photo_set(root_id, PhotoSetType::Gallery, Some(fields))?;
    let gallery_id = gallery["Id"]
        .as_i64()
        .ok_or_else(|| anyhow!("new gallery has no id"))?;
    println!("Created gallery {} ({})", title, gallery_id);

    // The upload URL is only part of a loaded set
    let gallery = client.load_photo_set(gallery_id, InformationLevel::Full, false)?;
    for file in &files {
        let photo_id = client.upload_photo(&gallery, file, None)?;
        println!("Uploaded {file} as photo {photo_id}");
    }

    for photo in client.photoset_photos(gallery_id, 50) {
        let photo = photo?;
        println!(
            "{}\t{}",
            photo["FileName"],
            photo_image_url(&photo, PhotoSize::Medium)?
        );
    }
    Ok(())
}

// Endpoint override for testing against a staging service
fn get_config() -> Result<Config> {
    Ok(match std::env::var("ZENFOLIO_CONFIG") {
        Ok(path) => Config::from_file(path)?,
        Err(_) => Config::default(),
    })
}

fn get_auth() -> Result<Auth> {
    let username = std::env::var("ZENFOLIO_USERNAME")?;
    let password = std::env::var("ZENFOLIO_PASSWORD")?;
    Ok(Auth::new(&username, &password))
}
