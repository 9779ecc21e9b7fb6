/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate zenfolio;

use anyhow::Result;
use dotenvy::dotenv;
use zenfolio::v1::{Client, Config, PhotoSetType, SortOrder, search_sets_by_title};

// Looks up galleries in two ways: by title within one account and by text across the
// public galleries of the service.
//
// Usage: cargo run --example gallery_search -- <account> <text>
fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let account = args.next().unwrap_or_else(|| "zenfolio".to_string());
    let text = args.next().unwrap_or_else(|| "landscape".to_string());

    // Public data needs nothing more than a visitor token
    let mut client = Client::new(Config::default())?;
    client.authenticate_visitor()?;

    let profile = client.load_public_profile(Some(&account))?;
    println!("{} ({})", profile["DisplayName"], profile["LoginName"]);

    for set in search_sets_by_title(&client, &text, Some(&account))? {
        println!("{}\t{}\t{}", set["$type"], set["Id"], set["Title"]);
    }

    // An empty search id starts a new search session
    let results = client.search_set_by_text(
        "",
        PhotoSetType::Gallery,
        SortOrder::Popularity,
        &text,
        0,
        10,
    )?;
    if let Some(sets) = results["Results"].as_array() {
        println!("Top {} of {} public galleries:", sets.len(), results["ResultCount"]);
        for set in sets {
            println!("  {}\t{}", set["Id"], set["Title"]);
        }
    }
    Ok(())
}
