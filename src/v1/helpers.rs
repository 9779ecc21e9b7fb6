/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::ZenfolioError;
use crate::v1::{Client, ZfValue};

/// Finds the groups and photo sets of `username` (or the configured user) whose title
/// contains `title`, ignoring case
pub fn search_sets_by_title(
    client: &Client,
    title: &str,
    username: Option<&str>,
) -> Result<Vec<ZfValue>, ZenfolioError> {
    let hierarchy = client.load_group_hierarchy(username)?;
    Ok(find_by_title(&hierarchy, title))
}

/// Walks `Elements` of a loaded group tree collecting elements whose title contains `title`
pub fn find_by_title(group: &ZfValue, title: &str) -> Vec<ZfValue> {
    let needle = title.to_lowercase();
    let mut found = Vec::new();
    collect_by_title(group, &needle, &mut found);
    found
}

fn collect_by_title(group: &ZfValue, needle: &str, found: &mut Vec<ZfValue>) {
    let Some(elements) = group["Elements"].as_array() else {
        return;
    };
    for element in elements {
        let is_match = element["Title"]
            .as_str()
            .is_some_and(|t| t.to_lowercase().contains(needle));
        if is_match {
            found.push(element.clone());
        }
        collect_by_title(element, needle, found);
    }
}
