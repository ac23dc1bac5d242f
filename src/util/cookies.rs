//! `document.cookie` parsing.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

use std::collections::HashMap;

/// Parse a cookie header (`a=1; b=2`) into a key/value map.
///
/// Values are percent-decoded since the server URL-quotes the username.
/// Undecodable values are kept as-is. Pairs without `=` or with an empty
/// name are skipped, and the first occurrence of a repeated name wins.
pub fn parse_cookies(raw: &str) -> HashMap<String, String> {
    let mut cookies = HashMap::new();
    for pair in raw.split(';') {
        let Some((name, value)) = pair.split_once('=') else {
            continue;
        };
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        let value = value.trim();
        let value = urlencoding::decode(value).map_or_else(|_| value.to_owned(), |v| v.into_owned());
        cookies.entry(name.to_owned()).or_insert(value);
    }
    cookies
}
