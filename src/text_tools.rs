//! text_tools.rs
//!
//! Small string routines used while filling the record: splitting a
//! postal address into its administrative parts, picking regex matches
//! out of a cell, reading checked boxes and leading integers.

use lazy_static::lazy_static;
use regex::Regex;

use crate::anchors;
use crate::stream::TokenStream;

lazy_static! {
    /// Parenthesized notes inside an address (`(近市場)`).
    static ref ADDRESS_NOTE: Regex = Regex::new(r"\([^()]*\)").unwrap();

    /// Address parts in the order they are written. Each one is taken off
    /// the front of what the previous parts left over.
    static ref CITY: Regex = Regex::new(r"^\D{2}(縣|市)").unwrap();
    static ref REGION: Regex = Regex::new(r"^\D+?(鄉|鎮|市|區)").unwrap();
    static ref VILLAGE: Regex = Regex::new(r"^\D+?(村|里)").unwrap();
    static ref NEIGHBORHOOD: Regex = Regex::new(r"^.+?(鄰)").unwrap();
    static ref ROAD: Regex = Regex::new(r"^.+?(路|街|段)").unwrap();

    static ref LEADING_INT: Regex = Regex::new(r"^\s*([+-]?\d+)").unwrap();
}

/// A Taiwanese postal address split into its administrative parts. Parts
/// that cannot be recognized are empty and their text stays in `the_rest`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressParts {
    pub city: String,
    pub region: String,
    pub village: String,
    pub neighborhood: String,
    pub road: String,
    pub the_rest: String,
}

fn take_prefix(rest: &mut &str, pattern: &Regex) -> String {
    match pattern.find(rest) {
        Some(m) => {
            let part = m.as_str().to_string();
            *rest = &rest[m.end()..];
            part
        }
        None => String::new(),
    }
}

/// The variant form `台` is written `臺` in place names. Only the first one
/// is replaced, so `台南市` becomes `臺南市`.
pub fn formal_tai(part: &str) -> String {
    part.replacen('台', "臺", 1)
}

/// Splits `address` into city, region, village, neighborhood, road and
/// whatever follows the road.
///
/// ```
/// # use case_plan_import::text_tools::split_address;
/// let parts = split_address("台南市東區大學里5鄰大學路1號(近學校)");
/// assert_eq!(parts.city, "臺南市");
/// assert_eq!(parts.region, "東區");
/// assert_eq!(parts.village, "大學里");
/// assert_eq!(parts.neighborhood, "5鄰");
/// assert_eq!(parts.road, "大學路");
/// assert_eq!(parts.the_rest, "1號");
/// ```
pub fn split_address(address: &str) -> AddressParts {
    let cleaned = ADDRESS_NOTE.replace_all(address, "");
    let mut rest: &str = &cleaned;
    let city = take_prefix(&mut rest, &CITY);
    let region = take_prefix(&mut rest, &REGION);
    let village = take_prefix(&mut rest, &VILLAGE);
    let neighborhood = take_prefix(&mut rest, &NEIGHBORHOOD);
    let road = take_prefix(&mut rest, &ROAD);
    AddressParts {
        city: formal_tai(&city),
        region: formal_tai(&region),
        village: formal_tai(&village),
        neighborhood,
        road,
        the_rest: rest.to_string(),
    }
}

/// The `index`-th match of `pattern` in `text`, or the empty string.
pub fn match_text<'t>(text: &'t str, pattern: &Regex, index: usize) -> &'t str {
    pattern
        .find_iter(text)
        .nth(index)
        .map_or("", |m| m.as_str())
}

/// Reads the leading integer of `text`, ignoring whatever follows it.
/// `"3人"` is 3, `"人"` is `None`.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    LEADING_INT
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
}

/// A cell rendered from a checkbox carries the checked icon's path.
pub fn is_checked(cell: &str) -> bool {
    cell.contains(anchors::CHECK_BOX)
}

/// Caption of a checked option cell (`[…checkbox_checked.gif]國語` is
/// `國語`), or `None` when the box is not checked.
pub fn checked_caption(cell: &str) -> Option<&str> {
    // The icon path never starts a bare caption, it follows the opening bracket.
    match cell.find(anchors::CHECK_BOX) {
        Some(at) if at > 0 => Some(cell.split(']').nth(1).unwrap_or("")),
        _ => None,
    }
}

/// Captions of the checked boxes among the `count` cells after `keyword`.
pub fn checked_after(stream: &TokenStream, keyword: &str, count: usize) -> Vec<String> {
    let Some(at) = stream.position(keyword) else {
        return Vec::new();
    };
    (1..=count)
        .filter_map(|k| checked_caption(stream.token(at + k)))
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_full_address() {
        let parts = split_address("高雄市鳳山區文山里12鄰光遠路100巷3號");
        assert_eq!(
            parts,
            AddressParts {
                city: "高雄市".into(),
                region: "鳳山區".into(),
                village: "文山里".into(),
                neighborhood: "12鄰".into(),
                road: "光遠路".into(),
                the_rest: "100巷3號".into(),
            }
        );
    }

    #[test]
    fn test_county_with_township() {
        let parts = split_address("屏東縣潮州鎮三共里中山路1號");
        assert_eq!(parts.city, "屏東縣");
        assert_eq!(parts.region, "潮州鎮");
        assert_eq!(parts.village, "三共里");
        assert_eq!(parts.neighborhood, "");
        assert_eq!(parts.road, "中山路");
    }

    #[test]
    fn test_unrecognized_parts_stay_in_rest() {
        let parts = split_address("123 Main St");
        assert_eq!(parts.city, "");
        assert_eq!(parts.region, "");
        assert_eq!(parts.the_rest, "123 Main St");
        assert_eq!(split_address(""), AddressParts::default());
    }

    #[test]
    fn test_tai_normalized_in_place_names_only() {
        let parts = split_address("台中市北區台安里台灣大道1號");
        assert_eq!(parts.city, "臺中市");
        assert_eq!(parts.village, "臺安里");
        assert_eq!(parts.road, "");
        assert_eq!(parts.the_rest, "台灣大道1號");
    }

    #[test]
    fn test_match_text() {
        let digits = Regex::new(r"\d+").unwrap();
        assert_eq!(match_text("額度36180元 已用1200元", &digits, 0), "36180");
        assert_eq!(match_text("額度36180元 已用1200元", &digits, 1), "1200");
        assert_eq!(match_text("額度36180元", &digits, 3), "");
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("2人"), Some(2));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("人"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn test_checked_caption() {
        let cell = format!("{}國語", anchors::CHECKED_ICON);
        assert_eq!(checked_caption(&cell), Some("國語"));
        assert_eq!(checked_caption("[/lcms/images/icons/checkbox.gif]台語"), None);
        assert!(is_checked(&cell));
    }

    #[test]
    fn test_checked_after_window() {
        let checked = |s: &str| format!("{}{}", anchors::CHECKED_ICON, s);
        let s = TokenStream::from_tokens(vec![
            anchors::LANGUAGE.to_string(),
            checked("國語"),
            "[/lcms/images/icons/checkbox.gif]台語".to_string(),
            checked("客語"),
            "x".to_string(),
            "y".to_string(),
            checked("英語"),
        ]);
        assert_eq!(checked_after(&s, anchors::LANGUAGE, 5), vec!["國語", "客語"]);
        assert!(checked_after(&s, "不存在", 5).is_empty());
    }
}
