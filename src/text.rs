//! Identifier text helpers.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref LOWER_UPPER_BOUNDARY: Regex = Regex::new(r"(\p{Ll})(\p{Lu})").unwrap();
}

/// Inserts `delimiter` wherever a lowercase letter is directly followed by an
/// uppercase letter. Runs of uppercase letters are left intact.
///
/// ```rust
/// use dispname::text::split_pascal_case;
///
/// assert_eq!(split_pascal_case("MoeLarryCurly", " "), "Moe Larry Curly");
/// assert_eq!(split_pascal_case("ABC", " "), "ABC");
/// assert_eq!(split_pascal_case("layerColorIndex", "_"), "layer_Color_Index");
/// ```
pub fn split_pascal_case<'a>(text: &'a str, delimiter: &str) -> Cow<'a, str> {
    LOWER_UPPER_BOUNDARY.replace_all(text, |caps: &Captures| {
        format!("{}{delimiter}{}", &caps[1], &caps[2])
    })
}

/// Turns a PascalCase identifier into space-separated words.
pub fn format_identifier(text: &str) -> String {
    split_pascal_case(text, " ").into_owned()
}
