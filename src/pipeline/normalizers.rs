use lazy_static::lazy_static;
use regex::Regex;

/// Collapses runs of line breaks (`\n`, `\r`, or mixes) into single spaces,
/// then trims the edges. Case and every other character are left untouched.
pub fn normalize_linebreaks(text: &str) -> String {
    lazy_static! {
        static ref LINE_BREAK_RE: Regex = Regex::new(r"[\r\n]+").unwrap();
    }

    LINE_BREAK_RE.replace_all(text, " ").trim().to_string()
}
