use std::sync::LazyLock;

use regex::Regex;

static VOLUME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bvol(?:ume)?\.?\s*(\d+)").unwrap());
static SPECIAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(special|specials|extra|omake|bonus|one[ -]?shot)\b").unwrap());

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedTitle {
    pub volume: Option<i32>,
    pub is_special: bool,
}

/// Infer a volume number and special-issue flag from a raw chapter title.
/// Titles with no volume marker yield `volume: None`.
pub fn parse(title: &str) -> ParsedTitle {
    let volume = VOLUME_RE
        .captures(title)
        .and_then(|caps| caps[1].parse::<i32>().ok());
    ParsedTitle {
        volume,
        is_special: SPECIAL_RE.is_match(title),
    }
}
