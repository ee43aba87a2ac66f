use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

static HEADING_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".story-info-right h1").unwrap());
static META_TITLE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"meta[property="og:title"]"#).unwrap());
static SUMMARY_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#panel-story-info-description").unwrap());
static INFO_CELL_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".variations-tableInfo td").unwrap());
static GENRE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".genres-content").unwrap());
static ANCHOR_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());
static SCRIPT_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("script").unwrap());

fn text_of(el: &ElementRef) -> String {
    el.text().collect::<String>()
}

/// Series title from the story-info heading, falling back to the og:title
/// meta tag with the " | SiteName" suffix cut off. The only field whose
/// absence is fatal; the orchestrator turns `None` into an error.
pub fn series_title(doc: &Html) -> Option<String> {
    if let Some(heading) = doc.select(&HEADING_SEL).next() {
        return Some(text_of(&heading).trim().to_string());
    }
    let meta = doc.select(&META_TITLE_SEL).next()?;
    let content = meta.value().attr("content")?;
    debug!("No story-info heading, falling back to og:title");
    match content.split_once('|') {
        Some((before, _)) => Some(before.trim().to_string()),
        None => Some(content.to_string()),
    }
}

pub fn summary(doc: &Html) -> Option<String> {
    let panel = doc.select(&SUMMARY_SEL).next()?;
    let text = text_of(&panel).trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// 4th cell of the info table. The site carries no semantic label for the
/// author, so the extractor relies on position alone and breaks if the
/// table layout changes. Known fragility.
pub fn author(doc: &Html) -> Option<String> {
    doc.select(&INFO_CELL_SEL)
        .nth(3)
        .map(|cell| text_of(&cell).trim().to_string())
}

pub fn genre(doc: &Html) -> Option<String> {
    let container = doc.select(&GENRE_SEL).next()?;
    let genres: Vec<String> = container.select(&ANCHOR_SEL).map(|a| text_of(&a)).collect();
    if genres.is_empty() {
        return None;
    }
    Some(html_escape::decode_html_entities(&genres.join(", ")).into_owned())
}

/// Heuristic rating scrape from inline script data: first script block
/// containing "rating" wins, first "rating" line within it, value taken
/// from the right-hand side of `=`. Anything unresolvable degrades to 0.
pub fn community_rating(doc: &Html) -> i64 {
    let Some(block) = doc
        .select(&SCRIPT_SEL)
        .map(|script| text_of(&script))
        .find(|text| text.contains("rating"))
    else {
        return 0;
    };
    let Some(line) = block.trim().lines().find(|line| line.contains("rating")) else {
        return 0;
    };
    let Some(value) = line.split('=').nth(1) else {
        debug!("Rating line has no assignment: {}", line);
        return 0;
    };
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    parse_int_prefix(&cleaned)
}

// parseInt semantics: optional sign, then the leading digit run, base 10.
// "4.65" is 4; an empty or sign-only string is 0.
fn parse_int_prefix(s: &str) -> i64 {
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse::<i64>().map(|n| sign * n).unwrap_or(0)
}
