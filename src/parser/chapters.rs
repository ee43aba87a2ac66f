use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::models::ChapterRecord;
use crate::parser::{dates, volume};

static CONTAINER_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("li.a-h").unwrap());
static ANCHOR_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());
static TIME_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".chapter-time").unwrap());

/// Read all chapter entries in document order (site-native, newest first).
/// Containers without an anchor are dropped without notice.
pub fn chapter_list(doc: &Html) -> Vec<ChapterRecord> {
    doc.select(&CONTAINER_SEL)
        .filter_map(|container| {
            let anchor = container.select(&ANCHOR_SEL).next()?;
            let title = anchor.text().collect::<String>().trim().to_string();
            let url = anchor.value().attr("href").map(str::to_string);
            let parsed = volume::parse(&title);

            let release_date = container
                .select(&TIME_SEL)
                .next()
                .and_then(|el| el.value().attr("title"))
                .unwrap_or("");
            let date = dates::resolve(release_date);

            Some(ChapterRecord {
                title,
                url,
                is_special: parsed.is_special,
                volume: parsed.volume.unwrap_or(-1),
                year: date.map(|d| d.year),
                month: date.map(|d| d.month),
                day: date.map(|d| d.day),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Local};

    fn doc(body: &str) -> Html {
        Html::parse_document(&format!("<html><body><ul>{}</ul></body></html>", body))
    }

    #[test]
    fn anchorless_containers_are_dropped() {
        let doc = doc(concat!(
            r#"<li class="a-h"><a href="/c2">Chapter 2</a></li>"#,
            r#"<li class="a-h"><span class="chapter-name">Deleted</span></li>"#,
            r#"<li class="a-h"><a href="/c1">Chapter 1</a></li>"#,
        ));
        let chapters = chapter_list(&doc);
        assert_eq!(chapters.len(), 2);
        assert!(chapters.iter().all(|c| c.title != "Deleted"));
    }

    #[test]
    fn document_order_is_preserved() {
        let doc = doc(concat!(
            r#"<li class="a-h"><a href="/c3">Chapter 3</a></li>"#,
            r#"<li class="a-h"><a href="/c2">Chapter 2</a></li>"#,
            r#"<li class="a-h"><a href="/c1">Chapter 1</a></li>"#,
        ));
        let titles: Vec<String> = chapter_list(&doc).into_iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["Chapter 3", "Chapter 2", "Chapter 1"]);
    }

    #[test]
    fn no_volume_defaults() {
        let doc = doc(r#"<li class="a-h"><a href="/c1">Chapter 1</a></li>"#);
        let chapters = chapter_list(&doc);
        assert_eq!(chapters[0].volume, -1);
        assert!(!chapters[0].is_special);
    }

    #[test]
    fn volume_and_special_from_title() {
        let doc = doc(concat!(
            r#"<li class="a-h"><a href="/c12">Vol.3 Chapter 12</a></li>"#,
            r#"<li class="a-h"><a href="/c55">Chapter 5.5: Special Omake</a></li>"#,
        ));
        let chapters = chapter_list(&doc);
        assert_eq!(chapters[0].volume, 3);
        assert!(!chapters[0].is_special);
        assert_eq!(chapters[1].volume, -1);
        assert!(chapters[1].is_special);
    }

    #[test]
    fn absolute_timestamp_parsed() {
        let doc = doc(concat!(
            r#"<li class="a-h"><a href="/c1">Chapter 1</a>"#,
            r#"<span class="chapter-time" title="2024-05-01 00:00">May 01,24</span></li>"#,
        ));
        let chapter = &chapter_list(&doc)[0];
        assert_eq!(chapter.year, Some(2024));
        assert_eq!(chapter.month, Some(5));
        assert_eq!(chapter.day, Some(1));
    }

    #[test]
    fn relative_timestamp_resolves_to_today() {
        let doc = doc(concat!(
            r#"<li class="a-h"><a href="/c1">Chapter 1</a>"#,
            r#"<span class="chapter-time" title="2 hours ago">2 hours ago</span></li>"#,
        ));
        let chapter = &chapter_list(&doc)[0];
        let today = Local::now().date_naive();
        assert_eq!(chapter.year, Some(today.year()));
        assert_eq!(chapter.month, Some(today.month()));
        assert_eq!(chapter.day, Some(today.day()));
    }

    #[test]
    fn missing_timestamp_leaves_date_absent() {
        let doc = doc(r#"<li class="a-h"><a href="/c1">Chapter 1</a></li>"#);
        let chapter = &chapter_list(&doc)[0];
        assert_eq!((chapter.year, chapter.month, chapter.day), (None, None, None));
    }

    #[test]
    fn anchor_without_href_or_text() {
        let doc = doc(r#"<li class="a-h"><a></a></li>"#);
        let chapter = &chapter_list(&doc)[0];
        assert_eq!(chapter.title, "");
        assert_eq!(chapter.url, None);
    }
}
