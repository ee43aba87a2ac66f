pub mod chapters;
pub mod dates;
pub mod fields;
pub mod images;
pub mod volume;

use scraper::Html;
use thiserror::Error;
use tracing::info;

use crate::fetch;
use crate::models::{ChapterMetadata, ComicInfo, SeriesResult};

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("series title cannot be found")]
    MissingSeriesTitle,
    #[error("no chapters found")]
    NoChaptersFound,
    #[error(transparent)]
    Fetch(#[from] reqwest::Error),
}

/// Fetch a series page and assemble its full metadata record.
pub async fn process_title(
    client: &reqwest::Client,
    url: &str,
    category: Option<&str>,
) -> Result<SeriesResult, ScrapeError> {
    let html = fetch::page(client, url).await?;
    let doc = Html::parse_document(&html);
    let result = extract_series(&doc, url, category)?;
    info!("Extracted {} chapters for '{}'", result.chapters.len(), result.title);
    Ok(result)
}

/// Assemble a series result from an already-parsed document.
///
/// Linear single-pass pipeline with two fatal exits: a missing series title
/// aborts before any chapter work, and an empty chapter list aborts at the
/// end. Everything in between degrades field by field. The site lists
/// chapters newest first; the output is reversed to chronological-ascending
/// by position, never re-sorted on dates (they may be partially absent).
pub fn extract_series(
    doc: &Html,
    url: &str,
    category: Option<&str>,
) -> Result<SeriesResult, ScrapeError> {
    let series_title = fields::series_title(doc).ok_or(ScrapeError::MissingSeriesTitle)?;

    let summary = fields::summary(doc);
    let author = fields::author(doc);
    let community_rating = fields::community_rating(doc);
    let genre = fields::genre(doc);

    let mut chapters: Vec<ChapterMetadata> = chapters::chapter_list(doc)
        .into_iter()
        .map(|chapter| ChapterMetadata {
            url: chapter.url.unwrap_or_default(),
            title: chapter.title.clone(),
            series_title: decode(&series_title),
            series_url: url.to_string(),
            category: category.map(str::to_string),
            comic_info: ComicInfo {
                series: decode(&series_title),
                title: decode(&chapter.title),
                summary: summary.clone(),
                volume: chapter.volume,
                web: url.to_string(),
                year: chapter.year,
                month: chapter.month,
                day: chapter.day,
                format: chapter.is_special.then(|| "Specials".to_string()),
                author: author.clone(),
                genre: genre.clone(),
                community_rating,
            },
        })
        .collect();

    chapters.reverse();

    if chapters.is_empty() {
        return Err(ScrapeError::NoChaptersFound);
    }

    Ok(SeriesResult {
        title: series_title,
        url: url.to_string(),
        chapters,
    })
}

fn decode(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}
