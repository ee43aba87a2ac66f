use std::sync::LazyLock;

use scraper::{Html, Selector};
use tracing::{debug, info};
use url::Url;

use crate::fetch;
use crate::parser::ScrapeError;

static IMAGE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img.img-content").unwrap());

/// Ordered list of page-image URLs for a chapter-reading document.
/// Lazy-loaded images keep their source in `data-src` until scrolled into
/// view, so that attribute is the fallback. Entries that do not parse as a
/// URL are dropped; an empty result is the caller's signal of total failure.
pub fn image_urls(doc: &Html) -> Vec<String> {
    doc.select(&IMAGE_SEL)
        .filter_map(|img| {
            img.value()
                .attr("src")
                .or_else(|| img.value().attr("data-src"))
        })
        .map(|src| src.trim().to_string())
        .filter(|src| {
            let valid = Url::parse(src).is_ok();
            if !valid {
                debug!("Dropping malformed image URL: {}", src);
            }
            valid
        })
        .collect()
}

/// Fetch a chapter page and extract its reading-order image list.
pub async fn chapter_images(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<String>, ScrapeError> {
    let html = fetch::page(client, url).await?;
    let doc = Html::parse_document(&html);
    let images = image_urls(&doc);
    info!("Extracted {} image URLs from {}", images.len(), url);
    Ok(images)
}
