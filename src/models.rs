use serde::Serialize;

/// One entry of a series' chapter list, as it appears on the page
/// (site-native order, newest first).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChapterRecord {
    pub title: String,
    pub url: Option<String>,
    pub is_special: bool,
    /// -1 means the volume could not be determined from the title.
    pub volume: i32,
    pub year: Option<i32>,
    /// 1-based. Present together with year and day, or not at all.
    pub month: Option<u32>,
    pub day: Option<u32>,
}

/// ComicInfo.xml metadata bundle handed to the downstream serializer.
/// Field names follow the ComicInfo schema; absent optionals are omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ComicInfo {
    pub series: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub volume: i32,
    pub web: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
    /// "Specials" for chapters outside the regular volume sequence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    pub community_rating: i64,
}

/// A chapter paired with its owning series and the serialized metadata bundle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterMetadata {
    /// Empty string when the chapter anchor carried no href.
    pub url: String,
    pub title: String,
    pub series_title: String,
    pub series_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "comicInfoXml")]
    pub comic_info: ComicInfo,
}

/// Final output of the series pipeline. Chapters are chronological-ascending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesResult {
    pub title: String,
    pub url: String,
    pub chapters: Vec<ChapterMetadata>,
}
