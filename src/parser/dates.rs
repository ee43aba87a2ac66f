use chrono::{Datelike, Local, NaiveDateTime};

/// Calendar components of a resolved release date. Month is 1-based.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

// Datetime formats the site has used in chapter timestamps, current first.
const ABSOLUTE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M", "%b %d,%Y %H:%M"];

/// Normalize a raw timestamp string into calendar components.
///
/// Relative strings ("2 hours ago") resolve to the current instant outright;
/// the site only shows them for fresh chapters, so the offset is never
/// computed. Absolute strings are parsed against the site's literal formats.
/// Empty or unparseable input yields `None`.
pub fn resolve(raw: &str) -> Option<ResolvedDate> {
    if raw.is_empty() {
        return None;
    }
    if raw.contains(" ago") {
        let today = Local::now().date_naive();
        return Some(ResolvedDate {
            year: today.year(),
            month: today.month(),
            day: today.day(),
        });
    }
    for format in ABSOLUTE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(ResolvedDate {
                year: parsed.year(),
                month: parsed.month(),
                day: parsed.day(),
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_absent() {
        assert_eq!(resolve(""), None);
    }

    #[test]
    fn iso_like_format() {
        let date = resolve("2024-05-02 00:00").unwrap();
        assert_eq!((date.year, date.month, date.day), (2024, 5, 2));
    }

    #[test]
    fn legacy_site_format() {
        let date = resolve("Jun 06,2023 18:40").unwrap();
        assert_eq!((date.year, date.month, date.day), (2023, 6, 6));
    }

    #[test]
    fn relative_resolves_to_today() {
        let date = resolve("3 days ago").unwrap();
        let today = Local::now().date_naive();
        assert_eq!((date.year, date.month, date.day), (today.year(), today.month(), today.day()));
    }

    #[test]
    fn garbage_is_absent() {
        assert_eq!(resolve("soon"), None);
        assert_eq!(resolve("2024-13-40 99:99"), None);
    }
}
