//! Reading-order sequencing for a single book's highlights.

use crate::Highlight;
use chrono::{DateTime, NaiveDateTime};
use tracing::debug;

/// Sort one book's highlights into reading order.
///
/// The strategy is chosen once for the whole bucket: if any id carries a
/// `:`-delimited position token, every record sorts by its numeric position
/// (records without a parseable position count as `0` and sort to the
/// front). Only when no id carries a token does the bucket fall back to
/// last-modified timestamps, with unparseable or absent timestamps sorting
/// before every parseable one. Both sorts are stable, so ties keep their
/// original relative order.
pub fn reading_order(mut bucket: Vec<Highlight>) -> Vec<Highlight> {
    let by_position = bucket.iter().any(|h| h.id.contains(':'));

    if by_position {
        debug!(count = bucket.len(), "Sequencing by position token");
        bucket.sort_by(|a, b| position_of(a).total_cmp(&position_of(b)));
    } else {
        debug!(count = bucket.len(), "Sequencing by last-modified timestamp");
        bucket.sort_by_key(|h| h.last_modified.as_deref().and_then(parse_modified));
    }

    bucket
}

/// Numeric position encoded in a highlight id.
///
/// The token is the second `:`-delimited segment, parsed as an integer
/// first and as a float second. Missing or malformed tokens yield `0`.
fn position_of(highlight: &Highlight) -> f64 {
    let Some(token) = highlight.position_token() else {
        return 0.0;
    };

    if let Ok(position) = token.parse::<i64>() {
        return position as f64;
    }

    token.parse::<f64>().unwrap_or(0.0)
}

/// Parse an ISO-ish last-modified timestamp.
///
/// Accepts RFC 3339 forms (with `Z` or a numeric offset) as well as bare
/// date-times with or without fractional seconds.
fn parse_modified(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HighlightBuilder;

    fn positioned(id: &str) -> Highlight {
        HighlightBuilder::default()
            .id(id)
            .quote("passage")
            .build()
            .unwrap()
    }

    fn timestamped(id: &str, modified: &str) -> Highlight {
        HighlightBuilder::default()
            .id(id)
            .quote("passage")
            .last_modified(modified)
            .build()
            .unwrap()
    }

    fn ids(bucket: &[Highlight]) -> Vec<&str> {
        bucket.iter().map(|h| h.id.as_str()).collect()
    }

    #[test]
    fn test_position_mode_sorts_ascending() {
        let bucket = vec![positioned("x:30"), positioned("x:10"), positioned("x:20")];
        let ordered = reading_order(bucket);
        assert_eq!(ids(&ordered), vec!["x:10", "x:20", "x:30"]);
    }

    #[test]
    fn test_position_mode_accepts_float_tokens() {
        let bucket = vec![positioned("x:3"), positioned("x:2.5"), positioned("x:2")];
        let ordered = reading_order(bucket);
        assert_eq!(ids(&ordered), vec!["x:2", "x:2.5", "x:3"]);
    }

    #[test]
    fn test_malformed_token_sorts_to_front() {
        let bucket = vec![positioned("x:10"), positioned("x:oops"), positioned("x:5")];
        let ordered = reading_order(bucket);
        assert_eq!(ids(&ordered), vec!["x:oops", "x:5", "x:10"]);
    }

    #[test]
    fn test_position_ties_keep_input_order() {
        let bucket = vec![
            positioned("a:7"),
            positioned("b:7"),
            positioned("c:1"),
            positioned("d:7"),
        ];
        let ordered = reading_order(bucket);
        assert_eq!(ids(&ordered), vec!["c:1", "a:7", "b:7", "d:7"]);
    }

    #[test]
    fn test_one_tokened_id_forces_position_mode() {
        // Records without a token count as position 0 and lead the bucket.
        let bucket = vec![positioned("x:5"), positioned("plain"), positioned("other")];
        let ordered = reading_order(bucket);
        assert_eq!(ids(&ordered), vec!["plain", "other", "x:5"]);
    }

    #[test]
    fn test_timestamp_mode_sorts_ascending() {
        let bucket = vec![
            timestamped("c", "2024-01-03T00:00:00Z"),
            timestamped("a", "2024-01-01T00:00:00Z"),
            timestamped("b", "2024-01-02T00:00:00Z"),
        ];
        let ordered = reading_order(bucket);
        assert_eq!(ids(&ordered), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unparseable_timestamps_sort_first_in_input_order() {
        let bucket = vec![
            timestamped("late", "2024-06-01T00:00:00Z"),
            timestamped("bad1", "not a date"),
            timestamped("early", "2024-01-01T00:00:00Z"),
            timestamped("bad2", "also not a date"),
        ];
        let ordered = reading_order(bucket);
        assert_eq!(ids(&ordered), vec!["bad1", "bad2", "early", "late"]);
    }

    #[test]
    fn test_missing_timestamp_sorts_first() {
        let bucket = vec![
            timestamped("dated", "2024-01-01T00:00:00Z"),
            positioned("undated"),
        ];
        let ordered = reading_order(bucket);
        assert_eq!(ids(&ordered), vec!["undated", "dated"]);
    }

    #[test]
    fn test_timestamp_offsets_and_fractions_parse() {
        assert!(parse_modified("2024-01-15T14:30:00Z").is_some());
        assert!(parse_modified("2024-01-15T14:30:00.123Z").is_some());
        assert!(parse_modified("2024-01-15T14:30:00+02:00").is_some());
        assert!(parse_modified("2024-01-15T14:30:00").is_some());
        assert!(parse_modified("not a timestamp").is_none());
    }

    #[test]
    fn test_empty_bucket() {
        assert!(reading_order(Vec::new()).is_empty());
    }
}
