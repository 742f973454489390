//! JSON deserialization structures for reading-platform exports.
//!
//! This module provides intermediate structures for deserializing the
//! platform's export JSON into our domain type ([`Highlight`]).

use marginalia_core::Highlight;
use marginalia_error::{ImportError, ImportErrorKind};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

/// One highlight record as the platform exports it.
///
/// Every field is optional on the wire: conversion fills missing identity
/// fields with empty strings and drops blank optional fields, so one
/// damaged record cannot fail the whole file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawHighlight {
    /// Platform identity of the highlight, e.g. `"9781000000001:12"`.
    pub pk: Option<String>,
    /// Highlighted passage text.
    pub quote: Option<String>,
    /// The reader's own note attached to the highlight.
    pub text: Option<String>,
    /// Chapter the highlight belongs to.
    pub chapter_title: Option<String>,
    /// URL of the chapter page containing the highlight.
    pub chapter_url: Option<String>,
    /// Book cover artwork URL.
    pub cover_url: Option<String>,
    /// ISBN-like identifier of the containing book.
    pub epub_identifier: Option<String>,
    /// Display title of the containing book.
    pub epub_title: Option<String>,
    /// ISO-8601 modification timestamp.
    pub last_modified_time: Option<String>,
    /// Highlight color tag.
    pub color: Option<String>,
    /// Alternate location label, unused by rendering.
    pub location: Option<String>,
}

impl RawHighlight {
    /// Convert a wire record into the domain [`Highlight`].
    pub fn into_highlight(self) -> Highlight {
        Highlight {
            id: self.pk.unwrap_or_default(),
            quote: self.quote.unwrap_or_default(),
            note: blank_to_none(self.text),
            chapter_title: blank_to_none(self.chapter_title),
            chapter_url: self.chapter_url.unwrap_or_default(),
            cover_url: blank_to_none(self.cover_url),
            book_id: self.epub_identifier.unwrap_or_default(),
            book_title: blank_to_none(self.epub_title),
            last_modified: blank_to_none(self.last_modified_time),
            color: blank_to_none(self.color),
            location: blank_to_none(self.location),
        }
    }
}

/// Drop blank optional strings so downstream fallbacks apply uniformly.
fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// A complete export file from the reading platform.
///
/// Only `results` is load-bearing. The export script also emits `count`,
/// `exported_at`, and `books`, which are carried for inspection output.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportFile {
    /// All exported highlight records, in export order.
    pub results: Vec<RawHighlight>,
    /// Record count claimed by the exporter.
    pub count: Option<u64>,
    /// When the export was produced.
    pub exported_at: Option<String>,
    /// Number of distinct books claimed by the exporter.
    pub books: Option<u64>,
}

impl ExportFile {
    /// Loads an export from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The JSON is invalid or has no `results` array
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ImportError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ImportError::new(ImportErrorKind::FileRead(e.to_string())))?;

        content.parse()
    }

    /// Number of highlight records in the export.
    pub fn highlight_count(&self) -> usize {
        self.results.len()
    }

    /// Convert all wire records into domain highlights, in file order.
    ///
    /// A `count` that disagrees with the number of records logs a warning
    /// and is otherwise ignored.
    pub fn into_highlights(self) -> Vec<Highlight> {
        if let Some(count) = self.count
            && count as usize != self.results.len()
        {
            warn!(
                claimed = count,
                actual = self.results.len(),
                "Export count disagrees with results length"
            );
        }

        let highlights: Vec<Highlight> = self
            .results
            .into_iter()
            .map(RawHighlight::into_highlight)
            .collect();

        debug!(records = highlights.len(), "Parsed export records");
        highlights
    }
}

impl FromStr for ExportFile {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
            .map_err(|e| ImportError::new(ImportErrorKind::JsonParse(e.to_string())))
    }
}
