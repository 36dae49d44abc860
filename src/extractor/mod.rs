//! Best-effort extraction of apartment listings from assistant text.
//!
//! The input is free-form generated prose that may contain a numbered list
//! of entries such as:
//!
//! ```text
//! 1. **Studio Centre**
//! **Prix**: 750€
//! **Chambres**: 1
//! **Salles de bain**: 1
//! **Localisation**: Centre-ville
//! ![Photo](https://example.com/studio.jpg)
//! ```
//!
//! Extraction never fails. Entries missing a required field are dropped and
//! text without any valid entry comes back with no listings, which callers
//! treat as plain prose.

pub mod fields;
pub mod labels;
pub mod policy;
pub mod scanner;

pub use labels::{FieldLabels, LabelSet};
pub use policy::{RequiredField, Verdict};

use crate::models::ExtractionResult;
use policy::Candidate;
use scanner::EntryBlock;
use serde::Serialize;

/// Extract listings using the default bilingual vocabulary.
pub fn extract(text: &str) -> ExtractionResult {
    ListingExtractor::new().extract(text)
}

/// Candidate entry that did not make it past the validity gate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedEntry {
    pub ordinal: String,
    pub title: String,
    pub missing: Vec<RequiredField>,
}

/// What the extractor saw, for callers that want to log silent drops
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionReport {
    pub headings: usize,
    pub dropped: Vec<DroppedEntry>,
}

impl ExtractionReport {
    /// Headings were present but none produced a listing
    pub fn all_dropped(&self) -> bool {
        self.headings > 0 && self.dropped.len() == self.headings
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListingExtractor {
    labels: FieldLabels,
}

impl ListingExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_labels(labels: FieldLabels) -> Self {
        Self { labels }
    }

    pub fn extract(&self, text: &str) -> ExtractionResult {
        self.extract_with_report(text).0
    }

    pub fn extract_with_report(&self, text: &str) -> (ExtractionResult, ExtractionReport) {
        let blocks = scanner::entry_blocks(text);
        let mut report = ExtractionReport {
            headings: blocks.len(),
            dropped: Vec::new(),
        };
        let mut listings = Vec::new();

        for block in &blocks {
            match policy::validate_required_fields(&self.candidate(block)) {
                Verdict::Keep(listing) => listings.push(listing),
                Verdict::Drop { missing } => report.dropped.push(DroppedEntry {
                    ordinal: block.heading.ordinal.to_string(),
                    title: block.heading.title.to_string(),
                    missing,
                }),
            }
        }

        if listings.is_empty() {
            return (ExtractionResult::default(), report);
        }

        let introduction = scanner::introduction(text, &blocks)
            .unwrap_or_default()
            .to_string();

        (
            ExtractionResult {
                introduction,
                listings,
            },
            report,
        )
    }

    fn candidate<'a>(&self, block: &EntryBlock<'a>) -> Candidate<'a> {
        let body = block.body;
        Candidate {
            title: block.heading.title,
            price: fields::labeled_text(body, &self.labels.price),
            bedroom_count: fields::labeled_count(body, &self.labels.bedrooms),
            bathroom_count: fields::labeled_count(body, &self.labels.bathrooms),
            location: fields::labeled_text(body, &self.labels.location),
            image_url: fields::image_url(body, &self.labels.image_alt),
        }
    }
}
