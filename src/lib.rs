pub mod assistant;
pub mod backend;
pub mod config;
pub mod extractor;
pub mod models;
pub mod render;
pub mod telemetry;

pub use assistant::{Assistant, AssistantTurn};
pub use extractor::{extract, ExtractionReport, ListingExtractor};
pub use models::{ExtractionResult, Listing};
