use crate::models::{ExtractionResult, Listing};
use std::fmt::Write;

/// Closing line shown under a set of listing cards
pub const FOLLOW_UP: &str = "Si vous souhaitez plus d'informations sur l'un de ces appartements ou d'autres options, n'hésitez pas à demander !";

const NO_IMAGE: &str = "Image non disponible";

/// How an assistant reply should be displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply<'a> {
    Listings(&'a ExtractionResult),
    /// Nothing recognized, show the original text verbatim
    Prose(&'a str),
}

impl<'a> Reply<'a> {
    pub fn classify(text: &'a str, result: &'a ExtractionResult) -> Self {
        if result.is_prose() {
            Reply::Prose(text)
        } else {
            Reply::Listings(result)
        }
    }
}

/// Render a reply for a terminal.
pub fn render_text(text: &str, result: &ExtractionResult) -> String {
    match Reply::classify(text, result) {
        Reply::Prose(prose) => prose.to_string(),
        Reply::Listings(result) => {
            let mut out = String::new();
            if !result.introduction.is_empty() {
                out.push_str(&result.introduction);
                out.push_str("\n\n");
            }
            for (i, listing) in result.listings.iter().enumerate() {
                out.push_str(&render_card(i + 1, listing));
                out.push('\n');
            }
            out.push_str(FOLLOW_UP);
            out
        }
    }
}

pub fn render_card(index: usize, listing: &Listing) -> String {
    let mut card = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(card, "{}. {} ({})", index, listing.title, listing.price);
    let _ = writeln!(
        card,
        "   {} {} · {} {} de bain",
        listing.bedroom_count,
        plural(listing.bedroom_count, "chambre", "chambres"),
        listing.bathroom_count,
        plural(listing.bathroom_count, "salle", "salles"),
    );
    let _ = writeln!(card, "   {}", listing.location);
    if listing.image_url.is_empty() {
        let _ = writeln!(card, "   {}", NO_IMAGE);
    } else {
        let _ = writeln!(card, "   {}", listing.image_url);
    }
    card
}

fn plural<'a>(count: u32, one: &'a str, many: &'a str) -> &'a str {
    if count > 1 {
        many
    } else {
        one
    }
}
