use crate::models::Listing;
use serde::Serialize;

/// Fields whose absence disqualifies a whole entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RequiredField {
    Price,
    BedroomCount,
    BathroomCount,
    Location,
}

/// Everything found for one entry block, before the validity gate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub title: &'a str,
    pub price: Option<&'a str>,
    pub bedroom_count: Option<u32>,
    pub bathroom_count: Option<u32>,
    pub location: Option<&'a str>,
    pub image_url: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Keep(Listing),
    Drop { missing: Vec<RequiredField> },
}

/// Keep a candidate only when every required field matched; never emit a
/// partial listing.
pub fn validate_required_fields(candidate: &Candidate<'_>) -> Verdict {
    match (
        candidate.price,
        candidate.bedroom_count,
        candidate.bathroom_count,
        candidate.location,
    ) {
        (Some(price), Some(bedroom_count), Some(bathroom_count), Some(location)) => {
            Verdict::Keep(Listing {
                title: candidate.title.to_string(),
                price: price.to_string(),
                bedroom_count,
                bathroom_count,
                location: location.to_string(),
                image_url: candidate.image_url.unwrap_or_default().to_string(),
            })
        }
        _ => {
            let mut missing = Vec::new();
            if candidate.price.is_none() {
                missing.push(RequiredField::Price);
            }
            if candidate.bedroom_count.is_none() {
                missing.push(RequiredField::BedroomCount);
            }
            if candidate.bathroom_count.is_none() {
                missing.push(RequiredField::BathroomCount);
            }
            if candidate.location.is_none() {
                missing.push(RequiredField::Location);
            }
            Verdict::Drop { missing }
        }
    }
}
