/// Emphasized label words recognized inside an entry block.
///
/// Every field accepts several aliases so replies written in either
/// language are understood by the same extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLabels {
    pub price: Vec<String>,
    pub bedrooms: Vec<String>,
    pub bathrooms: Vec<String>,
    pub location: Vec<String>,
    /// Alt text of the markdown image carrying the photo
    pub image_alt: Vec<String>,
}

impl FieldLabels {
    /// Labels used by the French-speaking assistant
    pub fn french() -> Self {
        Self {
            price: words(&["Prix"]),
            bedrooms: words(&["Chambres"]),
            bathrooms: words(&["Salles de bain"]),
            location: words(&["Localisation"]),
            image_alt: words(&["Photo"]),
        }
    }

    pub fn english() -> Self {
        Self {
            price: words(&["Price"]),
            bedrooms: words(&["Bedrooms"]),
            bathrooms: words(&["Bathrooms"]),
            location: words(&["Location"]),
            image_alt: words(&["Photo"]),
        }
    }

    /// Union of both vocabularies, without duplicates
    pub fn merged(mut self, other: Self) -> Self {
        extend_unique(&mut self.price, other.price);
        extend_unique(&mut self.bedrooms, other.bedrooms);
        extend_unique(&mut self.bathrooms, other.bathrooms);
        extend_unique(&mut self.location, other.location);
        extend_unique(&mut self.image_alt, other.image_alt);
        self
    }
}

impl Default for FieldLabels {
    fn default() -> Self {
        Self::french().merged(Self::english())
    }
}

/// Named vocabulary, as selected from configuration or the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelSet {
    French,
    English,
    #[default]
    Any,
}

impl LabelSet {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "fr" | "french" => Some(Self::French),
            "en" | "english" => Some(Self::English),
            "any" | "all" => Some(Self::Any),
            _ => None,
        }
    }

    pub fn labels(self) -> FieldLabels {
        match self {
            Self::French => FieldLabels::french(),
            Self::English => FieldLabels::english(),
            Self::Any => FieldLabels::default(),
        }
    }
}

fn words(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn extend_unique(target: &mut Vec<String>, extra: Vec<String>) {
    for word in extra {
        if !target.contains(&word) {
            target.push(word);
        }
    }
}
