use serde::Serialize;

/// A related word listed on a headword page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Entry {
    pub text: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct WordOfDay {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meanings: Option<Vec<Meaning>>,
}

impl WordOfDay {
    /// True when none of the page regions could be found.
    pub fn is_empty(&self) -> bool {
        self.word.is_none() && self.image.is_none() && self.meanings.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Meaning {
    pub definition: String,
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Definition {
    pub meaning: String,
    pub examples: Vec<String>,
}
