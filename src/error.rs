use thiserror::Error;

/// One variant per way a search can stop short of showing a photo.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("{0}")]
    Validation(String),
    #[error("network request failed: {0}")]
    Network(String),
    #[error("could not parse search response: {0}")]
    Parse(String),
    #[error("no photos were returned")]
    EmptyResult,
    #[error("photo record has no `{0}` field")]
    MissingField(&'static str),
    #[error("fetched bytes are not a displayable image: {0}")]
    ImageDecode(String),
}

impl SearchError {
    /// Short status line shown to the user in place of the status label.
    pub fn status_message(&self) -> String {
        match self {
            SearchError::Validation(message) => message.clone(),
            SearchError::Network(_) => {
                "Search failed. Check your connection and try again.".to_string()
            }
            SearchError::Parse(_) => "Flickr returned something unexpected.".to_string(),
            SearchError::EmptyResult => "No photos found. Try again.".to_string(),
            SearchError::MissingField(field) => format!("Photo has no '{}' entry.", field),
            SearchError::ImageDecode(_) => "The photo could not be displayed.".to_string(),
        }
    }
}
