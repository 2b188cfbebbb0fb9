use serde::Deserialize;

/// One user-triggered search: a keyword phrase or a coordinate pair,
/// never both.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchRequest {
    Phrase(String),
    Coordinates { latitude: f64, longitude: f64 },
}

/// A photo record from the `photos.photo` array. Only the fields the app
/// reads; everything else in the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Photo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub url_m: Option<String>,
}

/// What one successful search leaves behind.
#[derive(Debug)]
pub struct SearchOutcome {
    pub title: String,
    pub image_url: String,
    pub saved_path: std::path::PathBuf,
}
