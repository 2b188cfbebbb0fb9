use crate::constants::{SEARCH_LAT_RANGE, SEARCH_LON_RANGE};
use crate::error::SearchError;

/// A phrase is valid iff it is non-empty after trimming.
pub fn validate_phrase(text: &str) -> Result<String, SearchError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SearchError::Validation("Phrase Empty.".to_string()));
    }
    Ok(trimmed.to_string())
}

/// Both fields must parse as finite numbers inside the legal ranges; any
/// failure invalidates the whole request.
pub fn validate_coordinates(lat_text: &str, lon_text: &str) -> Result<(f64, f64), SearchError> {
    let latitude = parse_in_range(lat_text, SEARCH_LAT_RANGE);
    let longitude = parse_in_range(lon_text, SEARCH_LON_RANGE);
    match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => Ok((latitude, longitude)),
        _ => Err(SearchError::Validation(
            "Lat should be [-90, 90].\nLon should be [-180, 180].".to_string(),
        )),
    }
}

fn parse_in_range(text: &str, (min, max): (f64, f64)) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    if value.is_finite() && value >= min && value <= max {
        Some(value)
    } else {
        None
    }
}
