use reqwest::Url;

use crate::constants::{
    API_HOST, API_PATH, API_SCHEME, BBOX_HALF_HEIGHT, BBOX_HALF_WIDTH, DISABLE_JSON_CALLBACK,
    KEY_API_KEY, KEY_BBOX, KEY_EXTRAS, KEY_FORMAT, KEY_METHOD, KEY_NO_JSON_CALLBACK, KEY_TEXT,
    MEDIUM_URL, RESPONSE_FORMAT, SEARCH_LAT_RANGE, SEARCH_LON_RANGE, SEARCH_METHOD,
};
use crate::error::SearchError;
use crate::search::SearchRequest;

/// The fixed endpoint, assembled from its components.
pub fn api_base_url() -> String {
    format!("{}://{}{}", API_SCHEME, API_HOST, API_PATH)
}

/// Parameter list for one search; built once, used once. The caller has
/// already validated the request.
pub fn build_search_parameters(request: &SearchRequest, api_key: &str) -> Vec<(String, String)> {
    let mut parameters = vec![
        (KEY_METHOD.to_string(), SEARCH_METHOD.to_string()),
        (KEY_API_KEY.to_string(), api_key.to_string()),
    ];
    match request {
        SearchRequest::Phrase(text) => {
            parameters.push((KEY_TEXT.to_string(), text.clone()));
        }
        SearchRequest::Coordinates {
            latitude,
            longitude,
        } => {
            parameters.push((KEY_BBOX.to_string(), bbox_string(*latitude, *longitude)));
        }
    }
    parameters.push((KEY_FORMAT.to_string(), RESPONSE_FORMAT.to_string()));
    parameters.push((
        KEY_NO_JSON_CALLBACK.to_string(),
        DISABLE_JSON_CALLBACK.to_string(),
    ));
    parameters.push((KEY_EXTRAS.to_string(), MEDIUM_URL.to_string()));
    parameters
}

/// Flickr bounding box: `min_lon,min_lat,max_lon,max_lat` around the search
/// point, corners clamped to the legal coordinate ranges.
pub fn bbox_string(latitude: f64, longitude: f64) -> String {
    let min_lon = (longitude - BBOX_HALF_WIDTH).max(SEARCH_LON_RANGE.0);
    let min_lat = (latitude - BBOX_HALF_HEIGHT).max(SEARCH_LAT_RANGE.0);
    let max_lon = (longitude + BBOX_HALF_WIDTH).min(SEARCH_LON_RANGE.1);
    let max_lat = (latitude + BBOX_HALF_HEIGHT).min(SEARCH_LAT_RANGE.1);
    format!(
        "{:.1},{:.1},{:.1},{:.1}",
        min_lon, min_lat, max_lon, max_lat
    )
}

/// GET URL with an encoded query string built from the parameter list.
/// Parameter order is irrelevant; each pair is independent.
pub fn url_from_parameters(
    base: &str,
    parameters: &[(String, String)],
) -> Result<Url, SearchError> {
    Url::parse_with_params(base, parameters).map_err(|err| SearchError::Parse(err.to_string()))
}
