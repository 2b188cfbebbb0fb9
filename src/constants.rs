pub const API_SCHEME: &str = "https";
pub const API_HOST: &str = "api.flickr.com";
pub const API_PATH: &str = "/services/rest";

pub const SEARCH_METHOD: &str = "flickr.photos.search";
pub const RESPONSE_FORMAT: &str = "json";
pub const DISABLE_JSON_CALLBACK: &str = "1";
pub const MEDIUM_URL: &str = "url_m";

pub const KEY_METHOD: &str = "method";
pub const KEY_API_KEY: &str = "api_key";
pub const KEY_TEXT: &str = "text";
pub const KEY_BBOX: &str = "bbox";
pub const KEY_FORMAT: &str = "format";
pub const KEY_NO_JSON_CALLBACK: &str = "nojsoncallback";
pub const KEY_EXTRAS: &str = "extras";

pub const API_KEY_VAR: &str = "FLICKR_API_KEY";

pub const SEARCH_LAT_RANGE: (f64, f64) = (-90.0, 90.0);
pub const SEARCH_LON_RANGE: (f64, f64) = (-180.0, 180.0);
pub const BBOX_HALF_WIDTH: f64 = 1.0;
pub const BBOX_HALF_HEIGHT: f64 = 1.0;

pub const REQUEST_TIMEOUT_SECS: u64 = 30;
/// Network-class failures only; 4xx and parse failures are never retried.
pub const MAX_RETRIES: u32 = 2;

pub const CMD_GEO: &str = "g";
