use crate::constants::{API_KEY_VAR, CMD_GEO, MEDIUM_URL};
use crate::error::SearchError;
use crate::fetch::SearchSession;
use crate::query::{api_base_url, build_search_parameters, url_from_parameters};
use crate::search::{Photo, SearchOutcome, SearchRequest};
use crate::validate::{validate_coordinates, validate_phrase};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use mime_sniffer::MimeTypeSniffer;
use rand::Rng;
use std::{
    env,
    error::Error,
    fs,
    path::{Path, PathBuf},
};

pub fn create_spinner(color: &str, message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template(&format!("{{spinner:.{}}} {{msg}}", color)),
    );
    spinner.enable_steady_tick(100);
    spinner.set_message(message);

    spinner
}

/// Maps the raw arguments onto a validated search request. Validation runs
/// before anything touches the network.
pub fn request_from_args(args: &[String]) -> Result<SearchRequest, SearchError> {
    if args[1] == CMD_GEO {
        if args.len() != 4 {
            return Err(SearchError::Validation(
                "Lat should be [-90, 90].\nLon should be [-180, 180].".to_string(),
            ));
        }
        let (latitude, longitude) = validate_coordinates(&args[2], &args[3])?;
        Ok(SearchRequest::Coordinates {
            latitude,
            longitude,
        })
    } else {
        let phrase = validate_phrase(&args[1..].join(" "))?;
        Ok(SearchRequest::Phrase(phrase))
    }
}

pub fn api_key_from_env() -> Result<String, SearchError> {
    env::var(API_KEY_VAR).map_err(|_| {
        SearchError::Validation(format!("Set {} in the environment or a .env file.", API_KEY_VAR))
    })
}

/// Uniform pick over the photo list; an empty list is an explicit outcome,
/// never an out-of-bounds index.
pub fn pick_random_photo(photos: &[Photo]) -> Result<&Photo, SearchError> {
    if photos.is_empty() {
        return Err(SearchError::EmptyResult);
    }
    let index = rand::thread_rng().gen_range(0..photos.len());
    debug!("picked photo {} of {}", index + 1, photos.len());
    Ok(&photos[index])
}

/// Medium-size URL of the chosen record.
pub fn medium_url(photo: &Photo) -> Result<&str, SearchError> {
    photo
        .url_m
        .as_deref()
        .ok_or(SearchError::MissingField(MEDIUM_URL))
}

/// The CLI's image view: sniff the bytes, refuse anything that is not an
/// image, and save under the photo id with the sniffed type's extension.
pub fn save_image(photo: &Photo, bytes: &[u8], directory: &Path) -> Result<PathBuf, SearchError> {
    let media_type = bytes
        .sniff_mime_type()
        .ok_or_else(|| SearchError::ImageDecode("unrecognized content".to_string()))?;
    if !media_type.starts_with("image/") {
        return Err(SearchError::ImageDecode(format!(
            "sniffed as {}",
            media_type
        )));
    }

    let extension = mime_guess::get_mime_extensions_str(media_type)
        .and_then(|extensions| extensions.last())
        .copied()
        .unwrap_or("jpg");
    let stem = if photo.id.is_empty() {
        "photo"
    } else {
        photo.id.as_str()
    };
    let path = directory.join(format!("{}.{}", stem, extension));
    fs::write(&path, bytes)
        .map_err(|err| SearchError::ImageDecode(format!("could not save image: {}", err)))?;
    Ok(path)
}

/// The whole flow for one validated request: build the URL, search, pick a
/// random photo, fetch its bytes, save. Each step's failure carries its own
/// error kind so the caller can show the right status line.
pub async fn run_search_flow(
    session: &SearchSession,
    request: &SearchRequest,
    api_key: &str,
    base_url: &str,
    output_dir: &Path,
) -> Result<SearchOutcome, SearchError> {
    let ticket = session.begin_search();

    let parameters = build_search_parameters(request, api_key);
    let url = url_from_parameters(base_url, &parameters)?;

    let photos = session.run_search(url, ticket).await?;
    let photo = pick_random_photo(&photos)?;
    let image_url = medium_url(photo)?;
    info!("fetching image {}", image_url);

    let bytes = session.fetch_image(image_url, ticket).await?;
    let saved_path = save_image(photo, &bytes, output_dir)?;

    Ok(SearchOutcome {
        title: photo.title.clone(),
        image_url: image_url.to_string(),
        saved_path,
    })
}

/// Every failure ends as a short status line; the process stays clean for
/// the next invocation.
pub async fn process_command(
    client: &reqwest::Client,
    args: &[String],
) -> Result<(), Box<dyn Error>> {
    let request = match request_from_args(args) {
        Ok(request) => request,
        Err(err) => {
            println!("{}", err.status_message().red());
            return Ok(());
        }
    };
    let api_key = match api_key_from_env() {
        Ok(key) => key,
        Err(err) => {
            println!("{}", err.status_message().red());
            return Ok(());
        }
    };

    let session = SearchSession::new(client.clone());
    let spinner = create_spinner("cyan", "Searching...".to_string());
    let result = run_search_flow(
        &session,
        &request,
        &api_key,
        &api_base_url(),
        Path::new("."),
    )
    .await;
    spinner.finish_and_clear();

    match result {
        Ok(outcome) => {
            if !outcome.title.is_empty() {
                println!("{}", outcome.title.bold());
            }
            println!("{}", outcome.image_url);
            println!("Saved to {}", outcome.saved_path.display());
            println!("{}", "Done!".green());
        }
        Err(err) => println!("{}", err.status_message().red()),
    }

    Ok(())
}
