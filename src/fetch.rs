use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use log::{debug, warn};
use reqwest::{Client, Url};

use crate::constants::MAX_RETRIES;
use crate::error::SearchError;
use crate::search::Photo;

/// A generation ticket taken when a search starts. A ticket that is no
/// longer current marks a superseded search whose results must be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// One HTTP session: the shared client plus the counter that guards
/// against late completions of superseded searches.
pub struct SearchSession {
    client: Client,
    generation: AtomicU64,
}

impl SearchSession {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            generation: AtomicU64::new(0),
        }
    }

    /// Starts a new search, superseding any still in flight.
    pub fn begin_search(&self) -> Generation {
        Generation(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Generation) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    fn check_current(&self, ticket: Generation) -> Result<(), SearchError> {
        if self.is_current(ticket) {
            Ok(())
        } else {
            Err(SearchError::Network(
                "request cancelled: superseded by a newer search".to_string(),
            ))
        }
    }

    /// One search call: GET the query URL and pull the photo list out of
    /// the payload.
    pub async fn run_search(
        &self,
        url: Url,
        ticket: Generation,
    ) -> Result<Vec<Photo>, SearchError> {
        debug!("GET {}", url);
        let body = self.get_bytes(url, ticket).await?;
        parse_photo_list(&body)
    }

    /// Second fetch: the chosen photo's image bytes.
    pub async fn fetch_image(&self, url: &str, ticket: Generation) -> Result<Vec<u8>, SearchError> {
        let url = Url::parse(url).map_err(|err| SearchError::Parse(err.to_string()))?;
        self.get_bytes(url, ticket).await
    }

    /// GET with bounded retry and exponential backoff. Only network-class
    /// failures (transport, timeout, 5xx) are retried; other non-success
    /// statuses fail immediately. The generation ticket is re-checked
    /// around every await so a stale search never returns bytes.
    async fn get_bytes(&self, url: Url, ticket: Generation) -> Result<Vec<u8>, SearchError> {
        let mut last_error = None;

        for attempt in 0..=MAX_RETRIES {
            if attempt > 0 {
                let wait = Duration::from_secs(2u64.pow(attempt - 1));
                tokio::time::sleep(wait).await;
                warn!("retry {} for {}", attempt, url);
            }
            self.check_current(ticket)?;

            match self.client.get(url.clone()).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        match response.bytes().await {
                            Ok(body) => {
                                self.check_current(ticket)?;
                                return Ok(body.to_vec());
                            }
                            Err(err) => {
                                last_error = Some(SearchError::Network(err.to_string()));
                            }
                        }
                    } else if status.is_server_error() {
                        last_error = Some(SearchError::Network(format!("HTTP {}", status)));
                    } else {
                        return Err(SearchError::Network(format!("HTTP {}", status)));
                    }
                }
                Err(err) => {
                    last_error = Some(SearchError::Network(err.to_string()));
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| SearchError::Network("request failed with no response".to_string())))
    }
}

/// Malformed JSON is a parse failure; a missing or non-list `photos.photo`
/// path reads as an empty result, never a crash.
pub fn parse_photo_list(body: &[u8]) -> Result<Vec<Photo>, SearchError> {
    let json: serde_json::Value =
        serde_json::from_slice(body).map_err(|err| SearchError::Parse(err.to_string()))?;

    let records = match json.pointer("/photos/photo").and_then(|v| v.as_array()) {
        Some(records) => records.clone(),
        None => return Ok(Vec::new()),
    };

    records
        .into_iter()
        .map(|record| {
            serde_json::from_value(record).map_err(|err| SearchError::Parse(err.to_string()))
        })
        .collect()
}
