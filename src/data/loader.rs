//! Viewer payload loading: page-provided global first, then a JSON file.

use super::models::ViewerData;
use dioxus::logger::tracing::{info, warn};
use thiserror::Error;

/// Relative location of the payload when the page does not define `window.APP_DATA`.
pub const DATA_URL: &str = "data.json";

#[cfg(not(target_arch = "wasm32"))]
const DATA_PATH_ENV: &str = "SYNCSCRIPT_DATA";

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Viewer data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to fetch viewer data from {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("No viewer data was provided by the page")]
    Missing,

    #[error("Failed to read viewer data: {0}")]
    Io(#[from] std::io::Error),
}

pub fn parse_viewer_data(raw: &str) -> Result<ViewerData, DataError> {
    let data: ViewerData = serde_json::from_str(raw)?;
    Ok(data)
}

#[cfg(target_arch = "wasm32")]
pub async fn load_viewer_data() -> Result<ViewerData, DataError> {
    match read_page_global() {
        Ok(data) => {
            info!(
                transcript = data.transcript.len(),
                commentary = data.commentary.len(),
                "loaded viewer data from window.APP_DATA"
            );
            return Ok(data);
        }
        Err(DataError::Missing) => {}
        Err(err) => {
            warn!("window.APP_DATA is unusable, falling back to {DATA_URL}: {err}");
        }
    }

    let data = fetch_data_file(DATA_URL).await?;
    info!(
        transcript = data.transcript.len(),
        commentary = data.commentary.len(),
        "loaded viewer data from {DATA_URL}"
    );
    Ok(data)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn load_viewer_data() -> Result<ViewerData, DataError> {
    let path = std::env::var(DATA_PATH_ENV).unwrap_or_else(|_| DATA_URL.to_string());
    let raw = std::fs::read_to_string(&path).map_err(|err| {
        warn!("failed to read viewer data at {path}: {err}");
        err
    })?;
    let data = parse_viewer_data(&raw)?;
    info!(
        transcript = data.transcript.len(),
        commentary = data.commentary.len(),
        "loaded viewer data from {path}"
    );
    Ok(data)
}

#[cfg(target_arch = "wasm32")]
fn read_page_global() -> Result<ViewerData, DataError> {
    let window = web_sys::window().ok_or(DataError::Missing)?;
    let value = js_sys::Reflect::get(&window, &"APP_DATA".into()).map_err(|_| DataError::Missing)?;
    if value.is_null() || value.is_undefined() {
        return Err(DataError::Missing);
    }
    let json = js_sys::JSON::stringify(&value).map_err(|_| DataError::Missing)?;
    parse_viewer_data(&String::from(json))
}

#[cfg(target_arch = "wasm32")]
async fn fetch_data_file(url: &str) -> Result<ViewerData, DataError> {
    let fetch_error = |reason: String| DataError::Fetch {
        url: url.to_string(),
        reason,
    };

    let response = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|err| fetch_error(err.to_string()))?;
    if !response.ok() {
        return Err(fetch_error(format!("HTTP {}", response.status())));
    }
    let raw = response
        .text()
        .await
        .map_err(|err| fetch_error(err.to_string()))?;
    parse_viewer_data(&raw)
}
