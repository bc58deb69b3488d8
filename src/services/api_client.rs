use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{DetailRecord, Family, ItemId, ListRow};

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request to {path} failed: {message}")]
    Transport { path: String, message: String },
    #[error("{path} returned status {status}")]
    Status { path: String, status: u16 },
    #[error("could not decode {path}: {message}")]
    Decode { path: String, message: String },
}

impl FetchError {
    pub fn path(&self) -> &str {
        match self {
            FetchError::Transport { path, .. }
            | FetchError::Status { path, .. }
            | FetchError::Decode { path, .. } => path,
        }
    }
}

/// Raw JSON access to the REST backend. Paths are relative to
/// [`Backend::base_url`] and start with `/`.
#[allow(async_fn_in_trait)]
pub trait Backend {
    fn base_url(&self) -> &str;

    async fn get_json(&self, path: &str) -> Result<Value, FetchError>;
}

// ============================================================================
// HTTP BACKEND
// ============================================================================

pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Without a timeout the transport defaults apply.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, String> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl Backend for HttpBackend {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json(&self, path: &str) -> Result<Value, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                path: path.to_string(),
                status: response.status().as_u16(),
            });
        }

        response.json::<Value>().await.map_err(|e| FetchError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}

// ============================================================================
// TYPED API
// ============================================================================

/// Typed view of the backend. Every response is normalized here, so
/// callers always get sequences: a payload whose `data` or `images` is not
/// an array yields an empty list, and rows that fail to parse are skipped.
pub struct Api<B> {
    backend: B,
}

impl<B: Backend> Api<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn base_url(&self) -> &str {
        self.backend.base_url().trim_end_matches('/')
    }

    /// URL of an image blob. The blob itself is never fetched here.
    pub fn image_url(&self, family: Family, image_id: &ItemId) -> String {
        format!(
            "{}/{}/image/{}/blob",
            self.base_url(),
            family,
            urlencoding::encode(image_id.as_str())
        )
    }

    /// `GET /{family}`. The backend serves rows newest-first; callers that
    /// pick "the latest" rely on that ordering.
    pub async fn list(&self, family: Family) -> Result<Vec<ListRow>, FetchError> {
        let path = format!("/{}", family);
        let json = self.backend.get_json(&path).await?;
        Ok(rows_from(&json, &path))
    }

    /// `GET /events/previous`
    pub async fn previous_events(&self) -> Result<Vec<ListRow>, FetchError> {
        let path = "/events/previous";
        let json = self.backend.get_json(path).await?;
        Ok(rows_from(&json, path))
    }

    /// `GET /{family}/{id}`
    pub async fn detail(&self, family: Family, id: &ItemId) -> Result<DetailRecord, FetchError> {
        let path = format!("/{}/{}", family, urlencoding::encode(id.as_str()));
        let json = self.backend.get_json(&path).await?;
        Ok(detail_from(&json, &path))
    }
}

fn rows_from(json: &Value, path: &str) -> Vec<ListRow> {
    let Some(rows) = json.get("data").and_then(Value::as_array) else {
        warn!(path, "response has no data array, treating as empty");
        return Vec::new();
    };

    rows.iter()
        .filter_map(|row| match serde_json::from_value::<ListRow>(row.clone()) {
            Ok(row) => Some(row),
            Err(e) => {
                warn!(path, error = %e, "skipping malformed row");
                None
            }
        })
        .collect()
}

/// Events nest the entity under `event`; the other families return it
/// flat. Images always sit at the top level.
fn detail_from(json: &Value, path: &str) -> DetailRecord {
    let entity_json = match json.get("event") {
        Some(nested) if nested.is_object() => nested,
        _ => json,
    };
    let entity = match serde_json::from_value::<ListRow>(entity_json.clone()) {
        Ok(row) => Some(row),
        Err(e) => {
            debug!(path, error = %e, "detail response carries no entity");
            None
        }
    };

    let images = json
        .get("images")
        .and_then(Value::as_array)
        .map(|images| {
            images
                .iter()
                .filter_map(|image| image.get("id").and_then(ItemId::from_value))
                .collect()
        })
        .unwrap_or_default();

    DetailRecord { entity, images }
}
