use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use base64::Engine;
use reqwest::{Response, StatusCode};
use tracing::{debug, info};

use super::messages::{
    AuthResponse, ExportRequest, ExportResponse, Recording, RecordingListResponse, Tag,
    TagListResponse,
};
use super::service::{ArtifactSource, RecordingDirectory, SessionProvider};
use crate::artifact::ArtifactFormat;
use crate::config::ApiConfig;
use crate::error::{ExportError, FetchError};

/// HTTP client for the remote recording service
///
/// Holds the access token obtained by [`SessionProvider::authenticate`]; every
/// other call fails with [`ExportError::NotAuthenticated`] until then.
pub struct PlaudClient {
    http: reqwest::Client,
    api: ApiConfig,
    access_token: Option<String>,
}

impl PlaudClient {
    pub fn new(api: ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            api,
            access_token: None,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api.base_url.trim_end_matches('/'), path)
    }

    fn recording_url(&self, template: &str, recording_id: &str) -> String {
        self.url(&template.replace("{id}", recording_id))
    }

    fn token(&self) -> Result<&str> {
        self.access_token
            .as_deref()
            .ok_or_else(|| ExportError::NotAuthenticated.into())
    }

    async fn get(&self, url: &str) -> Result<Response> {
        let response = self
            .http
            .get(url)
            .bearer_auth(self.token()?)
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?;

        ensure_success(response, url).await
    }

    async fn fetch_document(
        &self,
        template: &str,
        recording_id: &str,
        format: ArtifactFormat,
    ) -> Result<String, FetchError> {
        let url = self.recording_url(template, recording_id);
        let body = ExportRequest {
            file_id: recording_id.to_string(),
            format: format.extension().to_string(),
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(self.token()?)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("POST {} failed", url))?;
        let response = ensure_success(response, &url).await?;

        let export: ExportResponse = response
            .json()
            .await
            .with_context(|| format!("Invalid export response from {}", url))?;

        match export.data {
            Some(data) if !data.trim().is_empty() => Ok(data),
            _ => Err(FetchError::Empty),
        }
    }
}

async fn ensure_success(response: Response, url: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(anyhow!("{} returned {}: {}", url, status, body.trim()))
}

#[async_trait::async_trait]
impl SessionProvider for PlaudClient {
    async fn authenticate(&mut self, username: &str, password: &str) -> Result<String> {
        let url = self.url(&self.api.endpoints.auth);
        info!("Authenticating as {}", username);

        let response = self
            .http
            .post(&url)
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .with_context(|| format!("POST {} failed", url))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let reason = format!("server returned {}", status);
            return Err(ExportError::AuthenticationFailed(reason).into());
        }
        let response = ensure_success(response, &url).await?;

        let auth: AuthResponse = response
            .json()
            .await
            .context("Invalid authentication response")?;

        let token = auth
            .access_token
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                ExportError::AuthenticationFailed("no access token returned".to_string())
            })?;

        self.access_token = Some(token.clone());
        info!("Authenticated successfully");

        Ok(token)
    }
}

#[async_trait::async_trait]
impl RecordingDirectory for PlaudClient {
    async fn list_recordings(&self) -> Result<Vec<Recording>> {
        let url = self.url(&self.api.endpoints.recordings);
        let list: RecordingListResponse = self
            .get(&url)
            .await?
            .json()
            .await
            .context("Invalid recording list response")?;

        debug!("Listed {} recordings", list.data_file_list.len());
        Ok(list.data_file_list)
    }

    async fn list_tags(&self) -> Result<Vec<Tag>> {
        let url = self.url(&self.api.endpoints.tags);
        let list: TagListResponse = self
            .get(&url)
            .await?
            .json()
            .await
            .context("Invalid tag list response")?;

        debug!("Listed {} tags", list.data_filetag_list.len());
        Ok(list.data_filetag_list)
    }
}

#[async_trait::async_trait]
impl ArtifactSource for PlaudClient {
    async fn fetch_audio(&self, recording_id: &str) -> Result<String, FetchError> {
        let url = self.recording_url(&self.api.endpoints.audio, recording_id);
        let bytes = self
            .get(&url)
            .await?
            .bytes()
            .await
            .with_context(|| format!("Failed to read audio body from {}", url))?;

        if bytes.is_empty() {
            return Err(FetchError::Empty);
        }

        // Audio arrives raw; encode so every artifact crosses the trait the same way
        Ok(base64::engine::general_purpose::STANDARD.encode(&bytes))
    }

    async fn fetch_transcript(
        &self,
        recording_id: &str,
        format: ArtifactFormat,
    ) -> Result<String, FetchError> {
        self.fetch_document(&self.api.endpoints.transcript, recording_id, format)
            .await
    }

    async fn fetch_summary(
        &self,
        recording_id: &str,
        format: ArtifactFormat,
    ) -> Result<String, FetchError> {
        self.fetch_document(&self.api.endpoints.summary, recording_id, format)
            .await
    }
}
