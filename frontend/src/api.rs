use analytics::models::{
    ChannelImportRequest, ChannelImportResponse, ChannelListResponse, VideoListResponse,
};
use analytics::query::{
    channel_path, channel_videos_path, channels_path, import_channel_path, ChannelQuery,
    VideoQuery,
};
use analytics::{ApiConfig, ApiError};
use gloo_net::http::{Request, Response};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use yew::prelude::*;

/// Thin client over the dashboard REST API. Built once from an [`ApiConfig`]
/// and shared through a `ContextProvider`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub async fn import_channel(
        &self,
        channel_url_or_id: &str,
    ) -> Result<ChannelImportResponse, ApiError> {
        let url = self.config.endpoint(&import_channel_path());
        let request_body = ChannelImportRequest {
            channel_url_or_id: channel_url_or_id.to_string(),
        };
        debug!("POST {url}");

        let response = Request::post(&url)
            .json(&request_body)
            .map_err(|e| ApiError::Network(format!("Request error: {e}")))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        handle_response(response).await
    }

    pub async fn get_channels(&self, query: &ChannelQuery) -> Result<ChannelListResponse, ApiError> {
        self.get(&channels_path(query)).await
    }

    pub async fn get_channel(&self, channel_id: i64) -> Result<ChannelImportResponse, ApiError> {
        self.get(&channel_path(channel_id)).await
    }

    pub async fn get_channel_videos(
        &self,
        channel_id: i64,
        query: &VideoQuery,
    ) -> Result<VideoListResponse, ApiError> {
        self.get(&channel_videos_path(channel_id, query)).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.config.endpoint(path);
        debug!("GET {url}");

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        handle_response(response).await
    }
}

async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.ok() {
        return response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()));
    }

    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    warn!("{} failed: HTTP {status} - {text}", response.url());

    Err(ApiError::from_response_body(status, &text))
}

/// The shared client, falling back to one built from the page config.
#[hook]
pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| {
        ApiClient::new(ApiConfig::new(
            crate::env_variable_utils::API_BASE_URL.as_str(),
        ))
    })
}
