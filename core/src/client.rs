//! Async albums client over an injected `Transport`.
//!
//! # Design
//! `AlbumsClient` owns nothing but the transport handle it was given. Every
//! operation is the same linear sequence: build the request with
//! `AlbumsApi`, execute it once, parse the response. Failures are returned
//! as-is; nothing is retried.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::api::AlbumsApi;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::{Album, AlbumInput, AlbumsQuery, ResponseItemDto, ResponsePageDto};

/// CRUD client for the remote albums API.
///
/// Holds no mutable state, so one client may serve any number of concurrent
/// calls. Clone it freely when the transport is cheap to clone.
#[derive(Debug, Clone)]
pub struct AlbumsClient<T> {
    api: AlbumsApi,
    transport: T,
}

impl<T: Transport> AlbumsClient<T> {
    pub fn new(transport: T) -> Self {
        Self { api: AlbumsApi::new(), transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn read_albums(&self, query: &AlbumsQuery) -> Result<ResponsePageDto<Album>, ApiError> {
        let request = self.api.build_read_albums(query)?;
        let response = self.send(request).await?;
        self.api.parse_read_albums(response)
    }

    pub async fn read_album(&self, id: Uuid, flat: bool) -> Result<ResponseItemDto<Album>, ApiError> {
        let request = self.api.build_read_album(id, flat)?;
        let response = self.send(request).await?;
        self.api.parse_read_album(response)
    }

    pub async fn delete_album(&self, id: Uuid) -> Result<ResponseItemDto<Album>, ApiError> {
        let request = self.api.build_delete_album(id);
        let response = self.send(request).await?;
        self.api.parse_delete_album(response)
    }

    pub async fn update_album(&self, item: &AlbumInput) -> Result<ResponseItemDto<Album>, ApiError> {
        let request = self.api.build_update_album(item)?;
        let response = self.send(request).await?;
        self.api.parse_update_album(response)
    }

    pub async fn create_album(&self, item: &AlbumInput) -> Result<ResponseItemDto<Album>, ApiError> {
        let request = self.api.build_create_album(item)?;
        let response = self.send(request).await?;
        self.api.parse_create_album(response)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = request.method;
        let path = request.path.clone();
        debug!(method = method.as_str(), %path, "sending request");

        let response = self.transport.execute(request).await.map_err(ApiError::Transport)?;
        if response.is_success() {
            debug!(method = method.as_str(), %path, status = response.status, "request succeeded");
        } else {
            warn!(method = method.as_str(), %path, status = response.status, "request failed");
        }
        Ok(response)
    }
}
