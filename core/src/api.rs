//! Stateless HTTP request builder and response parser for the albums API.
//!
//! # Design
//! `AlbumsApi` carries no state at all. Each CRUD operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. `AlbumsClient` glues the two halves
//! together over a `Transport`; callers that own their I/O can drive them
//! directly.

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Album, AlbumInput, AlbumsQuery, ResponseItemDto, ResponsePageDto};

#[derive(Serialize)]
struct ItemQuery {
    id: Uuid,
    flat: bool,
}

/// Request builder and response parser for the five album endpoints.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlbumsApi;

impl AlbumsApi {
    pub fn new() -> Self {
        Self
    }

    pub fn build_read_albums(&self, query: &AlbumsQuery) -> Result<HttpRequest, ApiError> {
        let query = serde_html_form::to_string(query)?;
        Ok(get(format!("albums/read?{query}")))
    }

    pub fn build_read_album(&self, id: Uuid, flat: bool) -> Result<HttpRequest, ApiError> {
        let query = serde_html_form::to_string(ItemQuery { id, flat })?;
        Ok(get(format!("albums/readitem?{query}")))
    }

    pub fn build_delete_album(&self, id: Uuid) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("albums/deleteitem/{id}"),
            headers: Vec::new(),
            body: None,
        }
    }

    /// The payload's `album_id` addresses the album to update.
    pub fn build_update_album(&self, item: &AlbumInput) -> Result<HttpRequest, ApiError> {
        let id = item.album_id.ok_or(ApiError::MissingId)?;
        with_json_body(HttpMethod::Put, format!("albums/updateitem/{id}"), item)
    }

    pub fn build_create_album(&self, item: &AlbumInput) -> Result<HttpRequest, ApiError> {
        with_json_body(HttpMethod::Post, "albums/createitem".to_string(), item)
    }

    pub fn parse_read_albums(
        &self,
        response: HttpResponse,
    ) -> Result<ResponsePageDto<Album>, ApiError> {
        parse_envelope(response)
    }

    pub fn parse_read_album(&self, response: HttpResponse) -> Result<ResponseItemDto<Album>, ApiError> {
        parse_envelope(response)
    }

    /// The envelope describes the album that was removed.
    pub fn parse_delete_album(
        &self,
        response: HttpResponse,
    ) -> Result<ResponseItemDto<Album>, ApiError> {
        parse_envelope(response)
    }

    pub fn parse_update_album(
        &self,
        response: HttpResponse,
    ) -> Result<ResponseItemDto<Album>, ApiError> {
        parse_envelope(response)
    }

    pub fn parse_create_album(
        &self,
        response: HttpResponse,
    ) -> Result<ResponseItemDto<Album>, ApiError> {
        parse_envelope(response)
    }
}

fn get(path: String) -> HttpRequest {
    HttpRequest { method: HttpMethod::Get, path, headers: Vec::new(), body: None }
}

fn with_json_body<B: Serialize>(
    method: HttpMethod,
    path: String,
    body: &B,
) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_string(body).map_err(ApiError::Serialization)?;
    Ok(HttpRequest {
        method,
        path,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}

/// Reject non-2xx responses, then decode the body into the envelope `T`.
fn parse_envelope<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(response.status, &response.body)?;
    serde_json::from_str(&response.body).map_err(ApiError::Deserialization)
}

fn check_status(status: u16, body: &str) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    Err(ApiError::HttpError { status, body: body.to_string() })
}
