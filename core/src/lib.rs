//! Async API client for the albums web service.
//!
//! # Overview
//! Five operations over one resource: list, read, create, update and delete
//! albums. Requests are built and responses parsed by the sans-IO
//! `AlbumsApi`; `AlbumsClient` runs them over an injected `Transport`.
//!
//! # Design
//! - `AlbumsApi` and `AlbumsClient` hold no mutable state; concurrent calls
//!   need no locking.
//! - Base-URL resolution, pooling, TLS and timeouts belong to the transport.
//!   `ReqwestTransport` is the stock implementation.
//! - No retries, caching or backoff. Every failure reaches the caller as an
//!   `ApiError`.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use api::AlbumsApi;
pub use client::AlbumsClient;
pub use config::ClientConfig;
pub use error::{ApiError, BoxError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use transport::ReqwestTransport;
pub use types::{
    Album, AlbumInput, AlbumsQuery, Artist, MusicGenre, MusicGroup, ResponseItemDto,
    ResponsePageDto,
};
