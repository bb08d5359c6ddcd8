//! Domain DTOs and response envelopes for the albums API.
//!
//! # Design
//! These types mirror the server's camelCase JSON schema. Every nested
//! entity is bound to exactly one concrete struct, so decoding never has to
//! choose an implementation at runtime. The mock-server crate defines its
//! own copies; integration tests catch schema drift between the two.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Genre of a music group.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MusicGenre {
    Rock,
    Blues,
    Jazz,
    Metal,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub artist_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub birth_day: Option<String>,
    #[serde(default)]
    pub seeded: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MusicGroup {
    pub music_group_id: Uuid,
    pub name: String,
    pub established_year: i32,
    pub genre: MusicGenre,
    #[serde(default)]
    pub seeded: bool,
    #[serde(default)]
    pub artists: Vec<Artist>,
}

/// A single album returned by the API.
///
/// `music_group` is `None` when the album was read flat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub album_id: Uuid,
    pub name: String,
    pub release_year: i32,
    pub copies_sold: i64,
    #[serde(default)]
    pub seeded: bool,
    #[serde(default)]
    pub music_group: Option<MusicGroup>,
}

/// Create/update payload: the album fields the API accepts for mutation.
///
/// `album_id` is required for updates and ignored by the server on create.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AlbumInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_id: Option<Uuid>,
    pub name: String,
    pub release_year: i32,
    pub copies_sold: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music_group_id: Option<Uuid>,
}

impl From<&Album> for AlbumInput {
    fn from(album: &Album) -> Self {
        Self {
            album_id: Some(album.album_id),
            name: album.name.clone(),
            release_year: album.release_year,
            copies_sold: album.copies_sold,
            music_group_id: album.music_group.as_ref().map(|g| g.music_group_id),
        }
    }
}

/// Query parameters for listing albums. Field order is the wire order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlbumsQuery {
    pub seeded: bool,
    pub flat: bool,
    pub filter: String,
    #[serde(rename = "pagenr")]
    pub page_number: u32,
    #[serde(rename = "pagesize")]
    pub page_size: u32,
}

impl Default for AlbumsQuery {
    fn default() -> Self {
        Self { seeded: true, flat: true, filter: String::new(), page_number: 0, page_size: 10 }
    }
}

/// Envelope around a single returned entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseItemDto<T> {
    #[serde(default)]
    pub db_connection_key_used: Option<String>,
    pub item: T,
}

/// Envelope around one page of entities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePageDto<T> {
    #[serde(default)]
    pub db_connection_key_used: Option<String>,
    pub db_items_count: u64,
    pub page_items: Vec<T>,
    pub page_nr: u32,
    pub page_size: u32,
    #[serde(default)]
    pub page_count: u32,
}
