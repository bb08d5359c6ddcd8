use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const CONNECTION_KEY: &str = "mock";

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum MusicGenre {
    Rock,
    Blues,
    Jazz,
    Metal,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub artist_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub birth_day: Option<String>,
    pub seeded: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicGroup {
    pub music_group_id: Uuid,
    pub name: String,
    pub established_year: i32,
    pub genre: MusicGenre,
    pub seeded: bool,
    pub artists: Vec<Artist>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub album_id: Uuid,
    pub name: String,
    pub release_year: i32,
    pub copies_sold: i64,
    pub seeded: bool,
    pub music_group: Option<MusicGroup>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumInput {
    pub album_id: Option<Uuid>,
    pub name: String,
    pub release_year: i32,
    pub copies_sold: i64,
    pub music_group_id: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseItemDto<T> {
    pub db_connection_key_used: String,
    pub item: T,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePageDto<T> {
    pub db_connection_key_used: String,
    pub db_items_count: usize,
    pub page_items: Vec<T>,
    pub page_nr: u32,
    pub page_size: u32,
    pub page_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct ReadQuery {
    pub seeded: bool,
    pub flat: bool,
    #[serde(default)]
    pub filter: String,
    pub pagenr: u32,
    pub pagesize: u32,
}

#[derive(Debug, Deserialize)]
pub struct ItemQuery {
    pub id: Uuid,
    pub flat: bool,
}

/// Albums and the music groups they may reference.
#[derive(Debug, Default)]
pub struct Catalog {
    pub albums: HashMap<Uuid, Album>,
    pub groups: HashMap<Uuid, MusicGroup>,
}

impl Catalog {
    /// A small fixed catalogue; every entry is marked as seeded.
    pub fn seeded() -> Self {
        let beatles = group(
            "The Beatles",
            1960,
            MusicGenre::Rock,
            &[("John", "Lennon", "1940-10-09"), ("Paul", "McCartney", "1942-06-18")],
        );
        let quintet =
            group("Miles Davis Quintet", 1955, MusicGenre::Jazz, &[("Miles", "Davis", "1926-05-26")]);

        let mut catalog = Catalog::default();
        for (name, year, sold, owner) in [
            ("Abbey Road", 1969, 31_000_000, &beatles),
            ("Revolver", 1966, 5_000_000, &beatles),
            ("Kind of Blue", 1959, 5_000_000, &quintet),
        ] {
            let album = Album {
                album_id: Uuid::new_v4(),
                name: name.to_string(),
                release_year: year,
                copies_sold: sold,
                seeded: true,
                music_group: Some(owner.clone()),
            };
            catalog.albums.insert(album.album_id, album);
        }
        catalog.groups.insert(beatles.music_group_id, beatles);
        catalog.groups.insert(quintet.music_group_id, quintet);
        catalog
    }

    fn resolve_group(&self, id: Option<Uuid>) -> Result<Option<MusicGroup>, ApiFailure> {
        match id {
            None => Ok(None),
            Some(id) => self
                .groups
                .get(&id)
                .cloned()
                .map(Some)
                .ok_or_else(|| bad_request(format!("Music group {id} does not exist"))),
        }
    }
}

fn group(name: &str, established_year: i32, genre: MusicGenre, members: &[(&str, &str, &str)]) -> MusicGroup {
    MusicGroup {
        music_group_id: Uuid::new_v4(),
        name: name.to_string(),
        established_year,
        genre,
        seeded: true,
        artists: members
            .iter()
            .map(|(first, last, born)| Artist {
                artist_id: Uuid::new_v4(),
                first_name: first.to_string(),
                last_name: last.to_string(),
                birth_day: Some(born.to_string()),
                seeded: true,
            })
            .collect(),
    }
}

pub type Db = Arc<RwLock<Catalog>>;

type ApiFailure = (StatusCode, String);

fn bad_request(msg: String) -> ApiFailure {
    (StatusCode::BAD_REQUEST, msg)
}

fn not_found(id: Uuid) -> ApiFailure {
    (StatusCode::NOT_FOUND, format!("Item {id} not found"))
}

fn item(album: Album) -> Json<ResponseItemDto<Album>> {
    Json(ResponseItemDto { db_connection_key_used: CONNECTION_KEY.to_string(), item: album })
}

fn shape(mut album: Album, flat: bool) -> Album {
    if flat {
        album.music_group = None;
    }
    album
}

/// Router over an empty catalogue.
pub fn app() -> Router {
    app_with(Catalog::default())
}

pub fn seeded_app() -> Router {
    app_with(Catalog::seeded())
}

pub fn app_with(catalog: Catalog) -> Router {
    let db: Db = Arc::new(RwLock::new(catalog));
    Router::new()
        .route("/albums/read", get(read_albums))
        .route("/albums/readitem", get(read_album))
        .route("/albums/deleteitem/{id}", delete(delete_album))
        .route("/albums/updateitem/{id}", put(update_album))
        .route("/albums/createitem", post(create_album))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, Catalog::default()).await
}

pub async fn run_with(listener: TcpListener, catalog: Catalog) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(catalog)).await
}

async fn read_albums(
    State(db): State<Db>,
    Query(query): Query<ReadQuery>,
) -> Json<ResponsePageDto<Album>> {
    let catalog = db.read().await;
    let filter = query.filter.to_lowercase();
    let mut matching: Vec<&Album> = catalog
        .albums
        .values()
        .filter(|a| a.seeded == query.seeded && a.name.to_lowercase().contains(&filter))
        .collect();
    matching.sort_by(|a, b| a.name.cmp(&b.name).then(a.album_id.cmp(&b.album_id)));

    let total = matching.len();
    let size = query.pagesize as usize;
    let (page_items, page_count) = if size == 0 {
        (Vec::new(), 0)
    } else {
        let items: Vec<Album> = matching
            .into_iter()
            .skip((query.pagenr as usize).saturating_mul(size))
            .take(size)
            .map(|a| shape(a.clone(), query.flat))
            .collect();
        (items, total.div_ceil(size))
    };

    Json(ResponsePageDto {
        db_connection_key_used: CONNECTION_KEY.to_string(),
        db_items_count: total,
        page_items,
        page_nr: query.pagenr,
        page_size: query.pagesize,
        page_count,
    })
}

async fn read_album(
    State(db): State<Db>,
    Query(query): Query<ItemQuery>,
) -> Result<Json<ResponseItemDto<Album>>, ApiFailure> {
    let catalog = db.read().await;
    let album = catalog.albums.get(&query.id).cloned().ok_or_else(|| not_found(query.id))?;
    Ok(item(shape(album, query.flat)))
}

async fn delete_album(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResponseItemDto<Album>>, ApiFailure> {
    let mut catalog = db.write().await;
    let album = catalog.albums.remove(&id).ok_or_else(|| not_found(id))?;
    tracing::info!(%id, "album deleted");
    Ok(item(album))
}

async fn update_album(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<AlbumInput>,
) -> Result<Json<ResponseItemDto<Album>>, ApiFailure> {
    if input.album_id != Some(id) {
        return Err(bad_request(format!("Id mismatch: path {id}, body {:?}", input.album_id)));
    }
    let mut catalog = db.write().await;
    if !catalog.albums.contains_key(&id) {
        return Err(not_found(id));
    }
    let music_group = catalog.resolve_group(input.music_group_id)?;
    let album = catalog.albums.get_mut(&id).ok_or_else(|| not_found(id))?;
    album.name = input.name;
    album.release_year = input.release_year;
    album.copies_sold = input.copies_sold;
    album.music_group = music_group;
    tracing::info!(%id, "album updated");
    Ok(item(album.clone()))
}

async fn create_album(
    State(db): State<Db>,
    Json(input): Json<AlbumInput>,
) -> Result<Json<ResponseItemDto<Album>>, ApiFailure> {
    let mut catalog = db.write().await;
    let album = Album {
        album_id: Uuid::new_v4(),
        name: input.name,
        release_year: input.release_year,
        copies_sold: input.copies_sold,
        seeded: false,
        music_group: catalog.resolve_group(input.music_group_id)?,
    };
    catalog.albums.insert(album.album_id, album.clone());
    tracing::info!(id = %album.album_id, "album created");
    Ok(item(album))
}
