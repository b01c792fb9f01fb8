//! Route handlers. No business logic here beyond existence checks; the
//! store does the normalization and enforces the single-open-entry rule.

use crate::errors::AppError;
use crate::models::entry::{Entry, EntryRecord};
use crate::store::{EntryStore, SqliteStore};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;

pub async fn list_entries(
    State(store): State<Arc<SqliteStore>>,
) -> Result<Json<Vec<EntryRecord>>, AppError> {
    let entries = store.all()?;
    Ok(Json(entries.iter().map(EntryRecord::from).collect()))
}

pub async fn latest_entry(
    State(store): State<Arc<SqliteStore>>,
) -> Result<Json<Option<EntryRecord>>, AppError> {
    let latest = store.latest()?;
    Ok(Json(latest.as_ref().map(EntryRecord::from)))
}

pub async fn get_entry(
    State(store): State<Arc<SqliteStore>>,
    Path(id): Path<i64>,
) -> Result<Json<EntryRecord>, AppError> {
    let entry = store.get(id)?;
    Ok(Json(EntryRecord::from(&entry)))
}

pub async fn create_entry(
    State(store): State<Arc<SqliteStore>>,
    Json(rec): Json<EntryRecord>,
) -> Result<Json<EntryRecord>, AppError> {
    let saved = store.insert(&Entry::from(rec))?;
    Ok(Json(EntryRecord::from(&saved)))
}

pub async fn update_entry(
    State(store): State<Arc<SqliteStore>>,
    Path(id): Path<i64>,
    Json(rec): Json<EntryRecord>,
) -> Result<Json<EntryRecord>, AppError> {
    let mut entry = Entry::from(rec);
    entry.id = Some(id);
    store.update(&entry)?;

    // read back so the response carries the normalized times
    let saved = store.get(id)?;
    Ok(Json(EntryRecord::from(&saved)))
}

pub async fn delete_entry(
    State(store): State<Arc<SqliteStore>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    store.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_all(
    State(store): State<Arc<SqliteStore>>,
) -> Result<StatusCode, AppError> {
    store.truncate()?;
    Ok(StatusCode::ACCEPTED)
}
