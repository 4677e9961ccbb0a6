use crate::{ApiError, AppState};
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::Uri;
use axum::Json;
use discos_core::{Disk, Partition};

pub(crate) async fn list_disks(State(state): State<AppState>) -> Json<Vec<Disk>> {
    Json(state.catalog.list_disks().to_vec())
}

pub(crate) async fn list_partitions(
    State(state): State<AppState>,
    letter: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<Partition>>, ApiError> {
    let Path(letter) = letter?;
    let partitions = state.catalog.list_partitions(&letter)?;
    Ok(Json(partitions.to_vec()))
}

pub(crate) async fn not_found(uri: Uri) -> ApiError {
    ApiError::RouteNotFound(uri.path().to_string())
}
