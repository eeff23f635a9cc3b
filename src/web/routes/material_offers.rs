use axum::{
    extract::{Path, Query, State},
    Json,
};
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::services::material_offers_service::{
    self, MaterialOffersPage, MaterialOffersQuery,
};

pub async fn list_material_offers_handler(
    Path(material_id): Path<String>,
    Query(query): Query<MaterialOffersQuery>,
    State(pool): State<SqlitePool>,
) -> Result<Json<MaterialOffersPage>, AppError> {
    let page = material_offers_service::list_material_offers(&pool, &material_id, &query).await?;
    Ok(Json(page))
}
