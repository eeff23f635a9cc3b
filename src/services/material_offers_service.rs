use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::database::{material_offers_repo, project_location_repo};
use crate::error::AppError;
use crate::models::{Coordinate, MaterialOfferRow};
use crate::services::offer_ranking_service::{self, RankedOffer};

#[derive(Debug, Deserialize, Default)]
pub struct MaterialOffersQuery {
    pub project_id: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub in_stock_only: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialOffersPage {
    pub material_id: String,
    pub reference: Option<Coordinate>,
    pub ranked: bool,
    pub offers: Vec<RankedOffer<MaterialOfferRow>>,
}

/// Lists a material's offers, nearest supplier first when a reference point
/// is known. Without one the ranker is skipped and store order is kept.
pub async fn list_material_offers(
    pool: &SqlitePool,
    material_id: &str,
    query: &MaterialOffersQuery,
) -> Result<MaterialOffersPage, AppError> {
    if !material_offers_repo::material_exists(pool, material_id).await? {
        return Err(AppError::MaterialNotFound(material_id.to_string()));
    }

    let reference = resolve_reference(pool, query).await?;
    let rows = material_offers_repo::load_material_offers(
        pool,
        material_id,
        query.in_stock_only.unwrap_or(false),
    )
    .await?;

    let offers = match reference {
        Some(reference) => offer_ranking_service::rank_offers(reference, rows),
        None => rows.into_iter().map(RankedOffer::unranked).collect(),
    };

    info!(
        "📍 Offers for material {}: count={}, ranked={}",
        material_id,
        offers.len(),
        reference.is_some()
    );

    Ok(MaterialOffersPage {
        material_id: material_id.to_string(),
        reference,
        ranked: reference.is_some(),
        offers,
    })
}

/// Explicit `lat`/`lon` win over the project's site. A project without a
/// site yields no reference point, which is not an error.
async fn resolve_reference(
    pool: &SqlitePool,
    query: &MaterialOffersQuery,
) -> Result<Option<Coordinate>, AppError> {
    if query.lat.is_some() != query.lon.is_some() {
        return Err(AppError::PartialCoordinate);
    }
    // NaN and inf are numbers but not locations
    if query.lat.into_iter().chain(query.lon).any(|v| !v.is_finite()) {
        return Err(AppError::InvalidCoordinate);
    }

    let project_site = match query
        .project_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        Some(project_id) => {
            let project = project_location_repo::load_project_location(pool, project_id)
                .await?
                .ok_or_else(|| AppError::ProjectNotFound(project_id.to_string()))?;
            let site = project.site();
            if site.is_none() {
                warn!(
                    "📍 Project {} ('{}') has no site coordinates, skipping ranking",
                    project.project_id, project.name
                );
            }
            site
        }
        None => None,
    };

    Ok(Coordinate::from_parts(query.lat, query.lon).or(project_site))
}
