use serde::Serialize;
use std::cmp::Ordering;

use crate::models::Coordinate;
use crate::services::distance_service::{format_distance, haversine_km};

/// Anything that can report where its supplier sits.
pub trait SupplierLocated {
    fn supplier_coordinate(&self) -> Option<Coordinate>;
}

/// An offer annotated with its distance from the reference point.
/// Both annotations are `None` when the supplier location is unknown or
/// when ranking was bypassed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedOffer<T> {
    #[serde(flatten)]
    pub offer: T,
    pub distance: Option<f64>,
    pub distance_formatted: Option<String>,
}

impl<T> RankedOffer<T> {
    pub fn unranked(offer: T) -> Self {
        Self {
            offer,
            distance: None,
            distance_formatted: None,
        }
    }
}

/// Annotates every offer with its distance from `reference` and orders
/// located offers nearest first, with unlocated offers trailing. The sort
/// is stable, so equal distances and unlocated offers keep input order.
pub fn rank_offers<T: SupplierLocated>(
    reference: Coordinate,
    offers: Vec<T>,
) -> Vec<RankedOffer<T>> {
    let mut ranked: Vec<RankedOffer<T>> = offers
        .into_iter()
        .map(|offer| {
            let distance = offer
                .supplier_coordinate()
                .map(|at| haversine_km(reference, at));
            RankedOffer {
                distance_formatted: distance.map(format_distance),
                distance,
                offer,
            }
        })
        .collect();

    ranked.sort_by(|a, b| match (a.distance, b.distance) {
        (Some(da), Some(db)) => da.total_cmp(&db),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    ranked
}
