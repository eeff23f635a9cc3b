use serde::Serialize;

use crate::models::Coordinate;
use crate::services::offer_ranking_service::SupplierLocated;

// Offer joined with its supplier, in store order.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MaterialOfferRow {
    pub offer_id: String,
    pub material_id: String,
    pub supplier_id: String,
    pub supplier_name: String,
    pub supplier_city: Option<String>,
    pub supplier_latitude: Option<f64>,
    pub supplier_longitude: Option<f64>,
    pub price: f64,
    pub in_stock: bool,
}

impl SupplierLocated for MaterialOfferRow {
    fn supplier_coordinate(&self) -> Option<Coordinate> {
        Coordinate::from_parts(self.supplier_latitude, self.supplier_longitude)
    }
}
