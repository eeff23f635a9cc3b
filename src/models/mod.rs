pub mod coordinate;
pub mod material_offers;
pub mod project_location;

pub use coordinate::Coordinate;
pub use material_offers::MaterialOfferRow;
pub use project_location::ProjectLocationRow;
