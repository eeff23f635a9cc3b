pub mod material_offers_repo;
pub mod project_location_repo;
pub mod schema;
