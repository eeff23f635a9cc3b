pub mod distance_service;
pub mod material_offers_service;
pub mod offer_ranking_service;
