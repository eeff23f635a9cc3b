pub mod material_offers;
