use dotenvy::dotenv;
use sqlx::sqlite::SqlitePoolOptions;
use std::env;

use marketplace::config::Config;
use marketplace::models::MaterialOfferRow;
use marketplace::services::material_offers_service::{self, MaterialOffersQuery};
use marketplace::services::offer_ranking_service::RankedOffer;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::load();
    let (Ok(project_id), Ok(material_id)) = (env::var("PROJECT_ID"), env::var("MATERIAL_ID"))
    else {
        eprintln!("PROJECT_ID and MATERIAL_ID must be set");
        std::process::exit(2);
    };
    let in_stock_only = env::var("IN_STOCK_ONLY")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false);

    let pool = match SqlitePoolOptions::new().connect(&config.database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("cannot connect to {}: {}", config.database_url, e);
            std::process::exit(1);
        }
    };

    let query = MaterialOffersQuery {
        project_id: Some(project_id),
        in_stock_only: Some(in_stock_only),
        ..Default::default()
    };

    match material_offers_service::list_material_offers(&pool, &material_id, &query).await {
        Ok(page) => {
            if !page.ranked {
                println!("(project has no site, offers in catalog order)");
            }
            for ranked in &page.offers {
                println!("{}", offer_line(ranked));
            }
        }
        Err(e) => {
            eprintln!("rank offers failed: {}", e);
            std::process::exit(1);
        }
    }
}

// supplier, price, distance ("-" when the supplier has no location)
fn offer_line(ranked: &RankedOffer<MaterialOfferRow>) -> String {
    format!(
        "{:<28} {:>10.0} {:>8}",
        ranked.offer.supplier_name,
        ranked.offer.price,
        ranked.distance_formatted.as_deref().unwrap_or("-")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use marketplace::models::Coordinate;
    use marketplace::services::offer_ranking_service::rank_offers;

    fn row(supplier_name: &str, lat: Option<f64>, lon: Option<f64>) -> MaterialOfferRow {
        MaterialOfferRow {
            offer_id: format!("off-{supplier_name}"),
            material_id: "cement-50kg".to_string(),
            supplier_id: format!("sup-{supplier_name}"),
            supplier_name: supplier_name.to_string(),
            supplier_city: None,
            supplier_latitude: lat,
            supplier_longitude: lon,
            price: 52000.0,
            in_stock: true,
        }
    }

    #[test]
    fn test_located_offer_line_shows_distance() {
        let ranked = rank_offers(
            Coordinate::new(-25.2637, -57.5759),
            vec![row("Materiales Luque", Some(-25.2592), Some(-57.4872))],
        );

        let line = offer_line(&ranked[0]);

        assert!(line.starts_with("Materiales Luque"));
        assert!(line.contains("52000"));
        assert!(line.ends_with("8.9km"));
    }

    #[test]
    fn test_unlocated_offer_line_shows_dash() {
        let line = offer_line(&RankedOffer::unranked(row("Distribuidora", None, None)));

        assert!(line.contains("52000"));
        assert!(line.ends_with(" -"));
    }
}
