use sqlx::SqlitePool;

use crate::models::MaterialOfferRow;

pub const SQL_MATERIAL_EXISTS: &str = r#"
SELECT COUNT(*) FROM materials WHERE material_id = ?1
"#;

pub const SQL_LIST_MATERIAL_OFFERS: &str = r#"
SELECT
    o.offer_id,
    o.material_id,
    o.supplier_id,
    s.name AS supplier_name,
    s.city AS supplier_city,
    s.latitude AS supplier_latitude,
    s.longitude AS supplier_longitude,
    o.price,
    o.in_stock
FROM material_offers o
JOIN suppliers s ON s.supplier_id = o.supplier_id
WHERE o.material_id = ?1
    AND (?2 = 0 OR o.in_stock = 1)
ORDER BY o.created_at ASC, o.offer_id ASC
"#;

pub async fn material_exists(pool: &SqlitePool, material_id: &str) -> sqlx::Result<bool> {
    let count: i64 = sqlx::query_scalar(SQL_MATERIAL_EXISTS)
        .bind(material_id)
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}

pub async fn load_material_offers(
    pool: &SqlitePool,
    material_id: &str,
    in_stock_only: bool,
) -> sqlx::Result<Vec<MaterialOfferRow>> {
    sqlx::query_as::<_, MaterialOfferRow>(SQL_LIST_MATERIAL_OFFERS)
        .bind(material_id)
        .bind(in_stock_only as i64)
        .fetch_all(pool)
        .await
}
