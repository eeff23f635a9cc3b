use sqlx::SqlitePool;

pub const SQL_CREATE_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS materials (
    material_id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    unit TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS suppliers (
    supplier_id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    city TEXT,
    latitude REAL,
    longitude REAL
);

CREATE TABLE IF NOT EXISTS projects (
    project_id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    latitude REAL,
    longitude REAL
);

CREATE TABLE IF NOT EXISTS material_offers (
    offer_id TEXT PRIMARY KEY,
    material_id TEXT NOT NULL REFERENCES materials(material_id),
    supplier_id TEXT NOT NULL REFERENCES suppliers(supplier_id),
    price REAL NOT NULL,
    in_stock INTEGER NOT NULL DEFAULT 1,
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);

CREATE INDEX IF NOT EXISTS idx_material_offers_material
    ON material_offers(material_id, created_at);
"#;

// Greater Asunción demo catalog. One supplier has no coordinates and one
// project has no site, so both the ranked and the bypassed path show up.
pub const SQL_SEED_DEMO: &str = r#"
INSERT OR IGNORE INTO materials (material_id, name, unit) VALUES
    ('cement-50kg', 'Cemento Portland 50kg', 'bag'),
    ('rebar-10mm', 'Varilla corrugada 10mm', 'bar');

INSERT OR IGNORE INTO suppliers (supplier_id, name, city, latitude, longitude) VALUES
    ('sup-asuncion', 'Ferretería Central', 'Asunción', -25.2637, -57.5759),
    ('sup-luque', 'Materiales Luque', 'Luque', -25.2592, -57.4872),
    ('sup-san-lorenzo', 'Corralón San Lorenzo', 'San Lorenzo', -25.3397, -57.5088),
    ('sup-unlocated', 'Distribuidora del Este', NULL, NULL, NULL);

INSERT OR IGNORE INTO projects (project_id, name, latitude, longitude) VALUES
    ('proj-centro', 'Edificio Centro', -25.2822, -57.6351),
    ('proj-pending-site', 'Vivienda sin ubicación', NULL, NULL);

INSERT OR IGNORE INTO material_offers (offer_id, material_id, supplier_id, price, in_stock, created_at) VALUES
    ('off-1', 'cement-50kg', 'sup-unlocated', 54000, 1, '2024-01-01 08:00:00'),
    ('off-2', 'cement-50kg', 'sup-luque', 52000, 1, '2024-01-02 08:00:00'),
    ('off-3', 'cement-50kg', 'sup-san-lorenzo', 51000, 0, '2024-01-03 08:00:00'),
    ('off-4', 'cement-50kg', 'sup-asuncion', 55000, 1, '2024-01-04 08:00:00'),
    ('off-5', 'rebar-10mm', 'sup-luque', 38000, 1, '2024-01-05 08:00:00');
"#;

pub async fn init_schema(pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::raw_sql(SQL_CREATE_SCHEMA).execute(pool).await?;
    Ok(())
}

pub async fn seed_demo_data(pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::raw_sql(SQL_SEED_DEMO).execute(pool).await?;
    Ok(())
}
