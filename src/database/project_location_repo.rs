use sqlx::SqlitePool;

use crate::models::ProjectLocationRow;

pub const SQL_LOAD_PROJECT_LOCATION: &str = r#"
SELECT project_id, name, latitude, longitude
FROM projects
WHERE project_id = ?1
"#;

pub async fn load_project_location(
    pool: &SqlitePool,
    project_id: &str,
) -> sqlx::Result<Option<ProjectLocationRow>> {
    sqlx::query_as::<_, ProjectLocationRow>(SQL_LOAD_PROJECT_LOCATION)
        .bind(project_id)
        .fetch_optional(pool)
        .await
}
