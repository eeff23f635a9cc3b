use crate::models::Coordinate;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProjectLocationRow {
    pub project_id: String,
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl ProjectLocationRow {
    pub fn site(&self) -> Option<Coordinate> {
        Coordinate::from_parts(self.latitude, self.longitude)
    }
}
