use serde::Serialize;

/// A point in decimal degrees. Ranges are not validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// A location is known only when both halves are present.
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        latitude
            .zip(longitude)
            .map(|(lat, lon)| Self::new(lat, lon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_requires_both_halves() {
        assert_eq!(
            Coordinate::from_parts(Some(-25.2637), Some(-57.5759)),
            Some(Coordinate::new(-25.2637, -57.5759))
        );
        assert_eq!(Coordinate::from_parts(Some(-25.2637), None), None);
        assert_eq!(Coordinate::from_parts(None, Some(-57.5759)), None);
        assert_eq!(Coordinate::from_parts(None, None), None);
    }
}
