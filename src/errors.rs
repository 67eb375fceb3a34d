use thiserror::Error;

use crate::geometry::Axis;

#[derive(Debug, Error)]
pub enum ScreenHueError {
    #[error("Invalid coordinates for light '{id}': {axis} = {value} is outside [-1, 1]")]
    InvalidCoordinate { id: String, axis: Axis, value: f64 },

    #[error("Invalid area percent {0}: must be within 1..=100")]
    InvalidPercent(u32),

    #[error("Degenerate sampling region: {width}x{height} pixels")]
    DegenerateRegion { width: u32, height: u32 },

    #[error("Image has no pixels: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialize error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

impl serde::Serialize for ScreenHueError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

pub type ScreenHueResult<T> = Result<T, ScreenHueError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_coordinate_names_light_and_axis() {
        let err = ScreenHueError::InvalidCoordinate {
            id: "left".to_string(),
            axis: Axis::X,
            value: -2.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("'left'"));
        assert!(msg.contains("x = -2"));
    }

    #[test]
    fn usage_is_not_reported_as_config() {
        let msg = ScreenHueError::Usage("screenhue <image>").to_string();
        assert_eq!(msg, "usage: screenhue <image>");
        assert!(!msg.contains("Configuration"));
    }

    #[test]
    fn serializes_as_display_string() {
        let err = ScreenHueError::InvalidPercent(0);
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, "\"Invalid area percent 0: must be within 1..=100\"");
    }
}
