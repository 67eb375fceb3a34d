use serde::{Deserialize, Serialize};

use crate::geometry::Coordinates;

/// RGB color at 16-bit working precision.
///
/// 8-bit channels are widened by `v * 257` (so `0xff` becomes `0xffff`) and
/// narrowed back by integer division, which keeps averaging in a single domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color {
    pub red: u16,
    pub green: u16,
    pub blue: u16,
}

impl Color {
    pub const fn new(red: u16, green: u16, blue: u16) -> Self {
        Self { red, green, blue }
    }

    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as u16 * 257,
            green: green as u16 * 257,
            blue: blue as u16 * 257,
        }
    }

    pub fn rgb8(&self) -> [u8; 3] {
        [
            (self.red / 257) as u8,
            (self.green / 257) as u8,
            (self.blue / 257) as u8,
        ]
    }

    /// `#rrggbb`, lowercase.
    pub fn hex(&self) -> String {
        let [r, g, b] = self.rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl From<image::Rgb<u8>> for Color {
    fn from(px: image::Rgb<u8>) -> Self {
        Color::from_rgb8(px[0], px[1], px[2])
    }
}

impl From<image::Rgba<u8>> for Color {
    fn from(px: image::Rgba<u8>) -> Self {
        Color::from_rgb8(px[0], px[1], px[2])
    }
}

/// A named light position, optionally carrying the color sampled for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Light {
    pub id: String,
    pub coords: Coordinates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl Light {
    pub fn new(id: impl Into<String>, coords: Coordinates) -> Self {
        Self {
            id: id.into(),
            coords,
            color: None,
        }
    }

    /// A copy of this light carrying `color`.
    pub fn with_color(&self, color: Color) -> Self {
        Self {
            id: self.id.clone(),
            coords: self.coords,
            color: Some(color),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingMode {
    /// Single pixel under the light.
    Exact,
    /// Mean of a box covering `percent`% of each image axis.
    Area { percent: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb8_round_trips_through_working_precision() {
        let c = Color::from_rgb8(0, 128, 255);
        assert_eq!(c, Color::new(0, 128 * 257, 0xffff));
        assert_eq!(c.rgb8(), [0, 128, 255]);
    }

    #[test]
    fn narrowing_truncates() {
        assert_eq!(Color::new(256, 257, 513).rgb8(), [0, 1, 1]);
    }

    #[test]
    fn hex_is_lowercase_padded() {
        assert_eq!(Color::from_rgb8(10, 171, 255).hex(), "#0aabff");
    }

    #[test]
    fn with_color_returns_a_new_light() {
        let light = Light::new("tv", Coordinates::new(0.5, -0.5).unwrap());
        let lit = light.with_color(Color::from_rgb8(1, 2, 3));
        assert_eq!(light.color, None);
        assert_eq!(lit.id, "tv");
        assert_eq!(lit.coords, light.coords);
        assert_eq!(lit.color, Some(Color::from_rgb8(1, 2, 3)));
    }

    #[test]
    fn light_serializes_without_missing_color() {
        let light = Light::new("tv", Coordinates::new(0.0, 1.0).unwrap());
        let json = serde_json::to_value(&light).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "tv", "coords": { "x": 0.0, "y": 1.0 } }));
    }
}
