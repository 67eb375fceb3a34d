use serde::Serialize;

use crate::errors::ScreenHueResult;
use crate::sampling::Light;

/// Flat, 8-bit view of a sampled light for consumers such as fixture drivers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LightReport {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub rgb: [u8; 3],
    pub hex: String,
}

impl LightReport {
    /// `None` for a light that has not been sampled yet.
    pub fn from_light(light: &Light) -> Option<Self> {
        let color = light.color?;
        Some(Self {
            id: light.id.clone(),
            x: light.coords.x(),
            y: light.coords.y(),
            rgb: color.rgb8(),
            hex: color.hex(),
        })
    }
}

pub fn to_json(lights: &[Light]) -> ScreenHueResult<String> {
    let reports: Vec<LightReport> = lights.iter().filter_map(LightReport::from_light).collect();
    Ok(serde_json::to_string_pretty(&reports)?)
}
