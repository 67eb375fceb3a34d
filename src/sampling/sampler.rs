use crate::config::AppConfig;
use crate::errors::{ScreenHueError, ScreenHueResult};
use crate::geometry::{self, Coordinates, Extent};
use crate::sampling::average::ColorAccumulator;
use crate::sampling::raster::RasterImage;
use crate::sampling::types::{Light, SamplingMode};

/// Owns the ordered set of registered lights and samples frames for them.
///
/// Sampling borrows `&self` and returns fresh `Light` values; only `register`
/// mutates the registry, so the borrow checker gives the usual
/// one-writer/many-readers discipline.
#[derive(Debug, Clone, Default)]
pub struct LightSampler {
    lights: Vec<Light>,
}

impl LightSampler {
    pub fn new() -> Self {
        Self { lights: Vec::new() }
    }

    /// Register every light listed in `config`, in file order.
    pub fn from_config(config: &AppConfig) -> ScreenHueResult<Self> {
        let mut sampler = Self::new();
        for entry in &config.lights {
            sampler.register(entry.id.clone(), entry.x, entry.y)?;
        }
        tracing::info!(lights = sampler.len(), "lights registered from config");
        Ok(sampler)
    }

    /// Add a light at normalized `(x, y)`, both within `[-1, 1]`.
    ///
    /// Ids are not required to be unique. A rejected light leaves the registry as it was.
    pub fn register(&mut self, id: impl Into<String>, x: f64, y: f64) -> ScreenHueResult<()> {
        let id = id.into();
        let coords = Coordinates::new(x, y).map_err(|e| ScreenHueError::InvalidCoordinate {
            id: id.clone(),
            axis: e.axis,
            value: e.value,
        })?;

        tracing::debug!(id = %id, x, y, "added light");
        self.lights.push(Light::new(id, coords));
        Ok(())
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn len(&self) -> usize {
        self.lights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    pub fn sample<I>(&self, frame: &I, mode: SamplingMode) -> ScreenHueResult<Vec<Light>>
    where
        I: RasterImage + ?Sized,
    {
        match mode {
            SamplingMode::Exact => self.exact(frame),
            SamplingMode::Area { percent } => self.area(frame, percent),
        }
    }

    /// Color of the single pixel under each light, in registration order.
    pub fn exact<I>(&self, frame: &I) -> ScreenHueResult<Vec<Light>>
    where
        I: RasterImage + ?Sized,
    {
        let extent = frame_extent(frame)?;

        let lights = self
            .lights
            .iter()
            .map(|light| {
                let px = geometry::pixel(light.coords, extent);
                let color = frame.color_at(px.x, px.y);
                tracing::debug!(
                    id = %light.id,
                    pixel = ?(px.x, px.y),
                    rgb = ?color.rgb8(),
                    "found color in frame"
                );
                light.with_color(color)
            })
            .collect();
        Ok(lights)
    }

    /// Mean color of a box around each light, in registration order.
    ///
    /// The box covers `percent`% of each axis (see [`geometry::area`]). Any light
    /// whose box comes out empty fails the whole call. `percent` is checked even
    /// when no lights are registered.
    pub fn area<I>(&self, frame: &I, percent: u32) -> ScreenHueResult<Vec<Light>>
    where
        I: RasterImage + ?Sized,
    {
        geometry::check_percent(percent)?;
        let extent = frame_extent(frame)?;

        self.lights
            .iter()
            .map(|light| -> ScreenHueResult<Light> {
                let rect = geometry::area(light.coords, extent, percent)?;
                let acc: ColorAccumulator =
                    rect.points().map(|p| frame.color_at(p.x, p.y)).collect();
                let color = acc.mean().ok_or(ScreenHueError::DegenerateRegion {
                    width: rect.width(),
                    height: rect.height(),
                })?;
                tracing::debug!(
                    id = %light.id,
                    rect = ?((rect.min.x, rect.min.y), (rect.max.x, rect.max.y)),
                    pixels = acc.count(),
                    rgb = ?color.rgb8(),
                    "averaged color in frame"
                );
                Ok(light.with_color(color))
            })
            .collect()
    }
}

/// The last addressable pixel of `frame`; a frame without pixels has none.
fn frame_extent<I>(frame: &I) -> ScreenHueResult<Extent>
where
    I: RasterImage + ?Sized,
{
    let (width, height) = frame.dimensions();
    if width == 0 || height == 0 {
        return Err(ScreenHueError::EmptyImage { width, height });
    }
    Ok(Extent::max_index_of(width, height))
}
