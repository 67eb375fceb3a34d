pub mod average;
pub mod raster;
pub mod sampler;
pub mod types;

pub use average::ColorAccumulator;
pub use raster::RasterImage;
pub use sampler::LightSampler;
pub use types::{Color, Light, SamplingMode};
