//! Map normalized light positions onto a frame and sample a color for each.
//!
//! - [`geometry`]: normalized coordinate → pixel / sampling rectangle
//! - [`sampling`]: the light registry and exact / area color sampling
//! - [`config`], [`frame`], [`report`]: loading, decoding and output around the core

pub mod config;
pub mod errors;
pub mod frame;
pub mod geometry;
pub mod report;
pub mod sampling;

pub use errors::{ScreenHueError, ScreenHueResult};
pub use geometry::{Coordinates, Extent, Point, Rect};
pub use sampling::{Color, Light, LightSampler, RasterImage, SamplingMode};

/// Install the global `tracing` subscriber. `RUST_LOG` overrides the default `info`
/// level; output goes to stderr so stdout stays machine-readable.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
