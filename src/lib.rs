//! RGB <-> HSV conversion on normalized `f64` channels.
//!
//! ```
//! let (h, s, v) = rgb_hsv::rgb_to_hsv(0.0, 1.0, 1.0);
//! assert_eq!((h, s, v), (0.5, 1.0, 1.0));
//! assert_eq!(rgb_hsv::hsv_to_rgb(h, s, v), (0.0, 1.0, 1.0));
//! ```

pub mod color_format;
pub mod error;
pub mod perf;
pub mod round_trip;

pub use color_format::{
    hsv_to_rgb, hsv_to_rgb8, max_rgb_value, min_rgb_value, rgb8_to_hsv, rgb_to_hsv,
    try_hsv_to_rgb, try_rgb_to_hsv,
};
pub use error::ColorError;
pub use perf::{ConversionBenchmark, PerfOptions, Timing};
pub use round_trip::{Mismatch, RoundTripCheck, RoundTripOptions, RoundTripReport};
