pub mod decode;
pub mod encode;
pub mod law;
pub mod pcm;
pub mod segment;

pub use law::{g711_to_linear, linear_to_g711, Law, UnsupportedFormat};

/// Offset added to the magnitude before segment lookup, and removed again
/// on expansion.
pub const BIAS: i16 = 33;

/// Largest magnitude (after the precision-reducing shift) that is encoded
/// without saturating.
pub const CLIP: i16 = 8158;
