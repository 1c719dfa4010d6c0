//! Volatility structures consumed by the pricing modules.

pub mod smile;

pub use smile::SmileSection;
