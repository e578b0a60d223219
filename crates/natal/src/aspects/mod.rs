pub mod calculator;
pub mod types;

pub use calculator::{aspect_between_signs, AspectCalculator};
pub use types::ChartAspect;
