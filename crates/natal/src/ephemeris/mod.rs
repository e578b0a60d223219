pub mod model;
pub mod types;

pub use model::{sun_sign, MeanMotionModel};
pub use types::{Ascendant, BirthData, BodyPosition, GeoLocation, HouseCusp};
