//! Static reference tables: signs, bodies, aspects, houses and the
//! compatibility matrices. Built once, never mutated.

pub mod aspects;
pub mod bodies;
pub mod houses;
pub mod matrices;
pub mod signs;

pub use aspects::{AspectDefinition, AspectKind, AspectNature, FULL_ASPECT_ORDER, NATAL_ASPECT_ORDER};
pub use bodies::{BodyProfile, CelestialBody, RetrogradeCycle};
pub use houses::{house_meaning, House};
pub use matrices::{element_compatibility, element_relation, modality_compatibility, ElementRelation};
pub use signs::{DateRange, Element, Modality, SignProfile, ZodiacSign};
