pub mod bodies;
pub mod dignities;
pub mod rulers;
pub mod signs;

pub use bodies::{Body, BodyNature};
pub use dignities::{DignityEvaluator, DignityState, Polarity};
pub use rulers::{domicile_ruler, domicile_ruler_from_longitude, domiciles_of, rules_sign};
pub use signs::{angular_separation, degree_in_sign, normalize_degrees, Element, Sign};
