//! Horary judgment: cast a chart for the moment a question is asked and
//! read a yes/no answer from it with classical rules.

pub mod aspects;
pub mod chart;
pub mod engine;
pub mod ephemeris;
pub mod error;
pub mod judgment;
pub mod question;
pub mod relations;
pub mod significators;
pub mod timing;
pub mod western;

pub use chart::{ChartCaster, HoraryChart};
pub use engine::{judge, HoraryEngine, JudgeOptions, Judgment};
pub use ephemeris::{
    EphemerisError, EphemerisProvider, GeoLocation, HouseProvider, Moment, PositionSnapshot, StaticEphemeris,
    SwissEphemerisAdapter,
};
pub use error::HoraryError;
pub use judgment::{Confidence, Determination, Verdict};
pub use question::{QuestionCategory, RejectionReason};
pub use relations::MoonContactMode;
pub use significators::{Significator, SignificatorRole, Significators};
pub use timing::TimingEstimate;
pub use western::{Body, DignityState, Sign};
