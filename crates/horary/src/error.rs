use crate::ephemeris::EphemerisError;
use crate::question::RejectionReason;
use crate::significators::SignificatorRole;
use crate::western::Sign;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors returned by the judgment pipeline
#[derive(Error, Debug)]
pub enum HoraryError {
    /// The question failed validation; no chart was cast.
    #[error("Question rejected: {reason}")]
    QuestionRejected { reason: RejectionReason },
    /// The provider could not supply positions or cusps. Safe to retry.
    #[error("Ephemeris unavailable for {at}: {source}")]
    EphemerisUnavailable {
        at: DateTime<Utc>,
        #[source]
        source: EphemerisError,
    },
    #[error("No domicile ruler for {role} house {house} ({sign})")]
    UnresolvedSignificator {
        role: SignificatorRole,
        house: u8,
        sign: Sign,
    },
    #[error("Invalid location: lat {lat}, lon {lon}")]
    InvalidLocation { lat: f64, lon: f64 },
}

impl HoraryError {
    /// Whether re-running the same request could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, HoraryError::EphemerisUnavailable { .. })
    }
}
