//! Question gating.
//!
//! Runs before any chart is cast. Checks apply in a fixed order and the
//! first failure is reported.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// Questions shorter than this many characters (after trimming) are refused.
pub const MIN_QUESTION_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisallowedTopic {
    SelfHarm,
    Violence,
    IllegalActs,
    Gambling,
}

impl fmt::Display for DisallowedTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DisallowedTopic::SelfHarm => "self-harm",
            DisallowedTopic::Violence => "violence",
            DisallowedTopic::IllegalActs => "illegal acts",
            DisallowedTopic::Gambling => "gambling or speculation",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectionReason {
    TooShort { chars: usize },
    Hypothetical { phrase: String },
    AbsoluteQuantifier { word: String },
    DisallowedTopic { topic: DisallowedTopic },
    MissingInterrogative,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::TooShort { chars } => write!(
                f,
                "question is too short ({} characters, need at least {})",
                chars, MIN_QUESTION_CHARS
            ),
            RejectionReason::Hypothetical { phrase } => write!(
                f,
                "hypothetical phrasing (\"{}\") cannot be judged; ask about a real situation",
                phrase
            ),
            RejectionReason::AbsoluteQuantifier { word } => write!(
                f,
                "absolute phrasing (\"{}\") cannot be judged; ask about a specific outcome",
                word
            ),
            RejectionReason::DisallowedTopic { topic } => {
                write!(f, "questions about {} are not answered", topic)
            }
            RejectionReason::MissingInterrogative => {
                f.write_str("not phrased as a question; end with '?' or start with a word like 'will'")
            }
        }
    }
}

lazy_static! {
    static ref HYPOTHETICAL: Regex =
        Regex::new(r"(?i)\b(what\s+if|suppose|supposing|hypothetically)\b").expect("static pattern");
    static ref ABSOLUTE: Regex = Regex::new(r"(?i)\b(never|always)\b").expect("static pattern");
    static ref DISALLOWED: Vec<(DisallowedTopic, Regex)> = vec![
        (
            DisallowedTopic::SelfHarm,
            Regex::new(r"(?i)\b(kill\s+myself|suicide|suicidal|self[-\s]?harm|hurt\s+myself|end\s+my\s+life)\b")
                .expect("static pattern"),
        ),
        (
            DisallowedTopic::Violence,
            // Violent verb aimed at a person
            Regex::new(
                r"(?i)\b(kill|murder|assault|attack|stab|shoot|poison|beat\s+up)\s+(him|her|them|someone|somebody|anyone|anybody|(my|his|her|their|our|your)\s+\w+)\b",
            )
            .expect("static pattern"),
        ),
        (
            DisallowedTopic::IllegalActs,
            Regex::new(r"(?i)\b(steal|rob|robbery|smuggle|launder|fraud|blackmail|get\s+away\s+with)\b")
                .expect("static pattern"),
        ),
        (
            DisallowedTopic::Gambling,
            Regex::new(r"(?i)\b(lottery|lotto|jackpot|gamble|gambling|casino|bet|betting|wager|roulette|winning\s+numbers)\b")
                .expect("static pattern"),
        ),
    ];
    static ref LEADING_INTERROGATIVE: Regex = Regex::new(
        r"(?i)^(will|would|should|shall|can|could|is|are|am|was|were|do|does|did|has|have|had|may|might|must|when|what|where|which|who|whom|whose|why|how)\b"
    )
    .expect("static pattern");
}

/// Check a question before casting.
pub fn validate_question(text: &str) -> Result<(), RejectionReason> {
    let text = text.trim();

    let chars = text.chars().count();
    if chars < MIN_QUESTION_CHARS {
        return Err(RejectionReason::TooShort { chars });
    }

    if let Some(m) = HYPOTHETICAL.find(text) {
        return Err(RejectionReason::Hypothetical {
            phrase: m.as_str().to_lowercase(),
        });
    }

    if let Some(m) = ABSOLUTE.find(text) {
        return Err(RejectionReason::AbsoluteQuantifier {
            word: m.as_str().to_lowercase(),
        });
    }

    if let Some((topic, _)) = DISALLOWED.iter().find(|(_, pattern)| pattern.is_match(text)) {
        return Err(RejectionReason::DisallowedTopic { topic: *topic });
    }

    if !text.contains('?') && !LEADING_INTERROGATIVE.is_match(text) {
        return Err(RejectionReason::MissingInterrogative);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_question() {
        assert!(validate_question("Will I get the job?").is_ok());
        assert!(validate_question("Should I move to Lisbon").is_ok());
    }

    #[test]
    fn test_hypothetical_checked_before_absolute() {
        let err = validate_question("what if I never get the job").unwrap_err();
        assert_eq!(err, RejectionReason::Hypothetical { phrase: "what if".to_string() });
        assert!(err.to_string().contains("hypothetical"));
    }

    #[test]
    fn test_absolute_quantifier() {
        let err = validate_question("Will he always love me?").unwrap_err();
        assert_eq!(err, RejectionReason::AbsoluteQuantifier { word: "always".to_string() });
    }

    #[test]
    fn test_disallowed_topics() {
        assert_eq!(
            validate_question("Will I win the lottery this year?").unwrap_err(),
            RejectionReason::DisallowedTopic { topic: DisallowedTopic::Gambling }
        );
        assert_eq!(
            validate_question("Should I kill myself?").unwrap_err(),
            RejectionReason::DisallowedTopic { topic: DisallowedTopic::SelfHarm }
        );
        assert_eq!(
            validate_question("Can I steal the car tonight?").unwrap_err(),
            RejectionReason::DisallowedTopic { topic: DisallowedTopic::IllegalActs }
        );
    }

    #[test]
    fn test_violence_needs_a_person_target() {
        assert!(validate_question("Will my panic attack pass?").is_ok());
        assert!(validate_question("Will the photo shoot go well?").is_ok());
        assert!(validate_question("Will the murder case be solved?").is_ok());
        assert_eq!(
            validate_question("Should I attack my neighbor?").unwrap_err(),
            RejectionReason::DisallowedTopic { topic: DisallowedTopic::Violence }
        );
        assert_eq!(
            validate_question("Will he shoot them tonight?").unwrap_err(),
            RejectionReason::DisallowedTopic { topic: DisallowedTopic::Violence }
        );
        assert_eq!(
            validate_question("Can I beat up someone at work?").unwrap_err(),
            RejectionReason::DisallowedTopic { topic: DisallowedTopic::Violence }
        );
    }

    #[test]
    fn test_whole_word_matching() {
        // "better" and "alphabet" must not trip the gambling filter
        assert!(validate_question("Will things get better at the alphabet factory?").is_ok());
    }

    #[test]
    fn test_ten_character_boundary() {
        assert_eq!("Job offer.".chars().count(), 10);
        assert_eq!(validate_question("Job offer.").unwrap_err(), RejectionReason::MissingInterrogative);
        assert!(validate_question("Job offer?").is_ok());
        assert_eq!(
            validate_question("Job offer").unwrap_err(),
            RejectionReason::TooShort { chars: 9 }
        );
    }
}
