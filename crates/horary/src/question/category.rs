//! Keyword classification of questions into life-matter categories.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Career,
    Finance,
    Relationship,
    Health,
    Travel,
    Legal,
    Education,
    Property,
    Children,
    LostItem,
    Communication,
    General,
}

impl QuestionCategory {
    /// House conventionally signifying this matter.
    pub fn house(self) -> u8 {
        match self {
            QuestionCategory::General => 1,
            QuestionCategory::Finance | QuestionCategory::LostItem => 2,
            QuestionCategory::Communication => 3,
            QuestionCategory::Property => 4,
            QuestionCategory::Children => 5,
            QuestionCategory::Health => 6,
            QuestionCategory::Relationship | QuestionCategory::Legal => 7,
            QuestionCategory::Travel | QuestionCategory::Education => 9,
            QuestionCategory::Career => 10,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QuestionCategory::Career => "career",
            QuestionCategory::Finance => "finance",
            QuestionCategory::Relationship => "relationship",
            QuestionCategory::Health => "health",
            QuestionCategory::Travel => "travel",
            QuestionCategory::Legal => "legal",
            QuestionCategory::Education => "education",
            QuestionCategory::Property => "property",
            QuestionCategory::Children => "children",
            QuestionCategory::LostItem => "lost item",
            QuestionCategory::Communication => "communication",
            QuestionCategory::General => "general",
        }
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Keyword table, checked in order; the first category with a hit wins.
const CATEGORY_KEYWORDS: &[(QuestionCategory, &[&str])] = &[
    (
        QuestionCategory::Health,
        &["health", "sick", "ill", "illness", "disease", "doctor", "surgery", "operation",
          "recover", "recovery", "heal", "hospital", "diagnosis", "treatment", "symptoms"],
    ),
    (
        QuestionCategory::Legal,
        &["court", "lawsuit", "sue", "lawyer", "attorney", "legal", "trial", "judge",
          "contract", "divorce", "custody", "settlement", "verdict"],
    ),
    (
        QuestionCategory::Children,
        &["child", "children", "baby", "pregnant", "pregnancy", "son", "daughter", "kids", "conceive"],
    ),
    (
        QuestionCategory::Relationship,
        &["love", "relationship", "partner", "boyfriend", "girlfriend", "husband", "wife",
          "marry", "marriage", "married", "spouse", "dating", "romance", "engaged", "ex"],
    ),
    (
        QuestionCategory::Career,
        &["job", "jobs", "career", "promotion", "promoted", "boss", "employer", "employment",
          "hired", "hire", "interview", "position", "business", "profession", "workplace"],
    ),
    (
        QuestionCategory::Finance,
        &["money", "finance", "finances", "financial", "salary", "income", "loan", "debt",
          "invest", "investment", "savings", "wealth", "profit", "raise", "paid"],
    ),
    (
        QuestionCategory::Property,
        &["house", "home", "property", "apartment", "flat", "rent", "land", "real estate", "mortgage"],
    ),
    (
        QuestionCategory::Travel,
        &["travel", "trip", "journey", "abroad", "flight", "vacation", "holiday", "visa", "emigrate"],
    ),
    (
        QuestionCategory::Education,
        &["exam", "exams", "school", "university", "college", "degree", "study", "course",
          "graduate", "admission", "scholarship"],
    ),
    (
        QuestionCategory::LostItem,
        &["lost", "lose", "missing", "misplaced", "keys", "wallet", "find my"],
    ),
    (
        QuestionCategory::Communication,
        &["message", "letter", "call", "email", "reply", "hear from", "news", "sibling",
          "brother", "sister", "neighbor", "neighbour"],
    ),
];

lazy_static! {
    static ref CATEGORY_PATTERNS: Vec<(QuestionCategory, Regex)> = CATEGORY_KEYWORDS
        .iter()
        .map(|(category, words)| {
            let alternation = words
                .iter()
                .map(|w| regex::escape(w).replace(' ', r"\s+"))
                .collect::<Vec<_>>()
                .join("|");
            let pattern = Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).expect("keyword pattern");
            (*category, pattern)
        })
        .collect();
}

/// Category of a question; `General` when no keyword matches.
pub fn classify(text: &str) -> QuestionCategory {
    CATEGORY_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(text))
        .map(|(category, _)| *category)
        .unwrap_or(QuestionCategory::General)
}
