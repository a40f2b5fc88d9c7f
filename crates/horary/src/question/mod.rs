pub mod category;
pub mod validation;

pub use category::{classify, QuestionCategory};
pub use validation::{validate_question, DisallowedTopic, RejectionReason, MIN_QUESTION_CHARS};
