pub mod cautions;
pub mod rules;
pub mod verdict;

pub use cautions::{collect_cautions, DIGNITY_GAP};
pub use rules::{Factor, JudgmentContext, Rule, Side, AFFLICTION_RULES, CORE_RULES};
pub use verdict::{decide, score, Confidence, Determination, Verdict};

/// Score the context against the core rules, plus the affliction rules when enabled.
pub fn evaluate(ctx: &JudgmentContext, affliction_rules: bool) -> Verdict {
    let extra: &[Rule] = if affliction_rules { AFFLICTION_RULES } else { &[] };
    score(CORE_RULES.iter().chain(extra.iter()), ctx)
}
