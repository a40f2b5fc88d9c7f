use super::rules::JudgmentContext;
use crate::relations::SolarCondition;

/// Dignity score difference above which the significators are flagged.
pub const DIGNITY_GAP: i32 = 2;

/// Warnings produced alongside the verdict. They do not move the scores.
pub fn collect_cautions(ctx: &JudgmentContext) -> Vec<String> {
    let mut cautions = Vec::new();

    if ctx.relations.hayz.present {
        cautions.push(format!(
            "Hayz: {}; the matter may be obstructed",
            ctx.relations.hayz.rationale
        ));
    }

    let querent = ctx.querent();
    let quesited = ctx.quesited();
    let gap = (querent.dignity.score() - quesited.dignity.score()).abs();
    if gap > DIGNITY_GAP {
        cautions.push(format!(
            "Dignity gap of {}: {} is {} ({:+}), {} is {} ({:+})",
            gap,
            querent.body,
            querent.dignity.label(),
            querent.dignity.score(),
            quesited.body,
            quesited.dignity.label(),
            quesited.dignity.score()
        ));
    }

    for proximity in &ctx.relations.solar {
        let note = match proximity.condition {
            SolarCondition::Cazimi => format!(
                "{} is cazimi ({:.2}° from the Sun); affliction cancelled",
                proximity.body, proximity.separation
            ),
            SolarCondition::DeepCombust => format!(
                "{} is deeply combust ({:.2}° from the Sun); severely weakened",
                proximity.body, proximity.separation
            ),
            SolarCondition::Combust => format!(
                "{} is combust ({:.1}° from the Sun); weakened",
                proximity.body, proximity.separation
            ),
            SolarCondition::Clear => continue,
        };
        cautions.push(note);
    }

    cautions
}
