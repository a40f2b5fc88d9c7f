//! End-to-end judgment: question text and moment in, verdict out.

use crate::chart::{ChartCaster, HoraryChart};
use crate::ephemeris::{EphemerisProvider, HouseProvider, Moment};
use crate::error::HoraryError;
use crate::judgment::{collect_cautions, evaluate, JudgmentContext, Verdict};
use crate::question::{classify, validate_question, QuestionCategory};
use crate::relations::{analyze, MoonContactMode, RelationalAnalysis};
use crate::significators::{resolve_significators, Significators};
use crate::timing::{estimate_timing, TimingEstimate};
use serde::{Deserialize, Serialize};

/// Knobs that change how a chart is judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JudgeOptions {
    pub moon_contact: MoonContactMode,
    /// Score debility, hayz and combustion of the significators against the matter.
    pub affliction_rules: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Judgment {
    pub question: String,
    pub category: QuestionCategory,
    pub significators: Significators,
    pub verdict: Verdict,
    pub timing: TimingEstimate,
    pub cautions: Vec<String>,
    pub relations: RelationalAnalysis,
    pub chart: HoraryChart,
}

/// Judge one question.
///
/// The question is validated before any chart is cast, so a rejected
/// question never touches the ephemeris.
pub fn judge<E, H>(
    question: &str,
    moment: &Moment,
    ephemeris: E,
    houses: H,
    options: &JudgeOptions,
) -> Result<Judgment, HoraryError>
where
    E: EphemerisProvider,
    H: HouseProvider,
{
    if let Err(reason) = validate_question(question) {
        log::warn!("Question rejected: {}", reason);
        return Err(HoraryError::QuestionRejected { reason });
    }

    let category = classify(question);
    let chart = ChartCaster::new(ephemeris, houses).cast(moment)?;
    let significators = resolve_significators(&chart, category)?;
    let relations = analyze(&chart, &significators, options.moon_contact);

    let ctx = JudgmentContext {
        chart: &chart,
        significators: &significators,
        relations: &relations,
    };
    let verdict = evaluate(&ctx, options.affliction_rules);
    let cautions = collect_cautions(&ctx);
    let timing = estimate_timing(&chart);

    log::info!(
        "Judged {:?} as {} ({}): yes {} / no {}, {} factors, {} cautions",
        category,
        verdict.determination,
        verdict.confidence,
        verdict.yes_score,
        verdict.no_score,
        verdict.factors.len(),
        cautions.len()
    );

    Ok(Judgment {
        question: question.trim().to_string(),
        category,
        significators,
        verdict,
        timing,
        cautions,
        relations,
        chart,
    })
}

/// A provider bound to a set of options.
pub struct HoraryEngine<P> {
    provider: P,
    options: JudgeOptions,
}

impl<P> HoraryEngine<P>
where
    P: EphemerisProvider + HouseProvider,
{
    pub fn new(provider: P, options: JudgeOptions) -> Self {
        Self { provider, options }
    }

    pub fn options(&self) -> &JudgeOptions {
        &self.options
    }

    pub fn judge(&self, question: &str, moment: &Moment) -> Result<Judgment, HoraryError> {
        judge(question, moment, &self.provider, &self.provider, &self.options)
    }
}
