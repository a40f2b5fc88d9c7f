//! Scoring rules.
//!
//! Each rule is a (predicate, weight, description) entry. Rules are read in
//! table order and every one is evaluated; nothing short-circuits.

use crate::chart::{BodyPlacement, HoraryChart, HouseStrength};
use crate::relations::RelationalAnalysis;
use crate::significators::Significators;
use crate::western::Body;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Yes,
    No,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Yes => "yes",
            Side::No => "no",
        })
    }
}

/// Inputs every rule reads.
#[derive(Debug, Clone, Copy)]
pub struct JudgmentContext<'a> {
    pub chart: &'a HoraryChart,
    pub significators: &'a Significators,
    pub relations: &'a RelationalAnalysis,
}

impl<'a> JudgmentContext<'a> {
    pub fn querent(&self) -> &'a BodyPlacement {
        self.chart.placement(self.significators.querent.body)
    }

    pub fn quesited(&self) -> &'a BodyPlacement {
        self.chart.placement(self.significators.quesited.body)
    }

    /// House signifying the matter asked about.
    pub fn quesited_house(&self) -> u8 {
        self.significators.quesited.house
    }
}

#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub side: Side,
    pub applies: fn(&JudgmentContext) -> bool,
    pub weight: fn(&JudgmentContext) -> f64,
    pub describe: fn(&JudgmentContext) -> String,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("side", &self.side)
            .finish()
    }
}

/// A rule that fired and what it contributed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Factor {
    pub rule: &'static str,
    pub side: Side,
    pub weight: f64,
    pub description: String,
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:+} {}): {}", self.rule, self.weight, self.side, self.description)
    }
}

impl Rule {
    /// Evaluate against a context; `None` when the predicate does not hold.
    pub fn fire(&self, ctx: &JudgmentContext) -> Option<Factor> {
        if !(self.applies)(ctx) {
            return None;
        }
        Some(Factor {
            rule: self.name,
            side: self.side,
            weight: (self.weight)(ctx),
            description: (self.describe)(ctx),
        })
    }
}

fn always(_: &JudgmentContext) -> bool {
    true
}

fn moon_applies_to_querent(ctx: &JudgmentContext) -> bool {
    let querent = ctx.significators.querent.body;
    querent != Body::Moon
        && ctx
            .relations
            .aspect_between(Body::Moon, querent)
            .map(|a| a.applying)
            .unwrap_or(false)
}

fn querent_house_points(ctx: &JudgmentContext) -> f64 {
    HouseStrength::of(ctx.querent().house).points()
}

fn quesited_house_points(ctx: &JudgmentContext) -> f64 {
    HouseStrength::of(ctx.quesited().house).points() / 2.0
}

fn describe_dignity(p: &BodyPlacement) -> String {
    format!("{} in {} is in {} ({:+})", p.body, p.sign, p.dignity.label(), p.dignity.score())
}

fn describe_house(p: &BodyPlacement) -> String {
    let strength = HouseStrength::of(p.house);
    format!("{} in {} house {}", p.body, strength.label(), p.house)
}

/// The core rule table.
pub const CORE_RULES: &[Rule] = &[
    Rule {
        name: "Self-answering",
        side: Side::Yes,
        applies: |ctx| ctx.significators.is_self_answering(),
        weight: |_| 0.0,
        describe: |ctx| {
            format!(
                "{} rules both house 1 and house {}",
                ctx.significators.querent.body,
                ctx.quesited_house()
            )
        },
    },
    Rule {
        name: "Moon favors querent",
        side: Side::Yes,
        applies: moon_applies_to_querent,
        weight: |_| 4.0,
        describe: |ctx| match ctx.relations.aspect_between(Body::Moon, ctx.significators.querent.body) {
            Some(aspect) => format!("Moon applies by {} to {}", aspect.kind, ctx.significators.querent.body),
            None => format!("Moon applies to {}", ctx.significators.querent.body),
        },
    },
    Rule {
        name: "Direct occupation",
        side: Side::Yes,
        applies: |ctx| ctx.querent().house == ctx.quesited_house(),
        weight: |_| 3.0,
        describe: |ctx| format!("{} occupies house {}", ctx.querent().body, ctx.quesited_house()),
    },
    Rule {
        name: "Mutual reception",
        side: Side::Yes,
        applies: |ctx| ctx.relations.reception.present,
        weight: |_| 3.0,
        describe: |ctx| ctx.relations.reception.rationale.clone(),
    },
    Rule {
        name: "Querent dignity",
        side: Side::Yes,
        applies: |ctx| ctx.querent().dignity.score() > 0,
        weight: |_| 2.0,
        describe: |ctx| describe_dignity(ctx.querent()),
    },
    Rule {
        name: "Quesited dignity",
        side: Side::Yes,
        applies: |ctx| ctx.quesited().dignity.score() > 0,
        weight: |_| 2.0,
        describe: |ctx| describe_dignity(ctx.quesited()),
    },
    Rule {
        name: "Moon favorable",
        side: Side::Yes,
        applies: |ctx| ctx.relations.moon.aspecting_benefic,
        weight: |_| 2.0,
        describe: |ctx| format!("Moon in house {} has benefic contact", ctx.relations.moon.house),
    },
    Rule {
        name: "Moon unfavorable",
        side: Side::No,
        applies: |ctx| ctx.relations.moon.aspecting_malefic,
        weight: |_| 2.0,
        describe: |ctx| format!("Moon in house {} has malefic contact", ctx.relations.moon.house),
    },
    Rule {
        name: "House strength (querent)",
        side: Side::Yes,
        applies: always,
        weight: querent_house_points,
        describe: |ctx| describe_house(ctx.querent()),
    },
    Rule {
        name: "House strength (quesited)",
        side: Side::Yes,
        applies: always,
        weight: quesited_house_points,
        describe: |ctx| describe_house(ctx.quesited()),
    },
];

/// Opt-in rules that score afflictions against the matter.
pub const AFFLICTION_RULES: &[Rule] = &[
    Rule {
        name: "Querent debility",
        side: Side::No,
        applies: |ctx| ctx.querent().dignity.is_debility(),
        weight: |_| 2.0,
        describe: |ctx| describe_dignity(ctx.querent()),
    },
    Rule {
        name: "Quesited debility",
        side: Side::No,
        applies: |ctx| ctx.quesited().dignity.is_debility(),
        weight: |_| 2.0,
        describe: |ctx| describe_dignity(ctx.quesited()),
    },
    Rule {
        name: "Hayz",
        side: Side::No,
        applies: |ctx| ctx.relations.hayz.present,
        weight: |_| 3.0,
        describe: |ctx| ctx.relations.hayz.rationale.clone(),
    },
    Rule {
        name: "Querent combust",
        side: Side::No,
        applies: |ctx| {
            ctx.relations
                .solar_condition(ctx.significators.querent.body)
                .map(|c| c.is_afflicted())
                .unwrap_or(false)
        },
        weight: |_| 2.0,
        describe: |ctx| format!("{} is under the Sun's beams", ctx.significators.querent.body),
    },
];
