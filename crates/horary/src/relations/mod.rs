pub mod hayz;
pub mod moon;
pub mod reception;
pub mod solar;

pub use hayz::{detect_hayz, hayz_between, HayzPair, HayzResult, HAYZ_ORB};
pub use moon::{moon_condition, MoonCondition, MoonContactMode, MoonPhase};
pub use reception::{mutual_reception, ReceptionResult};
pub use solar::{solar_proximity, SolarCondition, SolarProximity};

use crate::aspects::{AspectCalculator, AspectRecord};
use crate::chart::HoraryChart;
use crate::significators::Significators;
use crate::western::Body;
use serde::Serialize;

/// Everything the judgment rules read besides the chart itself.
#[derive(Debug, Clone, Serialize)]
pub struct RelationalAnalysis {
    pub aspects: Vec<AspectRecord>,
    pub reception: ReceptionResult,
    pub hayz: HayzResult,
    pub moon: MoonCondition,
    pub solar: Vec<SolarProximity>,
}

impl RelationalAnalysis {
    /// Aspect joining two bodies, if any.
    pub fn aspect_between(&self, a: Body, b: Body) -> Option<&AspectRecord> {
        self.aspects.iter().find(|r| r.joins(a, b))
    }

    pub fn solar_condition(&self, body: Body) -> Option<SolarCondition> {
        self.solar.iter().find(|s| s.body == body).map(|s| s.condition)
    }
}

pub fn analyze(chart: &HoraryChart, significators: &Significators, mode: MoonContactMode) -> RelationalAnalysis {
    let aspects = AspectCalculator::new().compute_aspects(chart);
    let reception = mutual_reception(chart, significators.querent.body, significators.quesited.body);
    let hayz = detect_hayz(chart);
    let moon = moon_condition(chart, &aspects, mode);
    let solar = solar_proximity(chart);

    log::debug!(
        "Relations: {} aspects, reception {}, hayz {}, moon in house {} ({:?})",
        aspects.len(),
        reception.present,
        hayz.present,
        moon.house,
        moon.phase
    );

    RelationalAnalysis {
        aspects,
        reception,
        hayz,
        moon,
        solar,
    }
}
