//! Querent and quesited significators.

use crate::chart::HoraryChart;
use crate::error::HoraryError;
use crate::question::QuestionCategory;
use crate::western::{Body, Sign};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignificatorRole {
    Querent,
    Quesited,
}

impl fmt::Display for SignificatorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SignificatorRole::Querent => "querent",
            SignificatorRole::Quesited => "quesited",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Significator {
    pub role: SignificatorRole,
    pub body: Body,
    /// House whose cusp sign the body rules
    pub house: u8,
    pub sign: Sign,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Significators {
    pub querent: Significator,
    pub quesited: Significator,
}

impl Significators {
    /// One body signifies both sides of the question.
    pub fn is_self_answering(&self) -> bool {
        self.querent.body == self.quesited.body
    }
}

fn ruler_of_house(chart: &HoraryChart, role: SignificatorRole, house: u8) -> Result<Significator, HoraryError> {
    let cusp = chart.cusp(house).ok_or(HoraryError::UnresolvedSignificator {
        role,
        house,
        sign: chart.ascendant_sign(),
    })?;
    let body = cusp.ruler.ok_or(HoraryError::UnresolvedSignificator {
        role,
        house,
        sign: cusp.sign,
    })?;
    Ok(Significator {
        role,
        body,
        house,
        sign: cusp.sign,
    })
}

/// Querent from the 1st house, quesited from the category's house.
pub fn resolve_significators(chart: &HoraryChart, category: QuestionCategory) -> Result<Significators, HoraryError> {
    let querent = ruler_of_house(chart, SignificatorRole::Querent, 1)?;
    let quesited = ruler_of_house(chart, SignificatorRole::Quesited, category.house())?;

    let significators = Significators { querent, quesited };
    if significators.is_self_answering() {
        log::debug!(
            "Self-answering chart: {} rules houses 1 and {}",
            querent.body,
            quesited.house
        );
    }
    log::debug!(
        "Significators: querent {} ({}), quesited {} ({}, house {})",
        querent.body,
        querent.sign,
        quesited.body,
        quesited.sign,
        quesited.house
    );
    Ok(significators)
}
