use crate::chart::HoraryChart;
use crate::western::{rules_sign, Body};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceptionResult {
    pub present: bool,
    pub rationale: String,
}

/// Mutual reception by domicile: each body rules the sign the other occupies.
pub fn mutual_reception(chart: &HoraryChart, a: Body, b: Body) -> ReceptionResult {
    if a == b {
        return ReceptionResult {
            present: false,
            rationale: format!("{} cannot receive itself", a),
        };
    }

    let sign_a = chart.placement(a).sign;
    let sign_b = chart.placement(b).sign;
    let a_receives_b = rules_sign(a, sign_b);
    let b_receives_a = rules_sign(b, sign_a);

    // Name the pair in body order so the text does not depend on argument order
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    let (first_sign, second_sign) = (chart.placement(first).sign, chart.placement(second).sign);

    let rationale = if a_receives_b && b_receives_a {
        format!(
            "{} in {} and {} in {} occupy each other's domiciles",
            first, first_sign, second, second_sign
        )
    } else if a_receives_b || b_receives_a {
        let (host, guest) = if a_receives_b { (a, b) } else { (b, a) };
        format!(
            "one-way reception only: {} receives {} in {}",
            host,
            guest,
            chart.placement(guest).sign
        )
    } else {
        format!(
            "no reception between {} in {} and {} in {}",
            first, first_sign, second, second_sign
        )
    };

    ReceptionResult {
        present: a_receives_b && b_receives_a,
        rationale,
    }
}
