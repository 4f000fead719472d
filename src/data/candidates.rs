//! Built-in candidate table

use super::sample::{Admission, CandidateFeatures, Sample};

const R: Admission = Admission::Rejected;
const W: Admission = Admission::Waitlisted;
const A: Admission = Admission::Admitted;

/// Number of rows in the built-in table.
pub const N_CANDIDATES: usize = 40;

// exam score, psychometric, work experience, age, outcome
#[rustfmt::skip]
const ROWS: [(f64, f64, f64, f64, Admission); N_CANDIDATES] = [
    (780.0, 4.0, 3.0, 25.0, A),
    (750.0, 3.9, 4.0, 28.0, A),
    (690.0, 3.3, 3.0, 24.0, W),
    (710.0, 3.7, 5.0, 27.0, A),
    (780.0, 3.9, 4.0, 26.0, A),
    (730.0, 3.7, 6.0, 31.0, A),
    (690.0, 2.3, 1.0, 24.0, R),
    (720.0, 3.3, 4.0, 25.0, A),
    (740.0, 3.3, 5.0, 28.0, A),
    (690.0, 1.7, 1.0, 23.0, R),
    (610.0, 2.7, 3.0, 25.0, R),
    (690.0, 3.7, 5.0, 27.0, A),
    (710.0, 3.7, 6.0, 30.0, A),
    (680.0, 3.3, 4.0, 28.0, W),
    (770.0, 3.3, 3.0, 26.0, A),
    (610.0, 3.0, 1.0, 23.0, R),
    (580.0, 2.7, 4.0, 29.0, R),
    (650.0, 3.7, 6.0, 31.0, W),
    (540.0, 2.7, 2.0, 26.0, R),
    (590.0, 2.3, 3.0, 26.0, R),
    (620.0, 3.3, 2.0, 25.0, W),
    (600.0, 2.0, 1.0, 24.0, R),
    (550.0, 2.3, 4.0, 28.0, R),
    (550.0, 2.7, 1.0, 23.0, R),
    (570.0, 3.0, 2.0, 25.0, R),
    (670.0, 3.3, 6.0, 29.0, W),
    (660.0, 3.7, 4.0, 28.0, W),
    (580.0, 2.3, 2.0, 26.0, R),
    (650.0, 3.7, 6.0, 30.0, W),
    (760.0, 3.3, 5.0, 30.0, A),
    (640.0, 3.0, 1.0, 23.0, R),
    (620.0, 2.7, 2.0, 24.0, R),
    (660.0, 4.0, 4.0, 27.0, W),
    (660.0, 3.3, 6.0, 29.0, W),
    (680.0, 3.3, 5.0, 28.0, W),
    (650.0, 2.3, 1.0, 22.0, R),
    (670.0, 2.7, 2.0, 23.0, R),
    (580.0, 3.3, 1.0, 24.0, R),
    (590.0, 1.7, 4.0, 28.0, R),
    (790.0, 3.7, 5.0, 31.0, A),
];

/// The fixed synthetic candidate rows, in table order.
pub fn candidate_samples() -> Vec<Sample> {
    ROWS.iter()
        .map(|&(exam, psy, exp, age, label)| {
            Sample::new(CandidateFeatures::new(exam, psy, exp, age), label)
        })
        .collect()
}
