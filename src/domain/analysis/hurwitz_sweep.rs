//! Hurwitz Sweep - Hurwitz scores of every alternative across optimism degrees.

use serde::{Deserialize, Serialize};

use super::PayoffTable;
use crate::domain::foundation::OptimismDegree;

/// Number of sweep steps between h = 0.0 and h = 1.0.
pub const SWEEP_STEPS: u32 = 10;

/// One row of the sweep: a degree and the score of each alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepRow {
    pub degree: OptimismDegree,
    /// One score per alternative, in table order.
    pub scores: Vec<f64>,
}

impl SweepRow {
    /// Index of the first alternative with the strictly greatest score.
    pub fn leader(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        let mut best_score = f64::NEG_INFINITY;
        for (index, &score) in self.scores.iter().enumerate() {
            if score > best_score {
                best = Some(index);
                best_score = score;
            }
        }
        best
    }
}

/// Hurwitz scores for h = 0.0, 0.1, ..., 1.0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HurwitzSweep {
    /// Alternative names, in table order.
    pub headers: Vec<String>,
    pub rows: Vec<SweepRow>,
}

impl HurwitzSweep {
    /// Computes the sweep. Always yields `SWEEP_STEPS + 1` rows; on an empty
    /// table each row has no scores.
    pub fn compute(table: &PayoffTable) -> Self {
        let headers = table.iter().map(|alt| alt.name().to_string()).collect();

        let rows = (0..=SWEEP_STEPS)
            .map(|step| {
                // h = step / 10, never accumulated.
                let degree = OptimismDegree::new(f64::from(step) / f64::from(SWEEP_STEPS));
                let scores = table
                    .iter()
                    .map(|alt| degree.blend(alt.outcome_a(), alt.outcome_b()))
                    .collect();
                SweepRow { degree, scores }
            })
            .collect();

        Self { headers, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Scores of one alternative across all degrees.
    pub fn column(&self, index: usize) -> Vec<f64> {
        self.rows
            .iter()
            .filter_map(|row| row.scores.get(index).copied())
            .collect()
    }

    /// Degrees at which the leading alternative changes, with the new leader's name.
    pub fn switch_points(&self) -> Vec<(OptimismDegree, String)> {
        let mut switches = Vec::new();
        let mut previous = None;

        for row in &self.rows {
            let leader = row.leader();
            if leader != previous {
                if let Some(name) = leader.and_then(|i| self.headers.get(i)) {
                    switches.push((row.degree, name.clone()));
                }
                previous = leader;
            }
        }

        switches
    }
}
