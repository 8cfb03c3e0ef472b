//! Regret Matrix - Opportunity loss of each alternative per state of nature.

use serde::{Deserialize, Serialize};

use super::{PayoffTable, RuleOutcome, State};

/// Regret of a single alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegretRow {
    pub alternative: String,
    /// `best_a - outcome_a`
    pub regret_a: f64,
    /// `best_b - outcome_b`
    pub regret_b: f64,
}

impl RegretRow {
    /// The worse of the two regrets.
    pub fn max_regret(&self) -> f64 {
        self.regret_a.max(self.regret_b)
    }
}

/// Regrets for every alternative, in table order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegretMatrix {
    /// Column maximum of the first state (0 for an empty table).
    pub best_a: f64,
    /// Column maximum of the second state (0 for an empty table).
    pub best_b: f64,
    pub rows: Vec<RegretRow>,
}

impl RegretMatrix {
    /// Computes the regret of each alternative against the column maxima.
    ///
    /// # Edge Cases
    /// - Empty table: no rows, both maxima 0
    /// - Single alternative: one row of zero regret
    pub fn compute(table: &PayoffTable) -> Self {
        let (Some(best_a), Some(best_b)) = (
            table.best_outcome(State::First),
            table.best_outcome(State::Second),
        ) else {
            return Self::default();
        };

        let rows = table
            .iter()
            .map(|alt| RegretRow {
                alternative: alt.name().to_string(),
                regret_a: best_a - alt.outcome_a(),
                regret_b: best_b - alt.outcome_b(),
            })
            .collect();

        Self { best_a, best_b, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First alternative with the strictly smallest maximum regret.
    pub fn minimax(&self) -> RuleOutcome {
        let mut best: Option<&RegretRow> = None;
        let mut best_regret = f64::INFINITY;

        for row in &self.rows {
            let regret = row.max_regret();
            if regret < best_regret {
                best = Some(row);
                best_regret = regret;
            }
        }

        match best.or_else(|| self.rows.first()) {
            Some(row) => RuleOutcome::new(row.alternative.clone(), best_regret),
            None => RuleOutcome::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regret_is_distance_to_column_maximum() {
        let table = PayoffTable::builder()
            .alternative("A", 10.0, 5.0)
            .alternative("B", 20.0, 25.0)
            .alternative("C", 30.0, 15.0)
            .build();

        let matrix = RegretMatrix::compute(&table);

        assert_eq!(matrix.best_a, 30.0);
        assert_eq!(matrix.best_b, 25.0);
        let regrets: Vec<_> = matrix
            .rows
            .iter()
            .map(|r| (r.alternative.as_str(), r.regret_a, r.regret_b, r.max_regret()))
            .collect();
        assert_eq!(
            regrets,
            vec![
                ("A", 20.0, 20.0, 20.0),
                ("B", 10.0, 0.0, 10.0),
                ("C", 0.0, 10.0, 10.0),
            ]
        );
    }

    #[test]
    fn regrets_are_never_negative() {
        let table = PayoffTable::builder()
            .alternative("A", -4.0, 8.0)
            .alternative("B", 3.5, -1.0)
            .build();

        let matrix = RegretMatrix::compute(&table);
        assert!(matrix.rows.iter().all(|r| r.regret_a >= 0.0 && r.regret_b >= 0.0));
    }

    #[test]
    fn minimax_tie_goes_to_first_row() {
        let table = PayoffTable::builder()
            .alternative("A", 10.0, 0.0)
            .alternative("B", 0.0, 10.0)
            .build();

        // Both have max regret 10
        assert_eq!(RegretMatrix::compute(&table).minimax(), RuleOutcome::new("A", 10.0));
    }

    #[test]
    fn empty_table_has_empty_matrix() {
        let matrix = RegretMatrix::compute(&PayoffTable::empty());
        assert!(matrix.is_empty());
        assert_eq!(matrix.minimax(), RuleOutcome::none());
    }
}
