//! Payoff Table - Alternatives with one payoff per state of nature.

use serde::{Deserialize, Serialize};

/// One course of action with a payoff under each of the two states of nature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    name: String,
    outcome_a: f64,
    outcome_b: f64,
}

impl Alternative {
    /// Creates a new alternative.
    pub fn new(name: impl Into<String>, outcome_a: f64, outcome_b: f64) -> Self {
        Self {
            name: name.into(),
            outcome_a,
            outcome_b,
        }
    }

    /// Creates an alternative whose outcomes are still unknown (both zero).
    pub fn unscored(name: impl Into<String>) -> Self {
        Self::new(name, 0.0, 0.0)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Payoff under the first state of nature.
    pub fn outcome_a(&self) -> f64 {
        self.outcome_a
    }

    /// Payoff under the second state of nature.
    pub fn outcome_b(&self) -> f64 {
        self.outcome_b
    }

    /// Mean of both payoffs.
    pub fn mean(&self) -> f64 {
        (self.outcome_a + self.outcome_b) / 2.0
    }
}

/// Which state of nature an outcome belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    First,
    Second,
}

/// Ordered alternatives, in the column order of the source header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayoffTable {
    alternatives: Vec<Alternative>,
}

impl PayoffTable {
    /// Creates an empty payoff table.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a builder for constructing a payoff table.
    pub fn builder() -> PayoffTableBuilder {
        PayoffTableBuilder::new()
    }

    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Alternative> {
        self.alternatives.iter()
    }

    /// Gets the first alternative with the given name.
    pub fn get(&self, name: &str) -> Option<&Alternative> {
        self.alternatives.iter().find(|alt| alt.name == name)
    }

    /// Returns the alternative names in table order.
    pub fn names(&self) -> Vec<&str> {
        self.alternatives.iter().map(|alt| alt.name.as_str()).collect()
    }

    /// Returns true if the table has no alternatives.
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// Returns the number of alternatives.
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    /// Column maximum for one state, or `None` on an empty table.
    pub fn best_outcome(&self, state: State) -> Option<f64> {
        self.alternatives
            .iter()
            .map(|alt| match state {
                State::First => alt.outcome_a,
                State::Second => alt.outcome_b,
            })
            .fold(None, |best, value| match best {
                Some(current) if current >= value => Some(current),
                _ => Some(value),
            })
    }
}

impl<'a> IntoIterator for &'a PayoffTable {
    type Item = &'a Alternative;
    type IntoIter = std::slice::Iter<'a, Alternative>;

    fn into_iter(self) -> Self::IntoIter {
        self.alternatives.iter()
    }
}

impl FromIterator<Alternative> for PayoffTable {
    fn from_iter<I: IntoIterator<Item = Alternative>>(iter: I) -> Self {
        Self {
            alternatives: iter.into_iter().collect(),
        }
    }
}

/// Builder for constructing PayoffTable instances.
///
/// Outcomes are assigned by column index so a parser can fill one state row
/// at a time after the names are known.
#[derive(Debug, Default)]
pub struct PayoffTableBuilder {
    alternatives: Vec<Alternative>,
}

impl PayoffTableBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds alternatives with both outcomes at zero.
    pub fn names(mut self, names: Vec<impl Into<String>>) -> Self {
        self.alternatives
            .extend(names.into_iter().map(Alternative::unscored));
        self
    }

    /// Adds a fully scored alternative.
    pub fn alternative(mut self, name: impl Into<String>, outcome_a: f64, outcome_b: f64) -> Self {
        self.alternatives.push(Alternative::new(name, outcome_a, outcome_b));
        self
    }

    /// Number of alternatives added so far.
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// Sets the outcome of the alternative at `index` for one state.
    /// Indexes past the end are ignored.
    pub fn set_outcome(&mut self, index: usize, state: State, value: f64) {
        if let Some(alt) = self.alternatives.get_mut(index) {
            match state {
                State::First => alt.outcome_a = value,
                State::Second => alt.outcome_b = value,
            }
        }
    }

    /// Builds the payoff table.
    pub fn build(self) -> PayoffTable {
        PayoffTable {
            alternatives: self.alternatives,
        }
    }
}
