//! EvaluateDecisionHandler - Runs the decision rules over pasted table text.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::analysis::{
    DecisionReport, DecisionRule, HurwitzSweep, RegretMatrix, RuleResult,
};
use crate::domain::foundation::OptimismDegree;
use crate::ports::PayoffTableParser;

/// Command to evaluate a payoff table.
#[derive(Debug, Clone)]
pub struct EvaluateDecisionCommand {
    /// Raw table text, as pasted or loaded.
    pub csv: String,
    /// Degree for the Hurwitz rule.
    pub degree: OptimismDegree,
    /// Append the Savage rule and attach the regret matrix.
    pub include_savage: bool,
    /// Run only this rule instead of the default set.
    pub rule: Option<DecisionRule>,
}

impl EvaluateDecisionCommand {
    /// Default evaluation of `csv`: h = 0.5, no Savage.
    pub fn new(csv: impl Into<String>) -> Self {
        Self {
            csv: csv.into(),
            degree: OptimismDegree::default(),
            include_savage: false,
            rule: None,
        }
    }

    pub fn with_degree(mut self, degree: OptimismDegree) -> Self {
        self.degree = degree;
        self
    }

    pub fn with_savage(mut self, include_savage: bool) -> Self {
        self.include_savage = include_savage;
        self
    }

    pub fn only(mut self, rule: DecisionRule) -> Self {
        self.rule = Some(rule);
        self
    }

    /// Rules to run, in result order.
    fn rules(&self) -> Vec<DecisionRule> {
        if let Some(rule) = &self.rule {
            return vec![*rule];
        }

        let mut rules = vec![
            DecisionRule::Pessimistic,
            DecisionRule::Optimistic,
            DecisionRule::Laplace,
            DecisionRule::hurwitz(self.degree),
        ];
        if self.include_savage {
            rules.push(DecisionRule::Savage);
        }
        rules
    }
}

/// Handler for evaluating payoff tables.
///
/// Parses the text, runs each rule in order, and computes the Hurwitz sweep.
/// Never fails: malformed text yields an empty report.
pub struct EvaluateDecisionHandler {
    parser: Arc<dyn PayoffTableParser>,
}

impl EvaluateDecisionHandler {
    pub fn new(parser: Arc<dyn PayoffTableParser>) -> Self {
        Self { parser }
    }

    pub fn handle(&self, cmd: EvaluateDecisionCommand) -> DecisionReport {
        let table = self.parser.parse(&cmd.csv);
        let rules = cmd.rules();

        info!(
            alternatives = table.len(),
            rules = rules.len(),
            degree = cmd.degree.value(),
            "Evaluating decision table"
        );

        let results: Vec<RuleResult> = rules
            .iter()
            .map(|rule| {
                let result = RuleResult::evaluate(rule, &table);
                debug!(
                    rule = %rule,
                    chosen = %result.chosen,
                    score = result.score,
                    "Rule evaluated"
                );
                result
            })
            .collect();

        let regrets = rules
            .iter()
            .any(|rule| matches!(rule, DecisionRule::Savage))
            .then(|| RegretMatrix::compute(&table));

        DecisionReport {
            sweep: HurwitzSweep::compute(&table),
            results,
            regrets,
            table,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::PayoffTable;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = ",A,B,C\n10,20,30\n5,25,15\n";

    /// Parser stub returning a fixed table regardless of input.
    struct FixedParser {
        table: PayoffTable,
    }

    impl PayoffTableParser for FixedParser {
        fn parse(&self, _text: &str) -> PayoffTable {
            self.table.clone()
        }
    }

    fn sample_table() -> PayoffTable {
        PayoffTable::builder()
            .alternative("A", 10.0, 5.0)
            .alternative("B", 20.0, 25.0)
            .alternative("C", 30.0, 15.0)
            .build()
    }

    fn handler_for(table: PayoffTable) -> EvaluateDecisionHandler {
        EvaluateDecisionHandler::new(Arc::new(FixedParser { table }))
    }

    fn summary(report: &DecisionReport) -> Vec<(&str, &str, f64)> {
        report
            .results
            .iter()
            .map(|r| (r.rule_name.as_str(), r.chosen.as_str(), r.score))
            .collect()
    }

    #[test]
    fn default_flow_runs_four_rules_in_order() {
        let report = handler_for(sample_table()).handle(EvaluateDecisionCommand::new(SAMPLE));

        assert_eq!(
            summary(&report),
            vec![
                ("pessimistic", "C", 30.0),
                ("optimistic", "B", 25.0),
                ("laplace", "B", 22.5),
                ("hurwitz", "B", 22.5),
            ]
        );
        assert!(report.regrets.is_none());
        assert_eq!(report.sweep.len(), 11);
        assert_eq!(report.sweep.headers, vec!["A", "B", "C"]);
    }

    #[test]
    fn hurwitz_uses_command_degree() {
        let cmd = EvaluateDecisionCommand::new(SAMPLE).with_degree(OptimismDegree::ZERO);
        let report = handler_for(sample_table()).handle(cmd);

        let hurwitz = report.result("hurwitz").unwrap();
        assert_eq!((hurwitz.chosen.as_str(), hurwitz.score), ("C", 30.0));
    }

    #[test]
    fn savage_is_appended_when_requested() {
        let cmd = EvaluateDecisionCommand::new(SAMPLE).with_savage(true);
        let report = handler_for(sample_table()).handle(cmd);

        assert_eq!(report.results.len(), 5);
        let savage = report.results.last().unwrap();
        assert_eq!(savage.rule_name, "savage");
        assert_eq!((savage.chosen.as_str(), savage.score), ("B", 10.0));

        let regrets = report.regrets.unwrap();
        assert_eq!((regrets.best_a, regrets.best_b), (30.0, 25.0));
    }

    #[test]
    fn single_rule_mode_runs_only_that_rule() {
        let cmd = EvaluateDecisionCommand::new(SAMPLE).only(DecisionRule::Laplace);
        let report = handler_for(sample_table()).handle(cmd);

        assert_eq!(summary(&report), vec![("laplace", "B", 22.5)]);
        assert_eq!(report.sweep.len(), 11);
        assert!(report.regrets.is_none());
    }

    #[test]
    fn single_savage_rule_attaches_regrets() {
        let cmd = EvaluateDecisionCommand::new(SAMPLE).only(DecisionRule::Savage);
        let report = handler_for(sample_table()).handle(cmd);

        assert_eq!(summary(&report), vec![("savage", "B", 10.0)]);
        assert!(report.regrets.is_some());
    }

    #[test]
    fn empty_table_degrades_every_rule() {
        let cmd = EvaluateDecisionCommand::new("").with_savage(true);
        let report = handler_for(PayoffTable::empty()).handle(cmd);

        assert!(report.is_empty());
        assert_eq!(report.results.len(), 5);
        for result in &report.results {
            assert_eq!((result.chosen.as_str(), result.score), ("", 0.0));
        }
        assert_eq!(report.sweep.len(), 11);
        assert!(report.sweep.rows.iter().all(|row| row.scores.is_empty()));
    }

    #[test]
    fn repeated_evaluations_are_independent() {
        let handler = handler_for(sample_table());
        let first = handler.handle(EvaluateDecisionCommand::new(SAMPLE));
        let second = handler.handle(EvaluateDecisionCommand::new(SAMPLE));
        assert_eq!(first, second);
    }
}
