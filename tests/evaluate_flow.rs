//! Integration tests for the full evaluation flow with the real adapters.

use std::fs;
use std::sync::Arc;

use decision_rules::adapters::{
    CanonicalCsvWriter, InMemoryTableSource, JsonReportRenderer, LenientCsvParser,
    LocalFileSource, TextReportRenderer,
};
use decision_rules::application::{
    EvaluateDecisionCommand, EvaluateDecisionHandler, LoadTableHandler, LoadTableQuery,
    NormalizeTableCommand, NormalizeTableHandler,
};
use decision_rules::domain::analysis::{DecisionReport, DecisionRule};
use decision_rules::domain::foundation::{ErrorCode, OptimismDegree};
use decision_rules::ports::ReportRenderer;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const EXPANSION: &str = "\
outcomes\\alternatives,StatusQuo,Expansion,Collaboration
first,10,20,30
second,5,25,15
";

fn evaluate(cmd: EvaluateDecisionCommand) -> DecisionReport {
    EvaluateDecisionHandler::new(Arc::new(LenientCsvParser::new())).handle(cmd)
}

fn results(report: &DecisionReport) -> Vec<(String, String, f64)> {
    report
        .results
        .iter()
        .map(|r| (r.rule_name.clone(), r.chosen.clone(), r.score))
        .collect()
}

fn row(rule: &str, chosen: &str, score: f64) -> (String, String, f64) {
    (rule.to_string(), chosen.to_string(), score)
}

#[test]
fn evaluates_labelled_table() {
    let report = evaluate(EvaluateDecisionCommand::new(EXPANSION).with_savage(true));

    assert_eq!(
        report.table.names(),
        vec!["StatusQuo", "Expansion", "Collaboration"]
    );
    assert_eq!(
        results(&report),
        vec![
            row("pessimistic", "Collaboration", 30.0),
            row("optimistic", "Expansion", 25.0),
            row("laplace", "Expansion", 22.5),
            row("hurwitz", "Expansion", 22.5),
            row("savage", "Expansion", 10.0),
        ]
    );
}

#[test]
fn hurwitz_extremes_match_pessimistic_and_optimistic() {
    let low = evaluate(EvaluateDecisionCommand::new(EXPANSION).with_degree(OptimismDegree::ZERO));
    let high = evaluate(EvaluateDecisionCommand::new(EXPANSION).with_degree(OptimismDegree::ONE));

    let hurwitz_low = low.result("hurwitz").unwrap();
    let pessimistic = low.result("pessimistic").unwrap();
    assert_eq!(
        (&hurwitz_low.chosen, hurwitz_low.score),
        (&pessimistic.chosen, pessimistic.score)
    );

    let hurwitz_high = high.result("hurwitz").unwrap();
    let optimistic = high.result("optimistic").unwrap();
    assert_eq!(
        (&hurwitz_high.chosen, hurwitz_high.score),
        (&optimistic.chosen, optimistic.score)
    );
}

#[test]
fn sweep_end_rows_match_outcomes() {
    let report = evaluate(EvaluateDecisionCommand::new(EXPANSION));
    let sweep = &report.sweep;

    assert_eq!(sweep.headers, vec!["StatusQuo", "Expansion", "Collaboration"]);
    assert_eq!(sweep.rows.first().unwrap().scores, vec![10.0, 20.0, 30.0]);
    assert_eq!(sweep.rows.last().unwrap().scores, vec![5.0, 25.0, 15.0]);
}

#[test]
fn semicolons_and_decimal_points_are_accepted() {
    let text = "Alternatives; Build; Wait\r\nfirst; 1.5; -2\r\nsecond; 3; 4.25\r\n";
    let report = evaluate(EvaluateDecisionCommand::new(text).only(DecisionRule::Laplace));

    assert_eq!(results(&report), vec![row("laplace", "Build", 2.25)]);
}

#[test]
fn empty_text_gives_degraded_report() {
    let report = evaluate(EvaluateDecisionCommand::new("").with_savage(true));

    assert!(report.is_empty());
    assert!(report
        .results
        .iter()
        .all(|r| r.chosen.is_empty() && r.score == 0.0));
    assert_eq!(report.sweep.rows.len(), 11);
}

#[test]
fn loads_from_file_then_evaluates() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("expansion.csv"), EXPANSION).unwrap();

    let loader = LoadTableHandler::new(Arc::new(LocalFileSource::with_fallback_dirs([
        temp.path(),
    ])));
    let text = loader
        .handle(LoadTableQuery {
            location: "expansion.csv".to_string(),
        })
        .unwrap();

    let report = evaluate(EvaluateDecisionCommand::new(text));
    assert_eq!(report.result("optimistic").unwrap().chosen, "Expansion");
}

#[test]
fn missing_table_is_source_not_found() {
    let loader = LoadTableHandler::new(Arc::new(InMemoryTableSource::new()));
    let err = loader
        .handle(LoadTableQuery {
            location: "absent.csv".to_string(),
        })
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::SourceNotFound);
}

#[test]
fn normalized_table_evaluates_identically() {
    let normalizer = NormalizeTableHandler::new(
        Arc::new(LenientCsvParser::new()),
        Arc::new(CanonicalCsvWriter::new()),
    );
    let canonical = normalizer.handle(NormalizeTableCommand {
        csv: EXPANSION.to_string(),
    });

    let original = evaluate(EvaluateDecisionCommand::new(EXPANSION).with_savage(true));
    let normalized = evaluate(EvaluateDecisionCommand::new(canonical).with_savage(true));
    assert_eq!(original, normalized);
}

#[test]
fn renderers_agree_on_results() {
    let report = evaluate(EvaluateDecisionCommand::new(EXPANSION));

    let text = TextReportRenderer::new().render(&report);
    assert!(text.contains("| Laplace | Expansion | 22.5 |"));

    let json: serde_json::Value =
        serde_json::from_str(&JsonReportRenderer::new().render(&report)).unwrap();
    assert_eq!(json["results"][2]["chosen"], "Expansion");
    assert_eq!(json["results"][2]["score"], 22.5);
}
