//! JSON shape of run results, as handed to downstream consumers.

mod common;

use bimatch::{LeftMatching, MatchConfig, Matcher, StopReason, match_graph};
use common::{Graph, scenario_b};
use serde_json::Value;

fn owned(edges: Vec<bimatch::Edge<&'static str, &'static str>>) -> Graph {
    edges
        .into_iter()
        .map(|e| bimatch::Edge::new(e.left.to_string(), e.right.to_string(), e.weight))
        .collect()
}

#[test]
fn left_matching_survives_json() {
    let result = match_graph(&owned(scenario_b())).expect("match");

    let json = serde_json::to_string(&result).expect("serialize");
    let back: LeftMatching<String, String> = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(back, result);
    assert_eq!(back.unmatched[0].left, "c");
    assert_eq!(back.total_cost(), result.total_cost());
}

#[test]
fn json_fields_use_snake_case() {
    let result = match_graph(&owned(scenario_b())).expect("match");
    let value = serde_json::to_value(&result).expect("serialize");

    assert_eq!(value["stop"], Value::from("no_remaining_edges"));
    assert_eq!(value["unmatched"][0]["left"], Value::from("c"));
    assert_eq!(value["unmatched"][0]["rounds"], Value::from(1));
    assert_eq!(value["matches"][0]["right"], Value::from("b"));
    assert_eq!(value["rounds"][0]["round"], Value::from(1));
    assert!(value["pending"].as_array().expect("array").is_empty());
}

#[test]
fn interrupted_run_keeps_pending_through_json() {
    let matcher = Matcher::new(
        MatchConfig::default()
            .with_right_reuse(true)
            .with_max_rounds(1),
    );
    let result = matcher
        .match_all_left(&owned(scenario_b()))
        .expect("match");
    assert_eq!(result.stop, StopReason::RoundLimit);

    let value = serde_json::to_value(&result).expect("serialize");
    assert_eq!(value["stop"], Value::from("round_limit"));
    assert_eq!(value["pending"], serde_json::json!(["c"]));

    let back: LeftMatching<String, String> = serde_json::from_value(value).expect("deserialize");
    assert_eq!(back.pending, vec!["c".to_string()]);
    assert_eq!(back, result);
}
