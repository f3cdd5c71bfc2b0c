use std::io::Write;

use bimatch::{BimatchConfig, Edge, StopReason, match_graph_from_file, match_graph_with_config};
use tempfile::NamedTempFile;

fn write_config(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(yaml.as_bytes()).expect("write config");
    file
}

fn contested() -> Vec<Edge<&'static str, &'static str>> {
    vec![
        Edge::new("a", "b", 1.0),
        Edge::new("c", "b", 2.0),
        Edge::new("y", "z", 10.0),
    ]
}

#[test]
fn file_config_drives_the_matcher() {
    let file = write_config(
        r#"
version: "1.0"
name: "reuse"
matcher:
  reuse_rights_across_rounds: true
"#,
    );

    let result = match_graph_from_file(&contested(), file.path()).expect("match");
    assert_eq!(result.stop, StopReason::Exhausted);
    assert_eq!(result.matches.len(), 3);
}

#[test]
fn round_limit_from_file_leaves_pending_lefts() {
    let file = write_config(
        r#"
version: "1"
matcher:
  max_rounds: 1
  reuse_rights_across_rounds: true
"#,
    );

    let result = match_graph_from_file(&contested(), file.path()).expect("match");
    assert_eq!(result.stop, StopReason::RoundLimit);
    assert_eq!(result.pending, vec!["c"]);
}

#[test]
fn empty_sections_use_defaults() {
    let cfg = BimatchConfig::from_yaml("version: \"1.0\"\n").expect("config");
    assert_eq!(cfg, BimatchConfig::default());

    let result = match_graph_with_config(&contested(), &cfg).expect("match");
    assert_eq!(result.stop, StopReason::NoRemainingEdges);
    assert_eq!(result.unmatched.len(), 1);
}

#[test]
fn config_survives_a_yaml_round_trip() {
    let cfg = BimatchConfig::from_yaml(
        r#"
version: "1.0"
solver:
  sentinel_margin: 3.5
matcher:
  max_rounds: 7
"#,
    )
    .expect("config");

    let dumped = serde_yaml::to_string(&cfg).expect("serialize");
    assert_eq!(BimatchConfig::from_yaml(&dumped).expect("reload"), cfg);
}
