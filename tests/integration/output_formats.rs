// tests/integration/output_formats.rs
use almanac::{
    app,
    cli::{Args, build_config},
    presentation,
};
use clap::Parser;
use serde_json::Value;

#[path = "../common/mod.rs"]
mod common;
use common::TempWorkspace;

fn render(format: &str) -> String {
    let ws = TempWorkspace::new();
    let file = ws.example();
    let args = Args::parse_from([
        "almanac".to_string(),
        "--format".to_string(),
        format.to_string(),
        file.display().to_string(),
    ]);
    let config = build_config(&args).unwrap();
    let output = app::run(&config).unwrap();
    presentation::render(&output, &config).unwrap()
}

#[test]
fn json_output() {
    let value: Value = serde_json::from_str(&render("json")).unwrap();
    assert_eq!(value["reduction"]["minimum"]["value"], 46);
    assert_eq!(value["reduction"]["minimum"]["unit"], "location");
    assert_eq!(value["stages"].as_array().unwrap().len(), 7);
    assert!(value.get("trace").is_none());
}

#[test]
fn yaml_output() {
    let text = render("yaml");
    assert!(text.contains("layout: ranges"));
    assert!(text.contains("unit: location"));
}

#[test]
fn table_output() {
    let text = render("table");
    assert!(text.contains("humidity -> location"));
    assert!(text.contains("minimum location: 46"));
}
