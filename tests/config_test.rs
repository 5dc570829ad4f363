extern crate freva_complete_lib;
use freva_complete_lib as fc;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("freva-complete-{}-{}", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_defaults() {
    let config = fc::Config::default();
    assert_eq!(config.tool, "freva");
    assert_eq!(config.program, "freva-utils");
    assert_eq!(config.flag_marker, '-');
    assert_eq!(config.plugin_command, "plugin");
    assert_eq!(config.facet_command, "databrowser");
    assert!(config.aliases.is_empty());
    assert_eq!(config.completion_dir, None);
}

#[test]
fn test_partial_json() {
    let config = fc::Config::from_json(
        r#"{"program": "/opt/freva/bin/freva-utils", "aliases": ["fv"], "flag_marker": "+"}"#,
    )
    .unwrap();
    assert_eq!(config.program, "/opt/freva/bin/freva-utils");
    assert_eq!(config.aliases, vec!["fv"]);
    assert_eq!(config.flag_marker, '+');
    assert_eq!(config.tool, "freva");
}

#[test]
fn test_bad_json() {
    let result = fc::Config::from_json("{\"program\": 3");
    assert!(result.unwrap_err().starts_with("Problem parsing configuration"));
}

#[test]
fn test_from_file() {
    let path = temp_file("complete.json", r#"{"tool": "freva-dev"}"#);
    let config = fc::Config::from_file(&path).unwrap();
    assert_eq!(config.tool, "freva-dev");
    let _ = fs::remove_file(&path);

    assert!(fc::Config::from_file(&PathBuf::from("/nonexistent/complete.json")).is_err());
    assert!(fc::Config::load(Some(&PathBuf::from("/nonexistent/complete.json"))).is_err());
}

#[test]
fn test_env_overrides() {
    let config = fc::Config::default().apply_env(|key| match key {
        fc::PROGRAM_ENV => Some(String::from("/usr/bin/freva-utils")),
        fc::TOOL_ENV => Some(String::new()),
        _ => None,
    });
    assert_eq!(config.program, "/usr/bin/freva-utils");
    assert_eq!(config.tool, "freva");
}

#[test]
fn test_argument_overrides() {
    let args = vec![
        "freva-complete",
        "init",
        "--shell",
        "zsh",
        "--tool",
        "fv",
        "--fpath",
        "/opt/zsh",
    ];
    let matches = fc::build_cli().get_matches_from(args);
    let (_, m) = matches.subcommand();
    let config = fc::Config::default().apply_args(m.unwrap());
    assert_eq!(config.tool, "fv");
    assert_eq!(config.completion_dir, Some(PathBuf::from("/opt/zsh")));
    assert_eq!(config.program, "freva-utils");
}

#[test]
fn test_registered_commands() {
    let mut config = fc::Config::default();
    config.aliases = vec![String::from("freva-plugin"), String::from("fv")];
    assert_eq!(
        config.registered_commands(),
        vec!["freva", "freva-plugin", "freva-databrowser", "fv"]
    );
}

#[test]
fn test_config_command() {
    let path = temp_file("shown.json", r#"{"aliases": ["fv"]}"#);
    let path_string = path.to_str().unwrap().to_string();
    let args = vec![
        "freva-complete",
        "config",
        "--config",
        path_string.as_str(),
        "--program",
        "/opt/bin/helper",
    ];
    let matches = fc::build_cli().get_matches_from(args);
    let (_, m) = matches.subcommand();
    let mut cursor = Cursor::new(vec![]);
    let result = fc::config_command(m.unwrap(), &matches, &mut cursor);
    let _ = fs::remove_file(&path);
    assert!(result.is_ok());

    let output = String::from_utf8(cursor.into_inner()).unwrap();
    let shown = fc::Config::from_json(&output).unwrap();
    assert_eq!(shown.aliases, vec!["fv"]);
    assert_eq!(shown.program, "/opt/bin/helper");
}
