extern crate freva_complete_lib;
use freva_complete_lib as fc;

#[test]
fn test_all_flags_are_flag_specs() {
    let lines = vec!["--debug", "-h", "--version[Show the version]"];
    let partition = fc::partition(&lines, '-');
    assert!(partition.values.is_empty());
    assert_eq!(partition.flags, lines);
}

#[test]
fn test_no_flags() {
    let lines = vec!["databrowser", "plugin[Apply data analysis plugin.]", "history"];
    let partition = fc::partition(&lines, '-');
    assert!(partition.flags.is_empty());
    assert_eq!(partition.values, lines);
}

#[test]
fn test_partition_keeps_order_and_drops_blank_lines() {
    let lines = vec!["plugin", "", "--debug", "   ", "databrowser", "-v"];
    let partition = fc::partition(&lines, '-');
    assert_eq!(partition.flags, vec!["--debug", "-v"]);
    assert_eq!(partition.values, vec!["plugin", "databrowser"]);
}

#[test]
fn test_partition_other_marker() {
    let lines = vec!["+verbose", "-not-a-flag"];
    let partition = fc::partition(&lines, '+');
    assert_eq!(partition.flags, vec!["+verbose"]);
    assert_eq!(partition.values, vec!["-not-a-flag"]);
}

#[test]
fn test_token_classify() {
    assert_eq!(
        fc::Token::classify("--debug", '-'),
        fc::Token::Flag(String::from("--debug"))
    );
    assert_eq!(
        fc::Token::classify("plugin", '-'),
        fc::Token::Value(String::from("plugin"))
    );
}

#[test]
fn test_entry_option_detail() {
    let entry = fc::Entry::parse("threshold[a numeric option]");
    assert_eq!(entry.key, "threshold");
    assert_eq!(entry.description.as_deref(), Some("a numeric option"));
    assert_eq!(entry.action, None);
}

#[test]
fn test_entry_with_action() {
    let entry = fc::Entry::parse("input_file[Input file (mandatory)]:file:_files");
    assert_eq!(entry.key, "input_file");
    assert_eq!(entry.description.as_deref(), Some("Input file (mandatory)"));
    assert_eq!(entry.action.as_deref(), Some(":file:_files"));
}

#[test]
fn test_entry_splits_on_first_bracket() {
    let entry = fc::Entry::parse("variable[Variable name [default: tas]]");
    assert_eq!(entry.key, "variable");
    assert_eq!(entry.description.as_deref(), Some("Variable name [default: tas]"));
}

#[test]
fn test_entry_unclosed_bracket() {
    let entry = fc::Entry::parse("broken[no closing bracket");
    assert_eq!(entry.key, "broken");
    assert_eq!(entry.description.as_deref(), Some("no closing bracket"));
}

#[test]
fn test_entry_colon_help() {
    let entry = fc::Entry::parse("databrowser: Find data in the system.");
    assert_eq!(entry.key, "databrowser");
    assert_eq!(entry.description.as_deref(), Some("Find data in the system."));
}

#[test]
fn test_entry_bare() {
    assert_eq!(fc::Entry::parse("  movieplotter "), fc::Entry::bare("movieplotter"));
}

#[test]
fn test_facet_included() {
    let facet = fc::Facet::parse("color:2,red,blue");
    assert_eq!(facet.name, "color");
    assert_eq!(facet.values, vec!["red", "blue"]);
    assert!(facet.is_selectable());
}

#[test]
fn test_facet_excluded() {
    let facet = fc::Facet::parse("size:1,small");
    assert_eq!(facet.name, "size");
    assert_eq!(facet.values, vec!["small"]);
    assert!(!facet.is_selectable());
}

#[test]
fn test_facet_without_count() {
    let facet = fc::Facet::parse("project: cmip5,cmip6,observations");
    assert_eq!(facet.name, "project");
    assert_eq!(facet.values, vec!["cmip5", "cmip6", "observations"]);
}

#[test]
fn test_facet_numeric_values() {
    let facet = fc::Facet::parse("level: 850,500");
    assert_eq!(facet.values, vec!["850", "500"]);
    assert!(facet.is_selectable());

    let facet = fc::Facet::parse("time_frequency:3,1,3,6");
    assert_eq!(facet.values, vec!["1", "3", "6"]);

    let facet = fc::Facet::parse("ensemble: 2,1");
    assert_eq!(facet.values, vec!["2", "1"]);
}

#[test]
fn test_facet_blank_fields() {
    let facet = fc::Facet::parse("ensemble:2, r1i1p1, ,r2i1p1,");
    assert_eq!(facet.values, vec!["r1i1p1", "r2i1p1"]);
}

#[test]
fn test_facet_without_delimiter() {
    let facet = fc::Facet::parse("garbage");
    assert_eq!(facet.name, "garbage");
    assert!(facet.values.is_empty());
    assert!(!facet.is_selectable());
}

#[test]
fn test_selectable_facets() {
    let lines = vec![
        "color:2,red,blue",
        "size:1,small",
        "",
        "no delimiter here",
        "model:3,mpi-esm,ec-earth,cnrm",
    ];
    let facets = fc::selectable_facets(&lines);
    let names: Vec<&str> = facets.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["color", "model"]);
    assert_eq!(fc::MIN_FACET_VALUES, 2);
}
