#![cfg(unix)]
extern crate freva_complete_lib;
use freva_complete_lib as fc;
use std::fs;
use std::io::Cursor;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

const HELPER: &str = r#"#!/bin/sh
case "$*" in
    "--shell bash --strip freva plugin animator"*)
        printf '%s\n' 'variable[Variable name]' 'outputdir[Output directory]:file:_files' '--debug' ;;
    "--shell bash --strip freva plugin")
        printf '%s\n' 'animator[Create animations]' 'movieplotter[Plot movies]' ;;
    "--shell zsh --strip freva databrowser"*)
        printf '%s\n' 'project:2,cmip5,cmip6' 'product:1,output' ;;
    *)
        exit 1 ;;
esac
"#;

fn write_helper() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("freva-complete-helper-{}", std::process::id()));
    fs::write(&path, HELPER).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn run(helper: &str, shell: &str, words: &[&str]) -> String {
    let mut args = vec!["freva-complete", "complete", "--shell", shell, "--program", helper, "--"];
    args.extend_from_slice(words);
    let matches = fc::build_cli().get_matches_from(args);
    let (_, m) = matches.subcommand();
    let mut cursor = Cursor::new(vec![]);
    let result = fc::complete_command(m.unwrap(), &matches, &mut cursor);
    assert!(result.is_ok());
    String::from_utf8(cursor.into_inner()).unwrap()
}

// One test, so no other thread forks while the helper is open for writing
#[test]
fn test_completion_through_helper_program() {
    let path = write_helper();
    let helper = path.to_str().unwrap().to_string();

    assert_eq!(
        run(&helper, "bash", &["freva", "plugin", ""]),
        "animator\nmovieplotter\n"
    );
    assert_eq!(
        run(&helper, "bash", &["freva", "plugin", "animator", "variable=tas", ""]),
        "outputdir=\n"
    );
    assert_eq!(
        run(&helper, "zsh", &["freva-databrowser", "model=mpi-esm", ""]),
        "_values '-s' ' ' '-S' '=' 'facets' 'project[2 values]:project:(cmip5 cmip6)'\n"
    );
    // the helper fails for anything else
    assert_eq!(run(&helper, "fish", &["freva", ""]), "");

    let _ = fs::remove_file(&path);
}
