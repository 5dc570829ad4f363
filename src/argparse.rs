/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 * Copyright The Freva Developers 2026*/

pub use clap::ArgMatches;
use clap::{crate_version, App, AppSettings, Arg, Shell, SubCommand};
use crate::cogs::SHELL_NAMES;

fn verbose_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("verbose")
        .help("Sets the level of verbosity, multiple occurrences increase verbosity")
        .short("v")
        .long("verbose")
        .multiple(true)
}

fn config_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("config")
        .help("Configuration file to use instead of the default one")
        .long("config")
        .takes_value(true)
}

fn tool_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("tool")
        .help("Name of the command being completed")
        .long("tool")
        .takes_value(true)
}

fn build_complete<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("complete")
        .about("Print completion candidates for a partially typed command line")
        .setting(AppSettings::TrailingVarArg)
        .arg(
            Arg::with_name("shell")
                .help("Shell the candidates are printed for")
                .short("s")
                .long("shell")
                .takes_value(true)
                .possible_values(&SHELL_NAMES)
                .default_value("bash"),
        )
        .arg(
            Arg::with_name("program")
                .help("Completion helper to run for candidates")
                .short("p")
                .long("program")
                .takes_value(true),
        )
        .arg(tool_arg())
        .arg(config_arg())
        .arg(
            Arg::with_name("line")
                .help("Command line up to the cursor as a single string")
                .short("l")
                .long("line")
                .takes_value(true)
                .allow_hyphen_values(true)
                .conflicts_with("words"),
        )
        .arg(
            Arg::with_name("words")
                .help("Words of the command line, the last one being the word under the cursor")
                .multiple(true)
                .allow_hyphen_values(true),
        )
        .arg(verbose_arg())
}

fn build_init<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("init")
        .about("Print the shell setup enabling completion, use with eval")
        .arg(
            Arg::with_name("shell")
                .help("Shell to set up")
                .short("s")
                .long("shell")
                .takes_value(true)
                .possible_values(&SHELL_NAMES)
                .required(true),
        )
        .arg(
            Arg::with_name("fpath")
                .help("Directory to add to the completion search path (zsh)")
                .long("fpath")
                .takes_value(true),
        )
        .arg(tool_arg())
        .arg(config_arg())
        .arg(verbose_arg())
}

fn build_config<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("config")
        .about("Print the effective configuration")
        .arg(
            Arg::with_name("program")
                .help("Completion helper to run for candidates")
                .long("program")
                .takes_value(true),
        )
        .arg(tool_arg())
        .arg(config_arg())
        .arg(verbose_arg())
}

fn build_completions<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("completions")
        .about("Print a completion script for freva-complete itself")
        .arg(
            Arg::with_name("shell")
                .help("Shell to generate the script for")
                .possible_values(&Shell::variants())
                .required(true),
        )
}

pub fn build_cli() -> App<'static, 'static> {
    App::new("freva-complete")
        .author("The Freva Developers")
        .about("Dynamic shell completion for freva")
        .version(crate_version!())
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(build_complete())
        .subcommand(build_init())
        .subcommand(build_config())
        .subcommand(build_completions())
}

pub fn parse_args() -> ArgMatches<'static> {
    build_cli().get_matches()
}
