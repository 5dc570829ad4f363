/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 * Copyright The Freva Developers 2026*/

use crate::adapter::Completer;
use crate::argparse;
use crate::cogs::Shell;
use crate::config::Config;
use crate::context::CommandLine;
use crate::logger;
use crate::render;
use crate::source::{CandidateSource, ProcessSource};
use log::{debug, warn};
use std::io::Write;
use std::path::Path;

/**
 * Prints completion candidates for a partially typed freva command line.
 *
 * This is what the shell glue written by `init` calls on every completion
 * request. The command line is given either as separate words after `--`, or
 * as the raw text before the cursor with `--line`. Whatever goes wrong while
 * gathering candidates, the result is empty output and success, so the shell
 * never shows an error in the middle of a completion. Only a failure to write
 * the output is returned as an error.
 *
 * * sub_args - Arguments matched from the command line to the complete sub command
 * * _main_args - Arguments matched from the command line to the main executable
 */
pub fn complete_command<W: Write>(
    sub_args: &argparse::ArgMatches,
    _main_args: &argparse::ArgMatches,
    writer: &mut W,
) -> Result<(), String> {
    let command = CompleteCommandImpl::new(sub_args, _main_args);
    command.run(writer)
}

struct CompleteCommandImpl<'a> {
    _main_args: &'a argparse::ArgMatches<'a>,
    config: Config,
    shell: Shell,
    line: CommandLine,
}

impl<'a> CompleteCommandImpl<'a> {
    fn new(
        sub_args: &'a argparse::ArgMatches<'a>,
        _main_args: &'a argparse::ArgMatches<'a>,
    ) -> CompleteCommandImpl<'a> {
        logger::build_logger(sub_args);

        // A broken configuration file must not break completion, fall back to the defaults
        let config = match Config::load(sub_args.value_of("config").map(Path::new)) {
            Ok(config) => config,
            Err(msg) => {
                warn!("{}, using the default configuration", msg);
                Config::default().apply_env(|key| std::env::var(key).ok())
            }
        };
        let config = config.apply_args(sub_args);

        let shell = match sub_args.value_of("shell").unwrap_or("bash").parse::<Shell>() {
            Ok(shell) => shell,
            Err(msg) => {
                warn!("{}", msg);
                Shell::Bash
            }
        };

        let line = match sub_args.value_of("line") {
            Some(line) => CommandLine::from_line(line),
            None => CommandLine::from_words(sub_args.values_of("words").into_iter().flatten()),
        };

        CompleteCommandImpl {
            _main_args,
            config,
            shell,
            line,
        }
    }

    fn run<W: Write>(&self, writer: &mut W) -> Result<(), String> {
        let source = ProcessSource::new(self.config.program.as_str());
        run_completion(&self.line, &self.config, self.shell, &source, writer)
    }
}

/// Completes `line` with candidates from `source` and writes them out for `shell`
pub fn run_completion<S, W>(
    line: &CommandLine,
    config: &Config,
    shell: Shell,
    source: &S,
    writer: &mut W,
) -> Result<(), String>
where
    S: CandidateSource + ?Sized,
    W: Write,
{
    let line = line.clone().normalize(config);
    let completion = Completer::new(source, config, shell).complete(&line);
    debug!(
        "{} flags and {} values for {:?}",
        completion.flags.len(),
        completion.values().len(),
        line.current()
    );
    let output = render::render(&completion, shell, line.current());
    writer
        .write_all(output.as_bytes())
        .map_err(|e| format!("Problem writing completions: {}", e))
}
