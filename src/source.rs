/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 * Copyright The Freva Developers 2026*/

/**!
 * Where completion candidates come from. The freva completion helper is an
 * external program, it is asked for candidates with a small set of options
 * followed by the words already typed, and answers with one candidate per
 * line on standard out. The program is hidden behind the `CandidateSource`
 * trait so that everything parsing its output can run against canned lines.
 **/
use crate::cogs::Shell;
use log::{debug, trace};
use std::process::{Command, Stdio};

/// Option telling the helper which shell to format its output for
pub const SHELL_OPTION: &str = "--shell";
/// Option asking the helper for condensed output without any flags
pub const STRIP_OPTION: &str = "--strip";
/// Option asking the helper for the flags of a subcommand only
pub const FLAGS_ONLY_OPTION: &str = "--flags-only";

/// Anything able to answer a helper invocation with lines of output
pub trait CandidateSource {
    fn fetch_candidates(&self, args: &[String]) -> Result<Vec<String>, String>;
}

/// The arguments of one helper invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub shell: Shell,
    pub strip: bool,
    pub flags_only: bool,
    pub words: Vec<String>,
}

impl Request {
    pub fn new(shell: Shell, words: Vec<String>) -> Request {
        Request {
            shell,
            strip: false,
            flags_only: false,
            words,
        }
    }

    pub fn strip(mut self) -> Request {
        self.strip = true;
        self
    }

    pub fn flags_only(mut self) -> Request {
        self.flags_only = true;
        self
    }

    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![SHELL_OPTION.to_string(), self.shell.as_str().to_string()];
        if self.strip {
            args.push(STRIP_OPTION.to_string());
        }
        if self.flags_only {
            args.push(FLAGS_ONLY_OPTION.to_string());
        }
        args.extend(self.words.iter().cloned());
        args
    }
}

/// Runs the completion helper as a child process, blocking until it exits
#[derive(Debug, Clone)]
pub struct ProcessSource {
    program: String,
}

impl ProcessSource {
    pub fn new<S: Into<String>>(program: S) -> ProcessSource {
        ProcessSource {
            program: program.into(),
        }
    }
}

impl CandidateSource for ProcessSource {
    fn fetch_candidates(&self, args: &[String]) -> Result<Vec<String>, String> {
        debug!("Running {} {}", self.program, args.join(" "));
        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| format!("Could not run {}: {}", self.program, e))?;
        if !output.status.success() {
            return Err(format!("{} exited with {}", self.program, output.status));
        }
        let lines = output_lines(&String::from_utf8_lossy(&output.stdout));
        trace!("{} printed {} lines", self.program, lines.len());
        Ok(lines)
    }
}

/// Splits program output into lines, dropping trailing whitespace and blank lines
pub fn output_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|l| l.trim_end())
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}
