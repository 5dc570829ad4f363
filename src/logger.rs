/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
* Copyright The Freva Developers 2026*/

use crate::argparse;
use std::boxed::Box;
use std::env;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;

/// Environment variable naming a file log messages are appended to
pub const LOG_FILE_ENV: &str = "FREVA_COMPLETE_LOG";

// Standard out belongs to the completion candidates, so messages never go there
enum Target {
    Stderr,
    File(Mutex<File>),
}

pub struct Logger {
    log_level: log::LevelFilter,
    target: Target,
}

impl Logger {
    pub fn new(log_level: log::LevelFilter, log_file: Option<File>) -> Box<Logger> {
        let target = match log_file {
            Some(file) => Target::File(Mutex::new(file)),
            None => Target::Stderr,
        };
        Box::new(Logger { log_level, target })
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.log_level
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let message = format!("{}: {}", record.level(), record.args());
            match self.target {
                Target::Stderr => {
                    eprintln!("{}", message);
                }
                Target::File(ref file) => {
                    if let Ok(mut file) = file.lock() {
                        let _ = writeln!(file, "{}", message);
                    }
                }
            }
        }
    }

    fn flush(&self) {
        if let Target::File(ref file) = self.target {
            if let Ok(mut file) = file.lock() {
                let _ = file.flush();
            }
        }
    }
}

/// Maps the number of `-v` occurrences to a level filter
pub fn level_from_occurrences(occurrences: u64) -> log::LevelFilter {
    match occurrences {
        0 => log::LevelFilter::Off,
        1 => log::LevelFilter::Warn,
        2 => log::LevelFilter::Info,
        3 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/**
 * Installs the logger for a subcommand run. Only the first call in a process
 * installs anything. When `FREVA_COMPLETE_LOG` names a file messages are
 * appended to it, and the level is at least info, as the shell glue throws
 * away standard error while completing.
 */
pub fn build_logger(args: &argparse::ArgMatches) {
    let mut level = level_from_occurrences(args.occurrences_of("verbose"));
    let log_file = env::var(LOG_FILE_ENV)
        .ok()
        .filter(|path| !path.is_empty())
        .and_then(|path| OpenOptions::new().create(true).append(true).open(path).ok());
    if log_file.is_some() && level < log::LevelFilter::Info {
        level = log::LevelFilter::Info;
    }
    if log::set_boxed_logger(Logger::new(level, log_file)).is_ok() {
        log::set_max_level(level);
    }
}
