/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 * Copyright The Freva Developers 2026*/

/**!
 * Parsing of the lines the completion helper prints. Every line is either a
 * flag or a value, values come in one of three shapes depending on the mode
 * the helper was asked for: a plain token, an option with a description
 * (`key[description]`), or a facet with its possible values
 * (`name:count,value_a,value_b`). Nothing here validates the helper's output,
 * a line that does not fit the expected shape is passed on as best as
 * possible.
 **/
use crate::cogs;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref FACET_LINE: Regex = Regex::new(r"^(?P<name>[^:]+?)\s*:\s*(?P<values>.*)$").unwrap();
}

/// A facet must offer at least this many values to be worth completing
pub const MIN_FACET_VALUES: usize = 2;

/// A single line of helper output, classified by its leading character
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Flag(String),
    Value(String),
}

impl Token {
    pub fn classify(line: &str, marker: char) -> Token {
        if cogs::is_flag(line, marker) {
            Token::Flag(line.to_string())
        } else {
            Token::Value(line.to_string())
        }
    }
}

/// Helper output split into flag specs and values, each in the order the helper printed them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub flags: Vec<String>,
    pub values: Vec<String>,
}

/// Splits helper output into flags and values. Blank lines are dropped.
pub fn partition<S: AsRef<str>>(lines: &[S], marker: char) -> Partition {
    let mut partition = Partition::default();
    for line in lines.iter().map(|l| l.as_ref().trim()) {
        if line.is_empty() {
            continue;
        }
        match Token::classify(line, marker) {
            Token::Flag(flag) => partition.flags.push(flag),
            Token::Value(value) => partition.values.push(value),
        }
    }
    partition
}

/**
 * A completion candidate with optional help text. The helper prints options
 * as `key[description]action`, where the trailing action is a zsh completion
 * action such as `:file:_files` for options naming a file or directory.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub description: Option<String>,
    pub action: Option<String>,
}

impl Entry {
    pub fn bare<S: Into<String>>(key: S) -> Entry {
        Entry {
            key: key.into(),
            description: None,
            action: None,
        }
    }

    pub fn parse(line: &str) -> Entry {
        let line = line.trim();
        if let Some(open) = line.find('[') {
            let key = line[..open].trim_end().to_string();
            let rest = &line[open + 1..];
            // descriptions may carry brackets of their own, the last one closes
            return match rest.rfind(']') {
                Some(close) => Entry {
                    key,
                    description: non_empty(&rest[..close]),
                    action: non_empty(&rest[close + 1..]),
                },
                None => Entry {
                    key,
                    description: non_empty(rest),
                    action: None,
                },
            };
        }
        // the helper's plain `key: help` format
        if let Some(sep) = line.find(": ") {
            return Entry {
                key: line[..sep].trim_end().to_string(),
                description: non_empty(&line[sep + 2..]),
                action: None,
            };
        }
        Entry::bare(line)
    }
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// A search facet and the values it can currently take
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facet {
    pub name: String,
    pub values: Vec<String>,
}

impl Facet {
    /**
     * Parses a `name:count,value_a,value_b` line. A leading integer field
     * equal to the number of fields after it is the helper's count and is not
     * a value, any other leading field is. A line without a colon becomes a
     * facet without values, which is never selectable.
     */
    pub fn parse(line: &str) -> Facet {
        let line = line.trim();
        let caps = match FACET_LINE.captures(line) {
            Some(caps) => caps,
            None => {
                return Facet {
                    name: line.to_string(),
                    values: vec![],
                }
            }
        };
        let mut fields: Vec<&str> = caps["values"]
            .split(',')
            .map(|f| f.trim())
            .filter(|f| !f.is_empty())
            .collect();
        let count = fields.first().and_then(|f| f.parse::<usize>().ok());
        if count.is_some() && count == fields.len().checked_sub(1) {
            fields.remove(0);
        }
        Facet {
            name: caps["name"].trim().to_string(),
            values: fields.into_iter().map(String::from).collect(),
        }
    }

    pub fn is_selectable(&self) -> bool {
        self.values.len() >= MIN_FACET_VALUES
    }
}

/// Parses facet lines, keeping only the facets that leave the user a choice
pub fn selectable_facets<S: AsRef<str>>(lines: &[S]) -> Vec<Facet> {
    lines
        .iter()
        .map(|l| l.as_ref())
        .filter(|l| !l.trim().is_empty())
        .map(Facet::parse)
        .filter(Facet::is_selectable)
        .collect()
}
