/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 * Copyright The Freva Developers 2026*/

use crate::cogs;
use crate::config::Config;
use fnv::FnvHashSet;
use std::path::Path;

/**
 * The words typed on the command line up to the cursor. The last word is the
 * one being completed and may be empty, there is always at least one word.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    words: Vec<String>,
}

impl CommandLine {
    /// Creates a command line from words as split by the shell, the last being the current word
    pub fn from_words<I, S>(words: I) -> CommandLine
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            words.push(String::new());
        }
        CommandLine { words }
    }

    /// Creates a command line from the raw text before the cursor. Trailing
    /// whitespace means a new, still empty, word is being completed.
    pub fn from_line(line: &str) -> CommandLine {
        let mut words: Vec<String> = line.split_whitespace().map(String::from).collect();
        if words.is_empty() || line.ends_with(char::is_whitespace) {
            words.push(String::new());
        }
        CommandLine { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn tool(&self) -> &str {
        &self.words[0]
    }

    /// The (partial) word under the cursor
    pub fn current(&self) -> &str {
        &self.words[self.words.len() - 1]
    }

    /// All words before the one under the cursor
    pub fn completed(&self) -> &[String] {
        &self.words[..self.words.len() - 1]
    }

    /// Completed words that are not options, the tool name first
    pub fn positionals(&self, marker: char) -> Vec<&str> {
        self.completed()
            .iter()
            .map(|w| w.as_str())
            .filter(|w| !w.is_empty() && !cogs::is_flag(w, marker))
            .collect()
    }

    /// The subcommand, if it has been typed completely
    pub fn subcommand(&self, marker: char) -> Option<&str> {
        self.positionals(marker).get(1).cloned()
    }

    /// Non-flag words already typed, skipping the first `skip` of them
    pub fn search_keys(&self, skip: usize, marker: char) -> Vec<String> {
        self.positionals(marker)
            .into_iter()
            .skip(skip)
            .map(String::from)
            .collect()
    }

    /// Keys of the `key=value` words already typed
    pub fn assigned_keys(&self) -> FnvHashSet<&str> {
        self.completed()
            .iter()
            .filter_map(|w| {
                let pos = w.find('=')?;
                Some(&w[..pos])
            })
            .filter(|k| !k.is_empty())
            .collect()
    }

    /**
     * Rewrites the tool word so that it reads the configured tool. A path to
     * the tool and configured aliases are reduced to the tool, and the
     * hyphenated entry points such as `freva-plugin` are split into the tool
     * and its subcommand.
     */
    pub fn normalize(mut self, config: &Config) -> CommandLine {
        let tool = config.tool.as_str();
        if self.words.len() < 2 {
            return self;
        }
        let name = Path::new(&self.words[0])
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .to_string();
        if name == tool || config.aliases.contains(&name) {
            self.words[0] = tool.to_string();
        } else if let Some(sub) = name
            .strip_prefix(tool)
            .and_then(|rest| rest.strip_prefix('-'))
            .filter(|sub| !sub.is_empty())
        {
            let sub = sub.to_string();
            self.words[0] = tool.to_string();
            self.words.insert(1, sub);
        }
        self
    }
}

/// What is being completed, decided from the words typed so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionContext {
    /// Subcommands and global options of the tool
    TopLevel,
    /// Plugin names, then the options of the chosen plugin
    OptionValue,
    /// Search facets and their values
    FacetValue,
    /// Only the options of the named subcommand
    FlagPassthrough(String),
}

impl CompletionContext {
    pub fn detect(line: &CommandLine, config: &Config) -> CompletionContext {
        let marker = config.flag_marker;
        let sub = match line.subcommand(marker) {
            Some(sub) => sub,
            None => return CompletionContext::TopLevel,
        };
        if cogs::is_flag(line.current(), marker) {
            CompletionContext::FlagPassthrough(sub.to_string())
        } else if sub == config.plugin_command {
            CompletionContext::OptionValue
        } else if sub == config.facet_command {
            CompletionContext::FacetValue
        } else {
            CompletionContext::FlagPassthrough(sub.to_string())
        }
    }
}
