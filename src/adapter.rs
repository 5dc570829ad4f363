/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 * Copyright The Freva Developers 2026*/

/**!
 * The completion adapter. For each request it decides what is being completed,
 * asks the candidate source (the freva completion helper) for candidates
 * narrowed by what was already typed, and sorts the answer into flag specs and
 * named groups of values for the renderer. A failing source is never an error
 * here, it simply leads to nothing being offered.
 **/
use crate::candidates::{self, Entry, Facet};
use crate::cogs::{self, Shell};
use crate::config::Config;
use crate::context::{CommandLine, CompletionContext};
use crate::source::{CandidateSource, Request};
use log::{debug, info};

/// What a group of values completes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// Subcommand or plugin names, completed on their own
    Commands,
    /// Plugin options, completed as `key=`
    Options,
    /// Values of a search facet, completed as `facet=value`
    Facet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueGroup {
    pub name: String,
    pub kind: GroupKind,
    pub entries: Vec<Entry>,
}

/// Candidates for one completion request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completion {
    /// Flag specs, exactly as the helper printed them
    pub flags: Vec<String>,
    pub groups: Vec<ValueGroup>,
}

impl Completion {
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty() && self.groups.iter().all(|g| g.entries.is_empty())
    }

    /// Keys of all values in all groups, in order
    pub fn values(&self) -> Vec<&str> {
        self.groups
            .iter()
            .flat_map(|g| g.entries.iter().map(|e| e.key.as_str()))
            .collect()
    }

    fn push_group(&mut self, name: &str, kind: GroupKind, entries: Vec<Entry>) {
        if entries.is_empty() {
            return;
        }
        self.groups.push(ValueGroup {
            name: name.to_string(),
            kind,
            entries,
        });
    }
}

pub struct Completer<'a, S: CandidateSource + ?Sized> {
    source: &'a S,
    config: &'a Config,
    shell: Shell,
}

impl<'a, S: CandidateSource + ?Sized> Completer<'a, S> {
    pub fn new(source: &'a S, config: &'a Config, shell: Shell) -> Completer<'a, S> {
        Completer {
            source,
            config,
            shell,
        }
    }

    /// Completes the word under the cursor
    pub fn complete(&self, line: &CommandLine) -> Completion {
        let context = CompletionContext::detect(line, self.config);
        debug!("Completing {:?} as {:?}", line.words(), context);
        match context {
            CompletionContext::TopLevel => self.top_level(line),
            CompletionContext::OptionValue => self.option_values(line),
            CompletionContext::FacetValue => self.facet_values(line),
            CompletionContext::FlagPassthrough(sub) => self.flag_passthrough(line, &sub),
        }
    }

    /// Subcommands as selectable values, global options as flag specs
    pub fn top_level(&self, line: &CommandLine) -> Completion {
        let request = Request::new(self.shell, vec![line.tool().to_string()]);
        let partition = candidates::partition(&self.fetch(&request), self.config.flag_marker);
        let mut completion = Completion {
            flags: partition.flags,
            groups: vec![],
        };
        let entries = partition.values.iter().map(|v| Entry::parse(v)).collect();
        completion.push_group("command", GroupKind::Commands, entries);
        completion
    }

    /**
     * Plugin names while no plugin was chosen, the options of the plugin
     * afterwards. All non-flag words typed so far narrow the helper's answer,
     * options already given on the line are not offered again.
     */
    pub fn option_values(&self, line: &CommandLine) -> Completion {
        let marker = self.config.flag_marker;
        let keys = line.search_keys(0, marker);
        let plugin = keys.get(2).cloned();
        let request = Request::new(self.shell, keys).strip();
        let partition = candidates::partition(&self.fetch(&request), marker);

        let assigned = line.assigned_keys();
        let entries: Vec<Entry> = partition
            .values
            .iter()
            .map(|v| Entry::parse(v))
            .filter(|e| !e.key.is_empty() && !assigned.contains(e.key.as_str()))
            .collect();
        let mut completion = Completion::default();
        match plugin {
            Some(ref name) => completion.push_group(name, GroupKind::Options, entries),
            None => completion.push_group(&self.config.plugin_command, GroupKind::Commands, entries),
        }
        if completion.is_empty() {
            info!("No options to offer for {:?}", plugin);
        }
        completion
    }

    /// One group per facet that still has at least two values to choose from
    pub fn facet_values(&self, line: &CommandLine) -> Completion {
        let marker = self.config.flag_marker;
        let mut words = vec![line.tool().to_string(), self.config.facet_command.clone()];
        words.extend(line.search_keys(2, marker));
        let request = Request::new(self.shell, words).strip();
        let lines: Vec<String> = self
            .fetch(&request)
            .into_iter()
            .filter(|l| !cogs::is_flag(l.trim_start(), marker))
            .collect();

        let mut completion = Completion::default();
        for Facet { name, values } in candidates::selectable_facets(&lines) {
            let entries = values.into_iter().map(Entry::bare).collect();
            completion.push_group(&name, GroupKind::Facet, entries);
        }
        completion
    }

    /**
     * The flags of `subcommand`, offered without values. Administrative
     * subcommands such as `solr` have subcommands of their own, while none of
     * those was typed yet the helper's non-flag lines are offered as commands.
     * All typed words are forwarded so the helper answers for the innermost
     * command.
     */
    pub fn flag_passthrough(&self, line: &CommandLine, subcommand: &str) -> Completion {
        let marker = self.config.flag_marker;
        let words = line.search_keys(0, marker);
        let nested = words.len() > 2;
        let request = Request::new(self.shell, words).flags_only();
        let partition = candidates::partition(&self.fetch(&request), marker);
        let mut completion = Completion {
            flags: partition.flags,
            groups: vec![],
        };
        if !nested && !cogs::is_flag(line.current(), marker) {
            let entries = partition.values.iter().map(|v| Entry::parse(v)).collect();
            completion.push_group(subcommand, GroupKind::Commands, entries);
        }
        completion
    }

    fn fetch(&self, request: &Request) -> Vec<String> {
        match self.source.fetch_candidates(&request.to_args()) {
            Ok(lines) => lines,
            Err(msg) => {
                debug!("No candidates: {}", msg);
                vec![]
            }
        }
    }
}
