/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 * Copyright The Freva Developers 2026*/

/**!
 * Turns a `Completion` into what the calling shell's completion function
 * consumes. zsh gets a snippet that is evaluated inside the completion
 * function and feeds the candidates to `_arguments` and `_values`, bash gets
 * plain candidate lines for `compgen -W`, fish gets `candidate<TAB>description`
 * lines.
 **/
use crate::adapter::{Completion, GroupKind, ValueGroup};
use crate::candidates::Entry;
use crate::cogs::{self, Shell};

/// Renders the candidates for `shell`. `current` is the word under the cursor.
pub fn render(completion: &Completion, shell: Shell, current: &str) -> String {
    match shell {
        Shell::Zsh => render_zsh(completion),
        Shell::Bash => render_bash(completion, current),
        Shell::Fish => render_fish(completion),
    }
}

fn render_zsh(completion: &Completion) -> String {
    let mut out = String::new();
    if !completion.flags.is_empty() {
        out.push_str("_arguments");
        for flag in completion.flags.iter() {
            out.push(' ');
            out.push_str(&cogs::shell_quote(flag));
        }
        out.push('\n');
    }

    let facets: Vec<&ValueGroup> = completion
        .groups
        .iter()
        .filter(|g| g.kind == GroupKind::Facet && !g.entries.is_empty())
        .collect();
    for group in completion.groups.iter().filter(|g| !g.entries.is_empty()) {
        let specs: Vec<String> = group.entries.iter().map(zsh_value_spec).collect();
        match group.kind {
            GroupKind::Commands => push_values(&mut out, &[], &group.name, &specs),
            GroupKind::Options => {
                push_values(&mut out, &["-s", " ", "-S", "="], &group.name, &specs)
            }
            GroupKind::Facet => (),
        }
    }
    if !facets.is_empty() {
        let specs: Vec<String> = facets.iter().map(|g| zsh_facet_spec(g)).collect();
        push_values(&mut out, &["-s", " ", "-S", "="], "facets", &specs);
    }
    out
}

fn push_values(out: &mut String, options: &[&str], description: &str, specs: &[String]) {
    out.push_str("_values");
    for option in options.iter() {
        out.push(' ');
        out.push_str(&cogs::shell_quote(option));
    }
    out.push(' ');
    out.push_str(&cogs::shell_quote(description));
    for spec in specs.iter() {
        out.push(' ');
        out.push_str(&cogs::shell_quote(spec));
    }
    out.push('\n');
}

/// `key[description]action`, the way `_values` expects a value
fn zsh_value_spec(entry: &Entry) -> String {
    let mut spec = escape_zsh(&entry.key, "[]:");
    if let Some(ref description) = entry.description {
        spec.push('[');
        spec.push_str(&escape_zsh(description, "[]:"));
        spec.push(']');
    }
    if let Some(ref action) = entry.action {
        spec.push_str(action);
    }
    spec
}

/// `name[n values]:name:(a b c)`, a value taking one of the facet's values as argument
fn zsh_facet_spec(group: &ValueGroup) -> String {
    let name = escape_zsh(&group.name, "[]:");
    let values: Vec<String> = group
        .entries
        .iter()
        .map(|e| escape_zsh(&e.key, " ():[]\\"))
        .collect();
    format!(
        "{}[{} values]:{}:({})",
        name,
        group.entries.len(),
        name,
        values.join(" ")
    )
}

fn escape_zsh(text: &str, special: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if special.contains(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Candidate words as they would be typed, flags first
fn words(completion: &Completion) -> Vec<(String, Option<String>)> {
    let mut words: Vec<(String, Option<String>)> = completion
        .flags
        .iter()
        .map(|f| {
            let entry = Entry::parse(f);
            (entry.key, entry.description)
        })
        .collect();
    for group in completion.groups.iter() {
        for entry in group.entries.iter() {
            let word = match group.kind {
                GroupKind::Commands => entry.key.clone(),
                GroupKind::Options => format!("{}=", entry.key),
                GroupKind::Facet => format!("{}={}", group.name, entry.key),
            };
            let description = match group.kind {
                GroupKind::Facet => Some(group.name.clone()),
                _ => entry.description.clone(),
            };
            words.push((word, description));
        }
    }
    words
}

/**
 * bash splits words on `=`, so while a `key=value` word is typed bash only
 * matches what follows the last `=`. Candidates are cut the same way.
 */
fn render_bash(completion: &Completion, current: &str) -> String {
    let head = match current.rfind('=') {
        Some(pos) => &current[..=pos],
        None => "",
    };
    let mut out = String::new();
    for (word, _) in words(completion) {
        if let Some(rest) = word.strip_prefix(head) {
            if rest.is_empty() {
                continue;
            }
            out.push_str(rest);
            out.push('\n');
        }
    }
    out
}

fn render_fish(completion: &Completion) -> String {
    let mut out = String::new();
    for (word, description) in words(completion) {
        out.push_str(&word);
        if let Some(description) = description {
            out.push('\t');
            out.push_str(&description.replace('\n', " "));
        }
        out.push('\n');
    }
    out
}
