/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 * Copyright The Freva Developers 2026*/

/*!
The `cogs` module contains miscellaneous components shared by the rest of
freva-complete.

These are defined here to make them available in one central location within
the `freva_complete_lib` library. The main library re-exports this module, so
users of `freva_complete_lib` see everything exposed here.
*/

use std::fmt;
use std::str::FromStr;

/** Macro used to print an error message to the console and terminate execution
 *
 * Only used for errors outside of a completion request, a completion request
 * must never terminate the calling shell's completion with a message.
 */
#[macro_export]
macro_rules! exit_with_message {
    ($message:expr) => {{
        eprintln!("{}", $message);
        std::process::exit(1)
    }};
}

/// Marker character freva uses to start an option on the command line
pub const DEFAULT_FLAG_MARKER: char = '-';

/// Names of the shells freva-complete knows how to talk to
pub const SHELL_NAMES: [&str; 3] = ["bash", "zsh", "fish"];

/// Interactive shells whose completion engines are supported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}

impl Shell {
    pub fn as_str(&self) -> &'static str {
        match self {
            Shell::Bash => "bash",
            Shell::Zsh => "zsh",
            Shell::Fish => "fish",
        }
    }
}

impl FromStr for Shell {
    type Err = String;

    fn from_str(s: &str) -> Result<Shell, String> {
        match s.trim().to_lowercase().as_str() {
            "bash" => Ok(Shell::Bash),
            "zsh" => Ok(Shell::Zsh),
            "fish" => Ok(Shell::Fish),
            other => Err(format!(
                "Unsupported shell {}, expected one of {}",
                other,
                SHELL_NAMES.join(", ")
            )),
        }
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returns true if a command line token is an option rather than a positional value
pub fn is_flag(token: &str, marker: char) -> bool {
    token.starts_with(marker)
}

/// Quotes a string so a posix shell (and zsh, and fish) reads it back literally.
pub fn shell_quote(input: &str) -> String {
    let mut quoted = String::with_capacity(input.len() + 2);
    quoted.push('\'');
    for c in input.chars() {
        if c == '\'' {
            quoted.push_str("'\\''");
        } else {
            quoted.push(c);
        }
    }
    quoted.push('\'');
    quoted
}

/// Turns a tool name such as `freva-dev` into something usable in a shell function name
pub fn function_name(tool: &str) -> String {
    tool.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
