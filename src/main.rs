/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 * Copyright The Freva Developers 2026*/

/*!
Dynamic shell tab completion for the [freva](https://github.com/FREVA-CLINT/freva) data search and
plugin command line tool.

freva knows best what can follow on its command line: which plugins are installed, which options a
plugin takes, and which values a search facet can still take given the facets already chosen. It
ships a completion helper printing this information in a machine readable form. freva-complete is
the piece between that helper and the interactive shell. On every tab press the shell hands it the
words typed so far, freva-complete asks the helper, and prints the answer in the form the shell's
completion engine expects.

# Usage

Load the setup once per shell session, most commonly from the shell's rc file:

```text
eval "$(freva-complete init --shell zsh)"      # ~/.zshrc
eval "$(freva-complete init --shell bash)"     # ~/.bashrc
freva-complete init --shell fish | source      # ~/.config/fish/config.fish
```

**Complete**

Called by the shell setup on every completion request. Given the command line it prints candidates
for the word under the cursor, or nothing at all if the helper cannot be run or has nothing to
say. It never fails visibly, a broken helper leaves the shell without suggestions.

* -s --shell: Shell to print candidates for, one of bash, zsh, fish
* -p --program: Completion helper to run, defaults to freva-utils
* -l --line: The command line up to the cursor as one string, instead of separate words
* \<words\>: The words of the command line after `--`, the last one is the word being completed

**Init**

Prints the setup for one shell: the completion function, its registration for freva,
freva-plugin, freva-databrowser and configured aliases, key bindings, and for zsh optionally a
directory added to `fpath` (--fpath).

**Config**

Prints the effective configuration. Settings are read from `~/.config/freva/complete.json` (or the
file named by `FREVA_COMPLETE_CONFIG`), then `FREVA_COMPLETE_PROGRAM` and `FREVA_COMPLETE_TOOL`.

**Completions**

Generates a completion script for freva-complete's own options for the given shell.

Setting `FREVA_COMPLETE_LOG` to a file name appends log messages there, as the shell setup
discards standard error while completing.
**/

use freva_complete_lib as fc;

fn handle_result(res: Result<(), String>) {
    match res {
        Ok(_) => (),
        Err(msg) => fc::exit_with_message!(msg),
    };
}

fn main() {
    let args = fc::parse_args();

    match args.subcommand() {
        ("complete", Some(m)) => handle_result(fc::complete_command(m, &args, &mut std::io::stdout())),
        ("init", Some(m)) => handle_result(fc::init_command(m, &args, &mut std::io::stdout())),
        ("config", Some(m)) => handle_result(fc::config_command(m, &args, &mut std::io::stdout())),
        ("completions", Some(m)) => {
            handle_result(fc::write_completions_stdout(m.value_of("shell").unwrap_or("")))
        }
        _ => println!("{}", args.usage()),
    }
}
