/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 * Copyright The Freva Developers 2026*/

/**!
 * Shell side setup. `freva-complete init --shell <shell>` prints the glue a
 * shell session needs once, most commonly used as
 * `eval "$(freva-complete init --shell zsh)"` in the shell's rc file. It
 * defines the completion function calling back into `freva-complete
 * complete`, registers it for freva and its entry points, and sets up key
 * bindings and the completion search path.
 **/
use crate::argparse;
use crate::cogs::{self, Shell};
use crate::config::Config;
use crate::logger;
use log::{debug, warn};
use std::env;
use std::io::Write;

/// Name the glue calls freva-complete by when its own path is unknown
pub const DEFAULT_EXE: &str = "freva-complete";

pub fn init_command<W: Write>(
    sub_args: &argparse::ArgMatches,
    _main_args: &argparse::ArgMatches,
    writer: &mut W,
) -> Result<(), String> {
    logger::build_logger(sub_args);
    let shell: Shell = sub_args.value_of("shell").unwrap_or("bash").parse()?;
    let config = Config::load(sub_args.value_of("config").map(std::path::Path::new))?
        .apply_args(sub_args);
    let exe = match env::current_exe() {
        Ok(path) => path.to_string_lossy().into_owned(),
        Err(e) => {
            warn!("Could not find own executable, using {}: {}", DEFAULT_EXE, e);
            String::from(DEFAULT_EXE)
        }
    };
    debug!("Writing {} glue for {}", shell, config.registered_commands().join(" "));
    writer
        .write_all(build_init_string(shell, &config, &exe).as_bytes())
        .map_err(|e| format!("Problem writing shell setup: {}", e))
}

/// The setup script for `shell`, calling back into the freva-complete found at `exe`
pub fn build_init_string(shell: Shell, config: &Config, exe: &str) -> String {
    let function = format!("_{}_complete", cogs::function_name(&config.tool));
    let exe = cogs::shell_quote(exe);
    let commands = config.registered_commands().join(" ");
    match shell {
        Shell::Zsh => zsh_init(config, &function, &exe, &commands),
        Shell::Bash => bash_init(&function, &exe, &commands),
        Shell::Fish => fish_init(config, &function, &exe),
    }
}

fn zsh_init(config: &Config, function: &str, exe: &str, commands: &str) -> String {
    let mut script = String::new();
    if let Some(ref dir) = config.completion_dir {
        script.push_str(&format!(
            "fpath=({} $fpath)\n",
            cogs::shell_quote(&dir.to_string_lossy())
        ));
    }
    script.push_str("(( $+functions[compdef] )) || { autoload -Uz compinit && compinit; }\n");
    script.push_str(&format!(
        "{}() {{
    eval \"$({} complete --shell zsh -- \"${{(@)words[1,CURRENT]}}\" 2>/dev/null)\"
}}
",
        function, exe
    ));
    script.push_str(&format!(
        "zstyle ':completion:*:*:{}*:*' menu select\n",
        config.tool
    ));
    script.push_str("bindkey '^[[Z' reverse-menu-complete\n");
    script.push_str(&format!("compdef {} {}\n", function, commands));
    script
}

fn bash_init(function: &str, exe: &str, commands: &str) -> String {
    format!(
        "{function}() {{
    local cur=\"${{COMP_WORDS[COMP_CWORD]}}\"
    [[ $cur == \"=\" ]] && cur=\"\"
    local IFS=$'\\n'
    COMPREPLY=( $(compgen -W \"$({exe} complete --shell bash --line \"${{COMP_LINE:0:$COMP_POINT}}\" 2>/dev/null)\" -- \"$cur\") )
}}
bind 'set show-all-if-ambiguous on' 2>/dev/null
complete -o nospace -F {function} {commands}
",
        function = function,
        exe = exe,
        commands = commands
    )
}

fn fish_init(config: &Config, function: &str, exe: &str) -> String {
    let mut script = format!(
        "function {function}
    {exe} complete --shell fish --line (commandline -cp | string collect) 2>/dev/null
end
",
        function = function,
        exe = exe
    );
    for command in config.registered_commands() {
        script.push_str(&format!(
            "complete -c {} -f -a '({})'\n",
            command, function
        ));
    }
    script
}
