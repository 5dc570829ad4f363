/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 * Copyright The Freva Developers 2026*/

/**!
 * Configuration of freva-complete. Settings are layered, each layer
 * overriding the previous one: built in defaults, an optional json file,
 * environment variables, and finally options given on the command line.
 **/
use crate::argparse;
use crate::cogs;
use log::debug;
use serde_derive::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the configuration file to use
pub const CONFIG_ENV: &str = "FREVA_COMPLETE_CONFIG";
/// Environment variable overriding the completion helper program
pub const PROGRAM_ENV: &str = "FREVA_COMPLETE_PROGRAM";
/// Environment variable overriding the name of the completed tool
pub const TOOL_ENV: &str = "FREVA_COMPLETE_TOOL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name of the command being completed
    pub tool: String,
    /// Helper program printing machine readable completion candidates
    pub program: String,
    /// Leading character of options
    pub flag_marker: char,
    /// Subcommand whose arguments are plugin names and plugin options
    pub plugin_command: String,
    /// Subcommand whose arguments are search facets
    pub facet_command: String,
    /// Additional command names to register completion for
    pub aliases: Vec<String>,
    /// Directory added to the shell's completion search path by `init`
    pub completion_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            tool: String::from("freva"),
            program: String::from("freva-utils"),
            flag_marker: cogs::DEFAULT_FLAG_MARKER,
            plugin_command: String::from("plugin"),
            facet_command: String::from("databrowser"),
            aliases: vec![],
            completion_dir: None,
        }
    }
}

impl Config {
    pub fn from_json(text: &str) -> Result<Config, String> {
        serde_json::from_str(text).map_err(|e| format!("Problem parsing configuration: {}", e))
    }

    pub fn from_file(path: &Path) -> Result<Config, String> {
        let text = fs::read_to_string(path).map_err(|e| {
            format!(
                "Problem reading configuration file {}: {}",
                path.display(),
                e
            )
        })?;
        Config::from_json(&text).map_err(|e| format!("{} ({})", e, path.display()))
    }

    /// Location of the configuration file, from the environment or the user's config directory
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(path) = env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        let mut path = dirs::config_dir()?;
        path.push("freva");
        path.push("complete.json");
        Some(path)
    }

    /**
     * Loads the configuration. An explicitly given file must exist, the default
     * file is optional and the built in defaults are used without it.
     * Environment overrides are applied to the result.
     */
    pub fn load(explicit: Option<&Path>) -> Result<Config, String> {
        let config = match explicit {
            Some(path) => Config::from_file(path)?,
            None => match Config::default_path() {
                Some(ref path) if path.is_file() => {
                    debug!("Loading configuration from {}", path.display());
                    Config::from_file(path)?
                }
                _ => Config::default(),
            },
        };
        Ok(config.apply_env(|key| env::var(key).ok()))
    }

    /// Applies environment overrides, looked up through the supplied function
    pub fn apply_env<F>(mut self, lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(program) = lookup(PROGRAM_ENV).filter(|p| !p.is_empty()) {
            self.program = program;
        }
        if let Some(tool) = lookup(TOOL_ENV).filter(|t| !t.is_empty()) {
            self.tool = tool;
        }
        self
    }

    /// Applies the options given to a freva-complete subcommand
    pub fn apply_args(mut self, args: &argparse::ArgMatches) -> Config {
        if let Some(program) = args.value_of("program") {
            self.program = program.to_string();
        }
        if let Some(tool) = args.value_of("tool") {
            self.tool = tool.to_string();
        }
        if let Some(dir) = args.value_of("fpath") {
            self.completion_dir = Some(PathBuf::from(dir));
        }
        self
    }

    /// All command names completion is registered for, the tool itself first
    pub fn registered_commands(&self) -> Vec<String> {
        let mut commands = vec![
            self.tool.clone(),
            format!("{}-{}", self.tool, self.plugin_command),
            format!("{}-{}", self.tool, self.facet_command),
        ];
        for alias in self.aliases.iter() {
            if !commands.contains(alias) {
                commands.push(alias.clone());
            }
        }
        commands
    }
}

/// Prints the effective configuration as json, after all overrides are applied
pub fn config_command<W: std::io::Write>(
    sub_args: &argparse::ArgMatches,
    _main_args: &argparse::ArgMatches,
    writer: &mut W,
) -> Result<(), String> {
    crate::logger::build_logger(sub_args);
    let config = Config::load(sub_args.value_of("config").map(Path::new))?.apply_args(sub_args);
    let serialized = serde_json::to_string_pretty(&config)
        .map_err(|e| format!("Problem serializing configuration: {}", e))?;
    writeln!(writer, "{}", serialized).map_err(|e| format!("Problem writing configuration: {}", e))
}
