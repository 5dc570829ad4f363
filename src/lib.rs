/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 * Copyright The Freva Developers 2026*/

/*!
  `freva_complete_lib` is the library behind freva-complete, the shell tab completion for the freva
  data search and plugin command line tool. It contains all the functionality used by the
  freva-complete application: turning the words typed so far into a request to freva's completion
  helper, sorting the helper's answer into flags, plugin options and search facets, and printing
  them in the form bash, zsh or fish expect.
 */
#[macro_use]
mod cogs;
mod adapter;
mod argparse;
mod candidates;
mod complete;
mod completions;
mod config;
mod context;
mod init;
mod logger;
mod render;
mod source;
pub use adapter::*;
pub use argparse::*;
pub use candidates::*;
pub use cogs::*;
pub use complete::*;
pub use completions::*;
pub use config::*;
pub use context::*;
pub use init::*;
pub use logger::*;
pub use render::*;
pub use source::*;
