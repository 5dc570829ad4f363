/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 * Copyright The Freva Developers 2026*/

use crate::argparse;
use std::io;
use std::io::Write;

/// Writes a static completion script for freva-complete's own command line
pub fn write_completions<W: Write>(shell: &str, writer: &mut W) -> Result<(), String> {
    let shell: clap::Shell = shell.parse()?;
    argparse::build_cli().gen_completions_to("freva-complete", shell, writer);
    Ok(())
}

pub fn write_completions_stdout(shell: &str) -> Result<(), String> {
    write_completions(shell, &mut io::stdout())
}
