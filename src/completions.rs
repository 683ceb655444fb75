//! Shell completion scripts

use clap::Command;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Write the completion script for `cmd` to `out`
pub fn generate_completions<W: Write>(cmd: &mut Command, shell: Shell, out: &mut W) {
    let bin_name = cmd.get_name().to_string();
    generate(shell, cmd, bin_name, out);
}
