// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "patchlint")]
#[command(version)]
#[command(
    about = "Check the changelog format of 'git format-patch' files",
    long_about = None
)]
pub struct Cli {
    /// Patch files to process. Use "-" to read one patch from stdin.
    /// With no files, every file under the patches directory is checked.
    pub files: Vec<String>,

    /// Print the extracted message and file changes for each passing patch
    #[arg(short = 'p', long)]
    pub print_extracted: bool,

    /// Don't print "OK" and summary lines
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output (validator warnings, debug logging)
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory walked in batch mode
    #[arg(long, env = "PATCHLINT_PATCHES_DIR")]
    pub patches_dir: Option<PathBuf>,

    /// Treat renames as plain modifications
    #[arg(long)]
    pub no_renames: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Initialize config file
    Init,
    /// Show current configuration
    Config,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
