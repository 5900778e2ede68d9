// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::io::Read;
use std::path::{Path, PathBuf};

use console::style;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::domain::ExtractedPatch;
use crate::error::{Error, Result};
use crate::services::{
    extractor::PatchExtractor,
    validate::{AcceptAll, Validator},
};

/// One patch to check: a file on disk, or a document already read from
/// stdin.
enum PatchInput {
    File(PathBuf),
    Stdin(String),
}

pub struct App {
    cli: Cli,
    config: Config,
    extractor: PatchExtractor,
    validator: Box<dyn Validator>,
}

impl App {
    pub fn new(cli: Cli) -> Result<Self> {
        let config = Config::load(&cli)?;
        debug!(
            patches_dir = %config.patches_dir.display(),
            rename_detection = config.rename_detection,
            "config loaded"
        );
        let extractor = PatchExtractor::new(config.rename_detection);
        Ok(Self {
            cli,
            config,
            extractor,
            validator: Box::new(AcceptAll),
        })
    }

    pub fn run(&mut self) -> Result<()> {
        if let Some(ref cmd) = self.cli.command {
            return self.handle_command(cmd);
        }

        self.check_patches()
    }

    fn check_patches(&self) -> Result<()> {
        let mut batch_mode = false;
        let mut inputs: Vec<PatchInput> = Vec::new();

        if self.cli.files.is_empty() {
            // Process every file under the patches directory
            for path in Self::collect_patch_files(&self.config.patches_dir)? {
                inputs.push(PatchInput::File(path));
            }
            batch_mode = true;
        } else if self.cli.files[0] == "-" {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            inputs.push(PatchInput::Stdin(text));
        } else {
            for file in &self.cli.files {
                inputs.push(PatchInput::File(PathBuf::from(file)));
            }
        }

        let total = inputs.len();
        if total == 0 {
            return Err(Error::NoFilesToProcess);
        }
        let batch_mode = batch_mode || total > 1;

        let mut success = 0;
        for input in &inputs {
            let (name, outcome) = match input {
                PatchInput::File(path) => {
                    (path.display().to_string(), self.extractor.from_path(path))
                }
                PatchInput::Stdin(text) => ("-".to_string(), self.extractor.extract(text)),
            };

            if self.report(&name, outcome, batch_mode) {
                success += 1;
            }
        }

        if batch_mode && !self.cli.quiet {
            println!("Successfully parsed: {success}/{total}");
        }

        let failed = total - success;
        if failed > 0 {
            return Err(Error::ChecksFailed { failed, total });
        }
        Ok(())
    }

    /// Report the outcome for one patch. Returns whether it passed.
    fn report(&self, name: &str, outcome: Result<ExtractedPatch>, batch_mode: bool) -> bool {
        let ok = match outcome {
            Ok(patch) => {
                let report = self.validator.validate(&patch, None);
                if report.is_ok() {
                    if !self.cli.quiet {
                        println!("Checking {}: {}", name, style("OK").green());
                    }
                    if self.cli.verbose {
                        for warning in &report.warnings {
                            println!("WARN: {warning}");
                        }
                    }
                    if self.cli.print_extracted {
                        Self::print_extracted(&patch);
                    }
                    true
                } else {
                    println!("Checking {}: {}", name, style("FAILED").red());
                    if self.cli.verbose {
                        for warning in &report.warnings {
                            println!("WARN: {warning}");
                        }
                    }
                    for error in &report.errors {
                        println!("ERR: {error}");
                    }
                    false
                }
            }
            Err(e) => {
                println!("Checking {}: {}", name, style("FAILED").red());
                println!("ERR: {e}");
                false
            }
        };

        if !ok || batch_mode {
            println!();
        }
        ok
    }

    fn print_extracted(patch: &ExtractedPatch) {
        for line in patch.message.lines() {
            println!("{line}");
        }
        println!();
        for change in &patch.changes {
            println!("{} {}", change.kind.as_str(), change.path);
        }
    }

    /// All files under `dir`, recursively, sorted. A missing directory
    /// yields an empty list, matching a walk over nothing.
    fn collect_patch_files(dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        if dir.is_dir() {
            Self::walk(dir, &mut files)?;
        }
        files.sort();
        Ok(files)
    }

    fn walk(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                Self::walk(&path, out)?;
            } else {
                out.push(path);
            }
        }
        Ok(())
    }

    fn handle_command(&self, cmd: &Commands) -> Result<()> {
        match cmd {
            Commands::Init => {
                let path = Config::create_default()?;
                println!("Created config: {}", path.display());
                Ok(())
            }
            Commands::Config => {
                println!("Patches dir: {}", self.config.patches_dir.display());
                println!("Rename detection: {}", self.config.rename_detection);
                Ok(())
            }
            Commands::Completions { shell } => {
                let mut cmd = <Cli as clap::CommandFactory>::command();
                clap_complete::generate(*shell, &mut cmd, "patchlint", &mut std::io::stdout());
                Ok(())
            }
        }
    }
}
