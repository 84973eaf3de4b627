//! `kiln gen` and `kiln build` — configure and compile catalog targets.

use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, bail, Result};
use kiln_builders::{instantiate, BuildContext, DryRunner, Runner, ShellRunner};
use kiln_targets::{Catalog, Target};

use crate::config::KilnConfig;

/// How far to take each selected target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Configure the build tree only.
    Generate,
    /// Configure, then compile.
    Build,
}

/// Run the requested step for every selected target.
#[allow(clippy::too_many_arguments)]
pub fn run(
    catalog: &Catalog,
    config: Option<&KilnConfig>,
    config_dir: &Path,
    names: &[String],
    all: bool,
    repo: Option<&Path>,
    out: Option<&Path>,
    dry_run: bool,
    flashbundle: bool,
    step: Step,
) -> Result<()> {
    let selection = select_targets(catalog, names, all, config)?;

    let runner: Arc<dyn Runner> = if dry_run {
        Arc::new(DryRunner)
    } else {
        Arc::new(ShellRunner)
    };
    let ctx = build_context(config, config_dir, repo, out, flashbundle, runner);

    for target in selection {
        println!("Target: {}", target.name);
        let builder = instantiate(target, &ctx)?;
        builder.generate()?;
        if step == Step::Build {
            builder.build()?;
        }
    }

    Ok(())
}

/// Resolve which catalog entries to build.
fn select_targets<'a>(
    catalog: &'a Catalog,
    names: &[String],
    all: bool,
    config: Option<&KilnConfig>,
) -> Result<Vec<&'a Target>> {
    // --target flags take precedence
    if !names.is_empty() {
        return names.iter().map(|name| lookup(catalog, name)).collect();
    }

    // --all: every target the host can build
    if all {
        return Ok(catalog.iter().collect());
    }

    // kiln.toml defaults
    if let Some(config) = config {
        if !config.build.targets.is_empty() {
            return config
                .build
                .targets
                .iter()
                .map(|name| lookup(catalog, name))
                .collect();
        }
    }

    bail!("no targets selected: pass --target <name>, --all, or list targets in kiln.toml")
}

fn lookup<'a>(catalog: &'a Catalog, name: &str) -> Result<&'a Target> {
    catalog.find(name).ok_or_else(|| {
        anyhow!("unknown target: '{name}'. Use 'kiln targets' to see available targets.")
    })
}

/// Combine command-line flags and config defaults into a context.
///
/// Flags win over config. Paths from the config are taken relative to
/// the directory the config file was found in.
fn build_context(
    config: Option<&KilnConfig>,
    config_dir: &Path,
    repo: Option<&Path>,
    out: Option<&Path>,
    flashbundle: bool,
    runner: Arc<dyn Runner>,
) -> BuildContext {
    let build = config.map(|c| &c.build);

    let repo_root = match repo {
        Some(path) => path.to_path_buf(),
        None => match build.and_then(|b| b.repo.as_ref()) {
            Some(path) => config_dir.join(path),
            None => config_dir.to_path_buf(),
        },
    };

    let output_root = match out {
        Some(path) => path.to_path_buf(),
        None => match build.and_then(|b| b.out_dir.as_ref()) {
            Some(path) => config_dir.join(path),
            None => config_dir.join("out"),
        },
    };

    BuildContext {
        repo_root,
        output_root,
        runner,
        flashbundle: flashbundle || build.is_some_and(|b| b.flashbundle),
    }
}
