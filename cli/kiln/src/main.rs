//! Kiln CLI — list the build catalog and drive firmware example builds.

mod commands;
mod config;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::build::Step;
use config::KilnConfig;
use kiln_targets::{Catalog, HostPlatform};

#[derive(Parser)]
#[command(name = "kiln", version, about = "Firmware example build catalog")]
struct Cli {
    /// Show per-step debug output
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every target buildable on this host
    Targets {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show platform and parameters for one target
    Describe {
        /// Target name (e.g., esp32-devkitc-shell)
        name: String,
        /// Print the description as JSON
        #[arg(long)]
        json: bool,
    },
    /// Configure build trees without compiling
    Gen {
        /// Target to configure (repeatable)
        #[arg(long = "target")]
        targets: Vec<String>,
        /// Configure every target in the catalog
        #[arg(long)]
        all: bool,
        /// Source checkout to build from (default: project root)
        #[arg(long)]
        repo: Option<PathBuf>,
        /// Directory for build output (default: <project root>/out)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Print build commands instead of running them
        #[arg(long)]
        dry_run: bool,
        /// Produce flashing bundles after each build
        #[arg(long)]
        flashbundle: bool,
    },
    /// Configure and compile the selected targets
    Build {
        /// Target to build (repeatable)
        #[arg(long = "target")]
        targets: Vec<String>,
        /// Build every target in the catalog
        #[arg(long)]
        all: bool,
        /// Source checkout to build from (default: project root)
        #[arg(long)]
        repo: Option<PathBuf>,
        /// Directory for build output (default: <project root>/out)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Print build commands instead of running them
        #[arg(long)]
        dry_run: bool,
        /// Produce flashing bundles after each build
        #[arg(long)]
        flashbundle: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let host = HostPlatform::detect();
    let catalog = Catalog::assemble(&host)?;

    match cli.command {
        Commands::Targets { json } => commands::targets::list(&catalog, json),

        Commands::Describe { name, json } => commands::targets::describe(&catalog, &name, json),

        Commands::Gen {
            targets,
            all,
            repo,
            out,
            dry_run,
            flashbundle,
        } => run_build(
            &catalog,
            &targets,
            all,
            repo,
            out,
            dry_run,
            flashbundle,
            Step::Generate,
        ),

        Commands::Build {
            targets,
            all,
            repo,
            out,
            dry_run,
            flashbundle,
        } => run_build(
            &catalog,
            &targets,
            all,
            repo,
            out,
            dry_run,
            flashbundle,
            Step::Build,
        ),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_build(
    catalog: &Catalog,
    targets: &[String],
    all: bool,
    repo: Option<PathBuf>,
    out: Option<PathBuf>,
    dry_run: bool,
    flashbundle: bool,
    step: Step,
) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let (config, config_dir) = load_config_optional(&cwd)?;
    let config_dir = config_dir.unwrap_or(cwd);
    commands::build::run(
        catalog,
        config.as_ref(),
        &config_dir,
        targets,
        all,
        repo.as_deref(),
        out.as_deref(),
        dry_run,
        flashbundle,
        step,
    )
}

/// Try to load kiln.toml from the current directory upward. Returns (None, None) if not found.
fn load_config_optional(cwd: &Path) -> anyhow::Result<(Option<KilnConfig>, Option<PathBuf>)> {
    match KilnConfig::find_and_load(cwd)? {
        Some((config, dir)) => Ok((Some(config), Some(dir))),
        None => Ok((None, None)),
    }
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use kiln_targets::{Board, HostOs};

    fn linux_catalog() -> Catalog {
        Catalog::assemble(&HostPlatform::new(HostOs::Linux, Board::X64)).unwrap()
    }

    /// Full workflow: list → describe → dry-run gen → dry-run build.
    #[test]
    fn list_describe_gen_build_workflow() {
        let catalog = linux_catalog();
        commands::targets::list(&catalog, false).unwrap();
        commands::targets::describe(&catalog, "nrf-nrf52840-pump", false).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let names = vec!["nrf-nrf52840-pump".to_string()];
        commands::build::run(
            &catalog,
            None,
            dir.path(),
            &names,
            false,
            None,
            None,
            true,
            false,
            Step::Generate,
        )
        .unwrap();
        commands::build::run(
            &catalog,
            None,
            dir.path(),
            &names,
            false,
            None,
            None,
            true,
            false,
            Step::Build,
        )
        .unwrap();
    }

    /// Config-file targets feed selection end to end.
    #[test]
    fn config_supplies_default_targets() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("kiln.toml"),
            "[build]\ntargets = [\"qpg-qpg6100-lock\"]\n",
        )
        .unwrap();

        let (config, config_dir) = KilnConfig::find_and_load(dir.path()).unwrap().unwrap();
        let catalog = linux_catalog();
        commands::build::run(
            &catalog,
            Some(&config),
            &config_dir,
            &[],
            false,
            None,
            None,
            true,
            false,
            Step::Build,
        )
        .unwrap();
    }

    /// A dry run over the whole catalog exercises every platform family.
    #[test]
    fn dry_run_all_targets() {
        let catalog = linux_catalog();
        let dir = tempfile::tempdir().unwrap();
        commands::build::run(
            &catalog,
            None,
            dir.path(),
            &[],
            true,
            None,
            None,
            true,
            false,
            Step::Build,
        )
        .unwrap();
    }

    #[test]
    fn unknown_target_fails() {
        let catalog = linux_catalog();
        let dir = tempfile::tempdir().unwrap();
        let names = vec!["bogus".to_string()];
        let result = commands::build::run(
            &catalog,
            None,
            dir.path(),
            &names,
            false,
            None,
            None,
            true,
            false,
            Step::Generate,
        );
        assert!(result.is_err());
    }

    /// The parser accepts repeated --target flags.
    #[test]
    fn cli_parses_build_invocation() {
        let cli = Cli::try_parse_from([
            "kiln",
            "build",
            "--target",
            "esp32-devkitc-shell",
            "--target",
            "esp32-devkitc-lock",
            "--dry-run",
        ])
        .unwrap();
        match cli.command {
            Commands::Build {
                targets,
                all,
                dry_run,
                ..
            } => {
                assert_eq!(targets, vec!["esp32-devkitc-shell", "esp32-devkitc-lock"]);
                assert!(!all);
                assert!(dry_run);
            }
            _ => panic!("expected a build command"),
        }
    }
}
