//! Native host builds driven through gn and ninja.

use std::process::Command;

use kiln_targets::{App, Board, ParamKey, ParameterSet, PlatformKind};

use crate::builder::{reject_unknown, require_app, require_board, Builder, BuilderBase};
use crate::error::{BuildError, Result};

const PLATFORM: PlatformKind = PlatformKind::Host;

/// Example source directory for each app buildable on the host.
fn app_root(app: App) -> Option<&'static str> {
    match app {
        App::AllClusters => Some("examples/all-clusters-app/linux"),
        App::ChipTool => Some("examples/chip-tool"),
        App::Thermostat => Some("examples/thermostat/linux"),
        _ => None,
    }
}

/// Builds host example apps natively, or cross compiled for arm64.
#[derive(Debug)]
pub struct HostBuilder {
    base: BuilderBase,
    board: Board,
    source: &'static str,
}

impl HostBuilder {
    pub fn new(base: BuilderBase, params: &ParameterSet) -> Result<Self> {
        reject_unknown(PLATFORM, params, &[ParamKey::Board, ParamKey::App])?;
        let board = require_board(PLATFORM, params)?;
        let app = require_app(PLATFORM, params)?;
        if !matches!(board, Board::X64 | Board::Arm64) {
            return Err(BuildError::UnsupportedBoard {
                platform: PLATFORM,
                board,
            });
        }
        let source = app_root(app).ok_or(BuildError::UnsupportedApp {
            platform: PLATFORM,
            app,
        })?;
        Ok(Self {
            base,
            board,
            source,
        })
    }
}

impl Builder for HostBuilder {
    fn base(&self) -> &BuilderBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BuilderBase {
        &mut self.base
    }

    fn generate(&self) -> Result<()> {
        let mut cmd = Command::new("gn");
        cmd.arg("gen").arg(format!(
            "--root={}",
            self.base.repo_root().join(self.source).display()
        ));
        if self.board == Board::Arm64 {
            cmd.arg(r#"--args=target_cpu="arm64""#);
        }
        cmd.arg(self.base.output_dir());
        self.base.run("generate", &mut cmd)
    }

    fn build(&self) -> Result<()> {
        let mut cmd = Command::new("ninja");
        cmd.arg("-C").arg(self.base.output_dir());
        self.base.run("build", &mut cmd)
    }
}
