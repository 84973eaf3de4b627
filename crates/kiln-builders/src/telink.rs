//! Telink builds driven through west.

use std::process::Command;

use kiln_targets::{App, Board, ParamKey, ParameterSet, PlatformKind};

use crate::builder::{reject_unknown, require_app, require_board, Builder, BuilderBase};
use crate::error::{BuildError, Result};

const PLATFORM: PlatformKind = PlatformKind::Telink;

/// Builds the lighting app for the TLSR9518ADK80D board.
///
/// The single configuration this family ships.
#[derive(Debug)]
pub struct TelinkBuilder {
    base: BuilderBase,
}

impl TelinkBuilder {
    pub fn new(base: BuilderBase, params: &ParameterSet) -> Result<Self> {
        reject_unknown(PLATFORM, params, &[ParamKey::Board, ParamKey::App])?;
        let board = require_board(PLATFORM, params)?;
        let app = require_app(PLATFORM, params)?;
        if board != Board::Tlsr9518adk80d {
            return Err(BuildError::UnsupportedBoard {
                platform: PLATFORM,
                board,
            });
        }
        if app != App::Light {
            return Err(BuildError::UnsupportedApp {
                platform: PLATFORM,
                app,
            });
        }
        Ok(Self { base })
    }

    fn west(&self) -> Command {
        let mut cmd = Command::new("west");
        cmd.arg("build")
            .arg("-b")
            .arg("tlsr9518adk80d")
            .arg("-d")
            .arg(self.base.output_dir())
            .arg(self.base.repo_root().join("examples/lighting-app/telink"));
        cmd
    }
}

impl Builder for TelinkBuilder {
    fn base(&self) -> &BuilderBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BuilderBase {
        &mut self.base
    }

    fn generate(&self) -> Result<()> {
        let mut cmd = self.west();
        cmd.arg("--cmake-only");
        self.base.run("generate", &mut cmd)
    }

    fn build(&self) -> Result<()> {
        self.base.run("build", &mut self.west())
    }
}
