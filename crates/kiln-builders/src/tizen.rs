//! Tizen builds driven through gn and ninja.

use std::process::Command;

use kiln_targets::{App, Board, ParamKey, ParameterSet, PlatformKind};

use crate::builder::{reject_unknown, require_app, require_board, Builder, BuilderBase};
use crate::error::{BuildError, Result};

const PLATFORM: PlatformKind = PlatformKind::Tizen;

/// Builds the lighting app for arm Tizen devices.
///
/// The single configuration this family ships.
#[derive(Debug)]
pub struct TizenBuilder {
    base: BuilderBase,
}

impl TizenBuilder {
    pub fn new(base: BuilderBase, params: &ParameterSet) -> Result<Self> {
        reject_unknown(PLATFORM, params, &[ParamKey::Board, ParamKey::App])?;
        let board = require_board(PLATFORM, params)?;
        let app = require_app(PLATFORM, params)?;
        if board != Board::Arm {
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
}

impl Builder for TizenBuilder {
    fn base(&self) -> &BuilderBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BuilderBase {
        &mut self.base
    }

    fn generate(&self) -> Result<()> {
        let mut cmd = Command::new("gn");
        cmd.arg("gen")
            .arg(format!(
                "--root={}",
                self.base
                    .repo_root()
                    .join("examples/lighting-app/tizen")
                    .display()
            ))
            .arg(r#"--args=target_os="tizen" target_cpu="arm""#)
            .arg(self.base.output_dir());
        self.base.run("generate", &mut cmd)
    }

    fn build(&self) -> Result<()> {
        let mut cmd = Command::new("ninja");
        cmd.arg("-C").arg(self.base.output_dir());
        self.base.run("build", &mut cmd)
    }
}
