//! Android chip-tool builds driven through gn and ninja.

use std::process::Command;

use kiln_targets::{App, Board, ParamKey, ParameterSet, PlatformKind};

use crate::builder::{reject_unknown, require_app, require_board, Builder, BuilderBase};
use crate::error::{BuildError, Result};

const PLATFORM: PlatformKind = PlatformKind::Android;

/// Cross builds chip-tool for Android devices and emulators.
#[derive(Debug)]
pub struct AndroidBuilder {
    base: BuilderBase,
    cpu: &'static str,
}

impl AndroidBuilder {
    pub fn new(base: BuilderBase, params: &ParameterSet) -> Result<Self> {
        reject_unknown(PLATFORM, params, &[ParamKey::Board, ParamKey::App])?;
        let board = require_board(PLATFORM, params)?;
        let app = require_app(PLATFORM, params)?;
        if app != App::ChipTool {
            return Err(BuildError::UnsupportedApp {
                platform: PLATFORM,
                app,
            });
        }
        if !matches!(board, Board::Arm | Board::Arm64 | Board::X64 | Board::X86) {
            return Err(BuildError::UnsupportedBoard {
                platform: PLATFORM,
                board,
            });
        }
        // The architecture segment doubles as the gn target_cpu value.
        Ok(Self {
            base,
            cpu: board.as_str(),
        })
    }
}

impl Builder for AndroidBuilder {
    fn base(&self) -> &BuilderBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BuilderBase {
        &mut self.base
    }

    fn generate(&self) -> Result<()> {
        let mut cmd = Command::new("gn");
        cmd.arg("gen")
            .arg(format!("--root={}", self.base.repo_root().display()))
            .arg(format!(
                r#"--args=target_os="android" target_cpu="{}""#,
                self.cpu
            ))
            .arg(self.base.output_dir());
        self.base.run("generate", &mut cmd)
    }

    fn build(&self) -> Result<()> {
        let mut cmd = Command::new("ninja");
        cmd.arg("-C").arg(self.base.output_dir());
        self.base.run("build", &mut cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::RecordingRunner;
    use kiln_targets::ParamValue;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn builder(board: Board, app: App) -> Result<(AndroidBuilder, Arc<RecordingRunner>)> {
        let runner = Arc::new(RecordingRunner::new());
        let base = BuilderBase::new(PathBuf::from("/src"), runner.clone());
        let mut params = ParameterSet::new();
        params.insert(ParamKey::Board, ParamValue::Board(board));
        params.insert(ParamKey::App, ParamValue::App(app));
        let mut android = AndroidBuilder::new(base, &params)?;
        android.set_output_dir(PathBuf::from("/out/android"));
        Ok((android, runner))
    }

    #[test]
    fn chip_tool_is_the_only_app() {
        let err = builder(Board::Arm64, App::Lock).unwrap_err();
        assert!(matches!(err, BuildError::UnsupportedApp { .. }));
    }

    #[test]
    fn target_cpu_follows_the_board() {
        let (android, runner) = builder(Board::X86, App::ChipTool).unwrap();
        android.generate().unwrap();
        assert_eq!(
            runner.commands(),
            vec![r#"gn gen --root=/src --args=target_os="android" target_cpu="x86" /out/android"#]
        );
    }
}
