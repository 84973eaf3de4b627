//! EFR32 builds driven through gn and ninja.

use std::process::Command;

use kiln_targets::{App, Board, ParamKey, ParameterSet, PlatformKind};

use crate::builder::{reject_unknown, require_app, require_board, Builder, BuilderBase};
use crate::error::{BuildError, Result};

const PLATFORM: PlatformKind = PlatformKind::Efr32;

fn app_root(app: App) -> Option<&'static str> {
    match app {
        App::Light => Some("examples/lighting-app/efr32"),
        App::Lock => Some("examples/lock-app/efr32"),
        App::WindowCovering => Some("examples/window-app/efr32"),
        _ => None,
    }
}

/// Builds EFR32 example apps, optionally with RPC support compiled in.
#[derive(Debug)]
pub struct Efr32Builder {
    base: BuilderBase,
    board: Board,
    source: &'static str,
    enable_rpcs: bool,
}

impl Efr32Builder {
    pub fn new(base: BuilderBase, params: &ParameterSet) -> Result<Self> {
        reject_unknown(
            PLATFORM,
            params,
            &[ParamKey::Board, ParamKey::App, ParamKey::EnableRpcs],
        )?;
        let board = require_board(PLATFORM, params)?;
        let app = require_app(PLATFORM, params)?;
        if board != Board::Brd4161a {
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
            enable_rpcs: params.flag(ParamKey::EnableRpcs),
        })
    }
}

impl Builder for Efr32Builder {
    fn base(&self) -> &BuilderBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BuilderBase {
        &mut self.base
    }

    fn generate(&self) -> Result<()> {
        let mut args = format!(r#"efr32_board="{}""#, self.board);
        if self.enable_rpcs {
            args.push_str(r#" import("//with_pw_rpc.gni")"#);
        }
        let mut cmd = Command::new("gn");
        cmd.arg("gen")
            .arg(format!(
                "--root={}",
                self.base.repo_root().join(self.source).display()
            ))
            .arg(format!("--args={args}"))
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

    fn builder(app: App, rpcs: bool) -> (Efr32Builder, Arc<RecordingRunner>) {
        let runner = Arc::new(RecordingRunner::new());
        let base = BuilderBase::new(PathBuf::from("/src"), runner.clone());
        let mut params = ParameterSet::new();
        params.insert(ParamKey::Board, ParamValue::Board(Board::Brd4161a));
        params.insert(ParamKey::App, ParamValue::App(app));
        if rpcs {
            params.insert(ParamKey::EnableRpcs, ParamValue::Flag(true));
        }
        let mut efr32 = Efr32Builder::new(base, &params).unwrap();
        efr32.set_output_dir(PathBuf::from("/out/efr32"));
        (efr32, runner)
    }

    #[test]
    fn rejects_foreign_boards() {
        let runner = Arc::new(RecordingRunner::new());
        let base = BuilderBase::new(PathBuf::from("/src"), runner);
        let mut params = ParameterSet::new();
        params.insert(ParamKey::Board, ParamValue::Board(Board::Nrf5340));
        params.insert(ParamKey::App, ParamValue::App(App::Light));
        let err = Efr32Builder::new(base, &params).unwrap_err();
        assert!(matches!(err, BuildError::UnsupportedBoard { .. }));
    }

    #[test]
    fn rpc_variant_imports_the_rpc_args() {
        let (efr32, runner) = builder(App::Lock, true);
        efr32.generate().unwrap();
        let commands = runner.commands();
        assert!(commands[0].contains(r#"efr32_board="brd4161a""#));
        assert!(commands[0].contains(r#"import("//with_pw_rpc.gni")"#));
    }

    #[test]
    fn plain_variant_does_not() {
        let (efr32, runner) = builder(App::Lock, false);
        efr32.generate().unwrap();
        assert!(!runner.commands()[0].contains("with_pw_rpc"));
    }
}
