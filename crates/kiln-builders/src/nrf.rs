//! nRF Connect builds driven through west.

use std::process::Command;

use kiln_targets::{App, Board, ParamKey, ParameterSet, PlatformKind};

use crate::builder::{reject_unknown, require_app, require_board, Builder, BuilderBase};
use crate::error::{BuildError, Result};

const PLATFORM: PlatformKind = PlatformKind::Nrf;

fn app_root(app: App) -> Option<&'static str> {
    match app {
        App::Lock => Some("examples/lock-app/nrfconnect"),
        App::Light => Some("examples/lighting-app/nrfconnect"),
        App::Shell => Some("examples/shell/nrfconnect"),
        App::Pump => Some("examples/pump-app/nrfconnect"),
        App::PumpController => Some("examples/pump-controller-app/nrfconnect"),
        _ => None,
    }
}

/// Zephyr board name west builds against.
fn west_board(board: Board) -> Option<&'static str> {
    match board {
        Board::Nrf5340 => Some("nrf5340dk_nrf5340_cpuapp"),
        Board::Nrf52840 => Some("nrf52840dk_nrf52840"),
        _ => None,
    }
}

/// Builds nRF Connect example apps with west.
#[derive(Debug)]
pub struct NrfBuilder {
    base: BuilderBase,
    board_name: &'static str,
    source: &'static str,
}

impl NrfBuilder {
    pub fn new(base: BuilderBase, params: &ParameterSet) -> Result<Self> {
        reject_unknown(PLATFORM, params, &[ParamKey::Board, ParamKey::App])?;
        let board = require_board(PLATFORM, params)?;
        let app = require_app(PLATFORM, params)?;
        let board_name = west_board(board).ok_or(BuildError::UnsupportedBoard {
            platform: PLATFORM,
            board,
        })?;
        let source = app_root(app).ok_or(BuildError::UnsupportedApp {
            platform: PLATFORM,
            app,
        })?;
        Ok(Self {
            base,
            board_name,
            source,
        })
    }

    fn west(&self) -> Command {
        let mut cmd = Command::new("west");
        cmd.arg("build")
            .arg("-b")
            .arg(self.board_name)
            .arg("-d")
            .arg(self.base.output_dir())
            .arg(self.base.repo_root().join(self.source));
        cmd
    }
}

impl Builder for NrfBuilder {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::RecordingRunner;
    use kiln_targets::ParamValue;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn builder(board: Board, app: App) -> Result<(NrfBuilder, Arc<RecordingRunner>)> {
        let runner = Arc::new(RecordingRunner::new());
        let base = BuilderBase::new(PathBuf::from("/src"), runner.clone());
        let mut params = ParameterSet::new();
        params.insert(ParamKey::Board, ParamValue::Board(board));
        params.insert(ParamKey::App, ParamValue::App(app));
        let mut nrf = NrfBuilder::new(base, &params)?;
        nrf.set_output_dir(PathBuf::from("/out/nrf"));
        Ok((nrf, runner))
    }

    #[test]
    fn west_invocations_per_step() {
        let (nrf, runner) = builder(Board::Nrf5340, App::Pump).unwrap();
        nrf.generate().unwrap();
        nrf.build().unwrap();
        assert_eq!(
            runner.commands(),
            vec![
                "west build -b nrf5340dk_nrf5340_cpuapp -d /out/nrf \
                 /src/examples/pump-app/nrfconnect --cmake-only",
                "west build -b nrf5340dk_nrf5340_cpuapp -d /out/nrf \
                 /src/examples/pump-app/nrfconnect",
            ]
        );
    }

    #[test]
    fn nrf52840_maps_to_its_devkit() {
        let (nrf, runner) = builder(Board::Nrf52840, App::Light).unwrap();
        nrf.build().unwrap();
        assert!(runner.commands()[0].contains("-b nrf52840dk_nrf52840"));
    }

    #[test]
    fn rejects_apps_outside_the_family() {
        let err = builder(Board::Nrf5340, App::Thermostat).unwrap_err();
        assert!(matches!(err, BuildError::UnsupportedApp { .. }));
    }
}
