//! ESP32 builds driven through idf.py.

use std::process::Command;

use kiln_targets::{App, Board, ParamKey, ParameterSet, PlatformKind};

use crate::builder::{reject_unknown, require_app, require_board, Builder, BuilderBase};
use crate::error::{BuildError, Result};

const PLATFORM: PlatformKind = PlatformKind::Esp32;

fn app_root(app: App) -> Option<&'static str> {
    match app {
        App::AllClusters => Some("examples/all-clusters-app/esp32"),
        App::Shell => Some("examples/shell/esp32"),
        App::Lock => Some("examples/lock-app/esp32"),
        App::Bridge => Some("examples/bridge-app/esp32"),
        App::TemperatureMeasurement => Some("examples/temperature-measurement-app/esp32"),
        _ => None,
    }
}

/// Builds ESP32 example apps with the IDF tooling.
///
/// The DevKitC board takes every app the family supports; the M5Stack and
/// C3 DevKit variants ship sdkconfig defaults for all-clusters only.
#[derive(Debug)]
pub struct Esp32Builder {
    base: BuilderBase,
    board: Board,
    source: &'static str,
}

impl Esp32Builder {
    pub fn new(base: BuilderBase, params: &ParameterSet) -> Result<Self> {
        reject_unknown(PLATFORM, params, &[ParamKey::Board, ParamKey::App])?;
        let board = require_board(PLATFORM, params)?;
        let app = require_app(PLATFORM, params)?;
        let source = app_root(app).ok_or(BuildError::UnsupportedApp {
            platform: PLATFORM,
            app,
        })?;
        match board {
            Board::DevKitC => {}
            Board::M5Stack | Board::C3DevKit if app == App::AllClusters => {}
            Board::M5Stack | Board::C3DevKit => {
                return Err(BuildError::IncompatibleCombination {
                    platform: PLATFORM,
                    board,
                    app,
                });
            }
            other => {
                return Err(BuildError::UnsupportedBoard {
                    platform: PLATFORM,
                    board: other,
                });
            }
        }
        Ok(Self {
            base,
            board,
            source,
        })
    }

    fn sdkconfig(&self) -> &'static str {
        match self.board {
            Board::M5Stack => "sdkconfig_m5stack.defaults",
            Board::C3DevKit => "sdkconfig_c3devkit.defaults",
            _ => "sdkconfig.defaults",
        }
    }

    fn idf(&self, goal: &str) -> Command {
        let mut cmd = Command::new("idf.py");
        cmd.arg("-C")
            .arg(self.base.repo_root().join(self.source))
            .arg("-B")
            .arg(self.base.output_dir())
            .arg("-D")
            .arg(format!("SDKCONFIG_DEFAULTS={}", self.sdkconfig()))
            .arg(goal);
        cmd
    }
}

impl Builder for Esp32Builder {
    fn base(&self) -> &BuilderBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BuilderBase {
        &mut self.base
    }

    fn generate(&self) -> Result<()> {
        self.base.run("generate", &mut self.idf("reconfigure"))
    }

    fn build(&self) -> Result<()> {
        self.base.run("build", &mut self.idf("build"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::RecordingRunner;
    use kiln_targets::ParamValue;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn params(board: Board, app: App) -> ParameterSet {
        let mut params = ParameterSet::new();
        params.insert(ParamKey::Board, ParamValue::Board(board));
        params.insert(ParamKey::App, ParamValue::App(app));
        params
    }

    fn builder(board: Board, app: App) -> Result<(Esp32Builder, Arc<RecordingRunner>)> {
        let runner = Arc::new(RecordingRunner::new());
        let base = BuilderBase::new(PathBuf::from("/src"), runner.clone());
        let mut esp32 = Esp32Builder::new(base, &params(board, app))?;
        esp32.set_output_dir(PathBuf::from("/out/esp32"));
        Ok((esp32, runner))
    }

    #[test]
    fn m5stack_builds_all_clusters_only() {
        assert!(builder(Board::M5Stack, App::AllClusters).is_ok());
        let err = builder(Board::M5Stack, App::Shell).unwrap_err();
        assert!(matches!(err, BuildError::IncompatibleCombination { .. }));
    }

    #[test]
    fn rejects_flags_the_family_does_not_take() {
        let runner = Arc::new(RecordingRunner::new());
        let base = BuilderBase::new(PathBuf::from("/src"), runner);
        let mut with_rpc = params(Board::DevKitC, App::Shell);
        with_rpc.insert(ParamKey::EnableRpcs, ParamValue::Flag(true));
        let err = Esp32Builder::new(base, &with_rpc).unwrap_err();
        assert!(matches!(
            err,
            BuildError::UnexpectedParameter {
                key: ParamKey::EnableRpcs,
                ..
            }
        ));
    }

    #[test]
    fn sdkconfig_follows_the_board() {
        let (esp32, runner) = builder(Board::M5Stack, App::AllClusters).unwrap();
        esp32.generate().unwrap();
        assert_eq!(
            runner.commands(),
            vec![
                "idf.py -C /src/examples/all-clusters-app/esp32 -B /out/esp32 \
                 -D SDKCONFIG_DEFAULTS=sdkconfig_m5stack.defaults reconfigure"
            ]
        );

        let (esp32, runner) = builder(Board::DevKitC, App::Shell).unwrap();
        esp32.build().unwrap();
        assert_eq!(
            runner.commands(),
            vec![
                "idf.py -C /src/examples/shell/esp32 -B /out/esp32 \
                 -D SDKCONFIG_DEFAULTS=sdkconfig.defaults build"
            ]
        );
    }
}
