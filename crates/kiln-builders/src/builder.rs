//! Builder contract and instantiation dispatch.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Arc;

use kiln_targets::{App, Board, ParamKey, ParameterSet, PlatformKind, Target};

use crate::android::AndroidBuilder;
use crate::efr32::Efr32Builder;
use crate::error::{BuildError, Result};
use crate::esp32::Esp32Builder;
use crate::host::HostBuilder;
use crate::infineon::InfineonBuilder;
use crate::nrf::NrfBuilder;
use crate::qpg::QpgBuilder;
use crate::runner::Runner;
use crate::telink::TelinkBuilder;
use crate::tizen::TizenBuilder;

/// Everything instantiation needs from the surroundings.
#[derive(Clone)]
pub struct BuildContext {
    /// Root of the source repository to build from.
    pub repo_root: PathBuf,
    /// Directory that per-target output directories are created under.
    pub output_root: PathBuf,
    /// Shared command executor.
    pub runner: Arc<dyn Runner>,
    /// Whether builders should prepare flashing bundles.
    pub flashbundle: bool,
}

/// State shared by every platform builder.
///
/// Identifier, output directory, and the flashbundle toggle stay settable
/// after construction; instantiation fills them in from the target.
pub struct BuilderBase {
    identifier: String,
    output_dir: PathBuf,
    flashbundle: bool,
    repo_root: PathBuf,
    runner: Arc<dyn Runner>,
}

impl std::fmt::Debug for BuilderBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuilderBase")
            .field("identifier", &self.identifier)
            .field("output_dir", &self.output_dir)
            .field("flashbundle", &self.flashbundle)
            .field("repo_root", &self.repo_root)
            .finish_non_exhaustive()
    }
}

impl BuilderBase {
    pub fn new(repo_root: PathBuf, runner: Arc<dyn Runner>) -> Self {
        Self {
            identifier: String::new(),
            output_dir: PathBuf::new(),
            flashbundle: false,
            repo_root,
            runner,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn set_identifier(&mut self, identifier: impl Into<String>) {
        self.identifier = identifier.into();
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn set_output_dir(&mut self, dir: PathBuf) {
        self.output_dir = dir;
    }

    pub fn flashbundle_enabled(&self) -> bool {
        self.flashbundle
    }

    pub fn enable_flashbundle(&mut self, enabled: bool) {
        self.flashbundle = enabled;
    }

    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    /// Run one command through the shared runner.
    pub fn run(&self, title: &str, cmd: &mut Command) -> Result<()> {
        self.runner.run(title, cmd)
    }
}

/// Contract every platform builder satisfies.
///
/// Object-safe so instantiation can hand back `Box<dyn Builder>`.
pub trait Builder: Send {
    fn base(&self) -> &BuilderBase;
    fn base_mut(&mut self) -> &mut BuilderBase;

    /// Compose and run the configure step.
    fn generate(&self) -> Result<()>;

    /// Compose and run the compile step.
    fn build(&self) -> Result<()>;

    fn identifier(&self) -> &str {
        self.base().identifier()
    }

    fn set_identifier(&mut self, identifier: &str) {
        self.base_mut().set_identifier(identifier);
    }

    fn output_dir(&self) -> &Path {
        self.base().output_dir()
    }

    fn set_output_dir(&mut self, dir: PathBuf) {
        self.base_mut().set_output_dir(dir);
    }

    fn flashbundle_enabled(&self) -> bool {
        self.base().flashbundle_enabled()
    }

    fn enable_flashbundle(&mut self, enabled: bool) {
        self.base_mut().enable_flashbundle(enabled);
    }
}

impl std::fmt::Debug for dyn Builder + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builder")
            .field("identifier", &self.identifier())
            .field("output_dir", &self.output_dir())
            .finish_non_exhaustive()
    }
}

/// Bind a target to an execution context, yielding a ready builder.
///
/// Dispatches on the target's platform family; the family constructor
/// validates the parameter combination and its error propagates unchanged.
/// On success the builder carries the target's name as identifier, an
/// output directory of `output_root/name`, and the context's flashbundle
/// toggle. The target itself is only read, so instantiating it again
/// (against the same or another context) works the same way.
pub fn instantiate(target: &Target, ctx: &BuildContext) -> Result<Box<dyn Builder>> {
    let base = BuilderBase::new(ctx.repo_root.clone(), ctx.runner.clone());
    let mut builder: Box<dyn Builder> = match target.platform {
        PlatformKind::Host => Box::new(HostBuilder::new(base, &target.params)?),
        PlatformKind::Esp32 => Box::new(Esp32Builder::new(base, &target.params)?),
        PlatformKind::Efr32 => Box::new(Efr32Builder::new(base, &target.params)?),
        PlatformKind::Nrf => Box::new(NrfBuilder::new(base, &target.params)?),
        PlatformKind::Android => Box::new(AndroidBuilder::new(base, &target.params)?),
        PlatformKind::Qpg => Box::new(QpgBuilder::new(base, &target.params)?),
        PlatformKind::Telink => Box::new(TelinkBuilder::new(base, &target.params)?),
        PlatformKind::Infineon => Box::new(InfineonBuilder::new(base, &target.params)?),
        PlatformKind::Tizen => Box::new(TizenBuilder::new(base, &target.params)?),
    };
    builder.set_identifier(&target.name);
    builder.set_output_dir(ctx.output_root.join(&target.name));
    builder.enable_flashbundle(ctx.flashbundle);
    tracing::debug!(name = %target.name, "Instantiated builder");
    Ok(builder)
}

/// Board parameter, or the family's missing-parameter error.
pub(crate) fn require_board(platform: PlatformKind, params: &ParameterSet) -> Result<Board> {
    params.board().ok_or(BuildError::MissingParameter {
        platform,
        what: "board",
    })
}

/// App parameter, or the family's missing-parameter error.
pub(crate) fn require_app(platform: PlatformKind, params: &ParameterSet) -> Result<App> {
    params.app().ok_or(BuildError::MissingParameter {
        platform,
        what: "app",
    })
}

/// Reject any parameter key the family does not understand.
pub(crate) fn reject_unknown(
    platform: PlatformKind,
    params: &ParameterSet,
    accepted: &[ParamKey],
) -> Result<()> {
    for (key, _) in params.iter() {
        if !accepted.contains(&key) {
            return Err(BuildError::UnexpectedParameter { platform, key });
        }
    }
    Ok(())
}
