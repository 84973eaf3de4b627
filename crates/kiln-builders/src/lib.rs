//! Platform builders for the Kiln build tool.
//!
//! [`instantiate`] binds a catalog target to a [`BuildContext`], dispatching
//! on the target's platform family to construct the matching builder.
//! Builders are thin: construction validates the board/app/flag combination,
//! and the generate and build steps each drive one toolchain command through
//! the shared [`Runner`].

pub mod android;
pub mod builder;
pub mod efr32;
pub mod error;
pub mod esp32;
pub mod host;
pub mod infineon;
pub mod nrf;
pub mod qpg;
pub mod runner;
pub mod telink;
pub mod tizen;

pub use builder::{instantiate, BuildContext, Builder, BuilderBase};
pub use error::{BuildError, Result};
pub use runner::{render_command, DryRunner, RecordingRunner, Runner, ShellRunner};
