//! Declarative build-target catalog for the Kiln build tool.
//!
//! A [`Target`] names one buildable combination of platform family, board,
//! and application image. Targets start as per-family base descriptors and
//! are grown through specialization: [`Target::extend`] derives a new
//! descriptor with an extended name and an independent parameter set, so
//! variants never interfere with each other. The family generators walk
//! each platform's board and application axes this way, and
//! [`Catalog::assemble`] collects, sorts, and checks the result.

pub mod app;
pub mod board;
pub mod catalog;
pub mod error;
pub mod generators;
pub mod param;
pub mod platform;
pub mod target;

pub use app::App;
pub use board::Board;
pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use param::{ParamKey, ParamValue, ParameterSet};
pub use platform::{HostOs, HostPlatform, PlatformKind};
pub use target::Target;
