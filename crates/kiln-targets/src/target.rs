//! Target descriptors and the specialization operator.

use serde::{Deserialize, Serialize};

use crate::app::App;
use crate::board::Board;
use crate::param::{ParamKey, ParamValue, ParameterSet};
use crate::platform::PlatformKind;

/// A named, buildable configuration: platform family plus parameters.
///
/// Targets are grown by specialization: [`Target::extend`] clones the
/// descriptor and appends a name segment, and the `with_*` setters add or
/// override parameters on the clone. The source descriptor and anything
/// previously derived from it are never affected, so one base can fan out
/// into a whole family of variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Target {
    /// Unique name within the assembled catalog.
    pub name: String,
    /// Platform family, dispatched on at instantiation time.
    pub platform: PlatformKind,
    /// Build parameters accumulated through specialization.
    pub params: ParameterSet,
}

impl Target {
    /// A base descriptor with an empty parameter set.
    pub fn new(name: impl Into<String>, platform: PlatformKind) -> Self {
        Self {
            name: name.into(),
            platform,
            params: ParameterSet::new(),
        }
    }

    /// Derive a new target with `"-" + suffix` appended to the name.
    ///
    /// The derived target carries an independent copy of the parameter
    /// set; the source is left untouched.
    pub fn extend(&self, suffix: &str) -> Self {
        let mut derived = self.clone();
        derived.name.push('-');
        derived.name.push_str(suffix);
        derived
    }

    /// Set the board parameter, replacing any previous board.
    pub fn with_board(mut self, board: Board) -> Self {
        self.params.insert(ParamKey::Board, ParamValue::Board(board));
        self
    }

    /// Set the application parameter, replacing any previous app.
    pub fn with_app(mut self, app: App) -> Self {
        self.params.insert(ParamKey::App, ParamValue::App(app));
        self
    }

    /// Set a boolean flag parameter.
    pub fn with_flag(mut self, key: ParamKey, value: bool) -> Self {
        self.params.insert(key, ParamValue::Flag(value));
        self
    }

    /// The board parameter, if set.
    pub fn board(&self) -> Option<Board> {
        self.params.board()
    }

    /// The application parameter, if set.
    pub fn app(&self) -> Option<App> {
        self.params.app()
    }
}
