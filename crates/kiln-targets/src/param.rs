//! Build parameters: a closed key space mapped to typed values.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::app::App;
use crate::board::Board;

/// Keys a target's parameter set can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParamKey {
    /// Board or host architecture to build for.
    Board,
    /// Application image to build.
    App,
    /// Compile RPC support into the image.
    EnableRpcs,
}

impl ParamKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamKey::Board => "board",
            ParamKey::App => "app",
            ParamKey::EnableRpcs => "enable-rpcs",
        }
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parameter value.
///
/// The value kind is fixed by the key that stores it: `Board` under
/// [`ParamKey::Board`], `App` under [`ParamKey::App`], `Flag` under the
/// flag keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Board(Board),
    App(App),
    Flag(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Board(board) => write!(f, "{board}"),
            ParamValue::App(app) => write!(f, "{app}"),
            ParamValue::Flag(value) => write!(f, "{value}"),
        }
    }
}

/// An ordered set of build parameters.
///
/// Iterates in key order. Inserting an existing key replaces its value;
/// keys are never removed. Cloning yields a fully independent set, so a
/// derived target can never reach back into the set it was copied from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet {
    entries: BTreeMap<ParamKey, ParamValue>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace one parameter. Later inserts win.
    pub fn insert(&mut self, key: ParamKey, value: ParamValue) {
        self.entries.insert(key, value);
    }

    pub fn get(&self, key: ParamKey) -> Option<ParamValue> {
        self.entries.get(&key).copied()
    }

    /// The board, if one has been set.
    pub fn board(&self) -> Option<Board> {
        match self.entries.get(&ParamKey::Board) {
            Some(ParamValue::Board(board)) => Some(*board),
            _ => None,
        }
    }

    /// The application, if one has been set.
    pub fn app(&self) -> Option<App> {
        match self.entries.get(&ParamKey::App) {
            Some(ParamValue::App(app)) => Some(*app),
            _ => None,
        }
    }

    /// Whether a boolean flag is set. An absent flag reads as false.
    pub fn flag(&self, key: ParamKey) -> bool {
        matches!(self.entries.get(&key), Some(ParamValue::Flag(true)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (ParamKey, ParamValue)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, *v))
    }
}
