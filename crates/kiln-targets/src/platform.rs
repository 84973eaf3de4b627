//! Platform families and host platform detection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Board;

/// The platform family a target belongs to.
///
/// Selects which builder implementation instantiation dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlatformKind {
    /// Native host build (Linux or Darwin).
    Host,
    /// Espressif ESP32.
    Esp32,
    /// Silicon Labs EFR32.
    Efr32,
    /// Nordic nRF Connect.
    Nrf,
    /// Android.
    Android,
    /// Qorvo QPG.
    Qpg,
    /// Telink.
    Telink,
    /// Infineon PSoC 6.
    Infineon,
    /// Tizen.
    Tizen,
}

impl PlatformKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformKind::Host => "host",
            PlatformKind::Esp32 => "esp32",
            PlatformKind::Efr32 => "efr32",
            PlatformKind::Nrf => "nrf",
            PlatformKind::Android => "android",
            PlatformKind::Qpg => "qpg",
            PlatformKind::Telink => "telink",
            PlatformKind::Infineon => "infineon",
            PlatformKind::Tizen => "tizen",
        }
    }
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host operating system, as it appears at the front of host target names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HostOs {
    Linux,
    Darwin,
}

impl HostOs {
    pub fn as_str(&self) -> &'static str {
        match self {
            HostOs::Linux => "linux",
            HostOs::Darwin => "darwin",
        }
    }
}

impl fmt::Display for HostOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The native platform the tool is running on.
///
/// Passed explicitly into the host target generator so catalog assembly
/// stays a pure function of its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostPlatform {
    /// Native operating system.
    pub os: HostOs,
    /// Native CPU architecture, expressed as a board.
    pub board: Board,
}

impl HostPlatform {
    pub fn new(os: HostOs, board: Board) -> Self {
        Self { os, board }
    }

    /// Detect the platform of the current process.
    ///
    /// Hosts other than Linux and macOS are not supported build hosts, so
    /// anything that is not macOS is treated as Linux; anything that is
    /// not aarch64 is treated as x64.
    pub fn detect() -> Self {
        let os = if cfg!(target_os = "macos") {
            HostOs::Darwin
        } else {
            HostOs::Linux
        };
        let board = if cfg!(target_arch = "aarch64") {
            Board::Arm64
        } else {
            Board::X64
        };
        Self { os, board }
    }
}
