//! Board axis: host CPU architectures and device development boards.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A board a target can be built for.
///
/// Host targets use the CPU architecture in place of a physical board;
/// device targets name the development kit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Board {
    /// 64-bit x86 host.
    X64,
    /// 32-bit x86 host.
    X86,
    /// 32-bit ARM.
    Arm,
    /// 64-bit ARM.
    Arm64,
    /// ESP32 in the M5Stack enclosure.
    M5Stack,
    /// ESP32-C3 development kit.
    C3DevKit,
    /// ESP32 DevKitC.
    DevKitC,
    /// Silicon Labs BRD4161A radio board.
    Brd4161a,
    /// Nordic nRF5340 development kit.
    Nrf5340,
    /// Nordic nRF52840 development kit.
    Nrf52840,
    /// Qorvo QPG6100 development kit.
    Qpg6100,
    /// Telink TLSR9518ADK80D development board.
    Tlsr9518adk80d,
    /// Infineon PSoC 6 board.
    P6,
}

impl Board {
    /// Name segment used in target names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Board::X64 => "x64",
            Board::X86 => "x86",
            Board::Arm => "arm",
            Board::Arm64 => "arm64",
            Board::M5Stack => "m5stack",
            Board::C3DevKit => "c3devkit",
            Board::DevKitC => "devkitc",
            Board::Brd4161a => "brd4161a",
            Board::Nrf5340 => "nrf5340",
            Board::Nrf52840 => "nrf52840",
            Board::Qpg6100 => "qpg6100",
            Board::Tlsr9518adk80d => "tlsr9518adk80d",
            Board::P6 => "p6",
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
