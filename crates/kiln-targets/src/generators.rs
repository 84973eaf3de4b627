//! Per-family target generators.
//!
//! Each generator walks its family's board and application axes by
//! specializing a shared base descriptor and returns the finished variants
//! in declaration order. Every returned target carries a concrete board
//! and app; nothing leaves a generator half specified.

use crate::app::App;
use crate::board::Board;
use crate::param::ParamKey;
use crate::platform::{HostOs, HostPlatform, PlatformKind};
use crate::target::Target;

/// Host builds for the given native platform.
///
/// Always yields the native board variant. An x64 Linux host additionally
/// cross compiles to arm64; other hosts build natively only.
pub fn host_targets(host: &HostPlatform) -> Vec<Target> {
    let base = Target::new(host.os.as_str(), PlatformKind::Host);

    let mut boards = vec![base.extend(host.board.as_str()).with_board(host.board)];
    if host.os == HostOs::Linux && host.board != Board::Arm64 {
        boards.push(base.extend("arm64").with_board(Board::Arm64));
    }

    let mut targets = Vec::new();
    for board in &boards {
        targets.push(board.extend("all-clusters").with_app(App::AllClusters));
        targets.push(board.extend("chip-tool").with_app(App::ChipTool));
        targets.push(board.extend("thermostat").with_app(App::Thermostat));
    }
    targets
}

/// ESP32 builds.
///
/// The DevKitC board supports the full application set; the M5Stack and
/// C3 DevKit variants ship all-clusters only.
pub fn esp32_targets() -> Vec<Target> {
    let base = Target::new("esp32", PlatformKind::Esp32);

    let mut targets = vec![
        base.extend("m5stack-all-clusters")
            .with_board(Board::M5Stack)
            .with_app(App::AllClusters),
        base.extend("c3devkit-all-clusters")
            .with_board(Board::C3DevKit)
            .with_app(App::AllClusters),
    ];

    let devkitc = base.extend("devkitc").with_board(Board::DevKitC);
    targets.push(devkitc.extend("all-clusters").with_app(App::AllClusters));
    targets.push(devkitc.extend("shell").with_app(App::Shell));
    targets.push(devkitc.extend("lock").with_app(App::Lock));
    targets.push(devkitc.extend("bridge").with_app(App::Bridge));
    targets.push(
        devkitc
            .extend("temperature-measurement")
            .with_app(App::TemperatureMeasurement),
    );
    targets
}

/// EFR32 builds on the BRD4161A board.
///
/// Each application variant is followed by an "-rpc" twin with RPC
/// support compiled in.
pub fn efr32_targets() -> Vec<Target> {
    let base = Target::new("efr32-brd4161a", PlatformKind::Efr32).with_board(Board::Brd4161a);

    let apps = [
        base.extend("light").with_app(App::Light),
        base.extend("lock").with_app(App::Lock),
        base.extend("window-covering").with_app(App::WindowCovering),
    ];

    let mut targets = Vec::new();
    for target in apps {
        let rpc = target.extend("rpc").with_flag(ParamKey::EnableRpcs, true);
        targets.push(target);
        targets.push(rpc);
    }
    targets
}

/// nRF Connect builds for the nRF5340 and nRF52840 development kits.
pub fn nrf_targets() -> Vec<Target> {
    let base = Target::new("nrf", PlatformKind::Nrf);

    let boards = [
        base.extend("nrf5340").with_board(Board::Nrf5340),
        base.extend("nrf52840").with_board(Board::Nrf52840),
    ];

    let mut targets = Vec::new();
    for board in &boards {
        targets.push(board.extend("lock").with_app(App::Lock));
        targets.push(board.extend("light").with_app(App::Light));
        targets.push(board.extend("shell").with_app(App::Shell));
        targets.push(board.extend("pump").with_app(App::Pump));
        targets.push(board.extend("pump-controller").with_app(App::PumpController));
    }
    targets
}

/// Android chip-tool builds, one per supported architecture.
pub fn android_targets() -> Vec<Target> {
    let base = Target::new("android", PlatformKind::Android).with_app(App::ChipTool);

    vec![
        base.extend("arm-chip-tool").with_board(Board::Arm),
        base.extend("arm64-chip-tool").with_board(Board::Arm64),
        base.extend("x64-chip-tool").with_board(Board::X64),
        base.extend("x86-chip-tool").with_board(Board::X86),
    ]
}

/// Platforms with exactly one supported configuration.
pub fn singleton_targets() -> Vec<Target> {
    vec![
        Target::new("qpg-qpg6100-lock", PlatformKind::Qpg)
            .with_board(Board::Qpg6100)
            .with_app(App::Lock),
        Target::new("telink-tlsr9518adk80d-light", PlatformKind::Telink)
            .with_board(Board::Tlsr9518adk80d)
            .with_app(App::Light),
        Target::new("infineon-p6-lock", PlatformKind::Infineon)
            .with_board(Board::P6)
            .with_app(App::Lock),
        Target::new("tizen-arm-light", PlatformKind::Tizen)
            .with_board(Board::Arm)
            .with_app(App::Light),
    ]
}
