//! Application axis: the example images a target can build.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An application image.
///
/// Which members a platform actually supports is decided by that
/// platform's builder, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum App {
    AllClusters,
    ChipTool,
    Thermostat,
    Shell,
    Lock,
    Bridge,
    TemperatureMeasurement,
    Light,
    WindowCovering,
    Pump,
    PumpController,
}

impl App {
    /// Name segment used in target names.
    pub fn as_str(&self) -> &'static str {
        match self {
            App::AllClusters => "all-clusters",
            App::ChipTool => "chip-tool",
            App::Thermostat => "thermostat",
            App::Shell => "shell",
            App::Lock => "lock",
            App::Bridge => "bridge",
            App::TemperatureMeasurement => "temperature-measurement",
            App::Light => "light",
            App::WindowCovering => "window-covering",
            App::Pump => "pump",
            App::PumpController => "pump-controller",
        }
    }
}

impl fmt::Display for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_segments() {
        assert_eq!(App::AllClusters.as_str(), "all-clusters");
        assert_eq!(App::PumpController.as_str(), "pump-controller");
        assert_eq!(App::TemperatureMeasurement.to_string(), "temperature-measurement");
    }

    #[test]
    fn serialized_form_matches_name_segment() {
        let json = serde_json::to_string(&App::WindowCovering).unwrap();
        assert_eq!(json, "\"window-covering\"");
    }
}
