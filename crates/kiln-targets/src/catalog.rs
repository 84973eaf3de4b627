//! Catalog assembly and lookup.

use crate::error::{CatalogError, Result};
use crate::generators;
use crate::platform::HostPlatform;
use crate::target::Target;

/// The assembled, name-sorted collection of all known targets.
///
/// Built once per process by [`Catalog::assemble`] and passed down as a
/// value; there is no global catalog state.
#[derive(Debug, Clone)]
pub struct Catalog {
    targets: Vec<Target>,
}

impl Catalog {
    /// Assemble the full catalog for the given host platform.
    ///
    /// Drains every family generator in declaration order, appends the
    /// singleton targets, sorts by name ascending, and rejects duplicate
    /// names as a configuration error.
    pub fn assemble(host: &HostPlatform) -> Result<Self> {
        Self::from_parts(vec![
            generators::host_targets(host),
            generators::esp32_targets(),
            generators::efr32_targets(),
            generators::nrf_targets(),
            generators::android_targets(),
            generators::singleton_targets(),
        ])
    }

    pub(crate) fn from_parts(parts: Vec<Vec<Target>>) -> Result<Self> {
        let mut targets: Vec<Target> = parts.into_iter().flatten().collect();
        targets.sort_by(|a, b| a.name.cmp(&b.name));
        for pair in targets.windows(2) {
            if pair[0].name == pair[1].name {
                return Err(CatalogError::DuplicateTarget {
                    name: pair[0].name.clone(),
                });
            }
        }
        Ok(Self { targets })
    }

    /// All targets, sorted by name ascending.
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Look up a target by exact name.
    pub fn find(&self, name: &str) -> Option<&Target> {
        self.targets
            .binary_search_by(|t| t.name.as_str().cmp(name))
            .ok()
            .map(|idx| &self.targets[idx])
    }

    /// Like [`Catalog::find`], but an absent name is an error.
    pub fn resolve(&self, name: &str) -> Result<&Target> {
        self.find(name).ok_or_else(|| CatalogError::UnknownTarget {
            name: name.to_string(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::platform::{HostOs, PlatformKind};

    fn linux_x64() -> HostPlatform {
        HostPlatform::new(HostOs::Linux, Board::X64)
    }

    #[test]
    fn assemble_is_sorted_and_unique() {
        let catalog = Catalog::assemble(&linux_x64()).unwrap();
        assert_eq!(catalog.len(), 37);
        for pair in catalog.targets().windows(2) {
            assert!(pair[0].name < pair[1].name, "{} vs {}", pair[0].name, pair[1].name);
        }
    }

    #[test]
    fn native_only_hosts_shrink_the_catalog() {
        let darwin = HostPlatform::new(HostOs::Darwin, Board::X64);
        let catalog = Catalog::assemble(&darwin).unwrap();
        assert_eq!(catalog.len(), 34);

        let arm_linux = HostPlatform::new(HostOs::Linux, Board::Arm64);
        let catalog = Catalog::assemble(&arm_linux).unwrap();
        assert_eq!(catalog.len(), 34);
    }

    #[test]
    fn first_and_last_entries() {
        let catalog = Catalog::assemble(&linux_x64()).unwrap();
        let targets = catalog.targets();
        assert_eq!(targets[0].name, "android-arm-chip-tool");
        assert_eq!(targets[targets.len() - 1].name, "tizen-arm-light");
    }

    #[test]
    fn resolve_known_and_unknown_names() {
        let catalog = Catalog::assemble(&linux_x64()).unwrap();
        let target = catalog.resolve("esp32-devkitc-shell").unwrap();
        assert_eq!(target.platform, PlatformKind::Esp32);

        let err = catalog.resolve("esp32-devkitc-thermostat").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownTarget { .. }));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let dup = Target::new("nrf-nrf5340-lock", PlatformKind::Nrf);
        let err = Catalog::from_parts(vec![generators::nrf_targets(), vec![dup]]).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateTarget { name } if name == "nrf-nrf5340-lock"
        ));
    }

    #[test]
    fn catalog_survives_json() {
        // The untagged parameter values must parse back into the right
        // variants for every board and app the catalog uses.
        let catalog = Catalog::assemble(&linux_x64()).unwrap();
        let json = serde_json::to_string(catalog.targets()).unwrap();
        let parsed: Vec<Target> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, catalog.targets());
    }
}
