//! `kiln targets` and `kiln describe` — catalog listing and inspection.

use anyhow::{bail, Result};
use kiln_targets::Catalog;

/// List every target buildable on this host, one name per line.
pub fn list(catalog: &Catalog, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(catalog.targets())?);
        return Ok(());
    }
    for target in catalog.iter() {
        println!("{}", target.name);
    }
    Ok(())
}

/// Show the platform family and parameters behind one target name.
pub fn describe(catalog: &Catalog, name: &str, json: bool) -> Result<()> {
    let target = match catalog.find(name) {
        Some(t) => t,
        None => bail!("unknown target: '{name}'. Use 'kiln targets' to see available targets."),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(target)?);
        return Ok(());
    }

    println!("Target:   {}", target.name);
    println!("Platform: {}", target.platform);
    println!("Parameters:");
    for (key, value) in target.params.iter() {
        println!("  {key} = {value}");
    }
    Ok(())
}
