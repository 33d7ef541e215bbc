//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# astfix configuration
#
# Each rule takes a level: "error", "warn" or "off".
# Rules that are not listed are off.

# "normal" or "debug" (debug logs every visited node)
verbosity = "normal"

[rules]
# Derived-class constructors must call super() (checked by `astfix lint`)
call-super-in-constructor = "error"

# let that is never reassigned becomes const (applied by `astfix format`)
use-let-never-reassigned = "warn"

# "..." string literals become '...' (applied by `astfix format`)
double-quotes = "warn"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new("astfix.toml"), force)?;

    println!("Created astfix.toml");
    println!("\nNext steps:");
    println!("  1. Edit astfix.toml to configure rules");
    println!("  2. Run: astfix lint");
    println!("  3. Run: astfix format <file>");

    Ok(())
}

fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;
    Ok(())
}
