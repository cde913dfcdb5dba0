//! `tagweave config` — Configuration management commands.

use tagweave_config::AppConfig;

pub fn show() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    println!("{}", toml::to_string_pretty(&config)?);
    println!("# effective data_dir = {}", config.data_dir().display());
    Ok(())
}

pub fn path() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", AppConfig::config_dir().join("config.toml").display());
    Ok(())
}

pub fn validate() -> Result<(), Box<dyn std::error::Error>> {
    println!("🔍 Validating configuration...");

    match AppConfig::load() {
        Ok(config) => {
            println!("   ✅ Config parsed successfully");

            let mut warnings = Vec::new();
            let data_dir = config.data_dir();
            if !data_dir.is_dir() {
                warnings.push(format!(
                    "Catalog directory {} does not exist",
                    data_dir.display()
                ));
            }

            if warnings.is_empty() {
                println!("   ✅ All checks passed");
            } else {
                for w in &warnings {
                    println!("   ⚠️  {w}");
                }
            }
        }
        Err(e) => {
            println!("   ❌ {e}");
            return Err(e.into());
        }
    }

    Ok(())
}
