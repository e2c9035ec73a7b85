use dnstap_fanout_domain::{CliOverrides, Config};

/// Loads the configuration, applies command-line overrides and validates the result.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}
