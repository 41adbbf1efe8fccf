use crate::config::Config;

pub fn cmd_init() -> anyhow::Result<()> {
    if Config::create_default_if_missing()? {
        println!("✓ Created config.toml");
        println!("Set catalog.api_key (or MOVIEAPP_API_KEY) before fetching movies.");
    } else {
        println!("config.toml already exists.");
    }
    Ok(())
}
