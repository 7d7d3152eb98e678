use anyhow::{Context, Result};
use dramlog_store::{config, Config};

#[derive(Debug, clap::Subcommand)]
pub enum ConfigCommand {
    /// Print the config file path
    Path,
    /// Create the config file with commented defaults
    Init,
    /// Show the current effective configuration
    Show,
}

pub fn run(command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Path => show_path(),
        ConfigCommand::Init => init_config(),
        ConfigCommand::Show => show_config(),
    }
}

fn show_path() -> Result<()> {
    println!("{}", config::config_file_path().display());
    Ok(())
}

fn init_config() -> Result<()> {
    let created = config::ensure_config_file().context("Failed to create config file")?;
    let path = config::config_file_path();
    if created {
        println!("Created {}", path.display());
    } else {
        println!("Config file already exists: {}", path.display());
    }
    Ok(())
}

/// Show the current effective configuration.
fn show_config() -> Result<()> {
    let config = Config::load()?;

    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config::config_file_path().display());

    let exists = config::config_file_path().exists();
    println!(
        "File exists: {}\n",
        if exists { "yes" } else { "no (using defaults)" }
    );

    println!("Settings:");
    println!("  data_root: {}", config.data_root.display());
    println!(
        "  admin_token: {}",
        if config.admin_token.is_some() { "<set>" } else { "<not set>" }
    );
    println!("  bind_addr: {}", config.bind_addr);

    println!("\nPriority: CLI args > ENV vars (DRAM_*) > Config file > Defaults");

    Ok(())
}
