//! Configuration command implementation

use anyhow::Result;
use crate::config::ConfigStore;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Configuration key to get/set
    pub key: Option<String>,

    /// Configuration value to set
    pub value: Option<String>,

    /// List all configuration values
    #[arg(short, long)]
    pub list: bool,

    /// Unset a configuration value
    #[arg(long)]
    pub unset: bool,

    /// Show configuration file location
    #[arg(long)]
    pub show_origin: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON shape of a single key lookup or update
#[derive(Serialize)]
struct EntryOutput<'a> {
    key: &'a str,
    value: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<&'static str>,
}

/// Execute the config command
pub fn execute(file: Option<&Path>, args: ConfigArgs) -> Result<()> {
    let mut config = super::open_store(file)?;

    if args.show_origin {
        return show_origin(&config, args.json);
    }

    if args.list {
        return list_configuration(&config, args.json);
    }

    let Some(key) = args.key.as_deref() else {
        print_usage(args.json);
        return Ok(());
    };

    if args.unset {
        let previous = config.remove(key);
        config.persist()?;
        tracing::debug!(key, existed = previous.is_some(), "unset configuration key");

        if args.json {
            print_entry(key, None, Some("unset"))?;
        } else {
            println!("{} {}", "✓".green(), format!("Unset {}", key).bold());
        }
    } else if let Some(value) = args.value.as_deref() {
        config.set(key, value);
        config.persist()?;

        if args.json {
            print_entry(key, Some(value), Some("set"))?;
        } else {
            println!("{} {} = {}", "✓".green(), key.bold(), value.cyan());
        }
    } else {
        match config.get(key) {
            Some(value) if args.json => print_entry(key, Some(value), None)?,
            Some(value) => println!("{}", value),
            None => {
                if args.json {
                    print_entry(key, None, None)?;
                } else {
                    eprintln!("{}", format!("Configuration key '{}' is not set", key).yellow());
                }
                return Err(anyhow::anyhow!("Configuration key not found: {}", key));
            },
        }
    }

    Ok(())
}

fn show_origin(config: &ConfigStore, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::json!({
                "config_file": config.path().display().to_string(),
                "entries": config.len(),
            })
        );
    } else {
        println!(
            "{}: {}",
            "Configuration file".bold(),
            config.path().display().to_string().cyan()
        );
    }
    Ok(())
}

/// List all configuration values
fn list_configuration(config: &ConfigStore, json: bool) -> Result<()> {
    if json {
        let entries: BTreeMap<&str, &str> = config.iter().collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if config.is_empty() {
        println!("{}", "No configuration values set".yellow());
        return Ok(());
    }

    for (key, value) in config.iter() {
        println!("{} = {}", key.bold(), value.cyan());
    }
    Ok(())
}

fn print_entry(key: &str, value: Option<&str>, action: Option<&'static str>) -> Result<()> {
    let output = EntryOutput { key, value, action };
    println!("{}", serde_json::to_string(&output)?);
    Ok(())
}

fn print_usage(json: bool) {
    if json {
        println!(
            "{}",
            serde_json::json!({
                "error": "No configuration key specified",
                "usage": "ctradeconf <key> [value] or --list"
            })
        );
        return;
    }

    println!("{}", "Configuration Management".green().bold());
    println!("{}", "═".repeat(40));
    println!();
    println!("{}", "Usage:".bold());
    println!("  {} Get value", "ctradeconf <key>".cyan());
    println!("  {} Set value", "ctradeconf <key> <value>".cyan());
    println!("  {} List all", "ctradeconf --list".cyan());
    println!("  {} Unset value", "ctradeconf --unset <key>".cyan());
    println!("  {} Show file location", "ctradeconf --show-origin".cyan());
    println!();
    println!("{}", "Known keys:".bold());
    println!("  {} Path to the Electrum binary", "electrumBin".green());
}
