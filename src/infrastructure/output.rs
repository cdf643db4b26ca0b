use crate::domain::entities::OktaConfig;
use anyhow::{Result, anyhow};
use colored::Colorize;

pub fn print_config(config: &OktaConfig) -> Result<()> {
    let pretty = serde_json::to_string_pretty(config)
        .map_err(|e| anyhow!("Failed to format config: {}", e))?;
    println!("{}", pretty.green());
    Ok(())
}

pub fn print_role_arn(profile: &str, arn: &str) {
    if arn.is_empty() {
        println!("{}", format!("Profile '{}' has no role_arn", profile).yellow());
    } else {
        println!("{}", arn.white());
    }
}
