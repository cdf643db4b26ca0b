use crate::application::services::ConfigService;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI configuration for oktad
#[derive(Parser, Debug)]
#[command(name = "oktad", version)]
#[command(about = "oktad: Okta and AWS profile configuration lookup", long_about = None)]
pub struct Cli {
    /// Trace every config resolution step
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the Okta config and print it
    Config {
        /// Config file to try before ./.okta and ~/.okta-aws/config
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the role ARN of an AWS profile from ~/.aws/config
    RoleArn { profile: String },
}

impl Cli {
    pub fn run(&self, service: &ConfigService) -> Result<()> {
        match &self.command {
            Command::Config { config } => {
                let okta = service.parse_config(config.as_deref()).map_err(|err| {
                    let hint = if err.is_bad_config() {
                        "expected an [okta] section with baseUrl and appUrl in --config, ./.okta or ~/.okta-aws/config"
                    } else {
                        "failed to load okta config"
                    };
                    anyhow::Error::new(err).context(hint)
                })?;
                crate::infrastructure::output::print_config(&okta)?;
            }
            Command::RoleArn { profile } => {
                let arn = service
                    .read_aws_profile(profile)
                    .with_context(|| format!("failed to read aws profile '{}'", profile))?;
                if arn.is_empty() {
                    tracing::warn!(profile = %profile, "profile has no role_arn");
                }
                crate::infrastructure::output::print_role_arn(profile, &arn);
            }
        }

        Ok(())
    }
}
