//! Provider collaborators
//!
//! Extra questions asked after the application arguments: the AWS network
//! layout, and the database settings every deployment carries.

use crate::config::EnvDefaults;
use crate::domain::entities::{DbConfig, DbEngine, VpcConfig};
use crate::domain::ports::Prompter;
use crate::error::PygridResult;

pub const DEFAULT_CIDR_BLOCK: &str = "10.0.0.0/16";
pub const DEFAULT_DB_USERNAME: &str = "pygridUser";

pub const REGION_PROMPT: &str = "AWS region";
pub const CIDR_PROMPT: &str = "VPC CIDR block";
pub const ZONES_PROMPT: &str = "Availability zones (comma-separated)";
pub const DB_ENGINE_PROMPT: &str = "Database engine";
pub const DB_USERNAME_PROMPT: &str = "Database username";
pub const DB_PASSWORD_PROMPT: &str = "Database password";

/// AWS VPC settings.
pub fn collect_vpc(prompter: &dyn Prompter, env: &EnvDefaults) -> PygridResult<VpcConfig> {
    let region = prompter.input(REGION_PROMPT, Some(&env.aws_region))?;
    let cidr_block = prompter.input(CIDR_PROMPT, Some(DEFAULT_CIDR_BLOCK))?;
    let default_zones = format!("{region}a,{region}b");
    let zones = prompter.input(ZONES_PROMPT, Some(&default_zones))?;

    Ok(VpcConfig {
        region,
        cidr_block,
        availability_zones: split_zones(&zones),
    })
}

/// Database engine and login; stored with the credentials.
pub fn collect_db(prompter: &dyn Prompter) -> PygridResult<DbConfig> {
    let names: Vec<&str> = DbEngine::ALL.iter().map(DbEngine::display_name).collect();
    let engine = DbEngine::ALL[prompter.select(DB_ENGINE_PROMPT, &names, 0)?];
    let username = prompter.input(DB_USERNAME_PROMPT, Some(DEFAULT_DB_USERNAME))?;
    let password = prompter.password(DB_PASSWORD_PROMPT)?;

    Ok(DbConfig {
        engine,
        username,
        password,
    })
}

fn split_zones(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|z| !z.is_empty())
        .map(str::to_string)
        .collect()
}
