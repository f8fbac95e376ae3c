use std::path::PathBuf;
use std::time::Duration;

use crate::error::{config::ConfigError, AppError};
use crate::model::allow_list::AllowList;

const DEFAULT_GITHUB_HOST: &str = "github.com";
const DEFAULT_GITHUB_REPO: &str = "vrchat-whitelist";
const DEFAULT_WHITELIST_FILE: &str = "whitelist.json";
const DEFAULT_PUBLISH_TIMEOUT_SECS: u64 = 30;

/// Credentials and coordinates of the remote repository the whitelist is pushed to.
///
/// Every field except `token` has a default or is derived, so the whole remote
/// is absent only when no token is configured.
#[derive(Clone)]
pub struct RemoteConfig {
    pub host: String,
    pub owner: Option<String>,
    pub repo: String,
    pub username: Option<String>,
    pub token: String,
}

pub struct Config {
    pub discord_token: String,
    pub guild_id: u64,
    pub allowed_roles: AllowList,

    pub repo_path: PathBuf,
    pub whitelist_file: String,
    pub publish_timeout: Duration,

    pub remote: Option<RemoteConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let repo_path = match optional_var("REPO_PATH") {
            Some(path) => PathBuf::from(path),
            None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        };

        let publish_timeout = match optional_var("PUBLISH_TIMEOUT_SECS") {
            Some(value) => Duration::from_secs(parse_u64("PUBLISH_TIMEOUT_SECS", &value)?),
            None => Duration::from_secs(DEFAULT_PUBLISH_TIMEOUT_SECS),
        };

        let remote = optional_var("GITHUB_TOKEN").map(|token| {
            let username = optional_var("GITHUB_USERNAME");
            RemoteConfig {
                host: optional_var("GITHUB_HOST").unwrap_or_else(|| DEFAULT_GITHUB_HOST.to_string()),
                owner: optional_var("GITHUB_OWNER").or_else(|| username.clone()),
                repo: optional_var("GITHUB_REPO").unwrap_or_else(|| DEFAULT_GITHUB_REPO.to_string()),
                username,
                token,
            }
        });

        Ok(Self {
            discord_token: required_var("DISCORD_TOKEN")?,
            guild_id: parse_guild_id(&required_var("GUILD_ID")?)?,
            allowed_roles: parse_role_list("ALLOWED_ROLES", &required_var("ALLOWED_ROLES")?)?,
            repo_path,
            whitelist_file: optional_var("WHITELIST_FILE")
                .unwrap_or_else(|| DEFAULT_WHITELIST_FILE.to_string()),
            publish_timeout,
            remote,
        })
    }

    /// Full path of the registry file inside the local mirror.
    pub fn whitelist_path(&self) -> PathBuf {
        self.repo_path.join(&self.whitelist_file)
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    optional_var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads a variable, treating an empty or whitespace-only value as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_u64(name: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// Discord snowflakes are never zero, and serenity's ID types reject it.
fn parse_guild_id(value: &str) -> Result<u64, ConfigError> {
    match parse_u64("GUILD_ID", value)? {
        0 => Err(ConfigError::InvalidEnvVar {
            name: "GUILD_ID".to_string(),
            value: value.to_string(),
            reason: "guild ID must not be zero".to_string(),
        }),
        id => Ok(id),
    }
}

/// Parses a comma separated list of role IDs, ignoring empty entries.
fn parse_role_list(name: &str, value: &str) -> Result<AllowList, ConfigError> {
    let roles = value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| parse_u64(name, entry))
        .collect::<Result<Vec<u64>, _>>()?;
    let roles = AllowList::new(roles);

    if roles.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: "at least one role ID is required".to_string(),
        });
    }

    Ok(roles)
}
