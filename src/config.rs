use std::path::PathBuf;
use std::{env, fs};

use serde::Deserialize;

use crate::util::dates;

#[derive(Debug, Deserialize, Clone)]
struct FileConfig {
    pub discord_token_var: String,
    pub session_var: String,
    pub leaderboard_code: u64,
    pub test_guild: Option<u64>,
    pub max_message_length: usize,
    pub log: FileLogConfig,
    pub scheduler: SchedulerConfig,
}

#[derive(Debug, Deserialize, Clone)]
struct FileLogConfig {
    pub level: String,
    pub path: String,
    pub json_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SchedulerConfig {
    pub enabled: bool,
    pub timer_check_mins: u64,
    pub daily_post_hour: u8,
    /// Sort metric for the previous day's timing table, as text
    /// (`p1`/`part1`, `p2`/`part2`, `delta`).
    pub daily_sort: String,
    pub channel_id: Option<u64>,
}

#[derive(Clone, Debug)]
pub struct LogConfig {
    pub level: String,
    pub path: PathBuf,
    pub json_path: PathBuf,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Name of the env var holding the Discord bot token; the token
    /// itself is read by `Token::from_env` at startup.
    pub discord_token_var: String,
    /// The adventofcode.com session cookie, resolved from its env var
    /// at load time.
    pub session_cookie: String,
    pub leaderboard_code: u64,
    pub test_guild: Option<u64>,
    pub max_message_length: usize,
    pub log: LogConfig,
    pub scheduler: SchedulerConfig,
}

fn expand_tilde(path: &str) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
    if path.starts_with("~/") {
        let home = env::var("HOME")?;
        Ok(PathBuf::from(path.replacen("~", &home, 1)))
    } else {
        Ok(PathBuf::from(path))
    }
}

pub fn load_config() -> Result<AppConfig, Box<dyn std::error::Error + Send + Sync>> {
    let exe_path = env::current_exe()?;
    let config_path = match exe_path.parent() {
        Some(dir) => dir.join("adventcord.toml"),
        _ => return Err("failed to determine executable directory".into()),
    };

    if !config_path.exists() || !config_path.is_file() {
        return Err(format!(
            "Config file does not exist or is not a file: {}",
            config_path.display()
        )
        .into());
    }
    let s = fs::read_to_string(&config_path)?;
    let cfg: FileConfig = toml::from_str(&s)?;

    let session_cookie = env::var(&cfg.session_var).map_err(|e| {
        format!(
            "Failed to read AoC session cookie from env var {}: {}",
            cfg.session_var, e
        )
    })?;

    Ok(AppConfig {
        discord_token_var: cfg.discord_token_var,
        session_cookie,
        leaderboard_code: cfg.leaderboard_code,
        test_guild: cfg.test_guild,
        max_message_length: cfg.max_message_length,
        log: build_log_config(cfg.log)?,
        scheduler: cfg.scheduler,
    })
}

fn build_log_config(
    file_log: FileLogConfig,
) -> Result<LogConfig, Box<dyn std::error::Error + Send + Sync>> {
    let path = log_file_replacements(&file_log.path)?;
    validate_log_path(&path)?;

    let json_path = log_file_replacements(&file_log.json_path)?;
    validate_log_path(&json_path)?;

    Ok(LogConfig {
        level: file_log.level,
        path,
        json_path,
    })
}

fn validate_log_path(path: &PathBuf) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            return Err(format!(
                "Log file directory does not exist: {}",
                parent.display()
            )
            .into());
        }
    }
    if path.exists() && !path.is_file() {
        return Err(format!("Log path exists but is not a file: {}", path.display()).into());
    }
    Ok(())
}

fn log_file_replacements(
    cfg_path: &str,
) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
    let date_str = dates::local_date_yyyy_mm_dd();
    let replaced = cfg_path.replace("{DATE}", &date_str);
    expand_tilde(&replaced)
}
