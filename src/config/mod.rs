use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

/// Default daily report template.
///
/// Lines starting with `@project`, `@issue` and `@task` are repeated for
/// every project / issue / task found in the day's logs.
pub const DEFAULT_REPORT_TEMPLATE: &str = "業務終了します。
【工数実績】
 {total_hours}H
【作業実績、進捗率】
@project {project_name}
@issue {issue_cd} {issue_name}
@task   {task_name} ({progress}%)";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_hours_step")]
    pub hours_step: f64,
    #[serde(default = "default_man_month_hours")]
    pub man_month_hours: f64,
    #[serde(default = "default_no_entries_text")]
    pub no_entries_text: String,
    #[serde(default = "default_weekday_names")]
    pub weekday_names: Vec<String>,
    #[serde(default = "default_report_template")]
    pub report_template: String,
    #[serde(default = "default_view")]
    pub default_view: String,
}

fn default_hours_step() -> f64 {
    0.25
}
fn default_man_month_hours() -> f64 {
    160.0
}
fn default_no_entries_text() -> String {
    crate::core::report::NO_ENTRIES.to_string()
}
fn default_weekday_names() -> Vec<String> {
    ["月", "火", "水", "木", "金", "土", "日"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_report_template() -> String {
    DEFAULT_REPORT_TEMPLATE.to_string()
}
fn default_view() -> String {
    "week".to_string()
}

/// Keys every configuration file is expected to carry.
pub(crate) const CONFIG_KEYS: [&str; 7] = [
    "database",
    "hours_step",
    "man_month_hours",
    "no_entries_text",
    "weekday_names",
    "report_template",
    "default_view",
];

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            hours_step: default_hours_step(),
            man_month_hours: default_man_month_hours(),
            no_entries_text: default_no_entries_text(),
            weekday_names: default_weekday_names(),
            report_template: default_report_template(),
            default_view: default_view(),
        }
    }

    /// Return the standard configuration directory (`~/.rworklog`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rworklog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworklog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rworklog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values the report and hours logic cannot work with.
    pub fn validate(&self) -> AppResult<()> {
        if self.weekday_names.len() != 7 {
            return Err(AppError::Config(format!(
                "weekday_names must contain 7 entries (found {})",
                self.weekday_names.len()
            )));
        }
        if self.hours_step <= 0.0 {
            return Err(AppError::Config("hours_step must be positive".into()));
        }
        if self.man_month_hours <= 0.0 {
            return Err(AppError::Config("man_month_hours must be positive".into()));
        }
        Ok(())
    }

    /// Weekday names as a fixed Monday-first table.
    pub fn weekday_table(&self) -> [String; 7] {
        std::array::from_fn(|i| self.weekday_names.get(i).cloned().unwrap_or_default())
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Self::with_database(db_path.clone());

        // Write config file
        if !is_test {
            config.save()?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        success(format!("Database:    {}", db_path.display()));

        Ok(config)
    }
}
