use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use screener_export::email::Recipient;
use screener_export::render::{DEFAULT_DISCLAIMER, ReportOptions};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenerConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub clinic_name: String,
    /// Addressee of referral e-mails.
    pub clinician_name: String,
    pub clinician_email: String,
    /// Footer printed on every summary. Added in v1.
    pub disclaimer: String,
    /// Whether reports repeat the personal-history answers. Added in v1.
    pub include_history: bool,
    pub created_at: jiff::Timestamp,
}

impl Default for ScreenerConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            clinic_name: String::new(),
            clinician_name: String::new(),
            clinician_email: String::new(),
            disclaimer: DEFAULT_DISCLAIMER.to_string(),
            include_history: true,
            created_at: jiff::Timestamp::now(),
        }
    }
}

impl ScreenerConfig {
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            disclaimer: self.disclaimer.clone(),
            include_history: self.include_history,
        }
    }

    pub fn recipient(&self) -> Recipient {
        Recipient {
            name: self.clinician_name.clone(),
            email: self.clinician_email.clone(),
        }
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("screener"))
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the config at `path`, or the default when no file exists yet.
pub fn load_config(path: &Path) -> eyre::Result<ScreenerConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file; using defaults");
        return Ok(ScreenerConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: ScreenerConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION})"
        ));
    }

    // v0 → v1: add disclaimer and include_history
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("disclaimer")
            .or_insert(serde_json::Value::String(DEFAULT_DISCLAIMER.to_string()));
        obj.entry("include_history")
            .or_insert(serde_json::Value::Bool(true));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added disclaimer, include_history)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &ScreenerConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path has no parent: {}", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
