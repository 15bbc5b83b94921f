use std::path::{Path, PathBuf};

use casefinding_scoring::config::{Credentials, ScoringConfig};
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CasefindingConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub scoring: ScoringConfig,
    pub created_at: jiff::Timestamp,
}

impl CasefindingConfig {
    pub fn new(scoring: ScoringConfig) -> Self {
        Self {
            config_version: CURRENT_VERSION,
            scoring,
            created_at: jiff::Timestamp::now(),
        }
    }
}

/// Redacted config info safe to print.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigInfo {
    pub endpoint: String,
    pub created_at: String,
    pub credential_type: String,
    pub credential_hint: String,
    pub allow_origin: Option<String>,
    pub timeout_secs: u64,
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("casefinding").join("config.json"))
}

pub fn load_config_from(path: &Path) -> eyre::Result<CasefindingConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: CasefindingConfig = serde_json::from_value(migrated)?;
    config
        .scoring
        .validate()
        .map_err(|e| eyre::eyre!("invalid config at {}: {e}", path.display()))?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update casefinding."
        ));
    }

    // v0 → v1: top-level endpoint and raw authorization header move under `scoring`
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;

        let endpoint = obj
            .remove("endpoint")
            .ok_or_else(|| eyre::eyre!("pre-versioned config has no endpoint"))?;
        let credentials = match obj.remove("authorization") {
            Some(serde_json::Value::String(value)) if !value.is_empty() => {
                serde_json::to_value(Credentials::Header { value })?
            }
            _ => serde_json::to_value(Credentials::None)?,
        };

        obj.insert(
            "scoring".to_string(),
            serde_json::json!({ "endpoint": endpoint, "credentials": credentials }),
        );
        obj.entry("created_at")
            .or_insert_with(|| serde_json::Value::String(jiff::Timestamp::now().to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (nested scoring settings)");
    }

    Ok(json)
}

pub fn save_config_to(path: &Path, config: &CasefindingConfig) -> eyre::Result<()> {
    config.scoring.validate()?;

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    // The file can hold a password
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

pub fn config_info(config: &CasefindingConfig) -> ConfigInfo {
    let scoring = &config.scoring;
    ConfigInfo {
        endpoint: scoring.endpoint.clone(),
        created_at: config.created_at.to_string(),
        credential_type: scoring.credentials.kind().to_string(),
        credential_hint: scoring.credentials.hint(),
        allow_origin: scoring.allow_origin.clone(),
        timeout_secs: scoring.timeout_secs,
    }
}
