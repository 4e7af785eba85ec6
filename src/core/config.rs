use serde::{Deserialize, Serialize};

/// Server configuration
///
/// All values can be overridden through environment variables:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | /var/lib/feedback-server | Work directory (database files) |
/// | HTTP_PORT | 5000 | HTTP API port |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | OLLAMA_URL | http://localhost:11434 | Insight generation endpoint base |
/// | OLLAMA_MODEL | llama3.2:1b | Model name sent with every request |
/// | INSIGHT_TIMEOUT_MS | 15000 | Insight request timeout (milliseconds) |
/// | TABLE_ROSTER_FILE | (builtin roster) | JSON file with the table roster |
#[derive(Debug, Clone)]
pub struct Config {
    /// Work directory, holds the embedded database
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Base URL of the text-generation service
    pub ollama_url: String,
    /// Model name to request
    pub ollama_model: String,
    /// Timeout for a single insight request (milliseconds)
    pub insight_timeout_ms: u64,
    /// Static table roster, loaded once at startup and injected where needed
    pub roster: Vec<TableInfo>,
}

/// One physical table in the restaurant roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableInfo {
    pub id: String,
    pub location: String,
    pub capacity: u32,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR")
                .unwrap_or_else(|_| "/var/lib/feedback-server".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            ollama_url: std::env::var("OLLAMA_URL")
                .unwrap_or_else(|_| "http://localhost:11434".into()),
            ollama_model: std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3.2:1b".into()),
            insight_timeout_ms: std::env::var("INSIGHT_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(15000),
            roster: load_roster(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Built-in roster used when no `TABLE_ROSTER_FILE` is configured
pub fn default_roster() -> Vec<TableInfo> {
    [
        ("1", "Window Side", 4),
        ("2", "Center", 2),
        ("3", "Corner", 6),
        ("4", "Patio", 4),
        ("5", "Bar Counter", 8),
        ("6", "Outdoor", 6),
    ]
    .into_iter()
    .map(|(id, location, capacity)| TableInfo {
        id: id.to_string(),
        location: location.to_string(),
        capacity,
    })
    .collect()
}

fn load_roster() -> Vec<TableInfo> {
    let Ok(path) = std::env::var("TABLE_ROSTER_FILE") else {
        return default_roster();
    };
    match std::fs::read_to_string(&path)
        .map_err(anyhow::Error::from)
        .and_then(|raw| serde_json::from_str::<Vec<TableInfo>>(&raw).map_err(Into::into))
    {
        Ok(roster) if !roster.is_empty() => roster,
        Ok(_) => {
            tracing::warn!(file = %path, "Table roster file is empty, using builtin roster");
            default_roster()
        }
        Err(e) => {
            tracing::warn!(file = %path, error = %e, "Failed to load table roster, using builtin roster");
            default_roster()
        }
    }
}
