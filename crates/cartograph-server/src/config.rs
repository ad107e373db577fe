use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use cartograph_llm::client::{DEFAULT_ENDPOINT, DEFAULT_MODEL, OllamaConfig};

pub const DEFAULT_BIND: &str = "0.0.0.0:8000";
pub const DEFAULT_PROMPTS: &str = "prompts.json";
pub const DEFAULT_LOGO: &str = "Cartograph_logo.png";

/// Server settings, read from the environment at startup.
///
/// | Variable | Default |
/// |---|---|
/// | `CARTOGRAPH_BIND` | `0.0.0.0:8000` |
/// | `CARTOGRAPH_PROMPTS` | `prompts.json` |
/// | `CARTOGRAPH_OUTPUT_DIR` | `.` |
/// | `CARTOGRAPH_LOGO` | `Cartograph_logo.png` (empty disables) |
/// | `CARTOGRAPH_LOG_FORMAT` | `json` (or `pretty`) |
/// | `OLLAMA_URL` | `http://localhost:11434/api/generate` |
/// | `OLLAMA_MODEL` | `gemma3-12b-it` |
/// | `OLLAMA_TIMEOUT_SECS` | unset (no timeout) |
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub prompts_path: PathBuf,
    pub output_dir: PathBuf,
    pub logo_path: Option<PathBuf>,
    pub log_format: LogFormat,
    pub ollama: OllamaConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let bind_raw = var("CARTOGRAPH_BIND", DEFAULT_BIND);
        let bind: SocketAddr = bind_raw
            .parse()
            .map_err(|e| eyre::eyre!("invalid CARTOGRAPH_BIND {bind_raw:?}: {e}"))?;

        let logo = var("CARTOGRAPH_LOGO", DEFAULT_LOGO);
        let logo_path = (!logo.trim().is_empty()).then(|| PathBuf::from(logo));

        let log_format = match var("CARTOGRAPH_LOG_FORMAT", "json").to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            "pretty" | "text" => LogFormat::Pretty,
            other => return Err(eyre::eyre!("invalid CARTOGRAPH_LOG_FORMAT {other:?}")),
        };

        let timeout = match lookup("OLLAMA_TIMEOUT_SECS") {
            None => None,
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .map_err(|e| eyre::eyre!("invalid OLLAMA_TIMEOUT_SECS {raw:?}: {e}"))?;
                (secs > 0).then(|| Duration::from_secs(secs))
            }
        };

        Ok(Self {
            bind,
            prompts_path: PathBuf::from(var("CARTOGRAPH_PROMPTS", DEFAULT_PROMPTS)),
            output_dir: PathBuf::from(var("CARTOGRAPH_OUTPUT_DIR", ".")),
            logo_path,
            log_format,
            ollama: OllamaConfig {
                endpoint: var("OLLAMA_URL", DEFAULT_ENDPOINT),
                model: var("OLLAMA_MODEL", DEFAULT_MODEL),
                timeout,
            },
        })
    }
}
