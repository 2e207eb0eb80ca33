use serde::Deserialize;
use std::path::PathBuf;

/// Process configuration.
///
/// The core never reads process state on its own: the serving directory and
/// listen address are resolved once here and handed to the pipeline.
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// Address the listener binds to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Filesystem root for the `/files` handler. Unset means file requests
    /// are answered with 400.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

fn default_listen_addr() -> String {
    "127.0.0.1:4221".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            directory: None,
        }
    }
}

impl Config {
    /// Loads configuration in layers: YAML file named by `MINIHTTP_CONFIG`,
    /// then the `LISTEN` env var, then a `--directory <path>` argument.
    pub fn load() -> Self {
        let mut cfg = match std::env::var("MINIHTTP_CONFIG") {
            Ok(path) => match std::fs::read_to_string(&path) {
                Ok(text) => Self::from_yaml(&text).unwrap_or_else(|e| {
                    tracing::warn!("Ignoring invalid config file {}: {}", path, e);
                    Self::default()
                }),
                Err(e) => {
                    tracing::warn!("Cannot read config file {}: {}", path, e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.listen_addr = addr;
        }
        if let Some(dir) = directory_from_args(std::env::args().skip(1)) {
            cfg.directory = Some(dir);
        }

        cfg
    }

    /// Parses a YAML document into a config, applying field defaults.
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}

/// Extracts the value following a `--directory` flag, if any.
pub fn directory_from_args(mut args: impl Iterator<Item = String>) -> Option<PathBuf> {
    while let Some(arg) = args.next() {
        if arg == "--directory" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}
