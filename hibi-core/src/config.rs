use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

const DEFAULT_LISTEN: &str = "127.0.0.1:15864";

#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute directory where the entry text files live.
    pub entries_dir: PathBuf,
    /// File holding the salted admin credential. Missing file = no password set.
    pub password_file: PathBuf,
    /// Address the HTTP server binds to (e.g. `127.0.0.1:15864`).
    pub listen: String,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    /// Blog root; `entries_dir` and `password_file` default to paths inside it.
    blog_dir: Option<PathBuf>,
    entries_dir: Option<PathBuf>,
    password_file: Option<PathBuf>,
    listen: Option<String>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native)
    /// and apply defaults for everything the file leaves unset.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_default();
        Ok(Self::from_file_config(file_config))
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        let blog_dir = file_config.blog_dir.unwrap_or_else(Self::default_blog_dir);
        let entries_dir = file_config
            .entries_dir
            .unwrap_or_else(|| blog_dir.join("entries"));
        let password_file = file_config
            .password_file
            .unwrap_or_else(|| blog_dir.join(".password"));
        let listen = file_config
            .listen
            .unwrap_or_else(|| DEFAULT_LISTEN.to_string());

        Self {
            entries_dir,
            password_file,
            listen,
        }
    }

    /// Default blog root: `{data_dir}/hibi`
    /// - macOS:   `~/Library/Application Support/hibi`
    /// - Linux:   `$XDG_DATA_HOME/hibi` or `~/.local/share/hibi`
    /// - Windows: `%APPDATA%\hibi`
    fn default_blog_dir() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            let mut p = base.data_dir().to_path_buf();
            p.push("hibi");
            p
        } else {
            PathBuf::from("./hibi")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("hibi")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("hibi").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}
