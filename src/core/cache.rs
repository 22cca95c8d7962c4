//! File system locations and helpers for cached player exports and config.
//!
//! Downloaded player pools are written under the user's cache directory so a
//! slate only needs to be fetched once; `--refresh` bypasses the copy on disk.

use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};


const APP_DIR: &str = "dk-lineup";

fn cache_base() -> PathBuf {
    dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    })
}

fn config_base() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    })
}

/// Path: ~/.config/dk-lineup/config.json
pub fn default_config_path() -> PathBuf {
    config_base().join(APP_DIR).join("config.json")
}

/// Turn a URL into something safe to use as a file name.
pub fn cache_file_key(url: &str) -> String {
    let trimmed = url
        .trim_start_matches("https://")
        .trim_start_matches("http://");
    let key: String = trimmed
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    key.trim_matches('_').to_string()
}

/// Path: ~/.cache/dk-lineup/players_{url-key}.{extension}
pub fn players_cache_path(url: &str, extension: &str) -> PathBuf {
    cache_base()
        .join(APP_DIR)
        .join(format!("players_{}.{}", cache_file_key(url), extension))
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file, creating parent directories as needed
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}
