//! Player source resolution: local exports, remote exports, and the on-disk cache.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::{
    core::cache::{players_cache_path, try_read_to_string, write_string},
    draftkings::{
        http::fetch_text,
        salaries::read_salaries,
        types::{Player, PlayersPayload},
    },
    LineupError, Result, PLAYERS_SOURCE_ENV_VAR,
};

/// Where a player pool comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerSource {
    File(PathBuf),
    Url(String),
}

/// How a player export is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// `{ "count", "data" }` envelope or bare array of player records
    Json,
    /// DraftKings salary export
    Csv,
}

impl SourceFormat {
    fn from_name(name: &str) -> Self {
        // Ignore any query string on URLs
        let name = name.split(['?', '#']).next().unwrap_or(name);
        if name.to_lowercase().ends_with(".csv") {
            SourceFormat::Csv
        } else {
            SourceFormat::Json
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            SourceFormat::Json => "json",
            SourceFormat::Csv => "csv",
        }
    }
}

impl PlayerSource {
    pub fn format(&self) -> SourceFormat {
        match self {
            PlayerSource::File(path) => SourceFormat::from_name(&path.to_string_lossy()),
            PlayerSource::Url(url) => SourceFormat::from_name(url),
        }
    }
}

impl fmt::Display for PlayerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerSource::File(path) => write!(f, "{}", path.display()),
            PlayerSource::Url(url) => write!(f, "{}", url),
        }
    }
}

impl FromStr for PlayerSource {
    type Err = LineupError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LineupError::UnsupportedSource {
                source_name: s.to_string(),
            });
        }
        if s.starts_with("http://") || s.starts_with("https://") {
            Ok(PlayerSource::Url(s.to_string()))
        } else if s.contains("://") {
            Err(LineupError::UnsupportedSource {
                source_name: s.to_string(),
            })
        } else {
            Ok(PlayerSource::File(PathBuf::from(s)))
        }
    }
}

/// Resolve the player source from the CLI value or `DK_LINEUP_PLAYERS`.
pub fn resolve_source(source: Option<PlayerSource>) -> Result<PlayerSource> {
    if let Some(source) = source {
        return Ok(source);
    }

    match std::env::var(PLAYERS_SOURCE_ENV_VAR) {
        Ok(value) if !value.trim().is_empty() => value.parse(),
        _ => Err(LineupError::MissingSource {
            env_var: PLAYERS_SOURCE_ENV_VAR.to_string(),
        }),
    }
}

/// Decode an export already in memory.
pub fn parse_players(contents: &str, format: SourceFormat) -> Result<Vec<Player>> {
    match format {
        SourceFormat::Json => {
            let payload: PlayersPayload = serde_json::from_str(contents)?;
            Ok(payload.into_players())
        }
        SourceFormat::Csv => read_salaries(contents.as_bytes()),
    }
}

fn load_file(path: &Path, format: SourceFormat) -> Result<Vec<Player>> {
    let contents = std::fs::read_to_string(path)?;
    parse_players(&contents, format)
}

async fn load_url(url: &str, format: SourceFormat, refresh: bool) -> Result<Vec<Player>> {
    let path = players_cache_path(url, format.extension());

    if !refresh {
        if let Some(cached) = try_read_to_string(&path) {
            match parse_players(&cached, format) {
                Ok(players) => {
                    tracing::info!(path = %path.display(), "using cached player export");
                    return Ok(players);
                }
                Err(e) => tracing::warn!(error = %e, "ignoring unreadable cached export"),
            }
        }
    }

    let body = fetch_text(url).await?;
    let players = parse_players(&body, format)?;

    if let Err(e) = write_string(&path, &body) {
        tracing::warn!(path = %path.display(), error = %e, "could not cache player export");
    }

    Ok(players)
}

/// Load every record from `source`, valid or not; the optimizer does the filtering.
pub async fn load_players(source: &PlayerSource, refresh: bool) -> Result<Vec<Player>> {
    let format = source.format();
    let players = match source {
        PlayerSource::File(path) => load_file(path, format)?,
        PlayerSource::Url(url) => load_url(url, format, refresh).await?,
    };

    tracing::info!(%source, players = players.len(), "loaded player pool");
    Ok(players)
}
