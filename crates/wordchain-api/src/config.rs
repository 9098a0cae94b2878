//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use wordchain_game::application::registry::DEFAULT_SHARD_COUNT;
use wordchain_game::domain::corpus::WordCorpus;

use crate::error::AppError;

/// Runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Interface to bind (`HOST`).
    pub host: String,
    /// Port to bind (`PORT`).
    pub port: u16,
    /// Vocabulary file (`WORDS_FILE`); the built-in list when unset.
    pub words_file: Option<PathBuf>,
    /// Fixed RNG seed (`RNG_SEED`); OS entropy when unset.
    pub rng_seed: Option<u64>,
    /// Registry shard count (`SESSION_SHARDS`).
    pub session_shards: usize,
}

impl Config {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which returns a variable's value
    /// if set.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is present but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port: u16 = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => 3000,
        };
        let words_file = lookup("WORDS_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);
        let rng_seed: Option<u64> = lookup("RNG_SEED")
            .map(|raw| {
                raw.trim()
                    .parse()
                    .map_err(|e| AppError::Config(format!("RNG_SEED must be a valid u64: {e}")))
            })
            .transpose()?;
        let session_shards = match lookup("SESSION_SHARDS") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(0) => {
                    return Err(AppError::Config(
                        "SESSION_SHARDS must be at least 1".to_string(),
                    ));
                }
                Ok(count) => count,
                Err(e) => {
                    return Err(AppError::Config(format!(
                        "SESSION_SHARDS must be a positive integer: {e}"
                    )));
                }
            },
            None => DEFAULT_SHARD_COUNT,
        };

        Ok(Self {
            host,
            port,
            words_file,
            rng_seed,
            session_shards,
        })
    }

    /// The socket address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `HOST:PORT` is not a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }

    /// Loads the configured vocabulary.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the word file cannot be read and
    /// `AppError::Corpus` if it holds no words.
    pub fn load_corpus(&self) -> Result<WordCorpus, AppError> {
        let corpus = match &self.words_file {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|e| {
                    AppError::Config(format!("cannot read WORDS_FILE {}: {e}", path.display()))
                })?;
                WordCorpus::parse(&text)?
            }
            None => WordCorpus::builtin()?,
        };
        Ok(corpus)
    }
}
