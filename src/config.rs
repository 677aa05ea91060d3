use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::PokedexError;

const DEFAULT_CONFIG: &str = include_str!("../config/config.toml");

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Config {
    pub pokemon: PokemonConfig,
    pub images: ImageConfig,
    #[serde(default)]
    pub detail: DetailConfig,
    pub server: ServerConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct PokemonConfig {
    pub api_url: String,
    /// Request timeout in seconds; 0 leaves requests unbounded.
    pub timeout: u32,
    pub roster_limit: u32,
    pub type_count: u32,
}

impl PokemonConfig {
    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout {
            0 => None,
            secs => Some(Duration::from_secs(secs as u64)),
        }
    }

    pub fn roster_url(&self) -> String {
        format!("{}/pokemon/?limit={}", self.api_url, self.roster_limit)
    }

    pub fn pokemon_url(&self, id: u32) -> String {
        format!("{}/pokemon/{}", self.api_url, id)
    }

    pub fn type_url(&self, index: u32) -> String {
        format!("{}/type/{}", self.api_url, index)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ImageConfig {
    pub static_template: String,
    pub animated_template: String,
}

/// How the detail view flattens the weaknesses of a Pokémon's types.
///
/// The roster does not read this setting: roster weaknesses are a set and are
/// always distinct. Choose `distinct` to make both views agree.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeaknessPolicy {
    /// Every double-damage-from type of every own type, in upstream order.
    #[default]
    KeepAll,
    /// Same order, later repeats dropped.
    Distinct,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BranchPolicy {
    /// Follow the first listed `evolves_to` branch at every stage.
    #[default]
    FirstListed,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct DetailConfig {
    #[serde(default)]
    pub weakness_policy: WeaknessPolicy,
    #[serde(default)]
    pub branch_policy: BranchPolicy,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ServerConfig {
    pub bind: String,
    pub page_size: usize,
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Config {
    pub fn parse(source: &str) -> Result<Config, PokedexError> {
        let config: Config = toml::from_str(source)?;
        if config.server.page_size == 0 {
            return Err(PokedexError::Config(
                "server.page_size must be at least 1".to_string(),
            ));
        }
        for template in [&config.images.static_template, &config.images.animated_template] {
            if !template.contains("{id}") {
                return Err(PokedexError::Config(format!(
                    "image template has no {{id}} placeholder: {}",
                    template
                )));
            }
        }
        Ok(config)
    }

    /// The configuration compiled into the binary.
    pub fn embedded() -> Result<Config, PokedexError> {
        Config::parse(DEFAULT_CONFIG)
    }

    pub fn from_file(path: &str) -> Result<Config, PokedexError> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| PokedexError::Config(format!("failed to read {}: {}", path, e)))?;
        Config::parse(&source)
    }
}
