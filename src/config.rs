use crate::error::Error;
use crate::mailbox;
use crate::records::vercel::DEFAULT_BASE_URL;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::num::NonZeroU64;
use std::path::Path;
use std::sync::Arc;
use url::Url;

pub type Shared = Arc<Config>;

/// Unvalidated settings from one source. Later sources [override][Settings::merge] earlier ones.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub bot_token: Option<String>,
    pub vercel_token: Option<String>,
    pub domain: Option<String>,
    pub guild_id: Option<NonZeroU64>,
    pub api_base_url: Option<String>,
}

impl Settings {
    /// Load settings from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IO`] if the file can't be opened, or [`Error::InvalidConfigJSON`] if it
    /// isn't a JSON object of known settings.
    pub fn try_from_file(p: impl AsRef<Path>) -> Result<Self, Error> {
        let f = File::open(p)?;
        let reader = BufReader::new(f);
        serde_json::from_reader(reader).map_err(Error::InvalidConfigJSON)
    }

    /// Overlay `other` on `self`, keeping `self`'s value wherever `other` has none.
    #[must_use]
    pub fn merge(self, other: Settings) -> Settings {
        Settings {
            bot_token: other.bot_token.or(self.bot_token),
            vercel_token: other.vercel_token.or(self.vercel_token),
            domain: other.domain.or(self.domain),
            guild_id: other.guild_id.or(self.guild_id),
            api_base_url: other.api_base_url.or(self.api_base_url),
        }
    }
}

/// Validated process-wide configuration, fixed for the process lifetime.
#[derive(Clone)]
pub struct Config {
    pub bot_token: String,
    pub vercel_token: String,
    pub domain: String,
    /// Register the command in this guild only, instead of globally.
    pub guild_id: Option<NonZeroU64>,
    pub api_base_url: Url,
}

impl TryFrom<Settings> for Config {
    type Error = Error;

    fn try_from(settings: Settings) -> Result<Self, Error> {
        let bot_token = required(settings.bot_token, "bot_token")?;
        let vercel_token = required(settings.vercel_token, "vercel_token")?;
        let domain = required(settings.domain, "domain")?;
        if mailbox::validate_domain(&domain).is_err() {
            return Err(Error::InvalidDomain(domain));
        }
        let api_base_url = settings
            .api_base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let api_base_url = match Url::parse(&api_base_url) {
            Ok(url) if !url.cannot_be_a_base() => url,
            _ => return Err(Error::InvalidBaseUrl(api_base_url)),
        };
        Ok(Config {
            bot_token,
            vercel_token,
            domain,
            guild_id: settings.guild_id,
            api_base_url,
        })
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("domain", &self.domain)
            .field("guild_id", &self.guild_id)
            .field("api_base_url", &self.api_base_url.as_str())
            .finish_non_exhaustive()
    }
}

fn required(value: Option<String>, name: &'static str) -> Result<String, Error> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(Error::MissingSetting(name)),
    }
}
