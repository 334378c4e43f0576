//! Client configuration.
//!
//! Values the request derivations need from the host environment: where the
//! API lives, the OAuth client credentials, and the build/bundle identifiers
//! some endpoints report. Deserializable so hosts can keep it in a config
//! file; `from_env` layers `ELLO_*` variables over the defaults.

use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://ello.co";
const DEFAULT_BUNDLE_IDENTIFIER: &str = "co.ello.ElloDev";
const UNKNOWN_VERSION: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub client_key: String,
    pub client_secret: String,
    /// Sent as `X-iOS-Build-Number` when present.
    pub build_number: Option<String>,
    pub accept_language: Option<String>,
    pub bundle_identifier: String,
    pub marketing_version: String,
    pub build_version: String,
    /// Prefix mixed into each contact email before hashing for find-friends.
    pub contact_hash_salt: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            client_key: String::new(),
            client_secret: String::new(),
            build_number: None,
            accept_language: None,
            bundle_identifier: DEFAULT_BUNDLE_IDENTIFIER.to_string(),
            marketing_version: UNKNOWN_VERSION.to_string(),
            build_version: UNKNOWN_VERSION.to_string(),
            contact_hash_salt: String::new(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    /// Defaults overridden by any `ELLO_*` variables that are set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(v) = lookup("ELLO_BASE_URL") {
            config.base_url = v;
        }
        if let Some(v) = lookup("ELLO_CLIENT_KEY") {
            config.client_key = v;
        }
        if let Some(v) = lookup("ELLO_CLIENT_SECRET") {
            config.client_secret = v;
        }
        if let Some(v) = lookup("ELLO_BUILD_NUMBER") {
            config.build_number = Some(v);
        }
        if let Some(v) = lookup("ELLO_ACCEPT_LANGUAGE") {
            config.accept_language = Some(v);
        }
        if let Some(v) = lookup("ELLO_BUNDLE_IDENTIFIER") {
            config.bundle_identifier = v;
        }
        if let Some(v) = lookup("ELLO_MARKETING_VERSION") {
            config.marketing_version = v;
        }
        if let Some(v) = lookup("ELLO_BUILD_VERSION") {
            config.build_version = v;
        }
        if let Some(v) = lookup("ELLO_CONTACT_HASH_SALT") {
            config.contact_hash_salt = v;
        }
        config
    }

    pub(crate) fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
