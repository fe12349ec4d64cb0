//! Artscope: a Zellij plugin for browsing a public art collection.
//!
//! Artscope lists artworks from the Art Institute of Chicago API, one page at
//! a time, and lets the user:
//! - Search titles through the remote search endpoint
//! - Filter the current working collection by category
//! - Page forward and back
//! - Open an artwork's detail screen and fill in a comment form

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Coordinator
//! │  - Event handling and request sequencing            │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog       │   │ Gallery       │
//! │ (ui/)         │   │ (catalog/)    │   │ (gallery/)    │
//! │ - Rendering   │   │ - URLs        │   │ - Filters     │
//! │ - Theming     │   │ - Decoding    │   │ - Pagination  │
//! │ - Components  │   │ - Sequencing  │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Infrastructure, Observability              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! HTTP is performed by the host: the application layer emits
//! [`Action::Fetch`] with a tagged request, and the shim feeds the host's
//! result back as [`Event::FetchSettled`].
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/artscope.wasm" {
//!         api_base "https://api.artic.edu/api/v1"
//!         iiif_base "https://www.artic.edu/iiif/2"
//!         paging "server"
//!         snapshot_size "100"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use artscope::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (_, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: true })?;
//! assert!(matches!(actions.as_slice(), [Action::Fetch(_)]));
//! # Ok::<(), artscope::ArtscopeError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod gallery;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event};
pub use domain::{ArtscopeError, Result};
pub use ui::Theme;

use app::{CatalogSettings, PagingStrategy};
use catalog::{Endpoints, DEFAULT_API_BASE};
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Collection API root. Default: `https://api.artic.edu/api/v1`
    pub api_base: String,

    /// IIIF image service root used to build image URLs.
    pub iiif_base: String,

    /// `server` (default) or `snapshot`.
    pub paging: PagingStrategy,

    /// Items fetched for the snapshot strategy, 1 to 100. Default: 100
    pub snapshot_size: usize,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file, `~` expanded.
    pub theme_file: Option<String>,

    /// Tracing filter level. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            iiif_base: app::state::DEFAULT_IIIF_BASE.to_string(),
            paging: PagingStrategy::default(),
            snapshot_size: app::state::MAX_SNAPSHOT_SIZE,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unknown or malformed values fall back to their defaults.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use artscope::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("paging".to_string(), "snapshot".to_string());
    /// map.insert("snapshot_size".to_string(), "40".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.snapshot_size, 40);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        let paging = config.get("paging").map_or(defaults.paging, |raw| {
            PagingStrategy::parse(raw).unwrap_or_else(|| {
                tracing::debug!(paging = %raw, "unknown paging strategy, using default");
                defaults.paging
            })
        });

        let snapshot_size = config.get("snapshot_size").map_or(defaults.snapshot_size, |raw| {
            parse_snapshot_size(raw).unwrap_or_else(|e| {
                tracing::debug!(error = %e, "invalid snapshot size, using default");
                defaults.snapshot_size
            })
        });

        Self {
            api_base: non_empty("api_base").unwrap_or(defaults.api_base),
            iiif_base: non_empty("iiif_base")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.iiif_base),
            paging,
            snapshot_size,
            theme_name: non_empty("theme"),
            theme_file: non_empty("theme_file").map(|p| infrastructure::expand_tilde(&p)),
            trace_level: non_empty("trace_level"),
        }
    }

    /// Collection settings derived from this configuration.
    #[must_use]
    pub fn catalog_settings(&self) -> CatalogSettings {
        CatalogSettings {
            endpoints: Endpoints::new(self.api_base.clone()),
            iiif_base: self.iiif_base.clone(),
            paging: self.paging,
            snapshot_size: self.snapshot_size,
        }
    }

    /// Theme from `theme_file`, then `theme_name`, then the default.
    ///
    /// Load failures are logged and fall back to the default theme.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

fn parse_snapshot_size(raw: &str) -> Result<usize> {
    let size = raw
        .trim()
        .parse::<usize>()
        .map_err(|e| ArtscopeError::Config(format!("snapshot_size {raw:?}: {e}")))?;

    if (1..=app::state::MAX_SNAPSHOT_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(ArtscopeError::Config(format!(
            "snapshot_size {size} outside 1..={}",
            app::state::MAX_SNAPSHOT_SIZE
        )))
    }
}

/// Creates the initial state: idle, browsing page 1, nothing fetched yet.
///
/// The first listing is requested once web access is granted.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(paging = ?config.paging, api_base = %config.api_base, "initializing artscope plugin");

    AppState::new(config.catalog_settings(), config.load_theme())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn parses_every_key() {
        let config = Config::from_zellij(&map(&[
            ("api_base", "http://localhost:8080/api/v1/"),
            ("iiif_base", "http://localhost:8080/iiif/"),
            ("paging", "Snapshot"),
            ("snapshot_size", "25"),
            ("theme", "catppuccin-latte"),
            ("theme_file", "~/themes/dusk.toml"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.paging, PagingStrategy::Snapshot);
        assert_eq!(config.snapshot_size, 25);
        assert_eq!(config.iiif_base, "http://localhost:8080/iiif");
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.theme_file.as_deref(), Some("/host/themes/dusk.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(
            config.catalog_settings().endpoints.api_base(),
            "http://localhost:8080/api/v1"
        );
    }

    #[test]
    fn malformed_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("paging", "infinite"),
            ("snapshot_size", "500"),
            ("api_base", "  "),
        ]));
        assert_eq!(config.paging, PagingStrategy::Server);
        assert_eq!(config.snapshot_size, 100);
        assert_eq!(config.api_base, DEFAULT_API_BASE);

        let zero = Config::from_zellij(&map(&[("snapshot_size", "0")]));
        assert_eq!(zero.snapshot_size, 100);
    }

    #[test]
    fn snapshot_size_errors_name_the_value() {
        assert_eq!(parse_snapshot_size(" 40 ").unwrap(), 40);

        let err = parse_snapshot_size("lots").unwrap_err();
        assert!(matches!(&err, ArtscopeError::Config(msg) if msg.contains("\"lots\"")));

        let err = parse_snapshot_size("101").unwrap_err();
        assert!(matches!(&err, ArtscopeError::Config(msg) if msg.contains("1..=100")));
    }

    #[test]
    fn unknown_theme_uses_default() {
        let config = Config {
            theme_name: Some("nope".to_string()),
            ..Config::default()
        };
        assert_eq!(config.load_theme().name, "catppuccin-mocha");

        let missing_file = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            ..Config::default()
        };
        assert_eq!(missing_file.load_theme().name, "catppuccin-mocha");
    }
}
