//! Cache Settings Module
//!
//! Operating regimes of the group cache.

use serde::{Deserialize, Serialize};

use crate::error::{LookupError, Result};

// == Public Constants ==
/// Default bound on cached groups in bounded mode
pub const DEFAULT_MAX_ENTRIES: usize = 14;

/// Default idle time in seconds before the sweep drops a group
pub const DEFAULT_TTL_SECS: u64 = 60;

// == Cache Settings ==
/// How the group cache mediates access to the data source.
///
/// Serialized with an internal `mode` tag, e.g.
/// `{"mode":"bounded","max_entries":14,"ttl_secs":60}` or `{"mode":"preload"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CacheSettings {
    /// Every lookup goes to the data source, nothing is retained
    Passthrough,
    /// Size-bounded cache whose idle entries are swept after `ttl_secs`
    Bounded { max_entries: usize, ttl_secs: u64 },
    /// Every group is loaded once when the mode is entered
    Preload,
}

impl Default for CacheSettings {
    fn default() -> Self {
        CacheSettings::Bounded {
            max_entries: DEFAULT_MAX_ENTRIES,
            ttl_secs: DEFAULT_TTL_SECS,
        }
    }
}

impl CacheSettings {
    // == Constructors ==
    /// Creates validated bounded-mode settings.
    pub fn bounded(max_entries: usize, ttl_secs: u64) -> Result<Self> {
        let settings = CacheSettings::Bounded {
            max_entries,
            ttl_secs,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Builds settings from a mode name, as found in configuration.
    ///
    /// `max_entries` and `ttl_secs` are only consulted for `bounded`.
    pub fn from_mode(mode: &str, max_entries: usize, ttl_secs: u64) -> Result<Self> {
        match mode.trim().to_ascii_lowercase().as_str() {
            "passthrough" | "drive" => Ok(CacheSettings::Passthrough),
            "bounded" | "cache" => Self::bounded(max_entries, ttl_secs),
            "preload" | "ram" => Ok(CacheSettings::Preload),
            other => Err(LookupError::Configuration(format!(
                "Unknown cache mode '{}' (expected passthrough, bounded or preload)",
                other
            ))),
        }
    }

    // == Validate ==
    /// Rejects a bounded mode with a zero bound or a zero TTL.
    pub fn validate(&self) -> Result<()> {
        if let CacheSettings::Bounded {
            max_entries,
            ttl_secs,
        } = *self
        {
            if max_entries == 0 {
                return Err(LookupError::Configuration(
                    "max_entries must be greater than zero".to_string(),
                ));
            }
            if ttl_secs == 0 {
                return Err(LookupError::Configuration(
                    "ttl_secs must be greater than zero".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Short name of the mode, used in logs.
    pub fn mode_name(&self) -> &'static str {
        match self {
            CacheSettings::Passthrough => "passthrough",
            CacheSettings::Bounded { .. } => "bounded",
            CacheSettings::Preload => "preload",
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_bounded() {
        assert_eq!(
            CacheSettings::default(),
            CacheSettings::Bounded {
                max_entries: 14,
                ttl_secs: 60
            }
        );
    }

    #[test]
    fn test_bounded_validation() {
        assert!(CacheSettings::bounded(2, 10).is_ok());
        assert!(matches!(
            CacheSettings::bounded(0, 10),
            Err(LookupError::Configuration(_))
        ));
        assert!(matches!(
            CacheSettings::bounded(2, 0),
            Err(LookupError::Configuration(_))
        ));
    }

    #[test]
    fn test_other_modes_always_valid() {
        assert!(CacheSettings::Passthrough.validate().is_ok());
        assert!(CacheSettings::Preload.validate().is_ok());
    }

    #[test]
    fn test_from_mode() {
        assert_eq!(
            CacheSettings::from_mode("Passthrough", 0, 0).unwrap(),
            CacheSettings::Passthrough
        );
        assert_eq!(
            CacheSettings::from_mode("preload", 0, 0).unwrap(),
            CacheSettings::Preload
        );
        assert_eq!(
            CacheSettings::from_mode(" bounded ", 3, 5).unwrap(),
            CacheSettings::Bounded {
                max_entries: 3,
                ttl_secs: 5
            }
        );
        assert!(CacheSettings::from_mode("bounded", 0, 5).is_err());
        assert!(CacheSettings::from_mode("lru", 3, 5).is_err());
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(CacheSettings::default()).unwrap();
        assert_eq!(json["mode"], "bounded");
        assert_eq!(json["max_entries"], 14);
        assert_eq!(json["ttl_secs"], 60);

        let parsed: CacheSettings = serde_json::from_str(r#"{"mode":"preload"}"#).unwrap();
        assert_eq!(parsed, CacheSettings::Preload);
    }
}
