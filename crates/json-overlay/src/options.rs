use serde::Deserialize;

/// Settings for building insert directives.
///
/// Loadable from any serde format; missing fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InsertOptions {
    /// Reject `before=True` together with `after=True` instead of passing both
    /// flags through to the merge engine.
    pub strict_placement: bool,
}

impl InsertOptions {
    pub fn strict() -> Self {
        InsertOptions {
            strict_placement: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_permissive() {
        assert!(!InsertOptions::default().strict_placement);
        let opts: InsertOptions = toml::from_str("").unwrap();
        assert_eq!(opts, InsertOptions::default());
    }

    #[test]
    fn test_load_from_toml() {
        let opts: InsertOptions = toml::from_str("strict_placement = true").unwrap();
        assert_eq!(opts, InsertOptions::strict());
    }

    #[test]
    fn test_load_from_json() {
        let opts: InsertOptions = serde_json::from_str(r#"{"strict_placement": false}"#).unwrap();
        assert!(!opts.strict_placement);
    }
}
