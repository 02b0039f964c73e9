//! Runtime configuration.
//!
//! Three environment variables shape the runtime:
//! - `TYPEDIO_MODE`: `lenient` (default) keeps the legacy silent best-effort
//!   behavior of the C symbols; `strict` (also `abort` or `checked`) makes
//!   them report a failed read on stderr and terminate the process with
//!   status 1.
//! - `TYPEDIO_FLAVOR`: `runtime` (default) matches the linked runtime library;
//!   `inline` matches the runtime the compiler can emit directly into a
//!   program (newline after every put, `%g` floats, line-based string reads).
//! - `TYPEDIO_STRING_CAPACITY`: byte capacity assumed for the caller buffer of
//!   the legacy `getString(char*)` entry point. Defaults to 256, the code
//!   generator's `BUF_SIZE`.

use std::sync::OnceLock;

use parking_lot::RwLock;

/// What the legacy entry points do when a read fails.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailurePolicy {
    /// Leave the destination at its default value and carry on silently.
    #[default]
    Lenient,
    /// Print a diagnostic on stderr and exit with status 1.
    Strict,
}

impl FailurePolicy {
    /// Parse from string (case-insensitive). Unknown values map to `Lenient`.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" | "abort" | "checked" => Self::Strict,
            _ => Self::Lenient,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }
}

/// Observable text conventions of the runtime.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    /// Linked runtime library: no terminators, `%f` floats, token strings.
    #[default]
    Runtime,
    /// Compiler-emitted runtime: newline after each put, `%g` floats,
    /// `fgets`-style string reads.
    Inline,
}

impl Flavor {
    /// Parse from string (case-insensitive). Unknown values map to `Runtime`.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "inline" => Self::Inline,
            _ => Self::Runtime,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Runtime => "runtime",
            Self::Inline => "inline",
        }
    }
}

/// Resolved runtime settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub policy: FailurePolicy,
    pub flavor: Flavor,
    pub string_capacity: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            policy: FailurePolicy::default(),
            flavor: Flavor::default(),
            string_capacity: Self::DEFAULT_STRING_CAPACITY,
        }
    }
}

impl RuntimeConfig {
    pub const DEFAULT_STRING_CAPACITY: usize = 256;
    pub const MIN_STRING_CAPACITY: usize = 2;
    pub const MAX_STRING_CAPACITY: usize = 65536;

    pub const MODE_VAR: &'static str = "TYPEDIO_MODE";
    pub const FLAVOR_VAR: &'static str = "TYPEDIO_FLAVOR";
    pub const STRING_CAPACITY_VAR: &'static str = "TYPEDIO_STRING_CAPACITY";

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let policy = lookup(Self::MODE_VAR)
            .map(|v| FailurePolicy::from_str_loose(&v))
            .unwrap_or_default();
        let flavor = lookup(Self::FLAVOR_VAR)
            .map(|v| Flavor::from_str_loose(&v))
            .unwrap_or_default();
        let string_capacity = lookup(Self::STRING_CAPACITY_VAR)
            .and_then(|v| parse_capacity(&v))
            .unwrap_or(Self::DEFAULT_STRING_CAPACITY);
        Self {
            policy,
            flavor,
            string_capacity,
        }
    }

    /// Build a config from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }
}

fn parse_capacity(raw: &str) -> Option<usize> {
    let cap = raw.trim().parse::<usize>().ok()?;
    (RuntimeConfig::MIN_STRING_CAPACITY..=RuntimeConfig::MAX_STRING_CAPACITY)
        .contains(&cap)
        .then_some(cap)
}

// The environment is read once; an installed config takes precedence over
// it. Concurrent first callers block on the `OnceLock` until it is resolved,
// so every caller observes the same settings.
static FROM_ENV: OnceLock<RuntimeConfig> = OnceLock::new();
static INSTALLED: RwLock<Option<RuntimeConfig>> = RwLock::new(None);

/// Process-wide configuration (reads the environment on first call, caches
/// thereafter).
#[must_use]
pub fn runtime_config() -> RuntimeConfig {
    if let Some(config) = *INSTALLED.read() {
        return config;
    }
    *FROM_ENV.get_or_init(RuntimeConfig::from_env)
}

/// Replace the process-wide configuration, bypassing the environment.
///
/// Intended for embedders and tests; later calls to [`runtime_config`]
/// return `config` until [`clear_runtime_config`] is called.
pub fn install_runtime_config(config: RuntimeConfig) {
    *INSTALLED.write() = Some(config);
}

/// Drop an installed configuration; [`runtime_config`] falls back to the
/// environment.
pub fn clear_runtime_config() -> Option<RuntimeConfig> {
    INSTALLED.write().take()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn parse_policies() {
        assert_eq!(FailurePolicy::from_str_loose("strict"), FailurePolicy::Strict);
        assert_eq!(FailurePolicy::from_str_loose("STRICT"), FailurePolicy::Strict);
        assert_eq!(FailurePolicy::from_str_loose("abort"), FailurePolicy::Strict);
        assert_eq!(FailurePolicy::from_str_loose("lenient"), FailurePolicy::Lenient);
        assert_eq!(FailurePolicy::from_str_loose("legacy"), FailurePolicy::Lenient);
        assert_eq!(FailurePolicy::from_str_loose("bogus"), FailurePolicy::Lenient);
    }

    #[test]
    fn parse_flavors() {
        assert_eq!(Flavor::from_str_loose("inline"), Flavor::Inline);
        assert_eq!(Flavor::from_str_loose(" Inline "), Flavor::Inline);
        assert_eq!(Flavor::from_str_loose("runtime"), Flavor::Runtime);
        assert_eq!(Flavor::from_str_loose("embedded"), Flavor::Runtime);
        assert_eq!(Flavor::from_str_loose(""), Flavor::Runtime);
    }

    #[test]
    fn empty_lookup_yields_defaults() {
        let config = RuntimeConfig::from_lookup(|_| None);
        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.string_capacity, 256);
    }

    #[test]
    fn lookup_overrides_every_field() {
        let config = RuntimeConfig::from_lookup(lookup(&[
            ("TYPEDIO_MODE", "strict"),
            ("TYPEDIO_FLAVOR", "inline"),
            ("TYPEDIO_STRING_CAPACITY", "1024"),
        ]));
        assert_eq!(config.policy, FailurePolicy::Strict);
        assert_eq!(config.flavor, Flavor::Inline);
        assert_eq!(config.string_capacity, 1024);
    }

    #[test]
    fn out_of_bounds_capacity_falls_back() {
        for raw in ["0", "1", "65537", "-3", "lots"] {
            let config = RuntimeConfig::from_lookup(lookup(&[("TYPEDIO_STRING_CAPACITY", raw)]));
            assert_eq!(config.string_capacity, 256, "capacity {raw:?}");
        }
    }

    // The only test here that installs a config.
    #[test]
    fn installed_config_overrides_environment_until_cleared() {
        let from_env = runtime_config();
        let custom = RuntimeConfig {
            policy: FailurePolicy::Strict,
            flavor: Flavor::Inline,
            string_capacity: 64,
        };
        install_runtime_config(custom);
        assert_eq!(runtime_config(), custom);
        assert_eq!(runtime_config(), custom);
        assert_eq!(clear_runtime_config(), Some(custom));
        assert_eq!(runtime_config(), from_env);
        assert_eq!(clear_runtime_config(), None);
    }

    #[test]
    fn concurrent_first_callers_agree() {
        let configs: Vec<RuntimeConfig> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..16)
                .map(|_| scope.spawn(|| *FROM_ENV.get_or_init(RuntimeConfig::from_env)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(configs.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(configs[0], RuntimeConfig::from_env());
    }
}
