use std::env;

use crate::config::Config;

/// Test if an environment variable name participates in configuration
/// overrides. Shared with the build integration so rebuild triggers cover
/// exactly the names [`Config::apply_env_from`] would consume.
pub(crate) fn is_override(name: &str) -> bool {
    name.starts_with("SQLITE_") || name.starts_with("HAVE_")
}

impl Config {
    /// Apply overrides from the process environment.
    ///
    /// Every `SQLITE_*` and `HAVE_*` variable is taken as an option: an empty
    /// value defines a bare flag, an integer value defines an integer, and
    /// anything else is kept as a raw token. This is how a downstream build
    /// script lets callers extend the flag set without patching it.
    #[inline]
    pub fn apply_env(&mut self) -> &mut Self {
        self.apply_env_from(env::vars())
    }

    /// Apply overrides from an explicit set of variables.
    ///
    /// [`apply_env`] forwards here; taking the variables as an argument keeps
    /// the behavior testable without touching process state.
    ///
    /// [`apply_env`]: Self::apply_env
    ///
    /// # Examples
    ///
    /// ```
    /// let mut config = sqcfg::Config::new();
    ///
    /// config.apply_env_from([
    ///     (String::from("SQLITE_MAX_EXPR_DEPTH"), String::from("100")),
    ///     (String::from("SQLITE_OMIT_JSON"), String::new()),
    ///     (String::from("CARGO_MANIFEST_DIR"), String::from("/ignored")),
    /// ]);
    ///
    /// assert_eq!(config.int_value("SQLITE_MAX_EXPR_DEPTH"), Some(100));
    /// assert!(config.contains("SQLITE_OMIT_JSON"));
    /// assert_eq!(config.len(), 2);
    /// ```
    pub fn apply_env_from(
        &mut self,
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> &mut Self {
        for (name, value) in vars {
            if !is_override(&name) {
                continue;
            }

            if value.is_empty() {
                self.set(&name);
            } else if let Ok(value) = value.parse::<i64>() {
                self.set_int(&name, value);
            } else {
                self.set_text(&name, &value);
            }
        }

        self
    }
}
