use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::define::Define;
use crate::error::{Error, Result};

/// Rendering to and parsing from configuration header text.
///
/// The accepted dialect is the one platform-configuration headers actually
/// use: `#define NAME` and `#define NAME VALUE` lines, `//` comments and
/// blank lines. General preprocessor syntax is a parse error.
impl Config {
    /// Render the configuration as header text, one `#define` per line in
    /// authored order.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut config = sqcfg::Config::new();
    /// config.threading(sqcfg::Threading::Single).omit_utf16();
    ///
    /// let expected = "#define SQLITE_THREADSAFE 0\n#define SQLITE_OMIT_UTF16\n";
    /// assert_eq!(config.to_header(), expected);
    /// ```
    pub fn to_header(&self) -> String {
        self.to_string()
    }

    /// Write the configuration header to the given path.
    pub fn write_header(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_header()).map_err(|error| Error::io(path, error))
    }

    /// Parse header text back into a configuration.
    ///
    /// Parsing a header produced by [`to_header`] yields an equal
    /// configuration.
    ///
    /// [`to_header`]: Self::to_header
    ///
    /// # Errors
    ///
    /// Lines that are not a define, a `//` comment or blank produce an error
    /// carrying the 1-based line number.
    ///
    /// ```
    /// let e = sqcfg::Config::parse_header("#define A\n#include <stdio.h>\n").unwrap_err();
    /// assert_eq!(e.line(), Some(2));
    /// ```
    pub fn parse_header(text: &str) -> Result<Config> {
        let mut config = Config::new();

        for (number, line) in text.lines().enumerate() {
            let number = number + 1;

            let line = match line.find("//") {
                Some(at) => &line[..at],
                None => line,
            };

            let line = line.trim();

            if line.is_empty() {
                continue;
            }

            let Some(rest) = line.strip_prefix("#define") else {
                return Err(Error::parse(number, format!("expected a define: {line}")));
            };

            if !rest.starts_with(char::is_whitespace) {
                return Err(Error::parse(number, format!("expected a define: {line}")));
            }

            let rest = rest.trim_start();

            let (name, value) = match rest.split_once(char::is_whitespace) {
                Some((name, value)) => (name, Some(value.trim())),
                None => (rest, None),
            };

            if !is_identifier(name) {
                return Err(Error::parse(number, format!("not a valid name: {name}")));
            }

            let define = match value {
                None | Some("") => Define::flag(name),
                Some(value) => match value.parse::<i64>() {
                    Ok(value) => Define::int(name, value),
                    Err(..) => Define::text(name, value),
                },
            };

            config.put(define);
        }

        Ok(config)
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();

    let Some(first) = chars.next() else {
        return false;
    };

    if !first.is_ascii_alphabetic() && first != '_' {
        return false;
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
