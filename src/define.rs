use core::fmt;

/// The value carried by a [`Define`].
///
/// SQLite's compile-time options come in two forms: presence-only flags such
/// as `SQLITE_OMIT_UTF16`, and valued options such as `SQLITE_THREADSAFE 0`.
/// Values that are not plain integers are kept as raw tokens and emitted
/// verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DefineValue {
    /// The option is defined with no value.
    Flag,
    /// The option is defined to an integer value.
    Int(i64),
    /// The option is defined to a raw token, emitted as-is.
    Text(Box<str>),
}

impl fmt::Display for DefineValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefineValue::Flag => Ok(()),
            DefineValue::Int(value) => write!(f, "{value}"),
            DefineValue::Text(value) => write!(f, "{value}"),
        }
    }
}

/// A single configuration entry: an option name and its value.
///
/// Entries are independent of each other; ordering and uniqueness are the
/// concern of the owning [`Config`].
///
/// [`Config`]: crate::Config
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Define {
    name: Box<str>,
    value: DefineValue,
}

impl Define {
    /// Construct a presence-only entry.
    #[inline]
    pub fn flag(name: impl Into<Box<str>>) -> Self {
        Self {
            name: name.into(),
            value: DefineValue::Flag,
        }
    }

    /// Construct an integer-valued entry.
    #[inline]
    pub fn int(name: impl Into<Box<str>>, value: i64) -> Self {
        Self {
            name: name.into(),
            value: DefineValue::Int(value),
        }
    }

    /// Construct an entry with a raw token value.
    #[inline]
    pub fn text(name: impl Into<Box<str>>, value: impl Into<Box<str>>) -> Self {
        Self {
            name: name.into(),
            value: DefineValue::Text(value.into()),
        }
    }

    /// The option name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value of the entry.
    #[inline]
    pub fn value(&self) -> &DefineValue {
        &self.value
    }

    /// The integer value of the entry, if it has one.
    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self.value {
            DefineValue::Int(value) => Some(value),
            _ => None,
        }
    }

    /// The value as passed to a C compiler `-D` option.
    ///
    /// Returns `None` for presence-only flags, which matches the bare-name
    /// form `-DNAME`.
    #[inline]
    pub fn cc_value(&self) -> Option<String> {
        match &self.value {
            DefineValue::Flag => None,
            DefineValue::Int(value) => Some(value.to_string()),
            DefineValue::Text(value) => Some(value.to_string()),
        }
    }
}

impl fmt::Display for Define {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            DefineValue::Flag => write!(f, "#define {}", self.name),
            value => write!(f, "#define {} {value}", self.name),
        }
    }
}
