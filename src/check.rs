use core::fmt;
use std::error;

use crate::catalog::{self, Shape};
use crate::config::Config;
use crate::define::DefineValue;

/// A single consistency finding.
///
/// Flag values are checked against the recognized option catalog, and a
/// handful of combinations that the downstream build would accept but
/// silently misbehave under are reported as incompatible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Conflict {
    /// An integer value outside the range the option accepts.
    OutOfRange {
        /// The option name.
        name: String,
        /// The configured value.
        value: i64,
        /// The inclusive minimum.
        min: i64,
        /// The inclusive maximum.
        max: i64,
    },
    /// An integer value that is not one of the values the option accepts.
    NotAllowed {
        /// The option name.
        name: String,
        /// The configured value.
        value: i64,
        /// The accepted values.
        allowed: &'static [i64],
    },
    /// A valued option defined as a bare flag.
    ExpectedValue {
        /// The option name.
        name: String,
    },
    /// A presence-only option defined to a value.
    UnexpectedValue {
        /// The option name.
        name: String,
    },
    /// An integer option defined to a non-integer token.
    NotAnInteger {
        /// The option name.
        name: String,
    },
    /// Two options that contradict each other.
    Incompatible {
        /// The option name.
        name: &'static str,
        /// The option it conflicts with.
        other: &'static str,
        /// Why the combination is rejected.
        reason: &'static str,
    },
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conflict::OutOfRange {
                name,
                value,
                min,
                max,
            } => {
                write!(f, "{name}: value {value} is outside of {min}..={max}")
            }
            Conflict::NotAllowed {
                name,
                value,
                allowed,
            } => {
                write!(f, "{name}: value {value} is not one of {allowed:?}")
            }
            Conflict::ExpectedValue { name } => {
                write!(f, "{name}: expected a value, defined as a bare flag")
            }
            Conflict::UnexpectedValue { name } => {
                write!(f, "{name}: takes no value")
            }
            Conflict::NotAnInteger { name } => {
                write!(f, "{name}: expected an integer value")
            }
            Conflict::Incompatible {
                name,
                other,
                reason,
            } => {
                write!(f, "{name} conflicts with {other}: {reason}")
            }
        }
    }
}

/// The non-empty collection of findings produced by [`Config::check`].
#[derive(Debug)]
pub struct Conflicts {
    list: Vec<Conflict>,
}

impl Conflicts {
    /// Iterate over the findings.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Conflict> {
        self.list.iter()
    }

    /// The number of findings.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Always `false`; [`Config::check`] only errors with findings present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl fmt::Display for Conflicts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut it = self.list.iter();

        if let Some(first) = it.next() {
            write!(f, "{first}")?;
        }

        for conflict in it {
            write!(f, "; {conflict}")?;
        }

        Ok(())
    }
}

impl error::Error for Conflicts {}

impl IntoIterator for Conflicts {
    type Item = Conflict;
    type IntoIter = std::vec::IntoIter<Conflict>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl Config {
    /// Collect every consistency finding for this configuration.
    ///
    /// Unrecognized option names are not reported; SQLite's option surface is
    /// open-ended and a configuration may carry names this crate does not
    /// model.
    pub fn conflicts(&self) -> Vec<Conflict> {
        let mut conflicts = Vec::new();

        for define in self.iter() {
            let Some(option) = catalog::known(define.name()) else {
                continue;
            };

            match (option.shape(), define.value()) {
                (Shape::Flag, DefineValue::Flag) => {}
                // Tolerated: omit-style flags are commonly spelled -DNAME=1.
                (Shape::Flag, DefineValue::Int(1)) => {}
                (Shape::Flag, ..) => {
                    conflicts.push(Conflict::UnexpectedValue {
                        name: define.name().into(),
                    });
                }
                (Shape::Int, DefineValue::Int(..)) => {}
                (Shape::IntRange(min, max), DefineValue::Int(value)) => {
                    if !(min..=max).contains(value) {
                        conflicts.push(Conflict::OutOfRange {
                            name: define.name().into(),
                            value: *value,
                            min,
                            max,
                        });
                    }
                }
                (Shape::Enumerated(allowed), DefineValue::Int(value)) => {
                    if !allowed.contains(value) {
                        conflicts.push(Conflict::NotAllowed {
                            name: define.name().into(),
                            value: *value,
                            allowed,
                        });
                    }
                }
                (.., DefineValue::Flag) => {
                    conflicts.push(Conflict::ExpectedValue {
                        name: define.name().into(),
                    });
                }
                (.., DefineValue::Text(..)) => {
                    conflicts.push(Conflict::NotAnInteger {
                        name: define.name().into(),
                    });
                }
            }
        }

        if self.contains("SQLITE_OMIT_WAL") && self.contains("SQLITE_DEFAULT_WAL_SYNCHRONOUS") {
            conflicts.push(Conflict::Incompatible {
                name: "SQLITE_DEFAULT_WAL_SYNCHRONOUS",
                other: "SQLITE_OMIT_WAL",
                reason: "a WAL synchronous level has no effect without WAL support",
            });
        }

        if self.int_value("SQLITE_THREADSAFE") == Some(0)
            && self.int_value("SQLITE_MAX_WORKER_THREADS").unwrap_or(0) > 0
        {
            conflicts.push(Conflict::Incompatible {
                name: "SQLITE_MAX_WORKER_THREADS",
                other: "SQLITE_THREADSAFE",
                reason: "worker threads require a threadsafe build",
            });
        }

        if self.contains("SQLITE_OMIT_UTF16") && self.contains("SQLITE_ENABLE_ICU") {
            conflicts.push(Conflict::Incompatible {
                name: "SQLITE_ENABLE_ICU",
                other: "SQLITE_OMIT_UTF16",
                reason: "the ICU extension depends on the UTF-16 interfaces",
            });
        }

        if self.contains("SQLITE_DEBUG") && self.contains("NDEBUG") {
            conflicts.push(Conflict::Incompatible {
                name: "SQLITE_DEBUG",
                other: "NDEBUG",
                reason: "a debug build with assertions disabled checks nothing",
            });
        }

        conflicts
    }

    /// Check the configuration, reporting all findings at once.
    ///
    /// # Examples
    ///
    /// ```
    /// use sqcfg::Config;
    ///
    /// let mut config = Config::new();
    /// config.set_int("SQLITE_DQS", 7);
    ///
    /// let conflicts = config.check().unwrap_err();
    /// assert_eq!(conflicts.len(), 1);
    /// ```
    pub fn check(&self) -> Result<(), Conflicts> {
        let list = self.conflicts();

        if list.is_empty() {
            return Ok(());
        }

        Err(Conflicts { list })
    }
}
