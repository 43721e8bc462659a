use core::fmt;
use std::error;
use std::io;
use std::path::PathBuf;

#[cfg(feature = "system")]
use semver::{Version, VersionReq};

/// A result type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// An error produced by this crate.
pub struct Error {
    kind: ErrorKind,
}

#[derive(Debug)]
enum ErrorKind {
    Parse {
        line: usize,
        message: String,
    },
    Io {
        path: PathBuf,
        error: io::Error,
    },
    Version {
        input: String,
    },
    #[cfg(feature = "system")]
    VersionMismatch {
        found: Version,
        required: VersionReq,
    },
    #[cfg(feature = "system")]
    Probe {
        attempts: Vec<String>,
    },
    #[cfg(feature = "cc")]
    MissingEnv {
        names: &'static [&'static str],
    },
    #[cfg(feature = "cc")]
    MissingCompiler {
        path: PathBuf,
    },
    #[cfg(feature = "cc")]
    Compile {
        message: String,
    },
}

impl Error {
    #[inline]
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Parse {
                line,
                message: message.into(),
            },
        }
    }

    #[inline]
    pub(crate) fn io(path: impl Into<PathBuf>, error: io::Error) -> Self {
        Self {
            kind: ErrorKind::Io {
                path: path.into(),
                error,
            },
        }
    }

    #[inline]
    pub(crate) fn version(input: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Version {
                input: input.into(),
            },
        }
    }

    #[cfg(feature = "system")]
    #[inline]
    pub(crate) fn version_mismatch(found: Version, required: VersionReq) -> Self {
        Self {
            kind: ErrorKind::VersionMismatch { found, required },
        }
    }

    #[cfg(feature = "system")]
    #[inline]
    pub(crate) fn probe(attempts: Vec<String>) -> Self {
        Self {
            kind: ErrorKind::Probe { attempts },
        }
    }

    #[cfg(feature = "cc")]
    #[inline]
    pub(crate) fn missing_env(names: &'static [&'static str]) -> Self {
        Self {
            kind: ErrorKind::MissingEnv { names },
        }
    }

    #[cfg(feature = "cc")]
    #[inline]
    pub(crate) fn missing_compiler(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: ErrorKind::MissingCompiler { path: path.into() },
        }
    }

    #[cfg(feature = "cc")]
    #[inline]
    pub(crate) fn compile(error: impl fmt::Display) -> Self {
        Self {
            kind: ErrorKind::Compile {
                message: error.to_string(),
            },
        }
    }

    /// The input line this error refers to, for parse errors.
    #[inline]
    pub fn line(&self) -> Option<usize> {
        match self.kind {
            ErrorKind::Parse { line, .. } => Some(line),
            _ => None,
        }
    }
}

impl fmt::Debug for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.kind, f)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::Parse { line, message } => {
                write!(f, "parse error at line {line}: {message}")
            }
            ErrorKind::Io { path, error } => {
                write!(f, "{}: {error}", path.display())
            }
            ErrorKind::Version { input } => {
                write!(f, "not a valid sqlite3 version: {input}")
            }
            #[cfg(feature = "system")]
            ErrorKind::VersionMismatch { found, required } => {
                write!(
                    f,
                    "system sqlite3 version {found} does not match required version {required}"
                )
            }
            #[cfg(feature = "system")]
            ErrorKind::Probe { attempts } => {
                write!(f, "no probe for a system sqlite3 succeeded")?;

                for attempt in attempts {
                    write!(f, "; {attempt}")?;
                }

                Ok(())
            }
            #[cfg(feature = "cc")]
            ErrorKind::MissingEnv { names } => {
                write!(
                    f,
                    "expected one of these environment variables to be set: {}",
                    names.join(", ")
                )
            }
            #[cfg(feature = "cc")]
            ErrorKind::MissingCompiler { path } => {
                write!(f, "compiler is not a file: {}", path.display())
            }
            #[cfg(feature = "cc")]
            ErrorKind::Compile { message } => {
                write!(f, "compiling amalgamation: {message}")
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Io { error, .. } => Some(error),
            _ => None,
        }
    }
}
