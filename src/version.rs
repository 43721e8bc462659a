use semver::Version;

use crate::error::{Error, Result};

// Largest major whose encoding still fits in an i64.
const MAX_MAJOR: u64 = i64::MAX as u64 / 1_000_000;

/// Encode a version the way `SQLITE_VERSION_NUMBER` does.
///
/// The version `3.51.1` corresponds to the integer `3051001`.
///
/// # Errors
///
/// Minor and patch components get three digits each in the encoding, so
/// values above `999` would alias a different version and are rejected, as
/// is a major component too large for the result type.
///
/// # Examples
///
/// ```
/// let version: semver::Version = "3.51.1".parse()?;
/// assert_eq!(sqcfg::version_number(&version)?, 3051001);
///
/// let bogus = semver::Version::new(3, 1000, 0);
/// assert!(sqcfg::version_number(&bogus).is_err());
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
pub fn version_number(version: &Version) -> Result<i64> {
    if version.minor > 999 || version.patch > 999 || version.major > MAX_MAJOR {
        return Err(Error::version(version.to_string()));
    }

    Ok(version.major as i64 * 1_000_000 + version.minor as i64 * 1_000 + version.patch as i64)
}

/// Decode a `SQLITE_VERSION_NUMBER`-style integer back into a version.
///
/// # Examples
///
/// ```
/// let version = sqcfg::from_version_number(3051001)?;
/// assert_eq!(version, semver::Version::new(3, 51, 1));
/// assert!(sqcfg::from_version_number(-1).is_err());
/// # Ok::<_, sqcfg::Error>(())
/// ```
pub fn from_version_number(number: i64) -> Result<Version> {
    if number < 0 {
        return Err(Error::version(number.to_string()));
    }

    let major = number / 1_000_000;
    let minor = number / 1_000 % 1_000;
    let patch = number % 1_000;

    Ok(Version::new(major as u64, minor as u64, patch as u64))
}
