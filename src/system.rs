use semver::{Version, VersionReq};

use crate::error::{Error, Result};

/// A system sqlite3 located through one of the supported probes.
///
/// vcpkg does not report a library version, so `version` is only available
/// when the library was found through pkg-config.
#[derive(Debug)]
pub struct SystemLibrary {
    version: Option<Version>,
}

impl SystemLibrary {
    /// The version reported for the library, when known.
    #[inline]
    pub fn version(&self) -> Option<&Version> {
        self.version.as_ref()
    }
}

/// Locate a system sqlite3 satisfying the given version requirement.
///
/// Tries `vcpkg` first and `pkg-config` second, the same order a build
/// script consuming this configuration would. Probe failures are collected
/// so the error reports every method that was attempted; a version mismatch
/// reported by pkg-config fails immediately since linking an older library
/// than the configuration assumes is not recoverable by probing further.
pub fn find_system(required: &VersionReq) -> Result<SystemLibrary> {
    let mut attempts = Vec::new();

    match vcpkg::find_package("sqlite3") {
        Ok(..) => {
            return Ok(SystemLibrary { version: None });
        }
        Err(error) => {
            attempts.push(format!("vcpkg failed: {error}"));
        }
    }

    match pkg_config::find_library("sqlite3") {
        Ok(library) => {
            let Ok(version) = library.version.parse::<Version>() else {
                return Err(Error::version(library.version));
            };

            if !required.matches(&version) {
                return Err(Error::version_mismatch(version, required.clone()));
            }

            return Ok(SystemLibrary {
                version: Some(version),
            });
        }
        Err(error) => {
            attempts.push(format!("pkg-config failed: {error}"));
        }
    }

    Err(Error::probe(attempts))
}
