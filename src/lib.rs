//! [<img alt="github" src="https://img.shields.io/badge/github-sqcfg/sqcfg-8da0cb?style=for-the-badge&logo=github" height="20">](https://github.com/sqcfg/sqcfg)
//! [<img alt="crates.io" src="https://img.shields.io/crates/v/sqcfg.svg?style=for-the-badge&color=fc8d62&logo=rust" height="20">](https://crates.io/crates/sqcfg)
//! [<img alt="docs.rs" src="https://img.shields.io/badge/docs.rs-sqcfg-66c2a5?style=for-the-badge&logoColor=white" height="20">](https://docs.rs/sqcfg)
//!
//! Typed build-time configuration for embedded SQLite builds.
//!
//! An embedded SQLite is shaped long before it runs: a flat set of
//! compile-time options decides which engine features exist at all, what the
//! defaults are, and which platform capabilities the build may assume. That
//! set is usually authored as a loose configuration header and consumed once
//! by the C build. This crate models it as data instead: an ordered
//! [`Config`] of named flags that can be rendered as a header, applied to a
//! [`cc::Build`], checked for combinations that would silently misbehave,
//! and overridden from the environment.
//!
//! <br>
//!
//! ## Usage
//!
//! Configurations are authored per target platform, starting from a preset:
//!
//! ```
//! use sqcfg::{ByteOrder, Config};
//!
//! let mut config = Config::recommended();
//! config.byte_order(ByteOrder::LittleEndian).omit_utf16();
//! config.check()?;
//!
//! let header = config.to_header();
//! assert!(header.contains("#define SQLITE_OMIT_UTF16"));
//! # Ok::<_, sqcfg::Conflicts>(())
//! ```
//!
//! A build script compiles an amalgamation under a configuration through
//! [`Bundle`], with `SQLITE_*` environment variables layered on top the way
//! `-sys` crates allow:
//!
//! ```no_run
//! use sqcfg::{Bundle, Config};
//!
//! let mut config = Config::sandboxed();
//! config.apply_env();
//!
//! Bundle::new("source/sqlite3.c", config).compile("libsqlite3.a")?;
//! # Ok::<_, sqcfg::Error>(())
//! ```
//!
//! Misconfiguration that would otherwise only surface as a latent behavior
//! difference in the compiled engine is caught by [`Config::check`]:
//!
//! ```
//! use sqcfg::{Config, Synchronous};
//!
//! let mut config = Config::new();
//! config.omit_wal().wal_synchronous(Synchronous::Normal);
//!
//! assert!(config.check().is_err());
//! ```
//!
//! <br>
//!
//! ## Features
//!
//! * `cc` - Enable [`Bundle`], the [`cc`]-based amalgamation build
//!   integration. Enabled by default.
//! * `system` - Enable [`find_system`], probing for a system sqlite3 through
//!   `vcpkg` and `pkg-config` with a [`semver`] version requirement. Enabled
//!   by default.
//!
//! [`cc`]: https://docs.rs/cc
//! [`semver`]: https://docs.rs/semver

#![warn(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(test)]
mod tests;

#[cfg(feature = "cc")]
mod bundle;
mod catalog;
mod check;
mod config;
mod define;
mod env;
mod error;
mod header;
mod profile;
#[cfg(feature = "system")]
mod system;
mod version;

#[cfg(feature = "cc")]
#[cfg_attr(docsrs, doc(cfg(feature = "cc")))]
#[doc(inline)]
pub use self::bundle::Bundle;
#[doc(inline)]
pub use self::catalog::{Known, Shape, known, known_options};
#[doc(inline)]
pub use self::check::{Conflict, Conflicts};
#[doc(inline)]
pub use self::config::{
    ByteOrder, Config, DoubleQuotedStrings, LockingMode, Synchronous, TempStore, Threading,
};
#[doc(inline)]
pub use self::define::{Define, DefineValue};
#[doc(inline)]
pub use self::error::{Error, Result};
#[cfg(feature = "system")]
#[cfg_attr(docsrs, doc(cfg(feature = "system")))]
#[doc(inline)]
pub use self::system::{SystemLibrary, find_system};
#[doc(inline)]
pub use self::version::{from_version_number, version_number};
