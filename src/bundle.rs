use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use cc::Build;

use crate::config::Config;
use crate::error::{Error, Result};

const SDK_PATH_ENV: &[&str] = &["SQCFG_WASI_SDK_PATH", "WASI_SDK_PATH"];
const WASI_TARGET_ENV: &[&str] = &["SQCFG_WASI_TARGET_ENV", "WASI_TARGET_ENV"];

/// An amalgamation source file paired with the configuration to compile it
/// under. Intended to be driven from a build script.
///
/// # Examples
///
/// ```no_run
/// use sqcfg::{Bundle, Config};
///
/// let mut config = Config::sandboxed();
/// config.apply_env();
///
/// Bundle::new("source/sqlite3.c", config).compile("libsqlite3.a")?;
/// # Ok::<_, sqcfg::Error>(())
/// ```
pub struct Bundle {
    source: PathBuf,
    config: Config,
}

impl Bundle {
    /// Construct a bundle from a path to `sqlite3.c` and a configuration.
    #[inline]
    pub fn new(source: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            source: source.into(),
            config,
        }
    }

    /// The amalgamation path.
    #[inline]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The configuration the amalgamation is compiled under.
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Mutable access to the configuration.
    #[inline]
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Apply the configuration to a [`Build`] as `-D` defines.
    ///
    /// `NDEBUG` is added unless the configuration already decides the build
    /// mode by setting `NDEBUG` or `SQLITE_DEBUG` itself.
    pub fn apply(&self, build: &mut Build) {
        for define in self.config.iter() {
            build.define(define.name(), define.cc_value().as_deref());
        }

        if !self.config.contains("NDEBUG") && !self.config.contains("SQLITE_DEBUG") {
            build.define("NDEBUG", "1");
        }
    }

    /// Compile the amalgamation into a static library with the given name.
    ///
    /// Emits the `cargo:rerun-if-*` lines a build script needs so the
    /// library is rebuilt when the source or the environment overrides
    /// change.
    ///
    /// When the target family is `wasm`, the compiler is taken from the
    /// `SQCFG_WASI_SDK_PATH` or `WASI_SDK_PATH` environment variable and the
    /// configuration is forced single-threaded without loadable extensions,
    /// since neither threads nor dlopen exist there.
    pub fn compile(&self, output: &str) -> Result<()> {
        let mut build = Build::new();
        build.file(&self.source);
        self.apply(&mut build);

        for define in self.config.iter() {
            if crate::env::is_override(define.name()) {
                println!("cargo:rerun-if-env-changed={}", define.name());
            }
        }

        println!("cargo:rerun-if-changed={}", self.source.display());
        println!("cargo:rerun-if-env-changed=CARGO_CFG_TARGET_FAMILY");
        println!("cargo:rerun-if-env-changed=CARGO_CFG_TARGET_OS");

        if let Ok(target_family) = env::var("CARGO_CFG_TARGET_FAMILY")
            && let Ok(target_os) = env::var("CARGO_CFG_TARGET_OS")
            && target_family == "wasm"
        {
            let mut sdk_path = PathBuf::from(var(SDK_PATH_ENV)?);

            sdk_path.push("bin");
            sdk_path.push("clang");

            if !sdk_path.is_file() {
                return Err(Error::missing_compiler(sdk_path));
            }

            build.compiler(sdk_path);

            if target_os != "wasi" {
                let target_env = var(WASI_TARGET_ENV)?;
                let target = format!("wasm32-wasi{}", target_env.to_string_lossy());
                build.target(&target);
            }

            build.define("__wasi__", None);
            build.define("SQLITE_THREADSAFE", "0");
            build.define("SQLITE_OMIT_LOAD_EXTENSION", "1");
            build.flag("-Wno-unused");
            build.flag("-Wno-unused-parameter");
        }

        build.try_compile(output).map_err(Error::compile)
    }
}

fn var(names: &'static [&'static str]) -> Result<OsString> {
    for &name in names {
        println!("cargo:rerun-if-env-changed={name}");

        if let Some(value) = env::var_os(name) {
            return Ok(value);
        }
    }

    Err(Error::missing_env(names))
}
