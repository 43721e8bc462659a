use core::fmt;
use core::slice;

use crate::define::{Define, DefineValue};

/// Byte order of the target platform, as fixed by `SQLITE_BYTEORDER`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteOrder {
    /// Detect the byte order at runtime.
    Runtime,
    /// Little-endian, encoded as `1234`.
    LittleEndian,
    /// Big-endian, encoded as `4321`.
    BigEndian,
}

impl ByteOrder {
    #[inline]
    pub(crate) fn value(self) -> i64 {
        match self {
            ByteOrder::Runtime => 0,
            ByteOrder::LittleEndian => 1234,
            ByteOrder::BigEndian => 4321,
        }
    }
}

/// Threading mode the library is compiled for, as set by `SQLITE_THREADSAFE`.
///
/// Note that `Single` removes all mutexing; the compiled library may then not
/// be used from more than one thread at all, even with distinct connections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Threading {
    /// `SQLITE_THREADSAFE=0`.
    Single,
    /// `SQLITE_THREADSAFE=1`, the serialized mode.
    Serialized,
    /// `SQLITE_THREADSAFE=2`, one connection per thread.
    Multi,
}

impl Threading {
    #[inline]
    pub(crate) fn value(self) -> i64 {
        match self {
            Threading::Single => 0,
            Threading::Serialized => 1,
            Threading::Multi => 2,
        }
    }
}

/// Policy for double-quoted string literals, as set by `SQLITE_DQS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DoubleQuotedStrings {
    /// Double-quoted strings are always a syntax error.
    Off,
    /// Accepted in DML statements only.
    DmlOnly,
    /// Accepted in DDL statements only.
    DdlOnly,
    /// Accepted everywhere, the historical default.
    On,
}

impl DoubleQuotedStrings {
    #[inline]
    pub(crate) fn value(self) -> i64 {
        match self {
            DoubleQuotedStrings::Off => 0,
            DoubleQuotedStrings::DmlOnly => 1,
            DoubleQuotedStrings::DdlOnly => 2,
            DoubleQuotedStrings::On => 3,
        }
    }
}

/// A synchronous level, used for `SQLITE_DEFAULT_SYNCHRONOUS` and
/// `SQLITE_DEFAULT_WAL_SYNCHRONOUS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Synchronous {
    /// `OFF`: hand writes to the operating system and keep going.
    Off,
    /// `NORMAL`: sync at the critical moments only.
    Normal,
    /// `FULL`: sync on every transaction.
    Full,
    /// `EXTRA`: like `FULL`, plus the directory containing a rollback journal.
    Extra,
}

impl Synchronous {
    #[inline]
    pub(crate) fn value(self) -> i64 {
        match self {
            Synchronous::Off => 0,
            Synchronous::Normal => 1,
            Synchronous::Full => 2,
            Synchronous::Extra => 3,
        }
    }
}

/// Default locking mode, as set by `SQLITE_DEFAULT_LOCKING_MODE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockingMode {
    /// Locks are released at the end of each transaction.
    Normal,
    /// Locks are held until the connection closes. Required to use WAL
    /// databases without shared memory.
    Exclusive,
}

impl LockingMode {
    #[inline]
    pub(crate) fn value(self) -> i64 {
        match self {
            LockingMode::Normal => 0,
            LockingMode::Exclusive => 1,
        }
    }
}

/// Where temporary tables and indexes are stored, as set by
/// `SQLITE_TEMP_STORE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TempStore {
    /// Always use temporary files.
    File,
    /// Files by default, overridable with `PRAGMA temp_store`.
    DefaultFile,
    /// Memory by default, overridable with `PRAGMA temp_store`.
    DefaultMemory,
    /// Always use memory.
    Memory,
}

impl TempStore {
    #[inline]
    pub(crate) fn value(self) -> i64 {
        match self {
            TempStore::File => 0,
            TempStore::DefaultFile => 1,
            TempStore::DefaultMemory => 2,
            TempStore::Memory => 3,
        }
    }
}

/// An ordered set of compile-time options.
///
/// Names are unique; setting a name that is already present replaces its
/// value in place, so the authored ordering of a configuration is stable.
///
/// # Examples
///
/// ```
/// use sqcfg::{Config, Threading};
///
/// let mut config = Config::new();
///
/// config
///     .threading(Threading::Single)
///     .omit_utf16()
///     .max_expr_depth(0);
///
/// assert_eq!(config.int_value("SQLITE_THREADSAFE"), Some(0));
/// assert!(config.contains("SQLITE_OMIT_UTF16"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    defines: Vec<Define>,
}

impl Config {
    /// Construct an empty configuration.
    #[inline]
    pub fn new() -> Self {
        Self {
            defines: Vec::new(),
        }
    }

    /// Define a presence-only flag.
    #[inline]
    pub fn set(&mut self, name: &str) -> &mut Self {
        self.put(Define::flag(name));
        self
    }

    /// Define an option to an integer value.
    #[inline]
    pub fn set_int(&mut self, name: &str, value: i64) -> &mut Self {
        self.put(Define::int(name, value));
        self
    }

    /// Define an option to a raw token value.
    #[inline]
    pub fn set_text(&mut self, name: &str, value: &str) -> &mut Self {
        self.put(Define::text(name, value));
        self
    }

    /// Remove an option if present.
    #[inline]
    pub fn unset(&mut self, name: &str) -> &mut Self {
        self.defines.retain(|define| define.name() != name);
        self
    }

    /// Get the entry for the given name.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Define> {
        self.defines.iter().find(|define| define.name() == name)
    }

    /// Test if an option is defined, with or without a value.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The integer value of an option, if it is defined to one.
    #[inline]
    pub fn int_value(&self, name: &str) -> Option<i64> {
        self.get(name)?.as_int()
    }

    /// Iterate over the entries in authored order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Define> {
        self.defines.iter()
    }

    /// The number of defined options.
    #[inline]
    pub fn len(&self) -> usize {
        self.defines.len()
    }

    /// Test if the configuration is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.defines.is_empty()
    }

    pub(crate) fn put(&mut self, define: Define) {
        if let Some(existing) = self
            .defines
            .iter_mut()
            .find(|existing| existing.name() == define.name())
        {
            *existing = define;
        } else {
            self.defines.push(define);
        }
    }
}

/// Typed setters for the options this crate models directly. Anything not
/// covered here can be set through [`set`], [`set_int`] or [`set_text`].
///
/// [`set`]: Self::set
/// [`set_int`]: Self::set_int
/// [`set_text`]: Self::set_text
impl Config {
    /// Build for an operating system without a built-in VFS
    /// (`SQLITE_OS_OTHER=1`). The embedder registers its own VFS at runtime.
    #[inline]
    pub fn os_other(&mut self) -> &mut Self {
        self.set_int("SQLITE_OS_OTHER", 1)
    }

    /// Fix the target byte order instead of detecting it at runtime.
    #[inline]
    pub fn byte_order(&mut self, order: ByteOrder) -> &mut Self {
        self.set_int("SQLITE_BYTEORDER", order.value())
    }

    /// Declare that the system `isnan()` is available.
    #[inline]
    pub fn have_isnan(&mut self) -> &mut Self {
        self.set_int("HAVE_ISNAN", 1)
    }

    /// Declare that `usleep()` is available.
    #[inline]
    pub fn have_usleep(&mut self) -> &mut Self {
        self.set_int("HAVE_USLEEP", 1)
    }

    /// Declare that `malloc_usable_size()` is available.
    #[inline]
    pub fn have_malloc_usable_size(&mut self) -> &mut Self {
        self.set_int("HAVE_MALLOC_USABLE_SIZE", 1)
    }

    /// Select the threading mode the library is compiled for.
    #[inline]
    pub fn threading(&mut self, mode: Threading) -> &mut Self {
        self.set_int("SQLITE_THREADSAFE", mode.value())
    }

    /// Select the policy for double-quoted string literals.
    #[inline]
    pub fn double_quoted_strings(&mut self, mode: DoubleQuotedStrings) -> &mut Self {
        self.set_int("SQLITE_DQS", mode.value())
    }

    /// Track memory allocation statistics by default.
    #[inline]
    pub fn memory_status(&mut self, enabled: bool) -> &mut Self {
        self.set_int("SQLITE_DEFAULT_MEMSTATUS", i64::from(enabled))
    }

    /// Default synchronous level for rollback-journal databases.
    #[inline]
    pub fn synchronous(&mut self, level: Synchronous) -> &mut Self {
        self.set_int("SQLITE_DEFAULT_SYNCHRONOUS", level.value())
    }

    /// Synchronous level used by databases in WAL mode.
    ///
    /// `NORMAL` is safe in WAL mode since transactions are durable across
    /// application crashes regardless, which is why it is the recommended
    /// setting.
    #[inline]
    pub fn wal_synchronous(&mut self, level: Synchronous) -> &mut Self {
        self.set_int("SQLITE_DEFAULT_WAL_SYNCHRONOUS", level.value())
    }

    /// Default locking mode for new connections.
    #[inline]
    pub fn locking_mode(&mut self, mode: LockingMode) -> &mut Self {
        self.set_int("SQLITE_DEFAULT_LOCKING_MODE", mode.value())
    }

    /// Where temporary tables and indexes are stored.
    #[inline]
    pub fn temp_store(&mut self, mode: TempStore) -> &mut Self {
        self.set_int("SQLITE_TEMP_STORE", mode.value())
    }

    /// Maximum expression-tree depth. A depth of `0` removes the tracking
    /// code entirely, which is the recommended setting.
    #[inline]
    pub fn max_expr_depth(&mut self, depth: u32) -> &mut Self {
        self.set_int("SQLITE_MAX_EXPR_DEPTH", i64::from(depth))
    }

    /// Maximum number of auxiliary worker threads a single statement may
    /// start. Meaningless unless the library is threadsafe.
    #[inline]
    pub fn max_worker_threads(&mut self, count: u32) -> &mut Self {
        self.set_int("SQLITE_MAX_WORKER_THREADS", i64::from(count))
    }

    /// `LIKE` and `GLOB` never match blob operands.
    #[inline]
    pub fn like_doesnt_match_blobs(&mut self) -> &mut Self {
        self.set("SQLITE_LIKE_DOESNT_MATCH_BLOBS")
    }

    /// Use `alloca()` for transient allocations where available.
    #[inline]
    pub fn use_alloca(&mut self) -> &mut Self {
        self.set("SQLITE_USE_ALLOCA")
    }

    /// Remove test-instrumentation hooks from the build.
    #[inline]
    pub fn untestable(&mut self) -> &mut Self {
        self.set("SQLITE_UNTESTABLE")
    }

    /// Remove the UTF-16 text interfaces.
    #[inline]
    pub fn omit_utf16(&mut self) -> &mut Self {
        self.set("SQLITE_OMIT_UTF16")
    }

    /// Remove shared-cache mode.
    #[inline]
    pub fn omit_shared_cache(&mut self) -> &mut Self {
        self.set("SQLITE_OMIT_SHARED_CACHE")
    }

    /// Remove declared-type metadata from prepared statements.
    #[inline]
    pub fn omit_decltype(&mut self) -> &mut Self {
        self.set("SQLITE_OMIT_DECLTYPE")
    }

    /// Remove interfaces marked deprecated.
    #[inline]
    pub fn omit_deprecated(&mut self) -> &mut Self {
        self.set("SQLITE_OMIT_DEPRECATED")
    }

    /// Remove the progress-handler callback.
    #[inline]
    pub fn omit_progress_callback(&mut self) -> &mut Self {
        self.set("SQLITE_OMIT_PROGRESS_CALLBACK")
    }

    /// Require an explicit `sqlite3_initialize()` call instead of
    /// initializing lazily on first use.
    #[inline]
    pub fn omit_autoinit(&mut self) -> &mut Self {
        self.set("SQLITE_OMIT_AUTOINIT")
    }

    /// Remove run-time loadable extension support.
    #[inline]
    pub fn omit_load_extension(&mut self) -> &mut Self {
        self.set("SQLITE_OMIT_LOAD_EXTENSION")
    }

    /// Remove write-ahead log support.
    #[inline]
    pub fn omit_wal(&mut self) -> &mut Self {
        self.set("SQLITE_OMIT_WAL")
    }
}

impl Default for Config {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Config {
    type Item = &'a Define;
    type IntoIter = slice::Iter<'a, Define>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.defines.iter()
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for define in &self.defines {
            writeln!(f, "{define}")?;
        }

        Ok(())
    }
}
