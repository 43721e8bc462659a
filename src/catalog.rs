use core::fmt;

/// The value shape a recognized option accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Presence-only flag. A value of `1` is tolerated since many builds
    /// spell omit-style flags as `-DNAME=1`.
    Flag,
    /// Any integer.
    Int,
    /// An integer restricted to an inclusive range.
    IntRange(i64, i64),
    /// An integer restricted to an explicit set of values.
    Enumerated(&'static [i64]),
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Shape::Flag => write!(f, "flag"),
            Shape::Int => write!(f, "int"),
            Shape::IntRange(min, max) => write!(f, "int {min}..={max}"),
            Shape::Enumerated(values) => {
                write!(f, "one of ")?;

                let mut it = values.iter();

                if let Some(first) = it.next() {
                    write!(f, "{first}")?;
                }

                for value in it {
                    write!(f, ", {value}")?;
                }

                Ok(())
            }
        }
    }
}

/// A recognized compile-time option.
#[derive(Debug)]
pub struct Known {
    name: &'static str,
    shape: Shape,
    effect: &'static str,
}

impl Known {
    /// The option name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The value shape the option accepts.
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// A one-line description of the feature the option toggles.
    #[inline]
    pub fn effect(&self) -> &'static str {
        self.effect
    }
}

macro_rules! catalog {
    ($(($name:literal, $shape:expr, $effect:literal),)*) => {
        static KNOWN: &[Known] = &[
            $(Known { name: $name, shape: $shape, effect: $effect },)*
        ];
    };
}

catalog! {
    // Platform capabilities.
    ("SQLITE_OS_OTHER", Shape::IntRange(0, 1), "Target an operating system without a built-in VFS; the embedder supplies one"),
    ("SQLITE_BYTEORDER", Shape::Enumerated(&[0, 1234, 4321]), "Fix the target byte order instead of detecting it at runtime"),
    ("HAVE_ISNAN", Shape::IntRange(0, 1), "Use the system isnan() instead of the built-in replacement"),
    ("HAVE_USLEEP", Shape::IntRange(0, 1), "Use usleep() for sub-second sleeps in the unix VFS"),
    ("HAVE_MALLOC_USABLE_SIZE", Shape::IntRange(0, 1), "Use malloc_usable_size() for accurate heap accounting"),
    ("HAVE_FDATASYNC", Shape::IntRange(0, 1), "Use fdatasync() instead of fsync() where metadata sync is not required"),
    ("HAVE_GMTIME_R", Shape::IntRange(0, 1), "Use the reentrant gmtime_r() in date functions"),
    ("HAVE_LOCALTIME_R", Shape::IntRange(0, 1), "Use the reentrant localtime_r() in date functions"),
    ("HAVE_STRCHRNUL", Shape::IntRange(0, 1), "Use the glibc strchrnul() extension in the printf implementation"),
    ("HAVE_UTIME", Shape::IntRange(0, 1), "Use utime() instead of utimes() for file-time updates"),

    // Behavior defaults.
    ("SQLITE_DQS", Shape::IntRange(0, 3), "Double-quoted string literals: 0 never, 1 DML only, 2 DDL only, 3 everywhere"),
    ("SQLITE_THREADSAFE", Shape::IntRange(0, 2), "Threading mode: 0 single-thread, 1 serialized, 2 multi-thread"),
    ("SQLITE_DEFAULT_MEMSTATUS", Shape::IntRange(0, 1), "Track memory allocation statistics by default"),
    ("SQLITE_DEFAULT_SYNCHRONOUS", Shape::IntRange(0, 3), "Default synchronous level: 0 OFF, 1 NORMAL, 2 FULL, 3 EXTRA"),
    ("SQLITE_DEFAULT_WAL_SYNCHRONOUS", Shape::IntRange(0, 3), "Synchronous level used by databases in WAL mode"),
    ("SQLITE_DEFAULT_LOCKING_MODE", Shape::IntRange(0, 1), "Default locking mode: 0 NORMAL, 1 EXCLUSIVE"),
    ("SQLITE_DEFAULT_CACHE_SIZE", Shape::Int, "Default page-cache size; negative values are interpreted as kibibytes"),
    ("SQLITE_DEFAULT_PAGE_SIZE", Shape::Int, "Default database page size in bytes"),
    ("SQLITE_DEFAULT_FOREIGN_KEYS", Shape::IntRange(0, 1), "Enforce foreign key constraints by default"),
    ("SQLITE_TEMP_STORE", Shape::IntRange(0, 3), "Temporary storage: 0 always file, 1 file default, 2 memory default, 3 always memory"),
    ("SQLITE_MAX_EXPR_DEPTH", Shape::Int, "Maximum expression-tree depth; 0 disables depth tracking entirely"),
    ("SQLITE_MAX_WORKER_THREADS", Shape::IntRange(0, 50), "Maximum number of auxiliary worker threads a statement may start"),
    ("SQLITE_TRUSTED_SCHEMA", Shape::IntRange(0, 1), "Assume database schemas are trusted by default"),
    ("SQLITE_LIKE_DOESNT_MATCH_BLOBS", Shape::Flag, "LIKE and GLOB never match blob operands"),
    ("SQLITE_USE_ALLOCA", Shape::Flag, "Use alloca() for transient allocations where available"),
    ("SQLITE_UNTESTABLE", Shape::Flag, "Remove test-instrumentation hooks from the build"),
    ("SQLITE_ENABLE_API_ARMOR", Shape::Flag, "Detect and reject some misuses of the C API at runtime"),

    // Omitted features.
    ("SQLITE_OMIT_UTF16", Shape::Flag, "Remove the UTF-16 text interfaces; the library is UTF-8 only"),
    ("SQLITE_OMIT_SHARED_CACHE", Shape::Flag, "Remove shared-cache mode"),
    ("SQLITE_OMIT_DECLTYPE", Shape::Flag, "Remove declared-type metadata from prepared statements"),
    ("SQLITE_OMIT_DEPRECATED", Shape::Flag, "Remove interfaces marked deprecated"),
    ("SQLITE_OMIT_PROGRESS_CALLBACK", Shape::Flag, "Remove the progress-handler callback"),
    ("SQLITE_OMIT_AUTOINIT", Shape::Flag, "Require an explicit sqlite3_initialize() call"),
    ("SQLITE_OMIT_LOAD_EXTENSION", Shape::Flag, "Remove run-time loadable extension support"),
    ("SQLITE_OMIT_WAL", Shape::Flag, "Remove write-ahead log support"),

    // Optional features.
    ("SQLITE_ENABLE_FTS5", Shape::Flag, "Compile in the FTS5 full-text search engine"),
    ("SQLITE_ENABLE_RTREE", Shape::Flag, "Compile in the R*Tree index extension"),
    ("SQLITE_ENABLE_GEOPOLY", Shape::Flag, "Compile in the Geopoly extension"),
    ("SQLITE_ENABLE_MATH_FUNCTIONS", Shape::Flag, "Compile in the built-in SQL math functions"),
    ("SQLITE_ENABLE_COLUMN_METADATA", Shape::Flag, "Compile in extra column-origin metadata interfaces"),
    ("SQLITE_ENABLE_DBSTAT_VTAB", Shape::Flag, "Compile in the DBSTAT virtual table"),
    ("SQLITE_ENABLE_STAT4", Shape::Flag, "Collect histogram data for the query planner"),
    ("SQLITE_ENABLE_SESSION", Shape::Flag, "Compile in the session extension"),
    ("SQLITE_ENABLE_PREUPDATE_HOOK", Shape::Flag, "Compile in the pre-update hook interfaces"),
    ("SQLITE_ENABLE_SNAPSHOT", Shape::Flag, "Compile in the WAL snapshot interfaces"),
    ("SQLITE_ENABLE_ICU", Shape::Flag, "Compile in the ICU unicode extension"),

    // Build mode.
    ("NDEBUG", Shape::Flag, "Disable assert() statements; the standard release setting"),
    ("SQLITE_DEBUG", Shape::Flag, "Enable internal assertions and debugging aids"),
}

/// Look up a recognized option by name.
///
/// SQLite's option surface is open-ended, so names that are not found here
/// are still permitted in a [`Config`]; they are simply not checked.
///
/// [`Config`]: crate::Config
///
/// # Examples
///
/// ```
/// let option = sqcfg::known("SQLITE_THREADSAFE").unwrap();
/// assert_eq!(option.shape(), sqcfg::Shape::IntRange(0, 2));
/// assert!(sqcfg::known("SQLITE_NOT_AN_OPTION").is_none());
/// ```
pub fn known(name: &str) -> Option<&'static Known> {
    KNOWN.iter().find(|option| option.name == name)
}

/// All recognized options, in catalog order.
pub fn known_options() -> &'static [Known] {
    KNOWN
}
