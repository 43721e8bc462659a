use crate::config::{
    ByteOrder, Config, DoubleQuotedStrings, LockingMode, Synchronous, Threading,
};

/// Per-platform presets. A configuration is authored once per target and
/// consumed when the amalgamation is compiled, so these start from the
/// combinations that are known to work together.
impl Config {
    /// The recommended option set for new applications.
    ///
    /// Disables double-quoted string literals, memory statistics and
    /// expression-depth tracking, uses `NORMAL` synchronous in WAL mode, and
    /// omits the feature set most embedders never use.
    ///
    /// # Examples
    ///
    /// ```
    /// let config = sqcfg::Config::recommended();
    ///
    /// assert!(config.contains("SQLITE_OMIT_SHARED_CACHE"));
    /// assert_eq!(config.int_value("SQLITE_DQS"), Some(0));
    /// config.check()?;
    /// # Ok::<_, sqcfg::Conflicts>(())
    /// ```
    pub fn recommended() -> Self {
        let mut config = Self::new();
        config.apply_recommended();
        config
    }

    /// Platform block for a target that provides its own VFS.
    ///
    /// Sets `SQLITE_OS_OTHER`, fixes the byte order, and declares the libc
    /// capabilities a hosted toolchain provides.
    pub fn custom_vfs(order: ByteOrder) -> Self {
        let mut config = Self::new();

        config
            .os_other()
            .byte_order(order)
            .have_isnan()
            .have_usleep()
            .have_malloc_usable_size();

        config
    }

    /// The full configuration for a sandboxed, single-threaded, UTF-8-only
    /// build with a custom VFS, such as an engine compiled to wasm.
    ///
    /// This is [`custom_vfs`] plus [`recommended`], with exclusive locking so
    /// WAL databases work without shared memory, no UTF-16 interfaces, and
    /// the test instrumentation removed.
    ///
    /// [`custom_vfs`]: Self::custom_vfs
    /// [`recommended`]: Self::recommended
    ///
    /// # Examples
    ///
    /// ```
    /// let config = sqcfg::Config::sandboxed();
    ///
    /// assert_eq!(config.int_value("SQLITE_THREADSAFE"), Some(0));
    /// assert_eq!(config.int_value("SQLITE_DEFAULT_LOCKING_MODE"), Some(1));
    /// assert!(config.contains("SQLITE_OMIT_UTF16"));
    /// config.check()?;
    /// # Ok::<_, sqcfg::Conflicts>(())
    /// ```
    pub fn sandboxed() -> Self {
        let mut config = Self::custom_vfs(ByteOrder::LittleEndian);
        config.apply_recommended();

        config
            .locking_mode(LockingMode::Exclusive)
            .omit_utf16()
            .untestable();

        config
    }

    fn apply_recommended(&mut self) {
        self.double_quoted_strings(DoubleQuotedStrings::Off)
            .threading(Threading::Single)
            .memory_status(false)
            .wal_synchronous(Synchronous::Normal)
            .like_doesnt_match_blobs()
            .max_expr_depth(0)
            .omit_decltype()
            .omit_deprecated()
            .omit_progress_callback()
            .omit_shared_cache()
            .omit_autoinit()
            .use_alloca();
    }
}
