use std::fs;

use anyhow::{Context, Result};
use sqcfg::{ByteOrder, Config, Synchronous, Threading};

#[test]
fn header_file_round_trip() -> Result<()> {
    let dir = tempfile::tempdir().context("tempdir")?;
    let path = dir.path().join("sqlite_cfg.h");

    let config = Config::sandboxed();
    config.write_header(&path)?;

    let text = fs::read_to_string(&path).context("reading header")?;
    let parsed = Config::parse_header(&text)?;

    assert_eq!(parsed, config);
    Ok(())
}

#[test]
fn write_header_reports_path() {
    let config = Config::recommended();
    let e = config
        .write_header("/definitely/missing/directory/sqlite_cfg.h")
        .unwrap_err();

    assert!(e.to_string().contains("sqlite_cfg.h"));
}

#[test]
fn authored_configuration_survives_overrides() -> Result<()> {
    let dir = tempfile::tempdir().context("tempdir")?;
    let path = dir.path().join("sqlite_cfg.h");

    // A platform configuration authored the way a build would: preset,
    // hand adjustments, environment overrides, checked, written out.
    let mut config = Config::custom_vfs(ByteOrder::LittleEndian);

    config
        .threading(Threading::Serialized)
        .wal_synchronous(Synchronous::Normal)
        .omit_utf16();

    config.apply_env_from([
        (String::from("SQLITE_ENABLE_FTS5"), String::new()),
        (String::from("SQLITE_DEFAULT_PAGE_SIZE"), String::from("8192")),
    ]);

    config.check()?;
    config.write_header(&path)?;

    let parsed = Config::parse_header(&fs::read_to_string(&path)?)?;

    assert!(parsed.contains("SQLITE_ENABLE_FTS5"));
    assert_eq!(parsed.int_value("SQLITE_DEFAULT_PAGE_SIZE"), Some(8192));
    assert_eq!(parsed, config);
    Ok(())
}
