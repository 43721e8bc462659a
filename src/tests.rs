use crate::{
    ByteOrder, Config, Conflict, Define, DefineValue, Shape, Synchronous, Threading,
    from_version_number, known, known_options, version_number,
};

#[test]
fn define_rendering() {
    assert_eq!(
        Define::flag("SQLITE_OMIT_UTF16").to_string(),
        "#define SQLITE_OMIT_UTF16"
    );
    assert_eq!(
        Define::int("SQLITE_THREADSAFE", 0).to_string(),
        "#define SQLITE_THREADSAFE 0"
    );
    assert_eq!(
        Define::text("SQLITE_DEFAULT_FILE_PERMISSIONS", "0600").to_string(),
        "#define SQLITE_DEFAULT_FILE_PERMISSIONS 0600"
    );
}

#[test]
fn config_set_replaces_in_place() {
    let mut config = Config::new();

    config
        .threading(Threading::Single)
        .omit_utf16()
        .max_expr_depth(0);

    config.threading(Threading::Multi);

    let names = config.iter().map(Define::name).collect::<Vec<_>>();

    assert_eq!(
        names,
        [
            "SQLITE_THREADSAFE",
            "SQLITE_OMIT_UTF16",
            "SQLITE_MAX_EXPR_DEPTH"
        ]
    );

    assert_eq!(config.int_value("SQLITE_THREADSAFE"), Some(2));
}

#[test]
fn config_unset() {
    let mut config = Config::recommended();
    assert!(config.contains("SQLITE_USE_ALLOCA"));

    config.unset("SQLITE_USE_ALLOCA");
    assert!(!config.contains("SQLITE_USE_ALLOCA"));
}

#[test]
fn sandboxed_header() {
    let expected = "\
#define SQLITE_OS_OTHER 1
#define SQLITE_BYTEORDER 1234
#define HAVE_ISNAN 1
#define HAVE_USLEEP 1
#define HAVE_MALLOC_USABLE_SIZE 1
#define SQLITE_DQS 0
#define SQLITE_THREADSAFE 0
#define SQLITE_DEFAULT_MEMSTATUS 0
#define SQLITE_DEFAULT_WAL_SYNCHRONOUS 1
#define SQLITE_LIKE_DOESNT_MATCH_BLOBS
#define SQLITE_MAX_EXPR_DEPTH 0
#define SQLITE_OMIT_DECLTYPE
#define SQLITE_OMIT_DEPRECATED
#define SQLITE_OMIT_PROGRESS_CALLBACK
#define SQLITE_OMIT_SHARED_CACHE
#define SQLITE_OMIT_AUTOINIT
#define SQLITE_USE_ALLOCA
#define SQLITE_DEFAULT_LOCKING_MODE 1
#define SQLITE_OMIT_UTF16
#define SQLITE_UNTESTABLE
";

    assert_eq!(Config::sandboxed().to_header(), expected);
}

#[test]
fn presets_are_consistent() {
    Config::recommended().check().unwrap();
    Config::custom_vfs(ByteOrder::BigEndian).check().unwrap();
    Config::sandboxed().check().unwrap();
}

#[test]
fn parse_header_with_comments() {
    let text = "\
// Platform Configuration

#define SQLITE_OS_OTHER 1
#define SQLITE_BYTEORDER 1234

// Go uses UTF-8 everywhere.
#define SQLITE_OMIT_UTF16
#define SQLITE_THREADSAFE 0 // single-threaded
";

    let config = Config::parse_header(text).unwrap();

    assert_eq!(config.len(), 4);
    assert_eq!(config.int_value("SQLITE_BYTEORDER"), Some(1234));
    assert_eq!(
        config.get("SQLITE_OMIT_UTF16").unwrap().value(),
        &DefineValue::Flag
    );
    assert_eq!(config.int_value("SQLITE_THREADSAFE"), Some(0));
}

#[test]
fn parse_header_round_trip() {
    let config = Config::sandboxed();
    let parsed = Config::parse_header(&config.to_header()).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn parse_header_raw_token_value() {
    let config = Config::parse_header("#define SQLITE_EXTRA_INIT core_init\n").unwrap();

    assert_eq!(
        config.get("SQLITE_EXTRA_INIT").unwrap().value(),
        &DefineValue::Text("core_init".into())
    );
}

#[test]
fn parse_header_errors() {
    let e = Config::parse_header("#define A\n#include <stdio.h>\n").unwrap_err();
    assert_eq!(e.line(), Some(2));

    let e = Config::parse_header("#define 9NAME 1\n").unwrap_err();
    assert_eq!(e.line(), Some(1));

    let e = Config::parse_header("#defineSQLITE_OMIT_UTF16\n").unwrap_err();
    assert_eq!(e.line(), Some(1));
}

#[test]
fn env_overrides() {
    let mut config = Config::sandboxed();

    config.apply_env_from([
        (String::from("SQLITE_THREADSAFE"), String::from("2")),
        (String::from("SQLITE_ENABLE_FTS5"), String::new()),
        (String::from("HAVE_FDATASYNC"), String::from("1")),
        (String::from("CARGO_PKG_NAME"), String::from("ignored")),
        (String::from("SQLITE_EXTRA_INIT"), String::from("core_init")),
    ]);

    assert_eq!(config.int_value("SQLITE_THREADSAFE"), Some(2));
    assert!(config.contains("SQLITE_ENABLE_FTS5"));
    assert_eq!(config.int_value("HAVE_FDATASYNC"), Some(1));
    assert!(!config.contains("CARGO_PKG_NAME"));
    assert_eq!(
        config.get("SQLITE_EXTRA_INIT").unwrap().value(),
        &DefineValue::Text("core_init".into())
    );

    // Replacement happened in place.
    assert_eq!(
        config.iter().map(Define::name).nth(6),
        Some("SQLITE_THREADSAFE")
    );
}

#[test]
fn presets_use_recognized_names() {
    // Every option a preset sets has a catalog entry, so shape checking
    // covers all of them. sandboxed() is the superset of the presets.
    for define in Config::sandboxed().iter() {
        assert!(
            known(define.name()).is_some(),
            "{} is missing from the catalog",
            define.name()
        );
    }
}

#[test]
fn override_name_prefixes() {
    assert!(crate::env::is_override("SQLITE_ENABLE_FTS5"));
    assert!(crate::env::is_override("HAVE_FDATASYNC"));
    assert!(!crate::env::is_override("CARGO_MANIFEST_DIR"));
    assert!(!crate::env::is_override("PATH"));
}

#[test]
fn catalog_lookup() {
    let option = known("SQLITE_BYTEORDER").unwrap();
    assert_eq!(option.shape(), Shape::Enumerated(&[0, 1234, 4321]));

    let option = known("SQLITE_OMIT_UTF16").unwrap();
    assert_eq!(option.shape(), Shape::Flag);
    assert!(!option.effect().is_empty());

    assert!(known("SQLITE_MADE_UP").is_none());
    assert!(!known_options().is_empty());
}

#[test]
fn check_out_of_range() {
    let mut config = Config::new();
    config.set_int("SQLITE_DQS", 7);

    let conflicts = config.conflicts();

    assert_eq!(
        conflicts,
        [Conflict::OutOfRange {
            name: String::from("SQLITE_DQS"),
            value: 7,
            min: 0,
            max: 3,
        }]
    );
}

#[test]
fn check_enumerated() {
    let mut config = Config::new();
    config.set_int("SQLITE_BYTEORDER", 1111);

    let conflicts = config.conflicts();

    assert_eq!(
        conflicts,
        [Conflict::NotAllowed {
            name: String::from("SQLITE_BYTEORDER"),
            value: 1111,
            allowed: &[0, 1234, 4321],
        }]
    );
}

#[test]
fn check_value_shapes() {
    // Omit-style flags tolerate a literal 1.
    let mut config = Config::new();
    config.set_int("SQLITE_OMIT_LOAD_EXTENSION", 1);
    assert!(config.check().is_ok());

    let mut config = Config::new();
    config.set_int("SQLITE_OMIT_LOAD_EXTENSION", 2);
    assert_eq!(
        config.conflicts(),
        [Conflict::UnexpectedValue {
            name: String::from("SQLITE_OMIT_LOAD_EXTENSION"),
        }]
    );

    let mut config = Config::new();
    config.set("SQLITE_THREADSAFE");
    assert_eq!(
        config.conflicts(),
        [Conflict::ExpectedValue {
            name: String::from("SQLITE_THREADSAFE"),
        }]
    );

    let mut config = Config::new();
    config.set_text("SQLITE_THREADSAFE", "yes");
    assert_eq!(
        config.conflicts(),
        [Conflict::NotAnInteger {
            name: String::from("SQLITE_THREADSAFE"),
        }]
    );
}

#[test]
fn check_unknown_names_pass() {
    let mut config = Config::new();
    config.set("SQLITE_SOME_FUTURE_OPTION");
    config.set_int("SQLITE_ANOTHER", 999);
    assert!(config.check().is_ok());
}

#[test]
fn check_incompatible_pairs() {
    let mut config = Config::new();
    config.omit_wal().wal_synchronous(Synchronous::Normal);
    assert_eq!(config.conflicts().len(), 1);

    let mut config = Config::new();
    config.threading(Threading::Single).max_worker_threads(4);
    assert_eq!(config.conflicts().len(), 1);

    let mut config = Config::new();
    config.omit_utf16().set("SQLITE_ENABLE_ICU");
    assert_eq!(config.conflicts().len(), 1);

    let mut config = Config::new();
    config.set("SQLITE_DEBUG").set("NDEBUG");
    assert_eq!(config.conflicts().len(), 1);

    // Workers on a serialized build are fine.
    let mut config = Config::new();
    config.threading(Threading::Serialized).max_worker_threads(4);
    assert!(config.check().is_ok());
}

#[test]
fn check_reports_everything() {
    let mut config = Config::new();

    config
        .set_int("SQLITE_DQS", 7)
        .omit_wal()
        .wal_synchronous(Synchronous::Normal)
        .set("SQLITE_DEBUG")
        .set("NDEBUG");

    let conflicts = config.check().unwrap_err();
    assert_eq!(conflicts.len(), 3);
}

#[test]
fn version_numbers() {
    let version = semver::Version::new(3, 51, 1);
    assert_eq!(version_number(&version).unwrap(), 3051001);
    assert_eq!(from_version_number(3051001).unwrap(), version);

    let version = semver::Version::new(3, 8, 0);
    assert_eq!(version_number(&version).unwrap(), 3008000);
    assert_eq!(from_version_number(3008000).unwrap(), version);

    assert!(from_version_number(-1).is_err());
}

#[test]
fn version_numbers_reject_aliasing() {
    // 3.1000.0 would encode to the same integer as 4.0.0.
    assert!(version_number(&semver::Version::new(3, 1000, 0)).is_err());
    assert!(version_number(&semver::Version::new(3, 0, 1000)).is_err());
    assert!(version_number(&semver::Version::new(u64::MAX, 0, 0)).is_err());

    assert_eq!(
        version_number(&semver::Version::new(3, 999, 999)).unwrap(),
        3999999
    );
}
