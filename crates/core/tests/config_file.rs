use logscope_core::{
    ExposedLoggerRegistry, ExposureConfig, LoggerBackend, LogscopeError, ManagedLoggerTable,
    StaticNameSource,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_and_run_from_file() {
    let file = write_config(
        r#"{
            "name": "org.a",
            "levels": 2,
            "omit-class-loggers": true,
            "backend": "logback",
            "domain": "app loggers"
        }"#,
    );

    let config = ExposureConfig::from_path(file.path()).unwrap();
    let discovery = config.discovery().unwrap();
    let mut table = ManagedLoggerTable::new(config.backend().unwrap());

    discovery
        .run(
            &StaticNameSource::new(["org.a.b.c.MyClass"]),
            &ExposedLoggerRegistry::new(),
            &mut table,
        )
        .unwrap();

    assert_eq!(table.backend(), LoggerBackend::Logback);
    assert!(table.get("app loggers:name=org.a.b.c,type=org.a.b").is_some());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ExposureConfig::from_path(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, LogscopeError::Io(_)));
}

#[test]
fn test_unsupported_backend_in_file() {
    let file = write_config(r#"{ "name": "org.a", "levels": 1, "backend": "jul" }"#);
    let config = ExposureConfig::from_path(file.path()).unwrap();

    let err = config.discovery().unwrap_err();
    assert!(matches!(err, LogscopeError::UnsupportedBackend(name) if name == "jul"));
}
