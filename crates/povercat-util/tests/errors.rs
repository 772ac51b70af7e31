use std::path::PathBuf;

use povercat_util::errors::PovercatError;

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = PovercatError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_catalog_not_found_names_the_path() {
    let err = PovercatError::CatalogNotFound {
        path: PathBuf::from("gradle/missing.toml"),
    };
    assert_eq!(
        err.to_string(),
        "Version catalog file not found: gradle/missing.toml"
    );
}

#[test]
fn test_catalog_error_display() {
    let err = PovercatError::Catalog {
        path: PathBuf::from("libs.toml"),
        message: "expected `=`".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Invalid version catalog libs.toml: expected `=`"
    );
}

#[test]
fn test_config_error_display() {
    let err = PovercatError::Config {
        message: "bad syntax".to_string(),
    };
    assert_eq!(err.to_string(), "Configuration error: bad syntax");
}

#[test]
fn test_generic_error_display() {
    let err = PovercatError::Generic {
        message: "something broke".to_string(),
    };
    assert_eq!(err.to_string(), "something broke");
}

#[test]
fn test_io_error_from_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: PovercatError = io_err.into();
    assert!(matches!(err, PovercatError::Io(_)));
}
