//! Default path resolution: process working directory and the user's HOME

use propfile::{EmbeddedBundle, PropertyLoader, DEFAULT_NAMESPACE};
use std::path::PathBuf;
use tempfile::TempDir;

use crate::integration::{with_current_dir, with_home_env};

const BUNDLE: &[(&str, &str)] = &[("envtest.properties", "a=1\nb=1\n")];

#[test]
fn test_global_layer_follows_home() {
    let test_dir = TempDir::new().unwrap();
    let home = test_dir.path().canonicalize().unwrap();
    let ns_dir = home.join("propfile-env-test");
    std::fs::create_dir_all(&ns_dir).unwrap();
    std::fs::write(ns_dir.join("envtest.properties"), "b=home\n").unwrap();

    with_home_env(&home, || {
        let loader = PropertyLoader::with_namespace(EmbeddedBundle::new(BUNDLE), "propfile-env-test")
            .working_dir(test_dir.path().join("no-local-here"));
        assert_eq!(
            loader.global_path("envtest"),
            Some(ns_dir.join("envtest.properties"))
        );

        let props = loader.read("envtest").unwrap();
        assert_eq!(props.get("a"), Some("1"));
        assert_eq!(props.get("b"), Some("home"));
    });
}

#[test]
fn test_default_namespace_reads_sentinel_directory() {
    let test_dir = TempDir::new().unwrap();
    let home = test_dir.path().canonicalize().unwrap();
    let sentinel_dir = home.join(DEFAULT_NAMESPACE);
    std::fs::create_dir_all(&sentinel_dir).unwrap();
    std::fs::write(sentinel_dir.join("envtest.properties"), "a=sentinel\n").unwrap();

    with_home_env(&home, || {
        let loader = PropertyLoader::new(EmbeddedBundle::new(BUNDLE))
            .working_dir(test_dir.path().join("no-local-here"));
        let props = loader.read("envtest").unwrap();
        assert_eq!(props.get("a"), Some("sentinel"));
    });
}

#[test]
fn test_local_layer_defaults_to_current_dir() {
    let test_dir = TempDir::new().unwrap();
    std::fs::write(test_dir.path().join("envtest.properties"), "a=cwd\n").unwrap();
    let home = test_dir.path().join("empty-home");

    with_current_dir(test_dir.path(), || {
        let loader = PropertyLoader::with_namespace(EmbeddedBundle::new(BUNDLE), "propfile-env-test")
            .home_dir(&home);
        assert_eq!(loader.local_path("envtest"), PathBuf::from("envtest.properties"));

        let props = loader.read("envtest").unwrap();
        assert_eq!(props.get("a"), Some("cwd"));
        assert_eq!(props.get("b"), Some("1"));
    });
}

#[test]
fn test_env_restored_after_panic() {
    let test_dir = TempDir::new().unwrap();
    let scratch = test_dir.path().to_path_buf();
    let cwd_before = with_home_env(&scratch, || std::env::current_dir().unwrap());
    let home_before = with_current_dir(&cwd_before, || std::env::var("HOME").ok());

    let panicked = std::panic::catch_unwind(|| {
        with_home_env(&scratch, || panic!("inside HOME override"))
    });
    assert!(panicked.is_err());
    let home_after = with_current_dir(&cwd_before, || std::env::var("HOME").ok());
    assert_eq!(home_after, home_before);

    let panicked = std::panic::catch_unwind(|| {
        with_current_dir(&scratch, || panic!("inside cwd override"))
    });
    assert!(panicked.is_err());
    let cwd_after = with_home_env(&scratch, || std::env::current_dir().unwrap());
    assert_eq!(cwd_after, cwd_before);
}
