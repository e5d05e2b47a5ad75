//! Which config file wins: local, user, or none.

use std::path::PathBuf;

use crate::config::{ConfigLoader, FileConfigLoader};

use super::mock_fs::MockFileSystem;

#[test]
fn returns_default_when_no_config_found() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let result = loader.load().unwrap();

    assert_eq!(result.source, None);
    assert!(result.config.analysis.follow_links);
    assert!(result.config.scanner.exclude.is_empty());
}

#[test]
fn loads_local_config_from_current_directory() {
    let fs = MockFileSystem::new()
        .with_current_dir("/my/project")
        .with_file("/my/project/.csloc.toml", "[analysis]\nthreads = 3\n");

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.config.analysis.threads, Some(3));
    assert_eq!(result.source, Some(PathBuf::from("/my/project/.csloc.toml")));
}

#[test]
fn loads_user_config_as_fallback() {
    let fs = MockFileSystem::new().with_file(
        "/home/user/.config/csloc/config.toml",
        "[analysis]\nper_file = true\n",
    );

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert!(result.config.analysis.per_file);
    assert_eq!(
        result.source,
        Some(PathBuf::from("/home/user/.config/csloc/config.toml"))
    );
}

#[test]
fn local_config_takes_priority_over_user_config() {
    let fs = MockFileSystem::new()
        .with_file("/project/.csloc.toml", "[analysis]\nthreads = 2\n")
        .with_file("/home/user/.config/csloc/config.toml", "[analysis]\nthreads = 16\n");

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.config.analysis.threads, Some(2));
}

#[test]
fn missing_config_dir_falls_back_to_default() {
    let fs = MockFileSystem::new().with_config_dir(None);

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.source, None);
}
