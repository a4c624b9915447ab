use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use super::*;

struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    current_dir: PathBuf,
    config_dir: Option<PathBuf>,
}

impl MockFileSystem {
    fn new() -> Self {
        Self {
            files: HashMap::new(),
            current_dir: PathBuf::from("/project"),
            config_dir: Some(PathBuf::from("/home/user/.config/pine-guard")),
        }
    }

    fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }

    fn with_config_dir(mut self, path: Option<PathBuf>) -> Self {
        self.config_dir = path;
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone()
    }
}

#[test]
fn load_without_any_config_returns_defaults() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let result = loader.load().unwrap();

    assert_eq!(result.config, Config::default());
    assert!(result.source.is_none());
}

#[test]
fn load_prefers_local_config() {
    let fs = MockFileSystem::new()
        .with_file("/project/.pine-guard.toml", "[check]\nstrict = true\n")
        .with_file("/home/user/.config/pine-guard/config.toml", "[check]\nstrict = false\n");
    let loader = FileConfigLoader::with_fs(fs);

    let result = loader.load().unwrap();

    assert!(result.config.check.strict);
    assert_eq!(
        result.source,
        Some(PathBuf::from("/project/.pine-guard.toml"))
    );
}

#[test]
fn load_falls_back_to_user_config() {
    let fs = MockFileSystem::new().with_file(
        "/home/user/.config/pine-guard/config.toml",
        "[scanner]\nexclude = [\"**/old/**\"]\n",
    );
    let loader = FileConfigLoader::with_fs(fs);

    let result = loader.load().unwrap();

    assert_eq!(result.config.scanner.exclude, vec!["**/old/**".to_string()]);
}

#[test]
fn load_without_user_config_dir() {
    let fs = MockFileSystem::new().with_config_dir(None);
    let loader = FileConfigLoader::with_fs(fs);

    assert!(loader.load().unwrap().source.is_none());
}

#[test]
fn load_invalid_toml_is_an_error() {
    let fs = MockFileSystem::new().with_file("/project/.pine-guard.toml", "[check\n");
    let loader = FileConfigLoader::with_fs(fs);

    assert!(matches!(
        loader.load(),
        Err(PineGuardError::TomlParse(_))
    ));
}

#[test]
fn load_from_path_reads_given_file() {
    let fs = MockFileSystem::new().with_file("/elsewhere/custom.toml", "[check]\nextensions = [\"ps\"]\n");
    let loader = FileConfigLoader::with_fs(fs);

    let result = loader.load_from_path(Path::new("/elsewhere/custom.toml")).unwrap();

    assert_eq!(result.config.check.extensions, vec!["ps".to_string()]);
}

#[test]
fn load_from_missing_path_is_config_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let err = loader.load_from_path(Path::new("/nope.toml")).unwrap_err();

    assert!(matches!(err, PineGuardError::Config(_)));
    assert!(err.to_string().contains("/nope.toml"));
}
