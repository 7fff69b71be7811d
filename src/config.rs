use crate::generated::GeneratedConfig;
use crate::prelude::*;
use std::fs;
use std::path::{Component, Path, PathBuf};
use url::Url;

pub static DEFAULT_CONFIG_FILE: &str = "testcache.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("`{key}` must be a single directory name, got `{value}`")]
    NotASingleComponent { key: &'static str, value: String },
    #[error("invalid remote base url `{url}`")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("remote base url `{0}` cannot be used as a base")]
    CannotBeABase(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RemoteConfig {
    pub base_url: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig {
            base_url: "https://si.bitcrafter.net/".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FixtureConfig {
    pub work_dir: String,
    pub manifest: PathBuf,
    pub game_dir: String,
    pub screenshot_dir: String,
    pub links: Vec<String>,
    pub assets_dir: String,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        FixtureConfig {
            work_dir: "test-www".into(),
            manifest: "islets.json5".into(),
            game_dir: "game".into(),
            screenshot_dir: "screenshot".into(),
            links: vec!["index.html".into(), "pkg".into()],
            assets_dir: "assets".into(),
        }
    }
}

/// Values written to the asset config inside the fixture, replacing the production copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GeneratedSettings {
    pub file: String,
    pub base_url: String,
    pub border_px: f64,
}

impl Default for GeneratedSettings {
    fn default() -> Self {
        GeneratedSettings {
            file: "main.cfg.json5".into(),
            base_url: "http://localhost:8000".into(),
            border_px: 1.0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub remote: RemoteConfig,
    pub fixture: FixtureConfig,
    pub generated: GeneratedSettings,
}

impl Config {
    pub fn load(path: &Path) -> Fallible<Self> {
        let buffer = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Config = ::toml::from_str(&buffer)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        config.check()?;
        Ok(config)
    }

    /// Loads `explicit` if given, otherwise `testcache.toml` in `root` when it exists, falling
    /// back to the built-in defaults.
    pub fn load_from_root(root: &Path, explicit: Option<&Path>) -> Fallible<Self> {
        if let Some(path) = explicit {
            return Config::load(&root.join(path));
        }

        let default = root.join(DEFAULT_CONFIG_FILE);
        if default.is_file() {
            Config::load(&default)
        } else {
            debug!("no {} found, using the default config", default.display());
            Ok(Config::default())
        }
    }

    pub fn check(&self) -> Result<(), ConfigError> {
        // Symlinks inside the work dir point back up with `..`, one level per component.
        check_single_component("fixture.work-dir", &self.fixture.work_dir)?;
        check_single_component("fixture.game-dir", &self.fixture.game_dir)?;
        check_single_component("fixture.screenshot-dir", &self.fixture.screenshot_dir)?;
        check_single_component("fixture.assets-dir", &self.fixture.assets_dir)?;
        for link in &self.fixture.links {
            check_single_component("fixture.links", link)?;
        }
        check_single_component("generated.file", &self.generated.file)?;

        self.remote_base()?;
        Ok(())
    }

    /// The remote base url, always ending with a slash so resources join below it.
    pub fn remote_base(&self) -> Result<Url, ConfigError> {
        let raw = &self.remote.base_url;
        let mut url = Url::parse(raw).map_err(|source| ConfigError::InvalidBaseUrl {
            url: raw.clone(),
            source,
        })?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::CannotBeABase(raw.clone()));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    pub fn generated_config(&self) -> GeneratedConfig {
        GeneratedConfig {
            base_url: self.generated.base_url.clone(),
            border_px: self.generated.border_px,
        }
    }
}

fn check_single_component(key: &'static str, value: &str) -> Result<(), ConfigError> {
    let mut components = Path::new(value).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(ConfigError::NotASingleComponent {
            key,
            value: value.to_string(),
        }),
    }
}
