use anyhow::{Context, Error};
use log::info;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use testcache::config::{Config, DEFAULT_CONFIG_FILE};
use testcache::manifest::{self, Manifest};
use testcache::progress::{Action, Progress};
use testcache::remote::HttpRemote;
use testcache::setup::Setup;

#[derive(clap::Parser)]
#[command(
    name = "testcache",
    version,
    about = "Prepare the test-www fixture directory"
)]
pub struct Testcache {
    /// Site root containing the manifest and the assets; the fixture is created inside it
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Config file, relative to the root (defaults to testcache.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Option<Cmd>,
}

#[derive(clap::Subcommand)]
pub enum Cmd {
    #[command(about = "download the fixture pages and wire up the work dir (default)")]
    Setup {
        /// Base url to download game pages and screenshots from
        #[arg(long)]
        remote: Option<String>,
    },

    #[command(about = "list what a setup run would download, without downloading it")]
    CheckManifest {
        /// Manifest to check, relative to the root (defaults to the configured one)
        manifest: Option<PathBuf>,
    },

    #[command(about = "check if the config file is valid")]
    CheckConfig {
        /// Config file to check, relative to the root (defaults to --config, then testcache.toml)
        file: Option<PathBuf>,
    },
}

impl Testcache {
    pub fn run(self) -> Result<(), Error> {
        match self.cmd {
            None => setup(&self.root, self.config.as_deref(), None),
            Some(Cmd::Setup { ref remote }) => {
                setup(&self.root, self.config.as_deref(), remote.as_deref())
            }
            Some(Cmd::CheckManifest { ref manifest }) => {
                let config = Config::load_from_root(&self.root, self.config.as_deref())?;
                let path = manifest.as_ref().unwrap_or(&config.fixture.manifest);
                check_manifest(&config, &self.root.join(path))
            }
            Some(Cmd::CheckConfig { ref file }) => {
                let file = file
                    .as_deref()
                    .or(self.config.as_deref())
                    .unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
                Config::load(&self.root.join(file))?;
                info!("{} is valid", file.display());
                Ok(())
            }
        }
    }
}

fn setup(root: &Path, config_file: Option<&Path>, remote: Option<&str>) -> Result<(), Error> {
    let mut config = Config::load_from_root(root, config_file)?;
    if let Some(remote) = remote {
        config.remote.base_url = remote.to_string();
        config.check().context("invalid --remote")?;
    }

    let remote = HttpRemote::new(config.remote_base()?)?;
    Setup::new(&config, root, &remote, io::stdout().lock()).run()?;
    Ok(())
}

fn check_manifest(config: &Config, path: &Path) -> Result<(), Error> {
    let manifest = Manifest::load(path)?;

    let mut progress = Progress::new(io::stdout().lock());
    let mut count = 0;
    for identifier in manifest.downloads() {
        let resource = manifest::game_resource(&config.fixture.game_dir, identifier);
        progress.record(Action::Get, &resource)?;
        count += 1;
    }

    let mut out = progress.into_inner();
    writeln!(
        out,
        "{} of {} islets have a page to download",
        count,
        manifest.islets().len()
    )?;
    Ok(())
}
