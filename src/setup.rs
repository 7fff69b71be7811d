//! Builds the `test-www` fixture: a throwaway sibling of the site root holding the game pages
//! and screenshots fetched from the remote, symlinks back to the real site files, and an asset
//! config pointing at a local server.
//!
//! The work dir is wiped at the start of every run, so a failed run is recovered by running
//! again. Nothing is rolled back when a step fails.

use crate::config::Config;
use crate::manifest::{self, Manifest};
use crate::prelude::*;
use crate::progress::{Action, Progress};
use crate::remote::{Downloader, Remote};
use crate::screenshots::ScreenshotScanner;
use crate::utils;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub pages: usize,
    pub screenshots: usize,
    pub links: usize,
}

pub struct Setup<'a, W: Write> {
    config: &'a Config,
    root: &'a Path,
    remote: &'a dyn Remote,
    progress: Progress<W>,
}

impl<'a, W: Write> Setup<'a, W> {
    /// `root` is the site checkout: it holds the manifest, the assets and the linked files, and
    /// the work dir is created directly inside it.
    pub fn new(config: &'a Config, root: &'a Path, remote: &'a dyn Remote, out: W) -> Self {
        Setup {
            config,
            root,
            remote,
            progress: Progress::new(out),
        }
    }

    pub fn work_dir(&self) -> PathBuf {
        self.root.join(&self.config.fixture.work_dir)
    }

    pub fn run(mut self) -> Fallible<Summary> {
        let config = self.config;
        let fixture = &config.fixture;

        // Loaded before anything is touched, so a broken manifest leaves the old work dir alone.
        let manifest = Manifest::load(&self.root.join(&fixture.manifest))?;
        let scanner = ScreenshotScanner::new(&fixture.screenshot_dir)?;

        let work_dir = self.work_dir();
        info!("preparing {}", work_dir.display());
        utils::fs::clean_mkdir(&work_dir)?;
        for dir in [&fixture.game_dir, &fixture.screenshot_dir] {
            utils::fs::clean_mkdir(&work_dir.join(dir))?;
        }

        let mut summary = Summary::default();
        self.fetch_pages(&manifest, &scanner, &work_dir, &mut summary)?;
        self.link_top_level(&work_dir, &mut summary)?;
        self.mirror_assets(&work_dir, &mut summary)?;
        self.write_generated(&work_dir)?;

        info!(
            "fixture ready: {} pages, {} screenshots, {} links",
            summary.pages, summary.screenshots, summary.links
        );
        Ok(summary)
    }

    fn fetch_pages(
        &mut self,
        manifest: &Manifest,
        scanner: &ScreenshotScanner,
        work_dir: &Path,
        summary: &mut Summary,
    ) -> Fallible<()> {
        let downloader = Downloader::new(self.remote, work_dir);

        for islet in manifest.islets() {
            let Some(identifier) = islet.bitcrafter.as_deref() else {
                debug!(
                    "skipping islet {} without a download",
                    islet.label().unwrap_or("<unnamed>")
                );
                continue;
            };

            let resource = manifest::game_resource(&self.config.fixture.game_dir, identifier);
            let data = downloader.download(&resource, &mut self.progress)?;
            summary.pages += 1;

            let page = std::str::from_utf8(&data)
                .with_context(|| format!("{} is not valid UTF-8", resource))?;
            for screenshot in scanner.scan(page) {
                downloader.download(screenshot, &mut self.progress)?;
                summary.screenshots += 1;
            }
        }

        Ok(())
    }

    fn link_top_level(&mut self, work_dir: &Path, summary: &mut Summary) -> Fallible<()> {
        for name in &self.config.fixture.links {
            self.progress.record(Action::Link, name)?;
            let target = Path::new("..").join(name);
            utils::fs::symlink(&target, &work_dir.join(name))?;
            summary.links += 1;
        }

        Ok(())
    }

    fn mirror_assets(&mut self, work_dir: &Path, summary: &mut Summary) -> Fallible<()> {
        let assets_dir = &self.config.fixture.assets_dir;
        let source = self.root.join(assets_dir);
        let dest = work_dir.join(assets_dir);
        fs::create_dir(&dest)
            .with_context(|| format!("unable to create directory: {}", dest.display()))?;

        let mut entries = fs::read_dir(&source)
            .with_context(|| format!("unable to list {}", source.display()))?
            .map(|entry| entry.map(|e| e.file_name()))
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("unable to list {}", source.display()))?;
        entries.sort();

        for name in entries {
            if name == self.config.generated.file.as_str() {
                continue;
            }

            let shown = format!("{}/{}", assets_dir, name.to_string_lossy());
            self.progress.record(Action::Link, &shown)?;
            let target = Path::new("..").join("..").join(assets_dir).join(&name);
            utils::fs::symlink(&target, &dest.join(&name))?;
            summary.links += 1;
        }

        Ok(())
    }

    fn write_generated(&mut self, work_dir: &Path) -> Fallible<()> {
        let assets_dir = &self.config.fixture.assets_dir;
        let file = &self.config.generated.file;
        let path = work_dir.join(assets_dir).join(file);

        self.progress
            .record(Action::Config, &format!("{}/{}", assets_dir, file))?;
        self.config.generated_config().write(&path)
    }
}
