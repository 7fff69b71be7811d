use crate::prelude::*;
use crate::progress::{Action, Progress};
use crate::utils;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::blocking::Client;
use std::fs;
use std::io::Write;
use std::path::Path;
use url::Url;

/// Characters escaped before a resource path is joined onto the base url. Scraped names such as
/// `a#1.png` name a file, so `#` must not start a fragment.
const RESOURCE_ENCODE_SET: AsciiSet = CONTROLS.add(b' ').add(b'#');

/// Somewhere fixture resources can be fetched from, addressed by relative path.
pub trait Remote {
    fn get(&self, resource: &str) -> Fallible<Vec<u8>>;
}

pub struct HttpRemote {
    base: Url,
    client: Client,
}

impl HttpRemote {
    /// `base` must end with a slash, see `Config::remote_base`.
    pub fn new(base: Url) -> Fallible<Self> {
        Ok(HttpRemote {
            base,
            client: utils::http::setup_sync_client()?,
        })
    }

    fn url_for(&self, resource: &str) -> Fallible<Url> {
        let encoded = utf8_percent_encode(resource, &RESOURCE_ENCODE_SET).to_string();
        self.base
            .join(&encoded)
            .with_context(|| format!("invalid resource path: {}", resource))
    }
}

impl Remote for HttpRemote {
    fn get(&self, resource: &str) -> Fallible<Vec<u8>> {
        let url = self.url_for(resource)?;
        let resp = utils::http::get_sync(&self.client, url.as_str())?;
        let body = resp
            .bytes()
            .with_context(|| format!("failed to read the body of {}", url))?;
        Ok(body.to_vec())
    }
}

/// Fetches resources into the work dir, mirroring their remote path.
pub struct Downloader<'a> {
    remote: &'a dyn Remote,
    work_dir: &'a Path,
}

impl<'a> Downloader<'a> {
    pub fn new(remote: &'a dyn Remote, work_dir: &'a Path) -> Self {
        Downloader { remote, work_dir }
    }

    /// The parent directory of the resource must already exist in the work dir.
    pub fn download<W: Write>(
        &self,
        resource: &str,
        progress: &mut Progress<W>,
    ) -> Fallible<Vec<u8>> {
        progress.record(Action::Get, resource)?;
        let data = self.remote.get(resource)?;

        let dest = self.work_dir.join(resource);
        fs::write(&dest, &data).with_context(|| format!("failed to write {}", dest.display()))?;
        debug!("saved {} bytes to {}", data.len(), dest.display());

        Ok(data)
    }
}
