use crate::prelude::*;
use reqwest::blocking::{Client, ClientBuilder, Response};
use reqwest::header::USER_AGENT;
use reqwest::redirect::Policy;
use reqwest::Method;
use std::time::Duration;

const MAX_REDIRECTS: usize = 4;

/// The client never times out: a stalled transfer stalls the whole run. Proxy settings from the
/// environment are ignored, the remote is always contacted directly.
pub(crate) fn setup_sync_client() -> Fallible<Client> {
    ClientBuilder::new()
        .redirect(Policy::limited(MAX_REDIRECTS))
        .no_proxy()
        .timeout(None::<Duration>)
        .build()
        .context("unable to set up the http client")
}

/// Issues a GET and hands back the response whatever its status code; callers use the body as-is.
pub(crate) fn get_sync(client: &Client, url: &str) -> Fallible<Response> {
    let resp = client
        .request(Method::GET, url)
        .header(USER_AGENT, crate::USER_AGENT.as_str())
        .send()
        .with_context(|| format!("request to {} failed", url))?;

    if !resp.status().is_success() {
        warn!("request to {} returned status code {}", url, resp.status());
    }

    Ok(resp)
}
