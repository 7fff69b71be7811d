pub mod config;
pub mod generated;
pub mod logs;
pub mod manifest;
mod native;
mod prelude;
pub mod progress;
pub mod remote;
pub mod screenshots;
pub mod setup;
pub mod utils;

pub(crate) static TESTCACHE_VERSION: &str = env!("CARGO_PKG_VERSION");

lazy_static::lazy_static! {
    pub static ref USER_AGENT: String = format!("testcache/{}", crate::TESTCACHE_VERSION);
}
