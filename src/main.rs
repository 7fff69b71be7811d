//! Prepares the `test-www` fixture directory for the web application.
//!
//! The fixture is rebuilt from scratch on every run: game pages listed in the islets manifest
//! are downloaded together with the screenshots they embed, the site's top-level files and
//! assets are symlinked in, and the asset config is replaced by one pointing at a local server.

mod cli;

use clap::Parser;
use std::panic;
use std::process;

fn main() {
    testcache::logs::init();

    let success = match panic::catch_unwind(main_) {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            testcache::utils::report_failure(&e);
            false
        }
        Err(e) => {
            testcache::utils::report_panic(&*e);
            false
        }
    };

    process::exit(if success { 0 } else { 1 });
}

fn main_() -> anyhow::Result<()> {
    cli::Testcache::parse().run()
}
