use std::process::Command;

static TESTCACHE_BIN: &str = env!("CARGO_BIN_EXE_testcache");

pub(crate) trait CommandTestcacheExt {
    fn testcache() -> Self;
}

impl CommandTestcacheExt for Command {
    fn testcache() -> Self {
        let mut cmd = Command::new(TESTCACHE_BIN);
        // Keep the assertions on stderr independent from the caller's environment
        cmd.env_remove("RUST_LOG").env_remove("RUST_BACKTRACE");
        cmd
    }
}
