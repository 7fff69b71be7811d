use std::sync::Once;

static INIT_LOGS: Once = Once::new();

pub fn init() {
    INIT_LOGS.call_once(|| {
        // This doesn't use from_default_env() because it doesn't allow to override filter_module()
        // with the RUST_LOG environment variable
        let mut env = env_logger::Builder::new();
        env.filter_module("testcache", log::LevelFilter::Info);
        if let Ok(content) = std::env::var("RUST_LOG") {
            env.parse_filters(&content);
        }
        env.init();
    });
}
