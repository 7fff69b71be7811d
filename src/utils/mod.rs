use crate::prelude::*;
use std::any::Any;
use std::backtrace::BacktraceStatus;
use std::str::FromStr;

pub(crate) mod fs;
pub(crate) mod http;

pub fn report_panic(e: &dyn Any) {
    if let Some(e) = e.downcast_ref::<String>() {
        error!("panicked: {}", e)
    } else if let Some(e) = e.downcast_ref::<&'static str>() {
        error!("panicked: {}", e)
    } else {
        error!("panicked")
    }
}

pub fn report_failure(err: &anyhow::Error) {
    error!("{}", err);

    for cause in err.chain().skip(1) {
        error!("caused by: {}", cause);
    }

    let backtrace = err.backtrace();
    if backtrace.status() == BacktraceStatus::Captured {
        error!("{}", backtrace);
        return;
    }

    // If the environment variable is not set, mention it to the user.
    if !is_backtrace_runtime_enabled() {
        error!("note: run with `RUST_BACKTRACE=1` to display a backtrace.");
    }
}

fn is_backtrace_runtime_enabled() -> bool {
    std::env::var("RUST_BACKTRACE")
        .ok()
        .and_then(|s| i32::from_str(&s).ok())
        .is_some_and(|val| val != 0)
}
