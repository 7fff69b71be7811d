pub use anyhow::Context;
pub use log::{debug, error, info, warn};
pub use serde_derive::{Deserialize, Serialize};

pub type Fallible<T> = anyhow::Result<T>;
