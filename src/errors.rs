pub use anyhow::{anyhow, bail, Context, Error, Result};
pub use log::{debug, info, warn};
