pub use crate::setup::{init, LogGuard};

mod setup;
