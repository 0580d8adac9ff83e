//! Common utilities and traits

pub mod traits;
pub mod utils;

pub use traits::{NoProgress, ProgressObserver};
pub use utils::{FormatUtils, human_size};
