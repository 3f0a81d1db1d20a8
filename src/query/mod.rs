pub mod executor;
pub mod window;

pub use executor::{LookupExecutor, LookupResult};
pub use window::{ScanWindow, DEFAULT_WINDOW_SIZE};
