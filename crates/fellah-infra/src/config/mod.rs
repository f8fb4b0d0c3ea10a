pub mod loader;

pub use loader::{load_config, DEFAULT_CONFIG_FILE};
