mod loader;
mod model;

pub use loader::{load_config, CONFIG_FILENAME};
pub use model::{NoticeConfig, RunConfig};
