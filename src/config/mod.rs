//! Task file configuration
//!
//! Task files declare named targets and the properties files each one reads.
//! Settings are layered with proper precedence (CLI > Env > File > Defaults);
//! the CLI layer applies its own overrides on top of [`TaskConfig`].

pub mod loader;

pub use loader::{load_task_config, TaskConfig, DEFAULT_STORE, ENV_PREFIX};
