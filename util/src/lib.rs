pub mod config;
pub mod languages;
pub mod task_config;
pub mod test_helpers;
