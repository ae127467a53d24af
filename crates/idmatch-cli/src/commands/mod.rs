pub mod ids;
pub mod matches;
pub mod model_loader;
pub mod run_common;
