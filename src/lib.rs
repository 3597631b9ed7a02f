pub mod app;
pub mod args;
pub mod credentials;
pub mod errors;
pub mod interfaces;
pub mod read_interactive_input;
pub mod storage;
pub mod testing;
pub mod utils;
pub mod workflow;

pub use app::run_app;
pub use args::Args;
