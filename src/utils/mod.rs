pub mod log_utils;
pub mod path_utils;
pub mod terminal;
