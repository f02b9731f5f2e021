pub mod calc;
pub mod config;
pub mod times;
pub mod watch;
