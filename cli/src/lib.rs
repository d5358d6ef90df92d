pub mod commands;
pub mod logging;
pub mod repl;
pub mod session;

pub use commands::RunOverrides;
