/// Macro for prefixed status logging to stderr (only when stderr is a terminal).
///
/// Usage:
/// ```ignore
/// log_status!("init", "Configuring template for {}", plugin_id);
/// log_status!("git", "Created initial commit");
/// ```
#[macro_export]
macro_rules! log_status {
    ($prefix:expr, $($arg:tt)*) => {
        if ::std::io::IsTerminal::is_terminal(&::std::io::stderr()) {
            eprintln!(concat!("[", $prefix, "] {}"), format_args!($($arg)*));
        }
    };
}

pub mod core;
pub mod tty;
pub mod utils;

// Re-export everything from core for ergonomic library use
// Users can write `zui_scaffold::scaffold` instead of `zui_scaffold::core::scaffold`
pub use core::*;
pub use utils::*;
