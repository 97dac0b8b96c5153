//! Diagnostic logging.
//!
//! Messages from [`favicon_log!`] go to stdout, prefixed with `favicon:`, and only
//! when the `FAVICON_LOG` environment variable is set.  The variable is checked
//! once per process.

use once_cell::sync::Lazy;

#[macro_export]
macro_rules! favicon_log {
    (
        $($arg:tt)+
    ) => {
        if $crate::log::log_enabled() {
            println!("favicon: {}", format_args!($($arg)+));
        }
    };
}

pub fn log_enabled() -> bool {
    static ENABLED: Lazy<bool> = Lazy::new(|| ::std::env::var_os("FAVICON_LOG").is_some());

    *ENABLED
}
