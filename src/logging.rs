/// Conditional logging module for development builds
///
/// The `log!` macro provides informational console logging that is compiled out
/// in production (release) builds by default. Warnings and errors go through
/// `leptos::logging::warn!` and `leptos::logging::error!` instead.
///
/// Logging is enabled when either:
/// - Building in debug mode (`cfg(debug_assertions)`)
/// - The `console_logging` feature is explicitly enabled
///
/// # Examples
///
/// ```rust,ignore
/// crate::log!("Modal opened with variant {:?}", variant);
/// crate::log!("Detached outside-click listener");
/// ```
/// Conditionally log to console in development builds
///
/// This macro expands to `web_sys::console::log_1()` in debug builds or when
/// the `console_logging` feature is enabled. In production release builds,
/// it compiles to nothing.
#[macro_export]
macro_rules! log {
    ($($arg:expr),+ $(,)?) => {
        #[cfg(any(debug_assertions, feature = "console_logging"))]
        {
            web_sys::console::log_1(&format!($($arg),+).into());
        }
    };
}
