use ctor::ctor;
use tracing::Level;

#[ctor]
fn init_logging() {
    // If TOUR_LOG is not set or set to false, disable logging. Otherwise, enable it
    // at the requested level (default: info).
    match std::env::var("TOUR_LOG") {
        Ok(v) if !(v == "0" || v.eq_ignore_ascii_case("false") || v.is_empty()) => {
            let level = match v.to_ascii_lowercase().as_str() {
                "trace" => Level::TRACE,
                "debug" => Level::DEBUG,
                "warn" => Level::WARN,
                "error" => Level::ERROR,
                _ => Level::INFO,
            };
            tracing_subscriber::fmt().with_max_level(level).init();
        }
        _ => {
            // Logging stays disabled; tests and library consumers get silence by default.
        }
    }
}
