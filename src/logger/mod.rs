pub mod analysis_spinner;

use env_logger::Env;

/// Installs the global logger. `RUST_LOG`, when set, wins over `level`.
/// Calling this twice is harmless; the second call is ignored.
pub fn init(level: &str) {
    let env = Env::default().default_filter_or(level);
    if env_logger::Builder::from_env(env)
        .format_target(false)
        .try_init()
        .is_err()
    {
        log::debug!("Logger already initialised");
    }
}
