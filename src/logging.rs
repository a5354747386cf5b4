use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber for report diagnostics and bridge `log` to `tracing`.
/// Report harnesses call this once; repeated calls are ignored.
pub fn init_tracing(enable_debug: bool) {
    let _ = tracing_log::LogTracer::init();

    let env_filter = if enable_debug {
        EnvFilter::new("histogram_report=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_names(false)
        .try_init()
        .ok();
}
