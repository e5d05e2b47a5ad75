mod analyze;

pub use analyze::{ResolvedSettings, load_config, resolve_settings, run_analyze, run_analyze_impl};
