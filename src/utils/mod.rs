pub mod build_info;
pub mod paths;

use std::sync::Once;

use tracing_subscriber::{filter::Directive, fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "bitbybit_core=info";

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` is honoured; `extra_directive` (usually from the config file) is layered on
/// top of the crate default.
pub fn init_tracing(extra_directive: Option<&str>) {
    TRACING_INIT.call_once(|| {
        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = DEFAULT_DIRECTIVE.parse::<Directive>() {
            filter = filter.add_directive(directive);
        }
        let mut rejected = None;
        if let Some(raw) = extra_directive {
            match raw.parse::<Directive>() {
                Ok(directive) => filter = filter.add_directive(directive),
                Err(err) => rejected = Some((raw.to_string(), err.to_string())),
            }
        }

        let _ = fmt().with_env_filter(filter).try_init();

        if let Some((raw, err)) = rejected {
            tracing::warn!(directive = %raw, error = %err, "ignoring invalid log filter");
        }
    });
}
