use std::io::IsTerminal;

use docpipe_config::{GlobalArgs, LogFormat};
use tracing_subscriber::EnvFilter;

/// Default filter directive when `RUST_LOG` is not set.
pub(crate) fn default_directive(global: &GlobalArgs) -> &'static str {
    if global.quiet {
        return "warn";
    }
    match global.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the stderr subscriber. A second call is a no-op.
pub(crate) fn init(global: &GlobalArgs) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(global)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false);

    let _ = match global.log_format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        let mut global = GlobalArgs::default();
        assert_eq!(default_directive(&global), "info");
        global.verbose = 1;
        assert_eq!(default_directive(&global), "debug");
        global.verbose = 4;
        assert_eq!(default_directive(&global), "trace");
    }

    #[test]
    fn quiet_wins() {
        let global = GlobalArgs {
            quiet: true,
            ..Default::default()
        };
        assert_eq!(default_directive(&global), "warn");
    }
}
