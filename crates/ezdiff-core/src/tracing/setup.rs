//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the tracing/logging system.
///
/// Reads the `EZDIFF_LOG` environment variable for per-module log levels.
/// Format: `EZDIFF_LOG=ezdiff_recovery=debug,ezdiff_model=warn`
///
/// Falls back to `ezdiff=info` if `EZDIFF_LOG` is not set or is invalid.
/// Output goes to stderr so the progress table on stdout stays clean.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("EZDIFF_LOG")
            .unwrap_or_else(|_| EnvFilter::new("ezdiff=info"));

        // A host process may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
