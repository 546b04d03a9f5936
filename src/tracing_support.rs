//! Logging support.
//!
//! With the `tracing` feature enabled, graph mutations emit `tracing` events
//! and [`init_tracing`] installs a subscriber for tests.  With it disabled,
//! the same names exist as no-ops.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    /// Installs a `fmt` subscriber writing through the test harness, once per
    /// process.  Does nothing if another subscriber is already installed.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_test_writer()
                .with_max_level(tracing::Level::TRACE)
                .try_init();
        });
    }

    /// Emits an event at the given level under the crate's target.
    macro_rules! graph_event {
        ($level:ident, $($arg:tt)+) => {
            ::tracing::$level!(target: "ordgraph", $($arg)+)
        };
    }

    pub(crate) use graph_event;
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    /// Expands to nothing except a read of each shorthand field.
    macro_rules! graph_event {
        (@touch $field:ident = $value:expr) => {};
        (@touch $field:ident) => {
            let _ = &$field;
        };
        ($level:ident, $($field:ident $(= $value:expr)?,)* $message:literal) => {{
            $( $crate::tracing_support::graph_event!(@touch $field $(= $value)?); )*
        }};
    }

    pub(crate) use graph_event;
}

#[cfg(feature = "tracing")]
pub use enabled::init_tracing;
#[cfg(feature = "tracing")]
pub(crate) use enabled::graph_event;

#[cfg(not(feature = "tracing"))]
pub use disabled::init_tracing;
#[cfg(not(feature = "tracing"))]
pub(crate) use disabled::graph_event;
