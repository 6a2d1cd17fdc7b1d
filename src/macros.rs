//! Conditional tracing support
//!
//! Both macros compile to nothing when the `tracing` feature is disabled.

/// Enter a tracing span for a summarizer stage.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("summarizer_stage", stage = $name).entered();
    };
}

/// Emit a tracing event at the given level (`debug`, `warn`, ...).
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::$level!($($arg)+);
    };
}
