//! Logging sink handed to a pass.

use core::fmt;
use tracing::Dispatch;

/// Where a pass sends its `tracing` events.
///
/// A pass never touches global logging state on its own: it emits into the
/// dispatcher it was given, or into whatever dispatcher is current when no
/// explicit one was supplied.
///
/// # Example
///
/// ```
/// use accessor_core::LogSink;
/// use tracing::Dispatch;
///
/// let quiet = LogSink::new(Dispatch::none());
/// let answer = quiet.in_scope(|| {
///     tracing::info!("not recorded");
///     42
/// });
/// assert_eq!(answer, 42);
/// ```
#[derive(Clone, Default)]
pub struct LogSink {
    dispatch: Option<Dispatch>,
}

impl LogSink {
    /// Emit into the dispatcher active at the time the pass runs.
    pub fn current() -> Self {
        Self::default()
    }

    /// Emit into `dispatch`.
    pub fn new(dispatch: Dispatch) -> Self {
        Self {
            dispatch: Some(dispatch),
        }
    }

    /// Discard every event.
    pub fn none() -> Self {
        Self::new(Dispatch::none())
    }

    /// Run `f` with this sink as the default dispatcher.
    pub fn in_scope<R>(&self, f: impl FnOnce() -> R) -> R {
        match &self.dispatch {
            Some(dispatch) => tracing::dispatcher::with_default(dispatch, f),
            None => f(),
        }
    }
}

impl From<Dispatch> for LogSink {
    fn from(dispatch: Dispatch) -> Self {
        Self::new(dispatch)
    }
}

impl fmt::Debug for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.dispatch {
            Some(_) => f.write_str("LogSink(explicit)"),
            None => f.write_str("LogSink(current)"),
        }
    }
}
