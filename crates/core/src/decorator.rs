//! # Decorator Module
//!
//! `logger(label)` is a decorator factory: it captures a label and hands back
//! a [`Logger`] whose [`decorate`](Logger::decorate) wraps any function with
//! before/after log lines.
//!
//! ```
//! use closure_kit_core::logger;
//!
//! let add = logger("DEBUG").decorate("add", |(a, b): (i32, i32)| a + b);
//! assert_eq!(add((3, 4)), 7);
//! ```

use std::fmt;
use std::rc::Rc;

/// Where decorated functions write their log lines.
pub type Sink = Rc<dyn Fn(&str)>;

/// Decorator built by [`logger`].
#[derive(Clone)]
pub struct Logger {
    message: String,
    sink: Sink,
}

/// Create a logging decorator that reports through `tracing`.
pub fn logger(message: impl Into<String>) -> Logger {
    Logger::with_sink(message, |line: &str| {
        tracing::info!(target: "closure_kit::decorator", "{}", line);
    })
}

impl Logger {
    /// Create a logging decorator with a custom sink
    pub fn with_sink<S>(message: impl Into<String>, sink: S) -> Self
    where
        S: Fn(&str) + 'static,
    {
        Self {
            message: message.into(),
            sink: Rc::new(sink),
        }
    }

    pub fn label(&self) -> &str {
        &self.message
    }

    /// Wrap `func`; the wrapper returns exactly what `func` returns.
    ///
    /// Functions of several arguments are decorated by taking a tuple.
    pub fn decorate<A, R, F>(&self, name: &str, func: F) -> impl Fn(A) -> R
    where
        F: Fn(A) -> R,
        R: fmt::Display,
    {
        let message = self.message.clone();
        let name = name.to_string();
        let sink = Rc::clone(&self.sink);

        move |args| {
            sink(&format!("[{}] Calling function: {}", message, name));
            let result = func(args);
            sink(&format!("[{}] Result: {}", message, result));
            result
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
