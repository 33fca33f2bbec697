//! Interactive editing state for closed splines.
//!
//! The session owns the control polygon and curve order and feeds them to the
//! evaluator in `csp-geometry`. Windowing, input and drawing are left to the
//! embedding application.

pub mod config;
pub mod session;
pub mod viewport;

pub use config::EditorConfig;
pub use session::{Command, Direction, EditorSession};
pub use viewport::Viewport;
