//! Chemical Equipment Parameter Visualizer — browser front-end.
//!
//! ARCHITECTURE
//! ============
//! `net` talks to the equipment backend over HTTP, `state` holds plain-data
//! view models, `components` render them, and `app` is the shell wiring
//! upload, history, and report events together. Browser-only code sits
//! behind the `csr` feature so every logic module builds and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;
