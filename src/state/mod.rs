//! Plain-data state owned by the application shell.
//!
//! DESIGN
//! ======
//! State structs stay free of browser types so every transition is
//! unit-testable natively; the shell wraps them in `RwSignal`s provided via
//! context.

pub mod history;
pub mod notify;
pub mod upload;
