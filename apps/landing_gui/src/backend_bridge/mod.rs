//! Background worker that owns the async runtime and the contact transport.

pub mod commands;
pub mod runtime;
