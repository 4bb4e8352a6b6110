//! Server-rendered pages built from Leptos components.

pub mod create;
