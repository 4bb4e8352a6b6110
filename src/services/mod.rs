//! Collaborators used by page routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own calls to external systems so route handlers can stay
//! focused on request translation and rendering.

pub mod auth;
