//! Local persistence for MY POUPAR+
//!
//! Only client-side flags live here; goals, rewards and profiles are owned by
//! the backend.

pub mod client_storage;
pub mod file_io;

pub use client_storage::ClientStorage;
