//! MY POUPAR+ - gamified personal-finance front-end for the terminal
//!
//! This library provides the client side of the POUPAR+ savings app: the
//! navigation shell, the goal wizard, onboarding, the music and voice
//! overlays and the AI recommendation flow. Goals, rewards and profiles live
//! on the POUPAR+ backend, which is reached over HTTP.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: File-backed tracing subscriber
//! - `models`: Goals, routes and the static catalogues
//! - `storage`: Persisted client-side flags
//! - `services`: Backend client and query cache
//! - `state`: Audio, session and theme contexts
//! - `components`: UI state machines that emit effects
//! - `tui`: The ratatui front-end
//! - `display`: Table output for the CLI
//!
//! # Example
//!
//! ```rust,ignore
//! use poupar::config::{PouparPaths, Settings};
//!
//! let paths = PouparPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod components;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod tui;

pub use error::{PouparError, PouparResult};
