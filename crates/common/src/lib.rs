//! Common utilities and shared types for ecoreport.
//!
//! This crate provides foundational components used across all ecoreport crates:
//!
//! - **Configuration**: Application settings via [`Config`]
//! - **Error handling**: Unified error types via [`AppError`] and [`AppResult`]
//! - **ID Generation**: ULID-based unique identifiers via [`IdGenerator`]
//! - **Clock**: Timestamp source via [`Clock`], swappable in tests
//!
//! # Example
//!
//! ```no_run
//! use ecoreport_common::{AppResult, Clock, Config, IdGenerator, SystemClock};
//!
//! fn example() -> AppResult<()> {
//!     let config = Config::load()?;
//!     let id_gen = IdGenerator::new();
//!     let id = id_gen.generate();
//!     println!("Generated ID {} at {}", id, SystemClock.now());
//!     println!("Listening on {}:{}", config.server.host, config.server.port);
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod id;

pub use clock::{Clock, ManualClock, SharedClock, SystemClock, Timestamp, to_api_string};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use id::IdGenerator;
