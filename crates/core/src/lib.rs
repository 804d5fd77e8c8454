//! Workflow services for ecoreport.
//!
//! The stores in `ecoreport-db` own the invariants; the services here own
//! everything around them: input validation, phone verification, admin
//! sessions and the dashboard query.

pub mod phone;
pub mod services;

pub use services::*;
