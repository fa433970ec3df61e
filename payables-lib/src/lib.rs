//! Payables API client library
//!
//! A Rust async client library for the Payables accounts-payable and
//! reimbursement backend: invoice OCR review, three-way match display,
//! reimbursement submission and approval, and administrative configuration.
//!
//! The backend owns all business computation — this library fetches and
//! patches JSON, materializes it into typed models, and feeds the queue and
//! report screens, which all render through the shared
//! [`tableview`] engine.

pub mod api;
pub mod error;
pub mod model;
pub mod screens;
pub mod session;

mod client;

pub use client::*;
