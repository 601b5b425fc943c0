//! # Paylink Types
//!
//! Domain types and port traits for the payment link service.
//! This crate has ZERO external IO dependencies - only data structures
//! and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (PaymentLink)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Repository and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{NewPaymentLink, PaymentLink};
pub use dto::{PaymentLinkDraft, PaymentLinkPatch, WriteOutcome};
pub use error::{AppError, RepoError};
pub use ports::PaymentLinkRepository;
