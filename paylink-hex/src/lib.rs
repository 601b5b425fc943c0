//! # Paylink Hex
//!
//! Application service layer and HTTP adapter for the payment link service.
//!
//! ## Architecture
//!
//! - `service` - Application service (delegates to the repository port)
//! - `webhook` - Webhook URL validation helpers
//! - `inbound` - HTTP adapter (Axum server)
//!
//! The service is generic over `R: PaymentLinkRepository`, allowing
//! different repository implementations to be injected.

pub mod inbound;
pub mod service;
pub mod webhook;


pub use service::PaymentLinkService;
