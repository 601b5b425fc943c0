//! Domain models for the payment link service.

pub mod link;

pub use link::{NewPaymentLink, PaymentLink};
