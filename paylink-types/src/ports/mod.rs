//! Port traits implemented by adapters.

pub mod repository;

pub use repository::PaymentLinkRepository;
