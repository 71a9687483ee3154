//! Marketplace Domain Concerns

pub mod products;
