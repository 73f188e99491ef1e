//! Offer Desk - offer request and submission lifecycle management.
//!
//! Buyers publish offer requests, invite companies to respond, collect their
//! submissions with attachments and move both through their review states.

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;

pub use bootstrap::OfferDeskServices;
