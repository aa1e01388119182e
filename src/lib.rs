//! Antim - guided terminal booking for last-rites services
//!
//! The wizard walks through religion, ritual kit, add-on services and
//! contact details, then hands the composed order to WhatsApp.

pub mod app;
pub mod booking;
pub mod catalog;
pub mod config;
pub mod gateway;
pub mod logging;
pub mod ui;
