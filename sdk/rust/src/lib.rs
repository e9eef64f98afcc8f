//! Async client for the HR Helpdesk HTTP API.

pub mod client;

pub use client::{ClientError, HelpdeskClient, Me, Registration, StatusReply};
