//! # IO Module
//!
//! The boundary between the dashboard UI and the domain layer. Requests
//! come in over REST, are turned into domain calls, and domain results
//! and errors go back out as JSON with a matching status code.

pub mod rest;
