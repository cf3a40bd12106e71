//! Typed calls against the MedVault REST API, grouped by the role that
//! owns the endpoint.
//!
//! Each call is a method on [`ApiClient`](crate::ApiClient). Requests that
//! carry user input are validated first; a rejected request returns a
//! `ValidationError` and never reaches the network.

mod admin;
mod auth;
mod doctor;
mod patient;
