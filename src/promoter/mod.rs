//! Promoter API client and types.
//!
//! This module provides a client for the promoter side of the consultant platform: listing the
//! consultants a promoter advertises, inviting new consultants, and switching a consultant's
//! availability.
//!
//! ## Available Endpoints
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/api/promoter/consultants` | GET | List promoted consultants, sorted and filtered |
//! | `/api/promoter/consultants/create` | POST | Create a registration invite |
//! | `/api/consultant/status/change/{status}` | GET | Change a consultant's status |
//!
//! # Example
//!
//! ```no_run
//! use promoter_client_sdk::promoter::{Client, types::ConsultantsRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_token("promoter-api-token")?;
//!
//! let request = ConsultantsRequest::parse("rating", [("chat", "on")])?;
//! for consultant in client.list_consultants(&request).await? {
//!     println!("{consultant}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Base URL
//!
//! The default API endpoint is [`DEFAULT_HOST`].

pub mod client;
pub mod types;

pub use client::{Client, DEFAULT_HOST};
