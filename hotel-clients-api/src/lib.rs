//! # hotel-clients-api
//!
//! HTTP client for the hotel client operations API: register, search,
//! update and delete guests under `/api/v1/imoreno/hotel/operations`.
//!
//! ## Endpoints
//!
//! | Operation | Method | Path | Input | Success |
//! |-----------|--------|------|-------|---------|
//! | Create | `POST` | `/add` | JSON body | 201 |
//! | Search | `GET` | `/search` | query (non-empty names only) | 200 `{data}`, 404 = not found |
//! | Update | `PUT` | `/update` | JSON body | 200 |
//! | Delete | `DELETE` | `/delete` | query (non-empty names only) | 200 |
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: Use rustls.
//! - **`native-tls`**: Use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hotel_clients_api::{ClientConfig, HotelApi, HotelClient, NameQuery, Reply};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HotelClient::new(ClientConfig::default())?;
//!
//!     let query = NameQuery::from_fields("Ana", "", "");
//!     match client.search(&query).await? {
//!         Reply::Found(Some(guest)) => println!("{} -> room {}", guest.full_name(), guest.room),
//!         Reply::Found(None) => println!("no match"),
//!         other => println!("{other:?}"),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every call returns [`ApiResult<Reply>`](ApiResult). Nothing is retried:
//!
//! - [`ApiError::Transport`] / [`ApiError::Timeout`]: no usable response
//! - [`ApiError::UnexpectedStatus`]: status outside the operation's success code
//! - [`ApiError::Decode`]: the search body did not match `{data: Client | null}`

mod client;
mod error;
mod http_client;
pub mod mapping;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ApiError, ApiResult};

// Re-export the client
pub use client::{ClientConfig, DEFAULT_BASE_URL, HotelClient, OPERATIONS_PREFIX};

// Re-export core trait
pub use traits::HotelApi;

// Re-export types
pub use types::{Client, ClientPayload, NameQuery, Operation, Reply, SearchEnvelope};
