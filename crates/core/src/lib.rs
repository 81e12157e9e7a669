//! Core library for fbgraph
//!
//! This crate implements the **Functional Core** of the fbgraph application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`fbgraph_core`** (this crate): Graph API response mapping with zero I/O
//! - **`fbgraph`**: reading responses, configuration and output (the Imperative Shell)
//!
//! Mappers take an already received response body and turn it into typed
//! values. Every field the Graph API may omit is an `Option`, and any malformed
//! field fails the whole mapping with a [`FacebookError`].
//!
//! # Module Organization
//!
//! - [`geo`]: The [`GeoLocation`] value object used as a request parameter
//! - [`comment`]: Comment mapping and the comment list factory
//! - [`category`]: Node references nested inside other responses
//! - [`list`]: [`ResponseList`] and the envelope's paging metadata
//! - [`store`]: The optional per-request raw JSON store
//! - [`json`]: Field extraction helpers shared by all mappers
//! - [`response`] and [`config`]: The collaborators the mappers consume
//!
//! # Example Usage
//!
//! ```rust
//! use fbgraph_core::{create_comment_list, Configuration, JsonStore, RawResponse};
//!
//! let res = RawResponse::ok(r#"{"data":[{"id":"1"},{"id":"2"}]}"#);
//! let conf = Configuration::new().with_json_store(true);
//! let mut store = JsonStore::new();
//!
//! let comments = create_comment_list(&res, &conf, &mut store).unwrap();
//!
//! assert_eq!(comments.len(), 2);
//! assert_eq!(comments[0].id(), Some("1"));
//! assert!(store.raw_json(&comments[1]).is_some());
//! ```

pub mod category;
pub mod comment;
pub mod config;
pub mod error;
pub mod geo;
pub mod json;
pub mod list;
pub mod response;
pub mod store;

pub use category::Category;
pub use comment::{create_comment_list, Comment};
pub use config::Configuration;
pub use error::{FacebookError, JsonError};
pub use geo::GeoLocation;
pub use list::{Cursors, Paging, ResponseList, Summary};
pub use response::{HttpResponse, RawResponse};
pub use store::{JsonStore, StoreKey, StoreKeyed};
