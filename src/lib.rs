//! # Magazine Catalog
//!
//! > **A small magazine domain model with a single-owner catalog service.**
//!
//! The crate models people, articles, editions, magazines and magazine
//! collections, and lets several tasks share collections safely by routing
//! every change through one actor.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Composition over inheritance
//! A [`Magazine`](model::Magazine) *contains* an [`Edition`](model::Edition) rather than
//! extending one. Code that only cares about publication metadata borrows it with
//! [`Magazine::as_edition`](model::Magazine::as_edition).
//!
//! ### Value equality, named identity
//! [`Person`](model::Person) and [`Edition`](model::Edition) compare by value with `==`.
//! Asking whether two references are the *same instance* is a separate method, `is_same`.
//!
//! ### Named comparators
//! Editions have no `Ord` impl. Sorting always names its comparator:
//! [`Edition::cmp_by_name`](model::Edition::cmp_by_name) (the natural order),
//! [`Edition::cmp_by_release_date`](model::Edition::cmp_by_release_date) or
//! [`Edition::cmp_by_circulation`](model::Edition::cmp_by_circulation).
//!
//! ### Lazy queries
//! Article and editor filters on a magazine return borrowing iterators. Call the
//! method again to start over.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Domain ([`model`])
//! Plain synchronous data and the [`RateAndCopy`](model::RateAndCopy) capability.
//! Circulation is validated on every write ([`ValidationError`](model::ValidationError)).
//!
//! ### 2. The Owner ([`catalog_actor`])
//! A [`CatalogActor`](catalog_actor::CatalogActor) owns every catalog and processes
//! requests one at a time, so there is no locking.
//!
//! ### 3. The Interface ([`clients`])
//! [`CatalogClient`](clients::CatalogClient) hides the message passing behind async methods.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`CatalogSystem`](lifecycle::CatalogSystem) spawns and stops the actor,
//! [`CatalogConfig`](lifecycle::CatalogConfig) reads settings from the environment, and
//! [`setup_tracing`](lifecycle::setup_tracing) installs logging.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod catalog_actor;
pub mod clients;
pub mod lifecycle;
pub mod model;
