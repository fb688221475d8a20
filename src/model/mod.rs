//! The magazine domain: people, articles, editions, magazines and collections.
//!
//! Everything here is plain synchronous data. Concurrent access goes through
//! the [`catalog_actor`](crate::catalog_actor) instead.

pub mod article;
pub mod collection;
pub mod defaults;
pub mod edition;
pub mod error;
pub mod index;
pub mod magazine;
pub mod periodicity;
pub mod person;
pub mod rate;
pub mod samples;

pub use article::*;
pub use collection::*;
pub use defaults::{Defaults, DEFAULT_CIRCULATION};
pub use edition::*;
pub use error::ValidationError;
pub use index::*;
pub use magazine::*;
pub use periodicity::*;
pub use person::*;
pub use rate::*;
pub use samples::{default_magazines, generate_magazine};
