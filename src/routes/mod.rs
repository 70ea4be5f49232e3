//! Locale-aware routing.
//!
//! # Architecture
//!
//! - `table`: the validated route table, one descriptor per (page, locale)
//! - `resolver`: `build_path` / `match_path` on top of the table
//! - `redirect`: the locale redirector used by the HTTP layer
//! - `error`: resolution and validation errors
//!
//! # Example
//!
//! ```rust,ignore
//! use dinosaur_encyclopedia::routes::{Params, Redirector, RouteTable};
//!
//! let table = RouteTable::builtin()?;
//! let mut params = Params::new();
//! params.insert("name".into(), "Brachiosaurus".into());
//! assert_eq!(table.build_path("dinosaur", "de", &params)?, "/dinosaurier/Brachiosaurus");
//!
//! let decision = Redirector::new(&table, "en").decide("/dinosaur/Brachiosaurus", "de");
//! assert_eq!(decision.location(), Some("/de/dinosaurier/Brachiosaurus"));
//! ```

mod error;
mod redirect;
mod resolver;
mod table;

pub use error::{RouteError, TableError};
pub use redirect::{RedirectDecision, Redirector};
pub use table::{Params, RouteDescriptor, RouteTable};
