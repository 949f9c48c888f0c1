//! Environment variable struct binding
//!
//! This library populates a configuration struct from process environment
//! variables, driven entirely by declarative field annotations.
//!
//! # Features
//!
//! - **Declarative**: automatic implementation with `#[derive(EnvBind)]`
//! - **In-place binding**: fields are assigned through `&mut`, untouched
//!   fields keep their values
//! - **Type-safe**: scalars, durations and sequences convert at well-typed
//!   seams; unsupported field types are rejected precisely
//! - **Prefix scoping**: one prefix scopes an entire struct tree, nested
//!   blocks included
//! - **Default values**: textual default literals run through the same
//!   conversion path as found values
//! - **Custom parsers**: a per-call registry overrides the built-in rules
//!   and extends binding to caller-defined types
//!
//! # Value Parsing
//!
//! Built-in conversion rules cover:
//!
//! - Strings: `DATABASE_URL=postgres://localhost/db`
//! - Booleans: `DEBUG=true` (case-insensitive `true`/`false`, `t`/`f`, or `1`/`0`)
//! - Integers and floats of every primitive width: `MAX_CONNECTIONS=42`
//! - Durations: `TIMEOUT=2h45m` (concatenated `<number><unit>` spans)
//! - Sequences of any of the above: `NUMBERS=1,2,3,4`, split on a
//!   configurable separator
//!
//! # Example
//!
//! ```rust
//! use envbind::EnvBind;
//!
//! #[derive(Debug, Default, EnvBind)]
//! struct Config {
//!     #[env("DATABASE_URL", default = "postgres://localhost:5432/db")]
//!     pub database_url: String,
//!
//!     #[env("PORT", default = "3000")]
//!     pub port: u16,
//!
//!     #[env("PRODUCTION")]
//!     pub is_production: bool,
//! }
//!
//! # fn main() -> Result<(), envbind::EnvError> {
//! std::env::set_var("PORT", "8080");
//! let mut config = Config::default();
//! envbind::bind(&mut config)?;
//! assert_eq!(config.port, 8080);
//! assert_eq!(config.database_url, "postgres://localhost:5432/db");
//! # Ok(())
//! # }
//! ```
//!
//! # Annotations
//!
//! ## `#[env("NAME")]`
//!
//! Bind the field to the environment variable `NAME`. Fields without an
//! `#[env]` annotation, and annotations with an empty name, are skipped
//! silently — internal fields coexist with bound fields in the same struct.
//!
//! ## `#[env("NAME,required")]`
//!
//! Options follow the name, comma-separated. `required` makes an absent
//! variable a binding error. Any other option token is a compile error
//! naming the token.
//!
//! ## `#[env("NAME", default = "literal")]`
//!
//! When the variable is absent the literal is converted exactly as a found
//! value would be.
//!
//! ```rust
//! # use envbind::EnvBind;
//! #[derive(Default, EnvBind)]
//! pub struct Config {
//!     #[env("RETRY_BUDGET", default = "250ms")]
//!     pub retry_budget: std::time::Duration,
//! }
//! ```
//!
//! ## `#[env("NAME", separator = ":")]`
//!
//! Sequence fields split their raw value on the separator (default `,`)
//! before converting each element.
//!
//! ```rust
//! # use envbind::EnvBind;
//! #[derive(Default, EnvBind)]
//! pub struct Config {
//!     #[env("SEARCH_PATH", separator = ":")]
//!     pub search_path: Vec<String>,
//! }
//! ```
//!
//! ## `#[env(nested)]`
//!
//! Recurse into a nested configuration block with the same prefix and
//! parsers. An `Option` nested block that is `None` is skipped silently.
//!
//! ```rust
//! # use envbind::EnvBind;
//! #[derive(Default, EnvBind)]
//! pub struct Redis {
//!     #[env("REDIS_URL")]
//!     pub url: String,
//! }
//!
//! #[derive(Default, EnvBind)]
//! pub struct Config {
//!     #[env(nested)]
//!     pub redis: Redis,
//! }
//! ```
//!
//! # Entry points
//!
//! [`bind`], [`bind_with_prefix`], [`bind_with_parsers`] and
//! [`bind_with_prefix_and_parsers`] all run the same field walker; prefix
//! and parser registry default to empty. [`Binder`] composes both. The
//! first failure aborts the pass; fields bound before it keep their values.

#[doc(hidden)]
pub mod de;

mod bind;
mod error;
mod parsers;
mod value;

pub use bind::{
    bind, bind_with_parsers, bind_with_prefix, bind_with_prefix_and_parsers, Binder, EnvBind,
};
pub use envbind_derive::EnvBind;
pub use error::EnvError;
pub use parsers::Parsers;
pub use value::{EnvValue, ValueError};
