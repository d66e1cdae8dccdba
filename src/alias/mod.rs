//! Alias resolution: turning `@/lib/db` into `../../src/lib/db`.
//!
//! `path` holds the lexical path arithmetic (normalisation and relative-path
//! computation) and `resolve` the alias-specific rules on top of it.

pub mod path;
pub mod resolve;

pub use path::{diff_lexically, normalize_lexically, relative_path, to_forward_slashes};
pub use resolve::AliasResolver;
