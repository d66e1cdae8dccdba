pub mod alias;
pub mod errors;
pub mod rewrite;
pub mod scan;
pub mod settings;

pub use crate::alias::AliasResolver;
pub use crate::errors::{Result, RewriteError};
pub use crate::rewrite::{Change, FileOutcome, Rewrite, Rewriter, WriteMode};
pub use crate::scan::{collect_source_files, run, Summary};
pub use crate::settings::Settings;
