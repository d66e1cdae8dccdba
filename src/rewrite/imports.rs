use regex::Regex;

use crate::errors::Result;

/// One aliased import found in a file's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRef {
    /// The whole matched text, e.g. `from "@/lib/db"`.
    pub raw: String,
    /// The quoted target, e.g. `@/lib/db`.
    pub target: String,
}

/// Textual matcher for `from '<marker>...'` / `from "<marker>..."`.
///
/// This is a pattern, not a parser: imports in comments or strings match
/// too, and the two quotes are not required to agree.
#[derive(Debug, Clone)]
pub struct ImportPattern {
    re: Regex,
}

impl ImportPattern {
    pub fn new(marker: &str) -> Result<Self> {
        let pattern = format!(r#"from\s+['"]({}[^'"]+)['"]"#, regex::escape(marker));
        Ok(ImportPattern {
            re: Regex::new(&pattern)?,
        })
    }

    /// Every aliased import in `content`, in order of appearance.
    pub fn find_all(&self, content: &str) -> Vec<ImportRef> {
        self.re
            .captures_iter(content)
            .filter_map(|caps| {
                let raw = caps.get(0)?.as_str().to_string();
                let target = caps.get(1)?.as_str().to_string();
                Some(ImportRef { raw, target })
            })
            .collect()
    }
}
