//! Source-file and directory exclusion rules
//!
//! Decides which files count as C/C++ sources and which directories hold
//! generated output that recursive selection must not enter.

use std::path::Path;

/// Extensions treated as C/C++ sources, compared case-insensitively
pub const SOURCE_EXTENSIONS: &[&str] = &["cpp", "cc", "h", "hpp", "hh"];

/// Directory names holding generated output
pub const EXCLUDED_DIRS: &[&str] = &["gen", "gen64"];

/// Extension allow-list plus excluded directory names
#[derive(Debug, Clone)]
pub struct ExclusionRules {
    pub extensions: Vec<String>,
    pub excluded_dirs: Vec<String>,
}

impl Default for ExclusionRules {
    fn default() -> Self {
        Self {
            extensions: SOURCE_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            excluded_dirs: EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ExclusionRules {
    /// Creates the default C/C++ rules
    ///
    /// # Examples
    /// ```
    /// use apply_clang_format::exclusions::ExclusionRules;
    /// use std::path::Path;
    ///
    /// let rules = ExclusionRules::new();
    /// assert!(rules.is_source_file(Path::new("widget.HPP")));
    /// assert!(rules.is_excluded_dir(Path::new("build/Gen64")));
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the final extension is on the allow-list
    pub fn is_source_file(&self, path: &Path) -> bool {
        if let Some(extension) = path.extension()
            && let Some(ext_str) = extension.to_str()
        {
            return self
                .extensions
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext_str));
        }
        false
    }

    /// True when the directory's own name marks generated output
    pub fn is_excluded_dir(&self, path: &Path) -> bool {
        if let Some(name) = path.file_name()
            && let Some(name_str) = name.to_str()
        {
            return self
                .excluded_dirs
                .iter()
                .any(|excluded| excluded.eq_ignore_ascii_case(name_str));
        }
        false
    }
}
