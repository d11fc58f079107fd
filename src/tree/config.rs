//! Configuration types for tree building

use super::filter::IgnoreSpec;

/// Order of entries within each directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Whatever order the filesystem yields. Varies across platforms and filesystems.
    #[default]
    Listing,
    /// Byte-wise by file name, case-sensitive.
    Name,
}

/// Configuration for tree building behavior.
#[derive(Debug, Clone, Default)]
pub struct TreeConfig {
    pub ignore: IgnoreSpec,
    /// Directories at this depth are shown but not read (root = 0)
    pub max_depth: Option<usize>,
    pub sort: SortOrder,
}

impl TreeConfig {
    pub fn with_ignore(mut self, ignore: IgnoreSpec) -> Self {
        self.ignore = ignore;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Check if a directory at `depth` is shown without descending into it.
    pub fn at_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth >= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unlimited_listing_order() {
        let config = TreeConfig::default();
        assert_eq!(config.sort, SortOrder::Listing);
        assert!(!config.at_max_depth(0));
        assert!(!config.at_max_depth(1000));
        assert_eq!(config.ignore, IgnoreSpec::default());
    }

    #[test]
    fn test_at_max_depth() {
        let config = TreeConfig::default().with_max_depth(2);
        assert!(!config.at_max_depth(1));
        assert!(config.at_max_depth(2));
        assert!(config.at_max_depth(3));
    }
}
