//! File type filtering for picked and dropped files.

/// Which files the viewer takes in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AcceptFilter {
    /// Accept every file, previewable or not.
    ///
    /// Selected by mounting the viewer with `accept=AcceptFilter::Any`.
    #[cfg_attr(not(test), allow(dead_code))]
    Any,
    /// Accept only `image/*` files (default)
    #[default]
    Images,
}

impl AcceptFilter {
    /// Value for the `accept` attribute of the hidden file input.
    pub fn input_accept(self) -> &'static str {
        match self {
            Self::Any => "*/*",
            Self::Images => "image/*",
        }
    }

    /// Check a file's MIME type against the filter.
    ///
    /// Files from drops and the native picker bypass the `accept` attribute,
    /// so every source runs through this.
    pub fn admits(self, mime: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Images => mime
                .get(..6)
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case("image/")),
        }
    }

    /// Whether the native picker should be given a `types` restriction.
    pub fn restricts_types(self) -> bool {
        matches!(self, Self::Images)
    }
}
