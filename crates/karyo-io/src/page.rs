//! Top-level page identifiers for the header navigation.
//!
//! The app has no router; the active page is a signal, switched by the
//! header buttons the same way stage tabs switch within the analysis
//! page.

use std::fmt;

/// Identifier for a top-level page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Landing page with quick-start and status cards.
    Dashboard,
    /// The three-stage analysis pipeline.
    Analysis,
    /// Prior-analysis listing.
    History,
}

impl Page {
    /// All pages in navigation order.
    pub const ALL: [Self; 3] = [Self::Dashboard, Self::Analysis, Self::History];

    /// Display label for the navigation button.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Analysis => "New Analysis",
            Self::History => "History",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
