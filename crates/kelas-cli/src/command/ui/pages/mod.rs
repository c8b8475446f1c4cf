pub use self::analysis::AnalysisView;

use crate::content::{self, InfoPage};

mod analysis;

/// Entries of the sidebar menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    School,
    Algorithm,
    Analysis,
}

impl Page {
    pub const ALL: [Self; 3] = [Self::School, Self::Algorithm, Self::Analysis];
    pub const TITLES: [&'static str; 3] = [
        content::SCHOOL_PAGE.title,
        content::ALGORITHM_PAGE.title,
        "Hitung Pembagian Kelas Unggulan",
    ];

    pub const fn index(self) -> usize {
        match self {
            Self::School => 0,
            Self::Algorithm => 1,
            Self::Analysis => 2,
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Page selected by its 1-based menu number.
    pub fn from_digit(c: char) -> Option<Self> {
        let index = c.to_digit(10)?.checked_sub(1)?;
        Self::ALL.get(usize::try_from(index).ok()?).copied()
    }

    /// Static content of the informational pages.
    pub const fn info(self) -> Option<&'static InfoPage> {
        match self {
            Self::School => Some(&content::SCHOOL_PAGE),
            Self::Algorithm => Some(&content::ALGORITHM_PAGE),
            Self::Analysis => None,
        }
    }
}
