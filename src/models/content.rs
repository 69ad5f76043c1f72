/// Separator placed between portfolio tags on a card's header line
pub const TAG_SEPARATOR: &str = " • ";

/// A service the consultancy offers, shown as one card in the services grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOffering {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Capabilities in display order
    pub bullets: &'static [&'static str],
}

/// A past project, shown as one card in the portfolio grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortfolioProject {
    pub id: u32,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Category labels in display order
    pub tags: &'static [&'static str],
    pub excerpt: &'static str,
}

impl PortfolioProject {
    /// Tags joined with [`TAG_SEPARATOR`], original order preserved.
    pub fn tag_line(&self) -> String {
        self.tags.join(TAG_SEPARATOR)
    }
}
