//! Navigation state for the training guide.
//!
//! Holds the ordered master list of guide sections together with the UI
//! state the sidebar needs: the active section, the sidebar visibility
//! flag and the free-text search query. This is a plain state holder;
//! nothing here touches the terminal. The presentation layer reads from
//! it and re-renders after every mutation.

/// One entry of the guide's table of contents.
///
/// Sections are fixed at startup and never change. The order of the
/// master list is the reading order of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section
{
    /// Stable identifier, matches a heading anchor in the guide body
    pub id: &'static str,
    /// Display label shown in the sidebar
    pub title: &'static str,
    /// Decorative glyph rendered next to the title
    pub icon: &'static str,
}

/// Owns the sidebar, search and active-section state.
///
/// Every operation is total: any string or boolean input is valid, so
/// none of the mutators can fail.
pub struct Navigator
{
    /// Master section list in display order
    sections: &'static [Section],
    /// Identifier of the most recently selected section
    active_section_id: String,
    /// Whether the sidebar is shown
    sidebar_visible: bool,
    /// Search query, stored verbatim as typed
    search_query: String,
}

impl Navigator
{
    /// Creates a navigator over the given section list.
    ///
    /// The first section starts out active, the sidebar is shown and the
    /// search query is empty.
    #[must_use]
    pub fn new(sections: &'static [Section]) -> Self
    {
        let active_section_id = sections
            .first()
            .map(|section| section.id.to_owned())
            .unwrap_or_default();

        Self {
            sections,
            active_section_id,
            sidebar_visible: true,
            search_query: String::new(),
        }
    }

    /// Marks the given section as active.
    ///
    /// Always succeeds, even for an identifier that matches no section;
    /// whether a scroll target exists for it is the caller's concern.
    pub fn select_section(&mut self, id: &str)
    {
        self.active_section_id.clear();
        self.active_section_id.push_str(id);
    }

    /// Shows or hides the sidebar. A pure presentation toggle.
    pub const fn set_sidebar_visible(&mut self, visible: bool)
    {
        self.sidebar_visible = visible;
    }

    /// Replaces the search query with the given text, verbatim.
    pub fn set_search_query(&mut self, text: impl Into<String>)
    {
        self.search_query = text.into();
    }

    /// Returns the sections whose title contains the current query,
    /// compared case-insensitively.
    ///
    /// An empty query matches every section. The result keeps the order
    /// of the master list and is recomputed on every call; the list is
    /// small and fixed, so there is nothing worth caching.
    #[must_use]
    pub fn visible_sections(&self) -> Vec<&'static Section>
    {
        let query = self.search_query.to_lowercase();

        self.sections
            .iter()
            .filter(|section| {
                section
                    .title
                    .to_lowercase()
                    .contains(&query)
            })
            .collect()
    }

    /// The full master list, unfiltered.
    #[must_use]
    pub const fn sections(&self) -> &'static [Section]
    {
        self.sections
    }

    /// Identifier of the most recently selected section.
    #[must_use]
    pub fn active_section_id(&self) -> &str
    {
        &self.active_section_id
    }

    /// Whether the sidebar is currently shown.
    #[must_use]
    pub const fn sidebar_visible(&self) -> bool
    {
        self.sidebar_visible
    }

    /// The current search query, verbatim.
    #[must_use]
    pub fn search_query(&self) -> &str
    {
        &self.search_query
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    static SECTIONS: [Section; 3] = [
        Section {
            id: "introduction",
            title: "Introduction",
            icon: "⌂",
        },
        Section {
            id: "getting-started",
            title: "Getting Started",
            icon: "▤",
        },
        Section {
            id: "dashboard",
            title: "Dashboard Overview",
            icon: "▦",
        },
    ];

    fn ids(sections: &[&'static Section]) -> Vec<&'static str>
    {
        sections
            .iter()
            .map(|section| section.id)
            .collect()
    }

    #[test]
    fn initial_state_points_at_first_section()
    {
        let navigator = Navigator::new(&SECTIONS);

        assert_eq!(navigator.active_section_id(), "introduction");
        assert!(navigator.sidebar_visible());
        assert_eq!(navigator.search_query(), "");
    }

    #[test]
    fn empty_query_matches_every_section()
    {
        let navigator = Navigator::new(&SECTIONS);

        assert_eq!(
            ids(&navigator.visible_sections()),
            vec!["introduction", "getting-started", "dashboard"]
        );
    }

    #[test]
    fn filtering_is_case_insensitive()
    {
        let mut navigator = Navigator::new(&SECTIONS);

        navigator.set_search_query("DASH");
        let upper = ids(&navigator.visible_sections());

        navigator.set_search_query("dash");
        let lower = ids(&navigator.visible_sections());

        assert_eq!(upper, lower);
        assert_eq!(upper, vec!["dashboard"]);
    }

    #[test]
    fn filtering_preserves_master_list_order()
    {
        let mut navigator = Navigator::new(&SECTIONS);

        // "in" matches "Introduction" and "Getting Started" only.
        navigator.set_search_query("in");

        assert_eq!(
            ids(&navigator.visible_sections()),
            vec!["introduction", "getting-started"]
        );
    }

    #[test]
    fn unmatched_query_yields_nothing()
    {
        let mut navigator = Navigator::new(&SECTIONS);

        navigator.set_search_query("zzz-no-match");

        assert!(navigator.visible_sections().is_empty());
    }

    #[test]
    fn query_get_matches_getting_started_only()
    {
        let mut navigator = Navigator::new(&SECTIONS);

        navigator.set_search_query("get");

        assert_eq!(
            ids(&navigator.visible_sections()),
            vec!["getting-started"]
        );
    }

    #[test]
    fn select_section_accepts_unknown_ids()
    {
        let mut navigator = Navigator::new(&SECTIONS);

        navigator.select_section("no-such-section");

        assert_eq!(navigator.active_section_id(), "no-such-section");
    }

    #[test]
    fn sidebar_toggle_is_idempotent()
    {
        let mut navigator = Navigator::new(&SECTIONS);

        navigator.set_sidebar_visible(false);
        assert!(!navigator.sidebar_visible());

        navigator.set_sidebar_visible(false);
        assert!(!navigator.sidebar_visible());

        navigator.set_sidebar_visible(true);
        navigator.set_sidebar_visible(true);
        assert!(navigator.sidebar_visible());
    }

    #[test]
    fn query_is_stored_verbatim()
    {
        let mut navigator = Navigator::new(&SECTIONS);

        navigator.set_search_query("  Pipeline  ");

        assert_eq!(navigator.search_query(), "  Pipeline  ");
    }
}
