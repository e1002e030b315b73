//! Static guide content and anchor resolution.
//!
//! The training guide ships inside the binary as plain text. Each section
//! of the sidebar corresponds to a heading marker line in the body
//! (`# <Title>`); this module locates those markers so that selecting a
//! sidebar entry can scroll the content pane to the right line.
//!
//! Screenshots and the logo appear in the body as `[image: <path>]`
//! placeholder lines. The paths are opaque references to external assets
//! and are never validated here.
use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::navigator::Section;

/// Line index type used for anchors within the guide body.
pub type LineNumber = usize;

/// Version string shown in the footer and in the exported copy.
pub const GUIDE_VERSION: &str = "1.0";

/// Last revision date of the guide content.
pub const LAST_UPDATED: &str = "January 18, 2026";

/// Outbound marketing link shown in the footer.
pub const MARKETING_URL: &str = "https://ezmedtech.ai";

/// The full training guide as plain text.
pub const GUIDE_TEXT: &str = include_str!("../assets/guide.txt");

/// Master section list in reading order.
///
/// Identifiers are unique and stable; the order here drives the sidebar
/// top to bottom. Icons are decorative only.
pub static SECTIONS: [Section; 10] = [
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
    Section {
        id: "lead-generation",
        title: "Lead Generation",
        icon: "◉",
    },
    Section {
        id: "email-outreach",
        title: "Email Outreach",
        icon: "✉",
    },
    Section {
        id: "pipeline",
        title: "Pipeline Management",
        icon: "⚙",
    },
    Section {
        id: "analytics",
        title: "Analytics & Reporting",
        icon: "▲",
    },
    Section {
        id: "best-practices",
        title: "Best Practices",
        icon: "✓",
    },
    Section {
        id: "troubleshooting",
        title: "Troubleshooting",
        icon: "?",
    },
    Section {
        id: "quick-reference",
        title: "Quick Reference",
        icon: "▣",
    },
];

// Heading markers are single lines of the form `# Title`.
static HEADING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#\s+(.+?)\s*$").expect("Invalid heading regex")
});

/// Map from section title to the line of its heading marker.
///
/// Built once on first use by scanning the guide body. Only the first
/// marker per title counts.
static ANCHORS: LazyLock<HashMap<&'static str, LineNumber>> = LazyLock::new(|| {
    let mut anchors = HashMap::new();

    for (line_number, line) in GUIDE_TEXT.lines().enumerate()
    {
        let Some(caps) = HEADING_REGEX.captures(line)
        else
        {
            continue;
        };

        let heading = caps
            .get(1)
            .map_or("", |group| group.as_str());

        if let Some(section) = SECTIONS
            .iter()
            .find(|section| section.title == heading)
        {
            anchors
                .entry(section.title)
                .or_insert(line_number);
        }
    }

    anchors
});

/// Resolves a section id to the line of its heading in the guide body.
///
/// Returns `None` both for unknown identifiers and for sections whose
/// heading is missing from the body. The caller treats that as "nothing
/// to scroll to", never as an error.
#[must_use]
pub fn anchor_line(id: &str) -> Option<LineNumber>
{
    let section = SECTIONS
        .iter()
        .find(|section| section.id == id)?;

    ANCHORS.get(section.title).copied()
}

#[cfg(test)]
mod tests
{
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn section_ids_are_unique()
    {
        let mut seen = HashSet::new();

        for section in &SECTIONS
        {
            assert!(
                seen.insert(section.id),
                "duplicate section id: {}",
                section.id
            );
        }
    }

    #[test]
    fn every_section_has_an_anchor()
    {
        for section in &SECTIONS
        {
            assert!(
                anchor_line(section.id).is_some(),
                "no heading found for section '{}'",
                section.id
            );
        }
    }

    #[test]
    fn anchors_follow_reading_order()
    {
        let lines: Vec<LineNumber> = SECTIONS
            .iter()
            .filter_map(|section| anchor_line(section.id))
            .collect();

        assert_eq!(lines.len(), SECTIONS.len());
        assert!(
            lines.windows(2).all(|pair| pair[0] < pair[1]),
            "section headings out of order: {lines:?}"
        );
    }

    #[test]
    fn unknown_id_has_no_anchor()
    {
        assert_eq!(anchor_line("no-such-section"), None);
    }

    #[test]
    fn first_anchor_is_the_introduction()
    {
        assert_eq!(anchor_line("introduction"), Some(0));
    }
}
