//! Section descriptors and the playable choice list.
//!
//! The section provider scrapes the numbered section text and its
//! outgoing choices; this module carries that descriptor and derives
//! what the player can actually do from it: choices the sheet has not
//! removed, plus pick-up pseudo-choices for items lying in the
//! section.

use lw_core::{ActionSheet, SectionId};
use serde::{Deserialize, Serialize};

/// One outgoing choice scraped from a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Destination section id.
    pub to: SectionId,
    /// Display label.
    pub label: String,
}

/// A section descriptor as supplied by the section provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// The section's number.
    #[serde(rename = "sectionId")]
    pub id: SectionId,
    /// Outgoing choices in page order.
    pub choices: Vec<Choice>,
}

/// Something the player can do from a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerChoice {
    /// Follow a scraped choice to another section.
    Travel(Choice),
    /// Pick up an item lying in this section.
    PickUp {
        /// The item lying here.
        item: String,
    },
}

impl std::fmt::Display for PlayerChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Travel(choice) => write!(f, "{}", choice.label),
            Self::PickUp { item } => write!(f, "Pick up the {item}."),
        }
    }
}

/// The choices to offer for a section: scraped choices whose
/// destinations the sheet has not removed, followed by pick-ups for
/// every item dropped here.
pub fn available_choices(section: &Section, sheet: &ActionSheet) -> Vec<PlayerChoice> {
    let mut choices: Vec<PlayerChoice> = section
        .choices
        .iter()
        .filter(|c| !sheet.removed_choices.contains(&c.to))
        .cloned()
        .map(PlayerChoice::Travel)
        .collect();
    choices.extend(sheet.dropped_at(section.id).map(|item| PlayerChoice::PickUp {
        item: item.to_string(),
    }));
    choices
}
