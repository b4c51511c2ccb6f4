//! Portfolio copy loaded from `assets/portfolio.content.ron`.
//!
//! Everything in here is read-only once the experience starts.

use bevy::prelude::*;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use timeline::{SECTION_COUNT, Section};

/// Used when a colour string can't be parsed.
pub const FALLBACK_ACCENT: Color = Color::srgb(0.0, 1.0, 1.0);

/// `#rrggbb` (or any form `Srgba::hex` accepts) to a colour.
pub fn color_from_hex(hex: &str) -> Color {
    Srgba::hex(hex)
        .map(Color::from)
        .unwrap_or(FALLBACK_ACCENT)
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Brand {
    pub title: String,
    pub build: String,
    pub tagline: String,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            title: "PORTFOLIO".into(),
            build: "IMMERSIVE_MODE".into(),
            tagline: "Immersive Portfolio Experience".into(),
        }
    }
}

/// HUD copy for one section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SectionCopy {
    pub name: String,
    pub status: String,
    pub color: String,
}

impl SectionCopy {
    pub fn accent(&self) -> Color {
        color_from_hex(&self.color)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Mission {
    pub title: String,
    pub objective: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuickLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub color: String,
    pub position: [f32; 3],
    #[serde(default)]
    pub links: Vec<QuickLink>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Skill {
    pub name: String,
    pub color: String,
    pub position: [f32; 3],
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Certificate {
    pub name: String,
    pub provider: String,
    pub date: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Education {
    pub title: String,
    pub institution: String,
    pub year: String,
    pub grade: String,
    pub color: String,
    pub position: [f32; 3],
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Interest {
    pub name: String,
    pub description: String,
    pub color: String,
    pub position: [f32; 3],
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactEntry {
    pub name: String,
    pub value: String,
    pub color: String,
    pub url: String,
}

/// The whole content file.
#[derive(Asset, TypePath, Debug, Clone, PartialEq, Deserialize)]
pub struct PortfolioContent {
    #[serde(default)]
    pub brand: Brand,
    pub sections: Vec<SectionCopy>,
    pub missions: Vec<Mission>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub interests: Vec<Interest>,
    #[serde(default)]
    pub contacts: Vec<ContactEntry>,
    #[serde(default)]
    pub quick_links: Vec<QuickLink>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("expected {expected} section entries, found {found}")]
    SectionCount { expected: usize, found: usize },

    #[error("expected {expected} missions, found {found}")]
    MissionCount { expected: usize, found: usize },
}

impl PortfolioContent {
    /// Every section needs exactly one HUD entry and one mission.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.sections.len() != SECTION_COUNT {
            return Err(ContentError::SectionCount {
                expected: SECTION_COUNT,
                found: self.sections.len(),
            });
        }
        if self.missions.len() != SECTION_COUNT {
            return Err(ContentError::MissionCount {
                expected: SECTION_COUNT,
                found: self.missions.len(),
            });
        }
        Ok(())
    }

    /// Section labels only, no portfolio items.
    pub fn fallback() -> Self {
        Self {
            brand: Brand::default(),
            sections: Section::iter()
                .map(|section| SectionCopy {
                    name: section.label().to_string(),
                    status: "ONLINE".to_string(),
                    color: "#00ffff".to_string(),
                })
                .collect(),
            missions: Section::iter()
                .map(|section| Mission {
                    title: section.phase().replace('_', " "),
                    objective: String::new(),
                })
                .collect(),
            projects: Vec::new(),
            skills: Vec::new(),
            certificates: Vec::new(),
            education: Vec::new(),
            interests: Vec::new(),
            contacts: Vec::new(),
            quick_links: Vec::new(),
        }
    }
}

/// Validated content shared by scenes and overlays.
#[derive(Resource, Debug, Clone, Deref)]
pub struct Content(pub Arc<PortfolioContent>);

impl Content {
    /// Validates `content`; invalid content is logged and replaced by
    /// [`PortfolioContent::fallback`].
    pub fn new(content: PortfolioContent) -> Self {
        match content.validate() {
            Ok(()) => Self(Arc::new(content)),
            Err(err) => {
                error!(target: app::LOG_MAIN, "content rejected: {err}");
                Self::fallback()
            }
        }
    }

    pub fn fallback() -> Self {
        Self(Arc::new(PortfolioContent::fallback()))
    }

    pub fn section(&self, section: Section) -> &SectionCopy {
        &self.sections[section.index()]
    }

    pub fn mission(&self, section: Section) -> &Mission {
        &self.missions[section.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SHIPPED: &str = include_str!("../assets/portfolio.content.ron");

    #[test]
    fn shipped_content_is_valid() {
        let content: PortfolioContent = ron::from_str(SHIPPED).expect("parse content file");
        assert_eq!(content.validate(), Ok(()));
        assert_eq!(content.contacts.len(), 6);
        assert_eq!(content.quick_links.len(), 4);
        assert_eq!(content.sections[Section::Contact.index()].name, "CONTACT");
    }

    #[test]
    fn wrong_section_count_is_rejected() {
        let mut content = PortfolioContent::fallback();
        content.missions.pop();
        assert_eq!(
            content.validate(),
            Err(ContentError::MissionCount {
                expected: SECTION_COUNT,
                found: SECTION_COUNT - 1
            })
        );

        let content = Content::new(content);
        assert_eq!(content.missions.len(), SECTION_COUNT);
        assert_eq!(content.section(Section::Skills).name, "SKILLS");
    }

    #[test]
    fn hex_colors() {
        assert_eq!(color_from_hex("#ff0000"), Color::from(Srgba::rgb(1.0, 0.0, 0.0)));
        assert_eq!(color_from_hex("not a colour"), FALLBACK_ACCENT);
    }
}
