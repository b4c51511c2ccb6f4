use std::fmt;
use strum::{EnumCount, EnumIter, FromRepr, IntoEnumIterator};

/// Number of discrete sections in the tour.
pub const SECTION_COUNT: usize = Section::COUNT;

/// One discrete stop of the scroll experience, in scroll order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCount, FromRepr,
)]
pub enum Section {
    Hero,
    WorkspaceEntry,
    WorkspaceActive,
    About,
    Projects,
    Skills,
    Education,
    Interests,
    Contact,
}

impl Section {
    pub const FIRST: Section = Section::Hero;
    pub const LAST: Section = Section::Contact;

    pub fn index(self) -> usize {
        self as usize
    }

    /// Section for an ordinal; anything past the end maps to [`Section::LAST`].
    pub fn from_index(index: usize) -> Self {
        Self::from_repr(index.min(SECTION_COUNT - 1)).unwrap_or(Self::LAST)
    }

    pub fn iter() -> impl Iterator<Item = Section> {
        <Self as IntoEnumIterator>::iter()
    }

    /// Scene subtree shown while this section is active.
    pub fn scene(self) -> SceneKind {
        match self {
            Section::Hero => SceneKind::Hero,
            Section::WorkspaceEntry | Section::WorkspaceActive => SceneKind::Workspace,
            Section::About => SceneKind::About,
            Section::Projects => SceneKind::Projects,
            Section::Skills => SceneKind::Skills,
            Section::Education => SceneKind::Education,
            Section::Interests => SceneKind::Interests,
            Section::Contact => SceneKind::Contact,
        }
    }

    /// Mission phase label shown under the progress bar.
    pub fn phase(self) -> &'static str {
        match self {
            Section::Hero => "INITIALIZATION",
            Section::WorkspaceEntry => "WORKSPACE_ENTRY",
            Section::WorkspaceActive => "WORKSPACE_ACTIVE",
            Section::About => "HOLOGRAM_SCAN",
            Section::Projects => "PROJECTS_MATRIX",
            Section::Skills => "NEURAL_NETWORK",
            Section::Education => "TIMELINE_ACCESS",
            Section::Interests => "GALAXY_EXPLORATION",
            Section::Contact => "CONTACT_STATION",
        }
    }

    /// Short uppercase name, used when no content file is available.
    pub fn label(self) -> &'static str {
        match self.scene() {
            SceneKind::Hero => "HERO",
            SceneKind::Workspace => "WORKSPACE",
            SceneKind::About => "ABOUT",
            SceneKind::Projects => "PROJECTS",
            SceneKind::Skills => "SKILLS",
            SceneKind::Education => "EDUCATION",
            SceneKind::Interests => "INTERESTS",
            SceneKind::Contact => "CONTACT",
        }
    }

    pub fn is_last(self) -> bool {
        self == Self::LAST
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.phase(), self.index())
    }
}

/// Decorative 3D scene; several sections may share one (the workspace).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum SceneKind {
    Hero,
    Workspace,
    About,
    Projects,
    Skills,
    Education,
    Interests,
    Contact,
}

impl SceneKind {
    pub fn iter() -> impl Iterator<Item = SceneKind> {
        <Self as IntoEnumIterator>::iter()
    }

    pub fn visible_in(self, section: Section) -> bool {
        match self {
            SceneKind::Hero => section == Section::Hero,
            SceneKind::Workspace => matches!(
                section,
                Section::WorkspaceEntry | Section::WorkspaceActive
            ),
            SceneKind::About => section == Section::About,
            SceneKind::Projects => section == Section::Projects,
            SceneKind::Skills => section == Section::Skills,
            SceneKind::Education => section == Section::Education,
            SceneKind::Interests => section == Section::Interests,
            SceneKind::Contact => section >= Section::Contact,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SceneKind::Hero => "Hero",
            SceneKind::Workspace => "Workspace",
            SceneKind::About => "About",
            SceneKind::Projects => "Projects",
            SceneKind::Skills => "Skills",
            SceneKind::Education => "Education",
            SceneKind::Interests => "Interests",
            SceneKind::Contact => "Contact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nine_sections_in_scroll_order() {
        assert_eq!(SECTION_COUNT, 9);
        for (i, section) in Section::iter().enumerate() {
            assert_eq!(section.index(), i);
            assert_eq!(Section::from_index(i), section);
        }
    }

    #[test]
    fn from_index_clamps_past_the_end() {
        assert_eq!(Section::from_index(SECTION_COUNT), Section::Contact);
        assert_eq!(Section::from_index(usize::MAX), Section::Contact);
    }

    #[test]
    fn exactly_one_scene_per_section() {
        for section in Section::iter() {
            let visible: Vec<_> = SceneKind::iter()
                .filter(|scene| scene.visible_in(section))
                .collect();
            assert_eq!(visible, vec![section.scene()], "section {section}");
        }
    }

    #[test]
    fn workspace_spans_two_sections() {
        let sections: Vec<_> = Section::iter()
            .filter(|s| SceneKind::Workspace.visible_in(*s))
            .collect();
        assert_eq!(
            sections,
            vec![Section::WorkspaceEntry, Section::WorkspaceActive]
        );
    }
}
