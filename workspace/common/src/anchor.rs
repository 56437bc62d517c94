/// In-page scroll targets. Each id is rendered on exactly one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Project,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 2] = [Anchor::Project, Anchor::Contact];

    /// DOM id of the section carrying this anchor.
    pub fn id(self) -> &'static str {
        match self {
            Anchor::Project => "project",
            Anchor::Contact => "contact",
        }
    }
}

/// Buttons in the fixed navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Work,
    Contact,
}

impl NavAction {
    pub const ALL: [NavAction; 2] = [NavAction::Work, NavAction::Contact];

    pub fn label(self) -> &'static str {
        match self {
            NavAction::Work => "Work",
            NavAction::Contact => "Contact",
        }
    }

    pub fn target(self) -> Anchor {
        match self {
            NavAction::Work => Anchor::Project,
            NavAction::Contact => Anchor::Contact,
        }
    }
}
