//! Page content shared between the browser frontend and the `portfolio` CLI.
//! Everything here is compile-time constant except the year read by [`Clock`].

mod anchor;
mod clock;
mod content;

pub use anchor::{Anchor, NavAction};
pub use clock::{Clock, copyright_line};
pub use content::{
    ContactLink, FEATURE_GROUPS, FeatureGroup, Icon, PREVIEW_PANELS, PreviewPanel, TECH_STACK,
};

/// Name shown in the navigation mark, footer and copyright line.
pub const OWNER_NAME: &str = "Aryan";

/// Role line under the owner name in the footer.
pub const OWNER_ROLE: &str = "Frontend / UI-focused Developer";

/// Live URL of the showcased project. Linked from the hero, the showcase and the footer.
pub const PROJECT_URL: &str = "https://discipline-nine.vercel.app/";

/// Display name of the showcased project.
pub const PROJECT_NAME: &str = "Discipline";

/// Footer GitHub link. Intentionally left without a destination.
pub const GITHUB_URL: &str = "#";

/// Recipient and subject behind every "contact me" link on the page.
pub const CONTACT: ContactLink = ContactLink {
    address: "aryanvpersonal@gmail.com",
    subject: "Project Inquiry",
};
