//! Page-level CSS that Tailwind utilities do not cover.

/// Applied to the hero block; plays the entrance animation once per mount.
pub const HERO_ENTER_CLASS: &str = "hero-enter";

pub const PAGE_CSS: &str = "\
@keyframes hero-enter {\
  from { opacity: 0; transform: translateY(20px); }\
  to { opacity: 1; transform: translateY(0); }\
}\
.hero-enter { animation: hero-enter 0.6s ease-out both; }";
