/// Icon symbols used on the page. Rendering lives in the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Clock,
    Shield,
    CheckCircle,
    Layers,
    Calendar,
    Monitor,
    ExternalLink,
    Mail,
}

impl Icon {
    /// Tailwind text colour applied to the icon stroke.
    pub fn accent_class(self) -> &'static str {
        match self {
            Icon::Clock => "text-indigo-400",
            Icon::Shield => "text-emerald-400",
            Icon::CheckCircle => "text-blue-400",
            Icon::Layers => "text-purple-400",
            Icon::Calendar => "text-orange-400",
            Icon::Monitor => "text-pink-400",
            Icon::ExternalLink | Icon::Mail => "",
        }
    }
}

/// A titled bundle of capability strings, rendered by a feature card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureGroup {
    pub icon: Icon,
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub const FEATURE_GROUPS: [FeatureGroup; 6] = [
    FeatureGroup {
        icon: Icon::Clock,
        title: "Study Workflow",
        items: &[
            "Timetable-based schedule mode",
            "Free Flow sessions & Pomodoro",
            "Built-in Timer & Stopwatch",
            "Smart break flow controls",
        ],
    },
    FeatureGroup {
        icon: Icon::Shield,
        title: "Focus & Anti-Distraction",
        items: &[
            "Focus breach detection",
            "Distraction counter & alerts",
            "App/Website whitelist",
            "Safe mini floating window",
        ],
    },
    FeatureGroup {
        icon: Icon::CheckCircle,
        title: "Tracking & Verification",
        items: &[
            "Accurate wall-clock tracking",
            "Points, streaks & stats",
            "Session verification logs",
            "Problem & chapter tracking",
        ],
    },
    FeatureGroup {
        icon: Icon::Layers,
        title: "Revision System",
        items: &[
            "Subject-wise chapter bank",
            "Independent revision cycles",
            "Tracker dashboard",
            "Revision reminders",
        ],
    },
    FeatureGroup {
        icon: Icon::Calendar,
        title: "Tasks & Planning",
        items: &[
            "Floating task board",
            "Daily study heatmap",
            "Exam schedule widgets",
            "Countdown timers",
        ],
    },
    FeatureGroup {
        icon: Icon::Monitor,
        title: "Desktop Capabilities",
        items: &[
            "Electron multi-window support",
            "PDF & external link handling",
            "Desktop packaging support",
            "Native system integration",
        ],
    },
];

pub const TECH_STACK: [&str; 6] = [
    "React",
    "Vite",
    "Tailwind CSS",
    "Electron",
    "Vercel",
    "TypeScript",
];

/// Decorative screenshot stand-ins in the showcase gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewPanel {
    Dashboard,
    FocusTimer,
    TaskBoard,
    Analytics,
}

pub const PREVIEW_PANELS: [PreviewPanel; 4] = [
    PreviewPanel::Dashboard,
    PreviewPanel::FocusTimer,
    PreviewPanel::TaskBoard,
    PreviewPanel::Analytics,
];

impl PreviewPanel {
    /// Caption revealed on hover.
    pub fn caption(self) -> &'static str {
        match self {
            PreviewPanel::Dashboard => "Dashboard Overview",
            PreviewPanel::FocusTimer => "Focus Timer",
            PreviewPanel::TaskBoard => "Kanban Task Board",
            PreviewPanel::Analytics => "Progress Analytics",
        }
    }

    /// Bar heights in percent for the analytics mock chart.
    pub fn bar_heights(self) -> &'static [u8] {
        match self {
            PreviewPanel::Analytics => &[40, 60, 30, 80, 50, 90, 70],
            _ => &[],
        }
    }

    /// Placeholder card count per column for the task board mock.
    pub fn board_columns(self) -> &'static [usize] {
        match self {
            PreviewPanel::TaskBoard => &[2, 1, 0],
            _ => &[],
        }
    }
}

/// A `mailto:` link with a pre-filled subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub address: &'static str,
    pub subject: &'static str,
}

impl ContactLink {
    pub fn href(&self) -> String {
        format!(
            "mailto:{}?subject={}",
            self.address,
            self.subject.replace(' ', "%20")
        )
    }
}
