#[cfg(test)]
mod page_tests {
    use crate::document::{render_body, wrap_document};
    use crate::inspect::{CapabilityGroup, MAILTO_LINK_COUNT, PROJECT_LINK_COUNT, inspect};
    use common::{CONTACT, Clock, GITHUB_URL, PROJECT_URL, copyright_line};

    async fn render_year(year: i32) -> String {
        render_body(Clock::Fixed(year)).await
    }

    #[tokio::test]
    async fn test_rendered_page_has_no_violations() {
        let html = render_year(2030).await;
        let violations = inspect(&html).violations(2030);
        assert!(violations.is_empty(), "unexpected violations: {:?}", violations);
    }

    #[tokio::test]
    async fn test_anchors_are_unique() {
        let report = inspect(&render_year(2025).await);

        assert_eq!(report.id_count("project"), 1);
        assert_eq!(report.id_count("contact"), 1);
        assert!(report.ids.values().all(|&count| count == 1));
    }

    #[tokio::test]
    async fn test_nav_buttons_target_anchors() {
        let html = render_year(2025).await;

        let work = html.find(r#"data-nav-target="project""#).expect("Work button rendered");
        let contact = html.find(r#"data-nav-target="contact""#).expect("Contact button rendered");
        assert!(work < contact);
        assert!(html.contains(">Work</button>"));
        assert!(html.contains(">Contact</button>"));
    }

    #[tokio::test]
    async fn test_sections_render_in_order() {
        let html = render_year(2025).await;

        let positions: Vec<usize> = [
            "<nav",
            "Frontend Developer",
            "About Me",
            r#"id="project""#,
            "Tech Stack",
            "Dashboard Overview",
            r#"id="contact""#,
            "<footer",
        ]
        .iter()
        .map(|marker| html.find(marker).unwrap_or_else(|| panic!("missing {}", marker)))
        .collect();

        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{:?}", positions);
    }

    #[tokio::test]
    async fn test_six_capability_groups() {
        let report = inspect(&render_year(2025).await);

        assert_eq!(report.capability_groups.len(), 6);
        for group in &report.capability_groups {
            assert!(!group.title.is_empty());
            assert!(!group.items.is_empty());
        }
        assert_eq!(
            report.capability_groups[0],
            CapabilityGroup {
                title: "Study Workflow".to_string(),
                items: vec![
                    "Timetable-based schedule mode".to_string(),
                    "Free Flow sessions & Pomodoro".to_string(),
                    "Built-in Timer & Stopwatch".to_string(),
                    "Smart break flow controls".to_string(),
                ],
            }
        );
        let titles: Vec<_> = report.capability_groups.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "Study Workflow",
                "Focus & Anti-Distraction",
                "Tracking & Verification",
                "Revision System",
                "Tasks & Planning",
                "Desktop Capabilities",
            ]
        );
    }

    #[tokio::test]
    async fn test_tech_stack_order() {
        let report = inspect(&render_year(2025).await);
        assert_eq!(
            report.tech_stack,
            ["React", "Vite", "Tailwind CSS", "Electron", "Vercel", "TypeScript"]
        );
    }

    #[tokio::test]
    async fn test_footer_copyright_uses_clock_year() {
        for year in [1999, 2024, 2031] {
            let report = inspect(&render_year(year).await);
            let copyright = report.copyright.expect("copyright line rendered");
            assert!(copyright.ends_with(&format!("© {} Aryan. All rights reserved.", year)));
        }
    }

    #[tokio::test]
    async fn test_system_clock_year_matches_chrono() {
        use chrono::Datelike;

        let before = chrono::Local::now().year();
        let report = inspect(&render_body(Clock::System).await);
        let after = chrono::Local::now().year();

        let copyright = report.copyright.expect("copyright line rendered");
        assert!(
            copyright == copyright_line(before) || copyright == copyright_line(after),
            "unexpected copyright line: {}",
            copyright
        );
    }

    #[tokio::test]
    async fn test_rerender_changes_only_the_year() {
        let first = render_year(2024).await;
        let again = render_year(2024).await;
        let next_year = render_year(2025).await;

        assert_eq!(first, again);
        assert_ne!(first, next_year);
        assert_eq!(
            first.replace(&copyright_line(2024), &copyright_line(2025)),
            next_year
        );
    }

    #[tokio::test]
    async fn test_outbound_links() {
        let report = inspect(&render_year(2025).await);

        assert_eq!(report.link_count(PROJECT_URL), PROJECT_LINK_COUNT);
        assert_eq!(report.link_count(&CONTACT.href()), MAILTO_LINK_COUNT);
        assert_eq!(report.link_count(GITHUB_URL), 1);

        let mailtos: Vec<_> = report.links.iter().filter(|l| l.starts_with("mailto:")).collect();
        assert!(mailtos.iter().all(|l| l.as_str() == "mailto:aryanvpersonal@gmail.com?subject=Project%20Inquiry"));
    }

    #[tokio::test]
    async fn test_external_links_open_in_new_tab() {
        let html = render_year(2025).await;
        assert_eq!(html.matches(r#"target="_blank""#).count(), 2);
        assert_eq!(html.matches(r#"rel="noreferrer""#).count(), 2);
    }

    #[tokio::test]
    async fn test_hero_entrance_animation_is_applied() {
        let html = render_year(2025).await;
        assert!(html.contains("@keyframes hero-enter"));
        assert!(html.contains("hero-enter"));
        assert_eq!(html.matches(r#"data-role="preview-panel""#).count(), 4);
    }

    #[tokio::test]
    async fn test_wrap_document() {
        let body = render_year(2025).await;
        let settings = crate::config::RenderSettings {
            title: "Aryan & Co <dev>".to_string(),
            ..Default::default()
        };
        let document = wrap_document(&body, &settings);

        assert!(document.starts_with("<!DOCTYPE html>"));
        assert!(document.contains("<title>Aryan &amp; Co &lt;dev&gt;</title>"));
        assert!(document.contains(r#"<script src="https://cdn.tailwindcss.com"></script>"#));
        assert!(document.contains(&body));
        assert_eq!(inspect(&document).violations(2025), vec![]);
    }
}

#[cfg(test)]
mod config_tests {
    use crate::config::{RenderSettings, STDOUT};
    use common::Clock;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = RenderSettings::default();
        assert_eq!(settings.output, STDOUT);
        assert!(settings.writes_to_stdout());
        assert_eq!(settings.clock(), Clock::System);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = RenderSettings::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings.title, RenderSettings::default().title);
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "output = \"dist/index.html\"").unwrap();
        writeln!(file, "year = 2027").unwrap();
        writeln!(file, "title = \"Portfolio\"").unwrap();

        let settings = RenderSettings::load(&path).unwrap();

        assert_eq!(settings.output, "dist/index.html");
        assert_eq!(settings.year, Some(2027));
        assert_eq!(settings.title, "Portfolio");
        assert_eq!(settings.tailwind_url, RenderSettings::default().tailwind_url);
        assert_eq!(settings.clock(), Clock::Fixed(2027));
    }

    #[test]
    fn test_flags_override_file() {
        let settings = RenderSettings {
            output: "file.html".to_string(),
            year: Some(2020),
            ..Default::default()
        };

        let unchanged = settings.clone().with_overrides(None, None);
        assert_eq!(unchanged, settings);

        let overridden = settings.with_overrides(Some("-".to_string()), Some(2040));
        assert!(overridden.writes_to_stdout());
        assert_eq!(overridden.clock(), Clock::Fixed(2040));
    }
}

#[cfg(test)]
mod command_tests {
    use crate::cli::commands::{check, render};
    use crate::config::RenderSettings;

    #[tokio::test]
    async fn test_render_writes_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dist").join("index.html");
        let settings = RenderSettings {
            output: path.to_string_lossy().into_owned(),
            year: Some(2026),
            ..Default::default()
        };

        render(&settings, false).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<!DOCTYPE html>"));
        assert!(written.contains("© 2026 Aryan. All rights reserved."));
    }

    #[tokio::test]
    async fn test_render_fragment_has_no_document_shell() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("body.html");
        let settings = RenderSettings {
            output: path.to_string_lossy().into_owned(),
            year: Some(2026),
            ..Default::default()
        };

        render(&settings, true).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.contains("<!DOCTYPE html>"));
        assert!(written.contains(r#"id="contact""#));
    }

    #[tokio::test]
    async fn test_check_passes_for_pinned_and_system_year() {
        let pinned = RenderSettings {
            year: Some(2028),
            ..Default::default()
        };
        check(&pinned, false).await.unwrap();
        check(&RenderSettings::default(), false).await.unwrap();
    }
}
