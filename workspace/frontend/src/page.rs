use common::{Clock, NavAction};
use yew::prelude::*;

use crate::components::layout::{Footer, NavBar};
use crate::components::sections::{About, Contact, Hero};
use crate::components::showcase::ProjectShowcase;
use crate::scroll::{BrowserViewport, Viewport, scroll_to_anchor};
use crate::theme::PAGE_CSS;

/// Action behind the hero "View Project" button.
const VIEW_PROJECT: NavAction = NavAction::Work;

#[derive(Properties, PartialEq, Default)]
pub struct PageProps {
    /// Year source for the copyright line.
    #[prop_or_default]
    pub clock: Clock,
}

/// The whole portfolio document body, sections in fixed order.
#[function_component(Page)]
pub fn page(props: &PageProps) -> Html {
    let on_navigate = Callback::from(|action: NavAction| {
        navigate(&BrowserViewport, action);
    });
    let on_view_project = on_navigate.reform(|_: MouseEvent| VIEW_PROJECT);

    html! {
        <div class="min-h-screen selection:bg-indigo-500/30 selection:text-indigo-200">
            <style>{ PAGE_CSS }</style>
            <NavBar {on_navigate} />
            <Hero {on_view_project} />
            <About />
            <ProjectShowcase />
            <Contact />
            <Footer clock={props.clock} />
        </div>
    }
}

/// Scrolls to the section a nav or hero button points at.
fn navigate(viewport: &impl Viewport, action: NavAction) -> bool {
    scroll_to_anchor(viewport, action.target())
}

/// Renders the page to static markup with the given year source.
#[cfg(feature = "ssr")]
pub async fn render_to_string(clock: Clock) -> String {
    log::debug!("Server-rendering page with {:?}", clock);
    yew::ServerRenderer::<Page>::with_props(move || PageProps { clock })
        .hydratable(false)
        .render()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::FakeViewport;

    #[test]
    fn test_nav_buttons_scroll_to_their_sections() {
        let viewport = FakeViewport::with(&["project", "contact"]);

        assert!(navigate(&viewport, NavAction::Work));
        assert_eq!(viewport.scrolled_ids(), vec!["project"]);

        assert!(navigate(&viewport, NavAction::Contact));
        assert_eq!(viewport.scrolled_ids(), vec!["project", "contact"]);
    }

    #[test]
    fn test_view_project_scrolls_to_project() {
        let viewport = FakeViewport::with(&["project", "contact"]);

        assert!(navigate(&viewport, VIEW_PROJECT));
        assert_eq!(viewport.scrolled_ids(), vec!["project"]);
    }

    #[test]
    fn test_navigate_without_target_is_a_no_op() {
        let viewport = FakeViewport::with(&[]);

        assert!(!navigate(&viewport, NavAction::Contact));
        assert!(viewport.scrolled_ids().is_empty());
    }
}
