use common::{CONTACT, Clock, GITHUB_URL, OWNER_NAME, OWNER_ROLE, PROJECT_NAME, PROJECT_URL, copyright_line};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub clock: Clock,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = props.clock.current_year();
    log::trace!("Rendering footer for year {}", year);

    html! {
        <footer class="py-12 px-6 border-t border-white/5 bg-zinc-950">
            <div class="max-w-5xl mx-auto flex flex-col md:flex-row justify-between items-center gap-6">
                <div class="text-center md:text-left">
                    <div class="font-bold text-white mb-1">{ OWNER_NAME }</div>
                    <div class="text-sm text-zinc-500">{ OWNER_ROLE }</div>
                </div>
                <div class="flex gap-6 text-sm text-zinc-400">
                    <a href={PROJECT_URL} class="hover:text-white transition-colors">{ PROJECT_NAME }</a>
                    <a href={GITHUB_URL} class="hover:text-white transition-colors">{"GitHub"}</a>
                    <a href={CONTACT.href()} class="hover:text-white transition-colors">{"Contact"}</a>
                </div>
                <div data-role="copyright" class="text-xs text-zinc-600">
                    { copyright_line(year) }
                </div>
            </div>
        </footer>
    }
}
