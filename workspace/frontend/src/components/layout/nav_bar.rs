use common::{NavAction, OWNER_NAME};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub on_navigate: Callback<NavAction>,
}

/// Fixed header with the identity mark and the in-page scroll buttons.
#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    html! {
        <nav class="fixed top-0 left-0 right-0 z-50 backdrop-blur-md bg-zinc-950/70 border-b border-white/5">
            <div class="max-w-5xl mx-auto px-6 h-16 flex items-center justify-between">
                <div class="font-bold text-lg tracking-tight text-white">
                    { OWNER_NAME }<span class="text-indigo-400">{"."}</span>
                </div>
                <div class="flex gap-6 text-sm font-medium text-zinc-400">
                    { for NavAction::ALL.into_iter().map(|action| {
                        let on_navigate = props.on_navigate.clone();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            log::debug!("Nav action clicked: {:?}", action);
                            on_navigate.emit(action);
                        });
                        html! {
                            <button
                                type="button"
                                data-nav-target={action.target().id()}
                                class="hover:text-white transition-colors"
                                {onclick}
                            >
                                { action.label() }
                            </button>
                        }
                    }) }
                </div>
            </div>
        </nav>
    }
}
