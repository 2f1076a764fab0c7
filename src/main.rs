use yew::prelude::*;
use log::info;

mod config;
mod contact;
mod content;
mod nav;
mod components {
    pub mod contact_form;
    pub mod footer;
    pub mod info_card;
    pub mod nav;
    pub mod section_title;
}
mod pages {
    pub mod landing;
}

use components::nav::Nav;
use nav::{navigate_callback, NavAction, NavState};
use pages::landing::{log_contact_handoff, Landing};

#[function_component]
fn App() -> Html {
    let nav_state = use_reducer(NavState::new);

    // Shared by header, hero and footer links. Memoized so a header state
    // change does not re-render the page body.
    let on_navigate = {
        let nav_state = nav_state.clone();
        use_memo(
            move |_| {
                navigate_callback(Callback::from(move |action: NavAction| {
                    nav_state.dispatch(action)
                }))
            },
            (),
        )
    };

    // Delivery of contact messages is not wired up; log the handoff only.
    let on_contact = use_memo(|_| log_contact_handoff(), ());

    html! {
        <div class="app">
            <Nav state={nav_state} on_navigate={(*on_navigate).clone()} />
            <Landing
                on_contact={(*on_contact).clone()}
                on_navigate={(*on_navigate).clone()}
            />
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", err));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
