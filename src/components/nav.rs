use log::{debug, warn};
use yew::prelude::*;

use crate::content::{self, NAV_LINKS};
use crate::nav::{
    overlay_visible, HeaderStyle, NavAction, NavState, ScrollSource, ScrollSubscription,
    ToggleIcon, WindowScroll,
};

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub state: UseReducerHandle<NavState>,
    /// Fired by every link in the header before the browser follows it.
    pub on_navigate: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { state, on_navigate } = props;

    // Subscribe on mount, detach on unmount.
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                debug!("Watching scroll offset past {}px", state.threshold());
                let subscription = WindowScroll::current().map(|source| {
                    source.subscribe(Box::new(move |offset| {
                        state.dispatch(NavAction::Scrolled(offset));
                    }))
                });
                if !subscription.as_ref().map_or(false, ScrollSubscription::is_attached) {
                    warn!("Header will not react to scrolling");
                }
                move || {
                    if let Some(subscription) = subscription {
                        subscription.unsubscribe();
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            state.dispatch(NavAction::ToggleMenu);
        })
    };

    // Not prevented: the browser still follows the anchor.
    let close_menu = on_navigate.reform(|_: MouseEvent| {
        debug!("Navigation link activated, closing menu");
    });

    let header = HeaderStyle::of(state);
    let icon = ToggleIcon::of(state);

    html! {
        <nav class={header.nav_class()}>
            <div class="nav-content">
                <a href="#" class="nav-brand" onclick={close_menu.clone()}>
                    <div class="nav-brand__mark">{content::BRAND_MARK}</div>
                    <div class={header.brand_text_class()}>
                        {content::BRAND_LINE}<br />
                        <span class="nav-brand__sub">{content::BRAND_SUBLINE}</span>
                    </div>
                </a>

                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a
                            key={link.label}
                            href={link.target.href()}
                            class={header.link_class()}
                            onclick={close_menu.clone()}
                        >
                            {link.label}
                        </a>
                    }) }
                </div>

                <button class="nav-toggle" aria-label={icon.aria_label()} onclick={toggle_menu}>
                    <svg class={header.toggle_color_class()} width="32" height="32" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={icon.svg_path()} />
                    </svg>
                </button>
            </div>

            {
                if overlay_visible(state) {
                    html! {
                        <div class="nav-overlay">
                            { for NAV_LINKS.iter().map(|link| html! {
                                <a
                                    key={link.label}
                                    href={link.target.href()}
                                    class="nav-overlay__link"
                                    onclick={close_menu.clone()}
                                >
                                    {link.label}
                                </a>
                            }) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .site-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    transition: all 0.3s ease;
                }

                .site-nav--transparent {
                    background: transparent;
                    padding: 1.25rem 0;
                }

                .site-nav--solid {
                    background: #ffffff;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    padding: 0.75rem 0;
                }

                .nav-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .nav-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    text-decoration: none;
                }

                .nav-brand__mark {
                    background: var(--pv-blue);
                    color: #ffffff;
                    padding: 0.5rem;
                    border-radius: 4px;
                    font-weight: 700;
                    font-size: 1.25rem;
                }

                .nav-brand__text {
                    font-weight: 700;
                    line-height: 1.2;
                }

                .nav-brand__text--light { color: #ffffff; }
                .nav-brand__text--brand { color: var(--pv-blue); }

                .nav-brand__sub {
                    font-size: 0.875rem;
                    font-weight: 500;
                }

                .nav-links {
                    display: none;
                    gap: 2rem;
                }

                .nav-link {
                    font-weight: 600;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .nav-link:hover { color: #ef4444; }
                .nav-link--light { color: #ffffff; }
                .nav-link--dark { color: #334155; }

                .nav-toggle {
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0;
                }

                .nav-toggle__icon--light { color: #ffffff; }
                .nav-toggle__icon--dark { color: #1e293b; }

                .nav-overlay {
                    position: absolute;
                    top: 100%;
                    left: 0;
                    width: 100%;
                    background: #ffffff;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    box-sizing: border-box;
                    animation: fadeInDown 0.3s ease-out;
                }

                .nav-overlay__link {
                    color: #1e293b;
                    font-weight: 600;
                    padding: 0.5rem 0;
                    border-bottom: 1px solid #f1f5f9;
                    text-decoration: none;
                }

                @keyframes fadeInDown {
                    from {
                        opacity: 0;
                        transform: translateY(-10px);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }

                @media (min-width: 768px) {
                    .nav-links { display: flex; }
                    .nav-toggle { display: none; }
                    .nav-overlay { display: none; }
                }
                "#}
            </style>
        </nav>
    }
}
