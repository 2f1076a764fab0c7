use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::content::{self, FOOTER_LINKS};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<()>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = Local::now().year();
    let follow = props.on_navigate.reform(|_: MouseEvent| ());

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="site-footer__top">
                    <div class="site-footer__brand">
                        <div class="site-footer__mark">{content::BRAND_MARK}</div>
                        <div class="site-footer__name">
                            {content::BRAND_LINE}<br />
                            <span>{content::BRAND_SUBLINE}</span>
                        </div>
                    </div>
                    <div class="site-footer__links">
                        { for FOOTER_LINKS.iter().map(|(label, target)| {
                            let href = target.map(|section| section.href()).unwrap_or_else(|| "#".to_string());
                            html! { <a key={*label} {href} onclick={follow.clone()}>{*label}</a> }
                        }) }
                    </div>
                </div>
                <div class="site-footer__legal">
                    <p>{content::copyright_line(year)}</p>
                    <p class="site-footer__note">{content::FOOTER_NOTE}</p>
                </div>
            </div>
        </footer>
    }
}
