use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    /// Light text for dark section backgrounds.
    #[prop_or_default]
    pub light: bool,
}

#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    let SectionTitleProps { title, subtitle, light } = props;

    html! {
        <div class={classes!("section-title", light.then(|| "section-title--light"))}>
            <h2>{title.clone()}</h2>
            <div class="section-title__bar"></div>
            {
                if let Some(subtitle) = subtitle {
                    html! { <p>{subtitle.clone()}</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
