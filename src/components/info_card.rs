use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InfoCardProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(InfoCard)]
pub fn info_card(props: &InfoCardProps) -> Html {
    html! {
        <div class="info-card">
            <div class="info-card__icon">{props.icon.clone()}</div>
            <h3>{props.title.clone()}</h3>
            <div class="info-card__body">
                { for props.children.iter() }
            </div>
        </div>
    }
}
