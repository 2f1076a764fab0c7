use log::{debug, info};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::ContactMessage;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    /// Receives the message once every field is filled in.
    pub on_submit: Callback<ContactMessage>,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            name.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            email.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            message.set(e.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let submission = ContactMessage::new(&name, &email, &message);
            if !submission.is_complete() {
                debug!("Contact form submitted with blank fields, ignoring");
                return;
            }
            info!("Handing off contact message");
            on_submit.emit(submission);
            name.set(String::new());
            email.set(String::new());
            message.set(String::new());
        })
    };

    html! {
        <form class="contact-form" {onsubmit}>
            <div class="contact-form__fields">
                <input
                    type="text"
                    placeholder="Họ và tên của bạn"
                    value={(*name).clone()}
                    oninput={on_name}
                    required=true
                />
                <input
                    type="email"
                    placeholder="Địa chỉ Email"
                    value={(*email).clone()}
                    oninput={on_email}
                    required=true
                />
                <textarea
                    rows="4"
                    placeholder="Nội dung liên hệ..."
                    value={(*message).clone()}
                    oninput={on_message}
                    required=true
                />
            </div>
            <button type="submit" class="contact-form__submit">
                {"Gửi thông tin ngay"}
            </button>
        </form>
    }
}
