//! お問い合わせページ（"/about"）
//!
//! フォームの送信は形だけ: リモートへの書き込みは行わず、
//! 受け付けた旨を表示してコンソールに記録する。

use gloo::console;
use leptos::prelude::*;

#[component]
pub fn Contact() -> impl IntoView {
    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (subject, set_subject) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (agree_terms, set_agree_terms) = signal(false);
    let (submitted, set_submitted) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        console::log!(
            "Contact form submitted (not sent):",
            format!("{} {} <{}>", first_name.get(), last_name.get(), email.get())
        );
        set_submitted.set(true);
    };

    view! {
        <div class="page contact">
            <h1 class="page-title">"Contact"</h1>

            <Show
                when=move || !submitted.get()
                fallback=|| view! {
                    <p class="success-message">
                        "Thank you for your message. We will get back to you soon."
                    </p>
                }
            >
                <form class="contact-form" on:submit=on_submit>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="first-name">"First name"</label>
                            <input
                                type="text"
                                id="first-name"
                                prop:value=move || first_name.get()
                                on:input=move |ev| set_first_name.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="last-name">"Last name"</label>
                            <input
                                type="text"
                                id="last-name"
                                prop:value=move || last_name.get()
                                on:input=move |ev| set_last_name.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="subject">"Subject"</label>
                        <input
                            type="text"
                            id="subject"
                            prop:value=move || subject.get()
                            on:input=move |ev| set_subject.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="message">"Message"</label>
                        <textarea
                            id="message"
                            rows="6"
                            prop:value=move || message.get()
                            on:input=move |ev| set_message.set(event_target_value(&ev))
                        ></textarea>
                    </div>

                    <label class="form-checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || agree_terms.get()
                            on:change=move |ev| set_agree_terms.set(event_target_checked(&ev))
                        />
                        "I agree to the terms and conditions"
                    </label>

                    <button type="submit" class="btn btn-primary" disabled=move || !agree_terms.get()>
                        "Send message"
                    </button>
                </form>
            </Show>
        </div>
    }
}
