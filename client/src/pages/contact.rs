//! Contact page. The form is handed to the visitor's mail client; there is
//! no message backend.

use leptos::prelude::*;

pub const SUPPORT_EMAIL: &str = "support@veritas.ai";

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <section class="page page--muted contact">
            <div class="contact__form-col">
                <h1 class="page__title page__title--left">"Contact Us"</h1>
                <p class="contact__intro">
                    "Have questions or feedback? We'd love to hear from you. "
                    "Fill out the form below or reach us directly."
                </p>
                <form
                    class="contact__form"
                    action=format!("mailto:{SUPPORT_EMAIL}")
                    method="post"
                    enctype="text/plain"
                >
                    <label class="contact__label">
                        "Name" <input class="contact__input" type="text" name="name" placeholder="Your Name"/>
                    </label>
                    <label class="contact__label">
                        "Email"
                        <input class="contact__input" type="email" name="email" placeholder="your@email.com"/>
                    </label>
                    <label class="contact__label">
                        "Message"
                        <textarea
                            class="contact__input"
                            rows="5"
                            name="message"
                            placeholder="Write your message..."
                        ></textarea>
                    </label>
                    <button type="submit" class="btn btn--primary contact__submit">"Send Message"</button>
                </form>
            </div>
            <div class="contact__info">
                <h2>"Get in Touch"</h2>
                <ul>
                    <li>"📧 " {SUPPORT_EMAIL}</li>
                    <li>"📞 +1 (234) 567-890"</li>
                    <li>"📍 123 News Lane, Info City, World"</li>
                </ul>
            </div>
        </section>
    }
}
