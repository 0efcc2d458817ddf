use leptos::prelude::*;

#[component]
pub fn Cta() -> impl IntoView {
    view! {
        <section id="contact" class="cta">
            <div class="container">
                <div class="cta-card">
                    <div class="cta-form-pane">
                        <h3 class="cta-title">"Ready to make something great?"</h3>
                        <p class="cta-description">
                            "Tell us about your goals. We'll follow up within one "
                            "business day."
                        </p>
                        // TODO: wire the form up once a contact endpoint exists.
                        <form class="cta-form">
                            <input class="form-field" placeholder="Your name" />
                            <input class="form-field" type="email" placeholder="Work email" />
                            <textarea
                                class="form-field form-textarea"
                                placeholder="Project details"
                            ></textarea>
                            <button type="button" class="btn btn-primary">
                                "Request a consultation"
                            </button>
                        </form>
                    </div>
                    <div class="cta-photo">
                        <img
                            alt="Office"
                            src="https://images.unsplash.com/photo-1487017159836-4e23ece2e4cf?q=80&w=1600&auto=format&fit=crop"
                        />
                        <div class="cta-photo-tint"></div>
                    </div>
                </div>
            </div>
        </section>
    }
}
