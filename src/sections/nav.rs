use leptos::prelude::*;

use super::BRAND;
use crate::scroll::use_scrolled;

#[component]
pub fn Nav() -> impl IntoView {
    let scrolled = use_scrolled();
    view! { <NavBar scrolled=scrolled /> }
}

/// Fixed top bar. Pure function of `scrolled`: transparent over the hero,
/// translucent and blurred once the page has moved.
#[component]
fn NavBar(#[prop(into)] scrolled: Signal<bool>) -> impl IntoView {
    view! {
        <header class=move || if scrolled.get() { "nav nav-scrolled" } else { "nav" }>
            <div class="nav-inner">
                <a href="#home" class="nav-brand">
                    <span class="nav-brand-mark"></span>
                    {BRAND}
                </a>
                <nav class="nav-links">
                    <a href="#about" class="nav-link">"About"</a>
                    <a href="#solutions" class="nav-link">"Solutions"</a>
                    <a href="#work" class="nav-link">"Work"</a>
                    <a href="#contact" class="nav-link">"Contact"</a>
                </nav>
                <a href="#contact" class="nav-cta">"Get Started"</a>
            </div>
        </header>
    }
}
