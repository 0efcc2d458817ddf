use leptos::prelude::*;

use super::BRAND;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();
    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <div class="footer-brand">
                    <span class="footer-brand-mark"></span>
                    <span class="footer-copyright">
                        {format!("© {year} {BRAND}. All rights reserved.")}
                    </span>
                </div>
                <div class="footer-links">
                    <a href="#about" class="footer-link">"About"</a>
                    <a href="#solutions" class="footer-link">"Solutions"</a>
                    <a href="#work" class="footer-link">"Work"</a>
                    <a href="#contact" class="footer-link">"Contact"</a>
                </div>
            </div>
        </footer>
    }
}
