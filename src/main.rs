// Studio landing page, Leptos 0.8 CSR.

mod scroll;
mod sections;

use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Nav />
        <main>
            <Hero />
            <Solutions />
            <About />
            <Cta />
        </main>
        <Footer />
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use leptos::task::tick;
    use wasm_bindgen::JsCast;

    /// Fresh container appended to `<body>` for one mounted view.
    pub fn test_host() -> web_sys::HtmlElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let host = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&host).unwrap();
        host.dyn_into().unwrap()
    }

    /// Gives the page enough height that `scroll_to` actually moves it.
    pub fn make_page_scrollable() {
        let document = web_sys::window().unwrap().document().unwrap();
        if document.get_element_by_id("test-spacer").is_none() {
            let spacer = document.create_element("div").unwrap();
            spacer.set_id("test-spacer");
            spacer.set_attribute("style", "height: 10000px;").unwrap();
            document.body().unwrap().append_child(&spacer).unwrap();
        }
    }

    /// Scrolls the window, fires a `scroll` event, and flushes the reactive
    /// queue so class bindings have settled before the caller asserts.
    pub async fn set_scroll_offset(y: f64) {
        let window = web_sys::window().unwrap();
        window.scroll_to_with_x_and_y(0.0, y);
        let event = web_sys::Event::new("scroll").unwrap();
        window.dispatch_event(&event).unwrap();
        tick().await;
    }
}
