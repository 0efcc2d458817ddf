use leptos::prelude::*;

// Third-party 3D scene rendered by the viewer script loaded in index.html.
// Injected as an opaque blob: if the viewer or scene never loads, the hero
// keeps its overlay and copy over an empty background.
const SCENE_EMBED: &str = r#"<spline-viewer url="https://prod.spline.design/cEecEwR6Ehj4iT8T/scene.splinecode" style="width: 100%; height: 100%;"></spline-viewer>"#;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="hero-scene" inner_html=SCENE_EMBED></div>
            <div class="hero-overlay"></div>
            <div class="container hero-content">
                <span class="hero-badge">"Modern • Clean • Impactful"</span>
                <h1 class="hero-title">
                    "Build a sharper digital presence with a clean, modern look"
                </h1>
                <p class="hero-description">
                    "We craft elegant, high-performance web experiences that elevate "
                    "your brand and drive results. Designed with precision, powered by "
                    "modern tech, and tailored to your goals."
                </p>
                <div class="hero-actions">
                    <a href="#contact" class="btn btn-primary">"Talk to our team"</a>
                    <a href="#solutions" class="btn btn-secondary">"Explore solutions"</a>
                </div>
            </div>
        </section>
    }
}
