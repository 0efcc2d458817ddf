use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="container">
                <div class="about-grid">
                    <div class="about-content">
                        <h2 class="section-title">
                            "A clean aesthetic, tailored to your brand"
                        </h2>
                        <p class="section-description">
                            "Your brand color takes the lead. We use deep accents, "
                            "generous whitespace, and crisp typography to create a "
                            "refined, modern look that feels unmistakably yours."
                        </p>
                        <ul class="about-points">
                            <li class="about-point">
                                <span class="point-dot"></span>
                                "Pixel-perfect layout and spacing"
                            </li>
                            <li class="about-point">
                                <span class="point-dot"></span>
                                "Fast loads, smooth interactions"
                            </li>
                            <li class="about-point">
                                <span class="point-dot"></span>
                                "Built for long-term scalability"
                            </li>
                        </ul>
                    </div>
                    <div class="about-panel">
                        <div class="panel-header">"Primary color in action"</div>
                        <div class="panel-swatches">
                            <div class="swatch swatch-full"></div>
                            <div class="swatch swatch-80"></div>
                            <div class="swatch swatch-60"></div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
