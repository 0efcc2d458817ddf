use leptos::prelude::*;

/// One card in the solutions grid.
pub struct SolutionItem {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const SOLUTIONS: [SolutionItem; 3] = [
    SolutionItem {
        title: "Brand-first websites",
        description: "Clean, responsive, and fast—crafted to reflect your identity and convert visitors.",
        icon: "🧭",
    },
    SolutionItem {
        title: "Product landing pages",
        description: "Launch-ready pages with clear messaging, crisp visuals, and strong CTAs.",
        icon: "🚀",
    },
    SolutionItem {
        title: "Design systems",
        description: "Consistent, scalable components—built with accessibility and polish in mind.",
        icon: "🧩",
    },
];

/// One entry in the track-record band under the grid.
pub struct StatItem {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: [StatItem; 4] = [
    StatItem { value: "98%", label: "Client satisfaction" },
    StatItem { value: "120+", label: "Projects shipped" },
    StatItem { value: "<1s", label: "Core page load" },
    StatItem { value: "A+", label: "Accessibility first" },
];

#[component]
pub fn Solutions() -> impl IntoView {
    view! {
        <section id="solutions" class="solutions">
            <div class="container">
                <div class="solutions-grid">
                    <div class="solutions-content">
                        <h2 class="section-title">
                            "Solutions that look great and work even better"
                        </h2>
                        <p class="section-description">
                            "We combine thoughtful design, robust engineering, and "
                            "performance best practices to deliver experiences your "
                            "audience will love."
                        </p>
                        <div class="solutions-cards">
                            {SOLUTIONS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <SolutionCard
                                            title=item.title
                                            description=item.description
                                            icon=item.icon
                                        />
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="solutions-preview">
                        <img
                            class="preview-image"
                            alt="Design preview"
                            src="https://images.unsplash.com/photo-1526498460520-4c246339dccb?q=80&w=1600&auto=format&fit=crop"
                        />
                    </div>
                </div>
                // Track-record band doubles as the #work anchor target.
                <div id="work" class="stats-band">
                    {STATS
                        .iter()
                        .map(|stat| view! { <Stat value=stat.value label=stat.label /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SolutionCard(
    title: &'static str,
    description: &'static str,
    icon: &'static str,
) -> impl IntoView {
    view! {
        <article class="solution-card">
            <div class="solution-icon">{icon}</div>
            <h3 class="solution-title">{title}</h3>
            <p class="solution-description">{description}</p>
        </article>
    }
}

#[component]
fn Stat(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="stat">
            <div class="stat-value">{value}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::test_host;
    use leptos::mount::mount_to;
    use leptos::task::tick;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn renders_one_card_per_solution() {
        let _handle = mount_to(test_host(), || view! { <Solutions /> });
        tick().await;

        let cards = document().query_selector_all(".solution-card").unwrap();
        assert_eq!(cards.length() as usize, SOLUTIONS.len());

        let text = document()
            .query_selector("#solutions")
            .unwrap()
            .unwrap()
            .text_content()
            .unwrap();
        for item in &SOLUTIONS {
            assert!(text.contains(item.title), "missing title {:?}", item.title);
            assert!(
                text.contains(item.description),
                "missing description for {:?}",
                item.title
            );
            assert!(text.contains(item.icon), "missing icon for {:?}", item.title);
        }
    }

    #[wasm_bindgen_test]
    async fn stats_band_carries_the_work_anchor() {
        let _handle = mount_to(test_host(), || view! { <Solutions /> });
        tick().await;

        let stats = document().query_selector_all("#work .stat").unwrap();
        assert_eq!(stats.length() as usize, STATS.len());

        let text = document()
            .query_selector("#work")
            .unwrap()
            .unwrap()
            .text_content()
            .unwrap();
        for stat in &STATS {
            assert!(text.contains(stat.value), "missing value {:?}", stat.value);
            assert!(text.contains(stat.label), "missing label {:?}", stat.label);
        }
    }
}
