use web_sys::MouseEvent;
use yew::prelude::*;

use cskit::i18n::strings;
use cskit::portfolio::{filter_projects, PortfolioFilter};
use cskit::SectionId;

use crate::context::{use_section_visibility, ViewContext};

#[function_component(PortfolioSection)]
pub fn portfolio_section() -> Html {
    let node = use_section_visibility(SectionId::Portfolio);
    let context = use_context::<ViewContext>();
    let active_filter = use_state(PortfolioFilter::default);

    let Some(context) = context else {
        return html! {};
    };
    let t = strings(context.snapshot.language);
    let animated = context.snapshot.has_animated(SectionId::Portfolio);

    html! {
        <section id={SectionId::Portfolio.as_str()} ref={node} class="portfolio-section">
            <div class="container">
                <h2 class={classes!("section-title", "reveal", animated.then(|| "visible"))}>
                    {t.portfolio_title}
                </h2>
                <div class="portfolio-filters">
                    { for PortfolioFilter::ALL.iter().zip(t.filters.iter()).map(|(filter, label)| {
                        let filter = *filter;
                        let onclick = {
                            let active_filter = active_filter.clone();
                            Callback::from(move |_: MouseEvent| active_filter.set(filter))
                        };
                        html! {
                            <button
                                class={classes!("filter-button", (*active_filter == filter).then(|| "active"))}
                                {onclick}
                            >
                                {*label}
                            </button>
                        }
                    }) }
                </div>
                <div class="portfolio-grid">
                    { for filter_projects(t.projects, *active_filter).map(|project| html! {
                        <div class="portfolio-item">
                            <div class="portfolio-image">{project.category.label()}</div>
                            <div class="portfolio-content">
                                <h3>{project.title}</h3>
                                <p>{project.description}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
