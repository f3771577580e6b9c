use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::info;
use yew::prelude::*;

use cskit::browser::{document, BrowserStorage};
use cskit::config::{self, SiteConfig};
use cskit::{ViewCoordinator, ViewEvent};

mod context;
mod components {
    pub mod nav;
    pub mod portfolio_section;
    pub mod process_section;
    pub mod theme_toggle;
}
mod pages {
    pub mod landing;
}

use components::{nav::Nav, theme_toggle::ThemeToggle};
use context::ViewContext;
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    let coordinator = use_mut_ref(|| {
        let mut coordinator = ViewCoordinator::init(BrowserStorage::open(), SiteConfig::default());
        document::apply_language(coordinator.language());
        document::apply_theme(coordinator.theme());
        coordinator.subscribe(document::apply_change);
        coordinator
    });
    let snapshot = use_state(|| Rc::new(coordinator.borrow().snapshot()));
    let context = ViewContext::new(coordinator.clone(), &snapshot);

    // Step timer exists exactly while the coordinator asks for one
    {
        let context = context.clone();
        use_effect_with_deps(
            move |timer_ms: &Option<u32>| {
                let interval = timer_ms.map(|ms| Interval::new(ms, move || context.dispatch(ViewEvent::Tick)));
                move || drop(interval)
            },
            snapshot.step_timer_ms,
        );
    }

    {
        let coordinator = coordinator.clone();
        use_effect_with_deps(
            move |_| move || coordinator.borrow_mut().teardown(),
            (),
        );
    }

    html! {
        <ContextProvider<ViewContext> context={context}>
            <Nav />
            <Landing />
            <ThemeToggle />
        </ContextProvider<ViewContext>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
