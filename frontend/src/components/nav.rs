use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent};
use yew::prelude::*;

use cskit::i18n::strings;
use cskit::SectionId;

use crate::context::ViewContext;

#[function_component(Nav)]
pub fn nav() -> Html {
    let context = use_context::<ViewContext>();
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        let threshold = context
            .as_ref()
            .map(|context| context.config().nav_scroll_threshold)
            .unwrap_or_default();
        use_effect_with_deps(move |_| {
            let listener = window().map(|window| {
                let handle = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = handle.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_y > threshold);
                }) as Box<dyn FnMut()>);

                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                (window, scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let Some(context) = context else {
        return html! {};
    };
    let t = strings(context.snapshot.language);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let toggle_language = {
        let context = context.clone();
        Callback::from(move |_: MouseEvent| context.toggle_language())
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    let links = [
        (SectionId::Hero, t.nav_home),
        (SectionId::Process, t.nav_process),
        (SectionId::Features, t.nav_features),
        (SectionId::Portfolio, t.nav_portfolio),
        (SectionId::Contact, t.nav_contact),
    ];

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#home" class="nav-logo">
                    {"CSKIT"}
                    <span class="nav-logo-tag">{"vibecoding"}</span>
                </a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for links.iter().map(|(section, label)| html! {
                        <a href={format!("#{}", section)} class="nav-link" onclick={close_menu.clone()}>
                            {*label}
                        </a>
                    }) }
                </div>
                <div class="nav-actions">
                    <button class="language-toggle" onclick={toggle_language}>
                        {context.snapshot.language.switch_label()}
                    </button>
                    <a href="#contact" class="nav-cta">{t.start_project}</a>
                </div>
            </div>
        </nav>
    }
}
