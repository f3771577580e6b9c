use web_sys::MouseEvent;
use yew::prelude::*;

use cskit::Theme;

use crate::context::ViewContext;

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let context = use_context::<ViewContext>();
    let Some(context) = context else {
        return html! {};
    };

    let theme = context.snapshot.theme;
    let label = match theme {
        Theme::Light => "Switch to dark mode",
        Theme::Dark => "Switch to light mode",
    };
    let onclick = {
        let context = context.clone();
        Callback::from(move |_: MouseEvent| context.toggle_theme())
    };

    html! {
        <div class="theme-toggle-container">
            <button class="theme-toggle" aria-label={label} {onclick}>
                <span class={classes!("theme-icon", "sun", (theme == Theme::Light).then(|| "active"))}>{"☀"}</span>
                <span class={classes!("theme-icon", "moon", (theme == Theme::Dark).then(|| "active"))}>{"☾"}</span>
            </button>
        </div>
    }
}
