use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use cskit::browser::document;
use cskit::contact::{ContactField, ContactForm};
use cskit::i18n::{strings, CONTACT_EMAIL, CONTACT_PHONE};
use cskit::SectionId;

use crate::components::portfolio_section::PortfolioSection;
use crate::components::process_section::ProcessSection;
use crate::context::{use_section_visibility, ViewContext};

#[function_component(Hero)]
fn hero() -> Html {
    let node = use_section_visibility(SectionId::Hero);
    let context = use_context::<ViewContext>();
    let Some(context) = context else {
        return html! {};
    };
    let t = strings(context.snapshot.language);
    let animated = context.snapshot.has_animated(SectionId::Hero);

    html! {
        <header id={SectionId::Hero.as_str()} ref={node} class="hero">
            <div class="hero-background">
                <div class="code-animation">
                    <div class="code-line">{"const vibecoding = () => {"}</div>
                    <div class="code-line">{"  return speed * innovation;"}</div>
                    <div class="code-line">{"};"}</div>
                </div>
            </div>
            <div class={classes!("hero-content", "reveal", animated.then(|| "visible"))}>
                <h1 class="hero-title">{"CSKIT"}</h1>
                <p class="hero-subtitle">{t.hero_subtitle}</p>
                <p class="hero-description">{t.hero_description}</p>
                <p class="hero-text">{t.hero_text}</p>
                <div class="hero-cta-group">
                    <a href="#contact" class="hero-cta">{t.start_project}</a>
                    <a href="#vibecoding" class="hero-secondary">{t.see_speed}</a>
                </div>
            </div>
        </header>
    }
}

#[function_component(FeaturesSection)]
fn features_section() -> Html {
    let node = use_section_visibility(SectionId::Features);
    let context = use_context::<ViewContext>();
    let Some(context) = context else {
        return html! {};
    };
    let t = strings(context.snapshot.language);
    let animated = context.snapshot.has_animated(SectionId::Features);

    html! {
        <section id={SectionId::Features.as_str()} ref={node} class="features-section">
            <div class="container">
                <h2 class="section-title">{t.features_title}</h2>
                <p class="section-subtitle">{t.features_subtitle}</p>
                <div class={classes!("features-grid", "reveal", animated.then(|| "visible"))}>
                    { for t.features.iter().map(|feature| html! {
                        <div class="feature-card">
                            <h3>{feature.title}</h3>
                            <p>{feature.description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(ContactSection)]
fn contact_section() -> Html {
    let node = use_section_visibility(SectionId::Contact);
    let form = use_state(ContactForm::default);
    let context = use_context::<ViewContext>();
    let Some(context) = context else {
        return html! {};
    };
    let t = strings(context.snapshot.language);

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form.set(ContactForm::default());
        })
    };

    let fields = ContactField::ALL.iter().zip(t.form_labels.iter()).map(|(field, label)| {
        let field = *field;
        let value = form.value(field).to_string();
        if field == ContactField::Message {
            let oninput = {
                let form = form.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    form.set(form.with(field, input.value()));
                })
            };
            html! {
                <label class="form-field">
                    <span>{*label}</span>
                    <textarea name={field.as_str()} rows="5" required={true} {value} {oninput} />
                </label>
            }
        } else {
            let oninput = {
                let form = form.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    form.set(form.with(field, input.value()));
                })
            };
            html! {
                <label class="form-field">
                    <span>{*label}</span>
                    <input type={field.input_type()} name={field.as_str()} required={field != ContactField::Project} {value} {oninput} />
                </label>
            }
        }
    });

    html! {
        <section id={SectionId::Contact.as_str()} ref={node} class="contact-section">
            <div class="container">
                <h2 class="section-title">{t.contact_title}</h2>
                <p class="section-subtitle">{t.contact_subtitle}</p>
                <p class="section-description">{t.contact_description}</p>
                <div class="contact-info">
                    <a class="contact-card" href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
                    <a class="contact-card" href={format!("tel:{}", CONTACT_PHONE.replace(' ', ""))}>{CONTACT_PHONE}</a>
                    <div class="contact-card">{t.contact_location}</div>
                </div>
                <form class="contact-form" {onsubmit}>
                    { for fields }
                    <button type="submit" class="form-submit">{t.form_submit}</button>
                </form>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let context = use_context::<ViewContext>();
    let Some(context) = context else {
        return html! {};
    };
    let t = strings(context.snapshot.language);

    html! {
        <footer class="footer">
            <div class="footer-content">
                <span class="nav-logo">{"CSKIT"}</span>
                <p>{t.footer_tagline}</p>
                <p class="built-with">{t.built_with}</p>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            document::scroll_to_top();
            || ()
        },
        (),
    );

    html! {
        <main class="landing-page">
            <Hero />
            <ProcessSection />
            <FeaturesSection />
            <PortfolioSection />
            <ContactSection />
            <Footer />
            <style>
                {r#"
                    html.dark {
                        --bg: #0b0d12;
                        --bg-alt: #111827;
                        --text: #f3f4f6;
                        --muted: #9ca3af;
                        --accent: #60a5fa;
                        --card: rgba(31, 41, 55, 0.8);
                    }
                    html.light {
                        --bg: #ffffff;
                        --bg-alt: #f8fafc;
                        --text: #1e293b;
                        --muted: #475569;
                        --accent: #0ea5e9;
                        --card: rgba(255, 255, 255, 0.95);
                    }
                    body {
                        margin: 0;
                        background: var(--bg);
                        color: var(--text);
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                    }
                    .container {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 5rem 2rem;
                    }
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        transition: background 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: var(--bg);
                        border-bottom: 1px solid rgba(96, 165, 250, 0.1);
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 1rem 2rem;
                    }
                    .nav-links {
                        display: flex;
                        gap: 2rem;
                    }
                    .nav-link, .nav-logo {
                        color: var(--text);
                        text-decoration: none;
                    }
                    .burger-menu {
                        display: none;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: block;
                        }
                        .nav-links {
                            display: none;
                        }
                        .nav-links.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                        }
                    }
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                    }
                    .reveal {
                        opacity: 0;
                        transform: translateY(2rem);
                        transition: opacity 1s ease, transform 1s ease;
                    }
                    .reveal.visible {
                        opacity: 1;
                        transform: none;
                    }
                    .comparison, .features-grid, .portfolio-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                        gap: 2rem;
                    }
                    .process-card, .feature-card, .portfolio-item, .contact-card {
                        background: var(--card);
                        border-radius: 1rem;
                        padding: 2rem;
                    }
                    .step-row {
                        display: flex;
                        justify-content: center;
                        gap: 0.5rem;
                        margin-bottom: 1rem;
                    }
                    .step {
                        padding: 0.75rem 1rem;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(96, 165, 250, 0.2);
                        transition: all 0.5s ease;
                    }
                    .traditional .step.reached {
                        border-color: rgba(248, 113, 113, 0.4);
                        background: rgba(248, 113, 113, 0.1);
                    }
                    .accelerated .step.reached {
                        background: linear-gradient(90deg, #4ade80, #60a5fa);
                        color: #000;
                    }
                    .progress-track {
                        height: 0.75rem;
                        border-radius: 9999px;
                        background: rgba(55, 65, 81, 0.5);
                        overflow: hidden;
                    }
                    .progress-fill {
                        height: 100%;
                        transition: width 3s ease-out;
                    }
                    .traditional .progress-fill {
                        background: linear-gradient(90deg, #f87171, #dc2626);
                    }
                    .accelerated .progress-fill {
                        background: linear-gradient(90deg, #4ade80, #60a5fa);
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.25rem;
                        margin-top: 3rem;
                    }
                    .form-field {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        color: var(--muted);
                    }
                    .form-field input, .form-field textarea {
                        background: var(--card);
                        color: var(--text);
                        border: 2px solid rgba(96, 165, 250, 0.2);
                        border-radius: 0.75rem;
                        padding: 1rem;
                    }
                    .form-submit {
                        padding: 1rem;
                        border: none;
                        border-radius: 0.75rem;
                        background: var(--accent);
                        color: #000;
                        font-weight: 600;
                    }
                    .filter-button.active {
                        background: var(--accent);
                        color: #000;
                    }
                    .theme-toggle-container {
                        position: fixed;
                        top: 1.5rem;
                        right: 1.5rem;
                        z-index: 60;
                    }
                    .theme-icon {
                        display: none;
                    }
                    .theme-icon.active {
                        display: inline;
                    }
                "#}
            </style>
        </main>
    }
}
