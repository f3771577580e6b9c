use gloo_timers::callback::Timeout;
use yew::prelude::*;

use cskit::i18n::{strings, ACCELERATED_STEPS, TRADITIONAL_STEPS};
use cskit::state::Progress;
use cskit::SectionId;

use crate::context::{use_section_visibility, ViewContext};

#[derive(Properties, PartialEq)]
struct TrackProps {
    kind: &'static str,
    title: &'static str,
    steps: &'static [&'static str],
    active_step: usize,
    progress: Progress,
    duration: &'static str,
}

#[function_component(Track)]
fn track(props: &TrackProps) -> Html {
    let split = 3.min(props.steps.len());
    let render_row = |offset: usize, row: &[&'static str]| -> Html {
        html! {
            <div class="step-row">
                { for row.iter().enumerate().map(|(i, step)| {
                    let index = offset + i;
                    html! {
                        <>
                            <div class={classes!("step", (index <= props.active_step).then(|| "reached"))}>
                                {*step}
                            </div>
                            {
                                if i + 1 < row.len() {
                                    html! { <div class="step-arrow">{"→"}</div> }
                                } else {
                                    html! {}
                                }
                            }
                        </>
                    }
                }) }
            </div>
        }
    };

    html! {
        <div class={classes!("process-card", props.kind)}>
            <h3>{props.title}</h3>
            <div class="step-flow">
                { render_row(0, &props.steps[..split]) }
                { render_row(split, &props.steps[split..]) }
            </div>
            <div class="progress">
                <div class="progress-label">
                    <span>{"Development Time"}</span>
                    <span class="progress-duration">{props.duration}</span>
                </div>
                <div class="progress-track">
                    <div class="progress-fill" style={props.progress.css_width()}></div>
                </div>
            </div>
        </div>
    }
}

/// Side-by-side comparison of the two development processes. Highlights
/// advance on the coordinator's step timer while the section is in view.
#[function_component(ProcessSection)]
pub fn process_section() -> Html {
    let node = use_section_visibility(SectionId::Process);
    let context = use_context::<ViewContext>();
    let progress = use_state(|| Progress::EMPTY);

    let animated = context
        .as_ref()
        .map(|context| context.snapshot.has_animated(SectionId::Process))
        .unwrap_or(false);
    let delay = context
        .as_ref()
        .map(|context| context.config().progress_delay_ms)
        .unwrap_or_default();

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |animated: &bool| {
                let timeout = if *animated {
                    Some(Timeout::new(delay, move || progress.set(Progress::FULL)))
                } else {
                    progress.set(Progress::EMPTY);
                    None
                };
                move || drop(timeout)
            },
            animated,
        );
    }

    let Some(context) = context else {
        return html! {};
    };
    let t = strings(context.snapshot.language);
    let step = context.snapshot.active_step;

    html! {
        <section id={SectionId::Process.as_str()} ref={node} class="process-section">
            <div class="container">
                <h2 class={classes!("section-title", "reveal", animated.then(|| "visible"))}>
                    {t.process_title}
                </h2>
                <div class={classes!("comparison", "reveal", animated.then(|| "visible"))}>
                    <Track
                        kind="traditional"
                        title={t.traditional}
                        steps={TRADITIONAL_STEPS}
                        active_step={step}
                        progress={*progress}
                        duration={t.traditional_duration}
                    />
                    <Track
                        kind="accelerated"
                        title={t.accelerated}
                        steps={ACCELERATED_STEPS}
                        active_step={step}
                        progress={progress.accelerated()}
                        duration={t.accelerated_duration}
                    />
                </div>
                <p class={classes!("section-description", "reveal", animated.then(|| "visible"))}>
                    {t.process_description}
                </p>
            </div>
        </section>
    }
}
