use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use web_sys::Element;
use yew::prelude::*;

use cskit::browser::{BrowserStorage, SectionObserver};
use cskit::config::SiteConfig;
use cskit::{SectionId, ViewCoordinator, ViewEvent, ViewSnapshot};

pub type SharedCoordinator = Rc<RefCell<ViewCoordinator<BrowserStorage>>>;

/// What the component tree sees of the coordinator: the latest snapshot and
/// the two toggles.
#[derive(Clone)]
pub struct ViewContext {
    pub snapshot: Rc<ViewSnapshot>,
    coordinator: SharedCoordinator,
    publish: UseStateSetter<Rc<ViewSnapshot>>,
}

impl PartialEq for ViewContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.coordinator, &other.coordinator) && self.snapshot == other.snapshot
    }
}

impl ViewContext {
    pub fn new(coordinator: SharedCoordinator, snapshot: &UseStateHandle<Rc<ViewSnapshot>>) -> Self {
        Self {
            snapshot: (**snapshot).clone(),
            coordinator,
            publish: snapshot.setter(),
        }
    }

    pub fn toggle_language(&self) {
        self.coordinator.borrow_mut().toggle_language();
        self.publish();
    }

    pub fn toggle_theme(&self) {
        self.coordinator.borrow_mut().toggle_theme();
        self.publish();
    }

    pub fn config(&self) -> SiteConfig {
        self.coordinator.borrow().config().clone()
    }

    /// Observer and timer input. Only the hooks in this module and the root
    /// timer call this.
    pub(crate) fn dispatch(&self, event: ViewEvent) {
        let changed = self.coordinator.borrow_mut().apply(event);
        if changed {
            self.publish();
        }
    }

    fn publish(&self) {
        let snapshot = self.coordinator.borrow().snapshot();
        self.publish.set(Rc::new(snapshot));
    }
}

/// Observes the element behind the returned ref and feeds its visibility into
/// the coordinator. The observer is released when the component unmounts.
#[hook]
pub fn use_section_visibility(section: SectionId) -> NodeRef {
    let node = use_node_ref();
    let context = use_context::<ViewContext>();

    {
        let node = node.clone();
        use_effect_with_deps(
            move |section: &SectionId| {
                let section = *section;
                let attached = context.and_then(|context| {
                    let sink = context.clone();
                    let threshold = context.config().visibility_threshold;
                    let observer = SectionObserver::attach(section, node.cast::<Element>(), threshold, move |ratio| {
                        sink.dispatch(ViewEvent::Intersection { section, ratio })
                    });
                    match observer {
                        Ok(observer) => Some((observer, context)),
                        Err(err) => {
                            debug!("{}", err);
                            context.dispatch(ViewEvent::AttachFailed(section));
                            None
                        }
                    }
                });

                move || {
                    if let Some((observer, context)) = attached {
                        drop(observer);
                        context.dispatch(ViewEvent::Detached(section));
                    }
                }
            },
            section,
        );
    }

    node
}
