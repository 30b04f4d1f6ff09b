use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::DrillService;

use crate::context::{UiApp, build_app_context};
use super::drill::{render_drill, use_drill_state, use_drill_submit};

pub struct TestApp {
    drill: Arc<DrillService>,
    pub finished: Mutex<Vec<u32>>,
}

impl UiApp for TestApp {
    fn drill_service(&self) -> Arc<DrillService> {
        Arc::clone(&self.drill)
    }

    fn on_finished(&self, practiced: u32) {
        self.finished.lock().unwrap().push(practiced);
    }
}

#[derive(Clone, Default)]
pub struct HarnessHandles {
    submit: Rc<RefCell<Option<Callback<String>>>>,
}

impl HarnessHandles {
    pub fn submit(&self) -> Callback<String> {
        self.submit.borrow().clone().expect("submit registered")
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: HarnessHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn DrillHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { InteractiveDrill { handles: props.handles.clone() } }
}

#[derive(Props, Clone)]
struct InteractiveDrillProps {
    handles: HarnessHandles,
}

impl PartialEq for InteractiveDrillProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

/// Same hooks and markup as `DrillView`, with the submit callback exposed.
#[component]
fn InteractiveDrill(props: InteractiveDrillProps) -> Element {
    let state = use_drill_state();
    let submit = use_drill_submit(state);
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *props.handles.submit.borrow_mut() = Some(submit);
    }
    render_drill(state, submit)
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub app: Arc<TestApp>,
    handles: HarnessHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Press Enter with `line` in the entry field.
    pub fn submit(&mut self, line: &str) {
        let submit = self.handles.submit();
        self.dom.in_runtime(|| submit.call(line.to_string()));
        drive_dom(&mut self.dom);
    }

    pub fn finished(&self) -> Vec<u32> {
        self.app.finished.lock().unwrap().clone()
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_drill_harness(drill: DrillService) -> ViewHarness {
    let app = Arc::new(TestApp {
        drill: Arc::new(drill),
        finished: Mutex::new(Vec::new()),
    });
    let handles = HarnessHandles::default();
    let dom = VirtualDom::new_with_props(
        DrillHarness,
        ViewHarnessProps {
            app: Arc::clone(&app),
            handles: handles.clone(),
        },
    );
    ViewHarness { dom, app, handles }
}
