use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{DrillVm, FeedbackVm, start_drill};

/// Signals behind one drill view.
#[derive(Clone, Copy)]
pub(crate) struct DrillState {
    resource: Resource<Result<(), ViewError>>,
    vm: Signal<Option<DrillVm>>,
    /// Input is ignored while a submission is being scored.
    busy: Signal<bool>,
    /// The next word's translation is being looked up.
    fetching: Signal<bool>,
    failure: Signal<Option<ViewError>>,
}

pub(crate) fn use_drill_state() -> DrillState {
    let ctx = use_context::<AppContext>();
    let vm = use_signal(|| None::<DrillVm>);
    let busy = use_signal(|| false);
    let fetching = use_signal(|| false);
    let failure = use_signal(|| None::<ViewError>);

    let service_for_resource = ctx.drill_service();
    let resource = use_resource(move || {
        let service = service_for_resource.clone();
        let mut vm = vm;
        async move {
            let started = start_drill(&service).await?;
            vm.set(Some(started));
            Ok::<_, ViewError>(())
        }
    });

    DrillState {
        resource,
        vm,
        busy,
        fetching,
        failure,
    }
}

pub(crate) fn use_drill_submit(state: DrillState) -> Callback<String> {
    let ctx = use_context::<AppContext>();
    use_callback(move |line: String| {
        let DrillState {
            mut vm,
            mut busy,
            mut fetching,
            mut failure,
            ..
        } = state;
        if busy() || failure().is_some() {
            return;
        }
        let current = vm.read().clone();
        let Some(mut local) = current else {
            return;
        };
        if local.is_finished() {
            return;
        }

        busy.set(true);
        fetching.set(local.fetches_next_word(&line));
        let ctx = ctx.clone();
        spawn(async move {
            let service = ctx.drill_service();
            let result = local.submit(&service, &line).await;
            vm.set(Some(local));
            busy.set(false);
            fetching.set(false);
            match result {
                Ok(Some(practiced)) => ctx.finish(practiced),
                Ok(None) => {}
                Err(err) => failure.set(Some(err)),
            }
        });
    })
}

#[component]
pub fn DrillView() -> Element {
    let state = use_drill_state();
    let submit = use_drill_submit(state);
    render_drill(state, submit)
}

pub(crate) fn render_drill(state: DrillState, submit: Callback<String>) -> Element {
    let view = view_state_from_resource(state.resource);
    let failure = *state.failure.read();
    let loading_next = *state.fetching.read();
    let panel = state.vm.read().as_ref().map(|vm| {
        let question = if loading_next {
            "Loading...".to_string()
        } else {
            vm.question()
        };
        (question, vm.feedback().clone(), vm.is_finished())
    });

    rsx! {
        div { class: "drill",
            match (view, failure) {
                (_, Some(err)) | (ViewState::Error(err), None) => rsx! {
                    p { class: "drill-error", "{err.message()}" }
                },
                (ViewState::Idle, None) => rsx! {
                    p { class: "drill-question", "Idle" }
                },
                (ViewState::Loading, None) => rsx! {
                    p { class: "drill-question", "Loading..." }
                },
                (ViewState::Ready(()), None) => {
                    match panel {
                        Some((question, feedback, finished)) => rsx! {
                            DrillPanel {
                                question,
                                feedback,
                                disabled: finished,
                                on_submit: move |line: String| submit.call(line),
                            }
                        },
                        None => rsx! {
                            p { class: "drill-question", "Loading..." }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn DrillPanel(
    question: String,
    feedback: FeedbackVm,
    disabled: bool,
    on_submit: EventHandler<String>,
) -> Element {
    let mut entry = use_signal(String::new);

    rsx! {
        p { class: "drill-question", "{question}" }
        p { class: feedback.tone.css_class(), "{feedback.text}" }
        input {
            class: "drill-input",
            r#type: "text",
            autofocus: true,
            value: "{entry}",
            disabled: disabled,
            oninput: move |evt| entry.set(evt.value()),
            onkeydown: move |evt| {
                if evt.data.key() == Key::Enter {
                    evt.prevent_default();
                    let line = entry();
                    entry.set(String::new());
                    on_submit.call(line);
                }
            },
        }
    }
}
