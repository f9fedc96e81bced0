use dioxus::document::eval;
use dioxus::prelude::*;
use dioxus_router::use_navigator;
use keyboard_types::Key;

use shabda_core::session::HistoryEntry;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{SessionIntent, SessionVm, start_session};

/// Per-render snapshot of the running session, so rsx never holds a
/// signal read guard.
#[derive(Clone, PartialEq)]
struct SessionSnapshot {
    title: String,
    word: Option<String>,
    hint: Option<String>,
    score_pct: u8,
    correct: u32,
    attempts: u32,
    progress_pct: u8,
    feedback: Option<(bool, Option<String>)>,
    history: Vec<HistoryEntry>,
    finished: bool,
    passed: bool,
}

impl SessionSnapshot {
    fn of(vm: &SessionVm) -> Self {
        let score = vm.score();
        Self {
            title: vm.title().to_owned(),
            word: vm.word().map(str::to_owned),
            hint: vm.hint().map(str::to_owned),
            score_pct: score.pct(),
            correct: score.correct,
            attempts: score.attempts,
            progress_pct: vm.progress_pct(),
            feedback: vm
                .feedback()
                .map(|f| (f.was_correct(), f.expected().map(str::to_owned))),
            history: vm.history().to_vec(),
            finished: vm.is_finished(),
            passed: vm.passed(),
        }
    }
}

#[component]
pub fn SessionView(level: u32) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let drill = ctx.drill();

    let error = use_signal(|| None::<ViewError>);
    let vm = use_signal(|| None::<SessionVm>);
    let mut input = use_signal(String::new);

    let drill_for_resource = drill.clone();
    let resource = use_resource(move || {
        let drill = drill_for_resource.clone();
        let mut vm = vm;
        let mut error = error;
        async move {
            let started = start_session(&drill, level).await?;
            vm.set(Some(started));
            error.set(None);
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(&resource);

    // Leave with a terminal result: the session is taken out of the
    // signal (destroying it), the gate is updated, and we return to the
    // menu. `force_fail` is true for the quit buttons.
    let finish_and_leave = {
        let drill = drill.clone();
        use_callback(move |force_fail: bool| {
            let drill = drill.clone();
            let mut vm = vm;
            spawn(async move {
                let taken = vm.write().take();
                if let Some(session_vm) = taken {
                    session_vm.finish(&drill, force_fail).await;
                }
                let _ = navigator.push(Route::Menu {});
            });
        })
    };

    let dispatch_intent = {
        let drill = drill.clone();
        use_callback(move |intent: SessionIntent| {
            let drill = drill.clone();
            let mut vm = vm;
            let mut error = error;

            match intent {
                SessionIntent::Submit => {
                    let guess = input();
                    // Scheduling data is computed under the write guard,
                    // the timer is spawned after it is released.
                    let scheduled = {
                        let mut guard = vm.write();
                        guard.as_mut().and_then(|session_vm| {
                            match session_vm.submit(&drill, &guess) {
                                Ok(submission) => {
                                    let epoch = session_vm.feedback_epoch();
                                    Some((epoch, submission.feedback.clear_after()))
                                }
                                Err(err) => {
                                    error.set(Some(err));
                                    None
                                }
                            }
                        })
                    };
                    if let Some((epoch, delay)) = scheduled {
                        input.set(String::new());
                        // Single-slot feedback timer: a later submission
                        // bumps the epoch and this task becomes a no-op.
                        spawn(async move {
                            tokio::time::sleep(delay).await;
                            if let Some(session_vm) = vm.write().as_mut() {
                                session_vm.clear_feedback_if(epoch);
                            }
                        });
                    }
                }
                SessionIntent::Replay => {
                    if let Some(session_vm) = vm.read().as_ref() {
                        session_vm.replay(&drill);
                    }
                }
                SessionIntent::Reveal => {
                    let revealed = vm.read().as_ref().and_then(SessionVm::reveal);
                    if let Some(meaning) = revealed {
                        input.set(meaning);
                    }
                }
                SessionIntent::Restart => {
                    input.set(String::new());
                    let result = vm
                        .write()
                        .as_mut()
                        .map(|session_vm| session_vm.restart(&drill));
                    if let Some(Err(err)) = result {
                        error.set(Some(err));
                    }
                }
                SessionIntent::Quit => finish_and_leave.call(true),
            }
        })
    };

    // Keep the answer box focused while the level advances.
    use_effect(move || {
        let active = vm
            .read()
            .as_ref()
            .is_some_and(|session_vm| !session_vm.is_finished());
        if active {
            let _ = eval("document.getElementById(\"session-input\")?.focus();");
        }
    });

    let on_key = use_callback(move |evt: KeyboardEvent| {
        if evt.data.key() == Key::Enter {
            evt.prevent_default();
            dispatch_intent.call(SessionIntent::Submit);
        } else if evt.data.key() == Key::Escape {
            evt.prevent_default();
            dispatch_intent.call(SessionIntent::Quit);
        }
    });

    let snapshot = vm.read().as_ref().map(SessionSnapshot::of);

    rsx! {
        div { class: "page session-page",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let _ = navigator.push(Route::Menu {});
                        },
                        "Back to levels"
                    }
                },
                ViewState::Ready(()) => rsx! {
                    if let Some(err) = *error.read() {
                        p { class: "session-error", "{err.message()}" }
                    }
                    if let Some(snapshot) = snapshot {
                        header { class: "session-header",
                            div {
                                h1 { class: "session-title", "Level {level}: {snapshot.title}" }
                                p { class: "session-score",
                                    "Score: {snapshot.score_pct}% ({snapshot.correct}/{snapshot.attempts})"
                                }
                            }
                            div { class: "progress",
                                div {
                                    class: "progress__bar",
                                    style: "width: {snapshot.progress_pct}%",
                                }
                            }
                        }

                        if snapshot.finished {
                            FinishedPanel {
                                score_pct: snapshot.score_pct,
                                correct: snapshot.correct,
                                attempts: snapshot.attempts,
                                passed: snapshot.passed,
                                on_intent: dispatch_intent,
                                on_leave: finish_and_leave,
                            }
                        } else {
                            if let Some(word) = snapshot.word.as_ref() {
                                div { class: "session-word", lang: "sa", "{word}" }
                            }
                            if let Some(hint) = snapshot.hint.as_ref() {
                                div { class: "session-hint", "{hint}" }
                            }
                            div { class: "controls",
                                button {
                                    class: "btn btn-primary",
                                    r#type: "button",
                                    onclick: move |_| dispatch_intent.call(SessionIntent::Replay),
                                    "Play audio"
                                }
                                button {
                                    class: "btn btn-ghost",
                                    r#type: "button",
                                    title: "Fill correct answer (practice)",
                                    onclick: move |_| dispatch_intent.call(SessionIntent::Reveal),
                                    "Reveal"
                                }
                            }

                            if let Some((was_correct, expected)) = snapshot.feedback.clone() {
                                FeedbackBadge { was_correct, expected }
                            }

                            input {
                                class: "session-input",
                                id: "session-input",
                                r#type: "text",
                                placeholder: "Type the English meaning...",
                                autofocus: true,
                                value: "{input()}",
                                oninput: move |evt| input.set(evt.value()),
                                onkeydown: move |evt| on_key.call(evt),
                            }
                            div { class: "controls",
                                button {
                                    class: "btn btn-primary",
                                    r#type: "button",
                                    onclick: move |_| dispatch_intent.call(SessionIntent::Submit),
                                    "Submit"
                                }
                                button {
                                    class: "btn btn-ghost",
                                    r#type: "button",
                                    onclick: move |_| dispatch_intent.call(SessionIntent::Quit),
                                    "Quit"
                                }
                            }

                            if !snapshot.history.is_empty() {
                                div { class: "history",
                                    p { class: "history__label", "Recent answers" }
                                    for (idx, entry) in snapshot.history.iter().enumerate() {
                                        HistoryRow {
                                            key: "{idx}",
                                            word: entry.item.source().to_owned(),
                                            meaning: entry.item.meaning().to_owned(),
                                            guess: entry.raw_guess.clone(),
                                            was_correct: entry.was_correct,
                                        }
                                    }
                                }
                            }
                        }
                    } else {
                        p { "No session." }
                    }
                },
            }
        }
    }
}

#[component]
fn FeedbackBadge(was_correct: bool, expected: Option<String>) -> Element {
    let (class, text) = if was_correct {
        ("badge badge--ok".to_owned(), "Correct!".to_owned())
    } else {
        let answer = expected.unwrap_or_default();
        (
            "badge badge--fail".to_owned(),
            format!("Incorrect. Correct answer: {answer}"),
        )
    };
    rsx! {
        div { class: "session-feedback",
            span { class: "{class}", "{text}" }
        }
    }
}

#[component]
fn HistoryRow(word: String, meaning: String, guess: String, was_correct: bool) -> Element {
    let badge = if was_correct {
        ("badge badge--ok", "Correct")
    } else {
        ("badge badge--fail", "Incorrect")
    };
    let guess_label = if guess.trim().is_empty() {
        "—".to_owned()
    } else {
        guess
    };
    rsx! {
        div { class: "history-row",
            div {
                div { class: "history-row__word", lang: "sa", "{word}" }
                div { class: "history-row__detail",
                    "Correct: {meaning} • Your answer: {guess_label}"
                }
            }
            span { class: "{badge.0}", "{badge.1}" }
        }
    }
}

#[component]
fn FinishedPanel(
    score_pct: u8,
    correct: u32,
    attempts: u32,
    passed: bool,
    on_intent: EventHandler<SessionIntent>,
    on_leave: EventHandler<bool>,
) -> Element {
    let badge_class = if passed { "badge badge--ok" } else { "badge badge--fail" };
    rsx! {
        div { class: "session-complete",
            h2 { "Level complete" }
            span { class: "{badge_class}",
                "Result: {score_pct}% ({correct}/{attempts})"
            }
            div { class: "controls controls--center",
                if passed {
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_leave.call(false),
                        "Continue to next level"
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_intent.call(SessionIntent::Restart),
                        "Try again"
                    }
                    button {
                        class: "btn btn-danger",
                        r#type: "button",
                        onclick: move |_| on_intent.call(SessionIntent::Quit),
                        "Quit"
                    }
                }
            }
        }
    }
}
