//! Report upload component with drag & drop support.
//!
//! Holds the [`UploadFlow`] in a signal. Selection, reset and the state
//! changes around the request run synchronously inside signal updates; the
//! request itself runs in a spawned task between `begin` and `finish`.

use labsimplify::presenter::{drop_prompt, BROWSE_HINT, SUMMARY_HEADING};
use labsimplify::{perform, present, submit_control, FileCandidate, UploadFlow, View};
use leptos::*;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::services::FetchTransport;
use crate::{API_URL, PICKER_ACCEPT};

#[component]
pub fn UploadSection() -> impl IntoView {
    let flow = create_rw_signal(UploadFlow::<File>::new());
    let file_input = create_node_ref::<html::Input>();

    // Picker change
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            flow.update(|f| {
                // Unsupported types are ignored; the selector logs them.
                let _ = f.pick_file(candidate(file));
            });
        }
    };

    // `dragover` fires continuously; only notify when the flag flips.
    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        if !flow.with_untracked(|f| f.is_dragging()) {
            flow.update(|f| {
                f.drag_over();
            });
        }
    };

    let on_drag_leave = move |_: DragEvent| {
        if flow.with_untracked(|f| f.is_dragging()) {
            flow.update(|f| {
                f.drag_leave();
            });
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        let dropped = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0));

        flow.update(|f| match dropped {
            Some(file) => {
                let _ = f.drop_file(candidate(file));
            }
            None => {
                f.drag_leave();
            }
        });
    };

    let trigger_file_input = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_submit = move |_| {
        let Some(ticket) = flow.try_update(|f| f.begin()).flatten() else {
            return;
        };

        spawn_local(async move {
            let transport = FetchTransport::new(API_URL);
            let outcome = perform(&transport, ticket.file()).await;
            flow.update(|f| {
                f.finish(ticket.attempt(), outcome);
            });
        });
    };

    let on_reset = move |_| {
        flow.update(|f| {
            f.reset();
        });
        // Let the same file be picked again right away.
        if let Some(input) = file_input.get() {
            input.set_value("");
        }
    };

    let content = move || {
        let (state, file_name, dragging) = flow.with(|f| {
            (
                f.state().clone(),
                f.selected().map(|file| file.name().to_string()),
                f.is_dragging(),
            )
        });

        match present(&state) {
            View::Selector { busy } => {
                let control = submit_control(&state, file_name.is_some());
                let prompt = drop_prompt(file_name.as_deref());

                view! {
                    <div
                        class=drop_zone_class(dragging)
                        on:dragover=on_drag_over
                        on:dragleave=on_drag_leave
                        on:drop=on_drop
                        on:click=trigger_file_input
                    >
                        <div class="upload-icon">"📤"</div>
                        <div class="upload-text">{prompt}</div>
                        <div class="upload-hint">{BROWSE_HINT}</div>
                    </div>

                    <button
                        class="submit-button"
                        class:busy=busy
                        disabled=!control.enabled
                        on:click=on_submit
                    >
                        <Show when=move || busy fallback=|| view! {}>
                            <span class="spinner"></span>
                        </Show>
                        {control.label}
                    </button>
                }
                .into_view()
            }

            View::Success { summary } => {
                let summary = summary.to_string();
                let reset_label = present(&state).reset_label().unwrap_or_default();

                view! {
                    <div class="result success">
                        <p class="result-heading">"✅ " {present(&state).heading()}</p>
                        <h3>{SUMMARY_HEADING}</h3>
                        // Plain text, never interpreted as markup.
                        <pre class="summary">{summary}</pre>
                    </div>
                    <button class="reset-button" on:click=on_reset>{reset_label}</button>
                }
                .into_view()
            }

            View::Error { message } => {
                let message = message.to_string();
                let reset_label = present(&state).reset_label().unwrap_or_default();

                view! {
                    <div class="result error">
                        <p class="result-heading">"❌ " {present(&state).heading()}</p>
                        <p class="error-message">{message}</p>
                    </div>
                    <button class="submit-button" on:click=on_reset>{reset_label}</button>
                }
                .into_view()
            }
        }
    };

    view! {
        <div class="upload-section">
            {content}
            <input
                type="file"
                accept=PICKER_ACCEPT
                style="display:none"
                node_ref=file_input
                on:change=on_file_change
            />
        </div>
    }
}

fn candidate(file: File) -> FileCandidate<File> {
    FileCandidate::new(file.name(), file.type_(), file)
}

/// Drop zone styling; highlighted while a file is dragged over it.
pub fn drop_zone_class(dragging: bool) -> &'static str {
    if dragging {
        "drop-zone dragging"
    } else {
        "drop-zone"
    }
}
