use super::api;
use super::state::{UploadSelection, UploadState};
use crate::shared::components::back_button::BackButton;
use crate::shared::number_format::format_file_size;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use contracts::enums::upload_module::UploadModule;
use contracts::usecases::u501_bulk_upload::request::{ROW_EXAMPLE, ROW_FORMAT};
use contracts::usecases::u501_bulk_upload::response::UploadResult;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use web_sys::DragEvent;

#[component]
pub fn BulkUploadWidget() -> impl IntoView {
    // web_sys::File is !Send, so the state lives in local storage.
    let state: RwSignal<UploadState<web_sys::File>, LocalStorage> =
        RwSignal::new_local(UploadState::default());
    let (is_drag_over, set_is_drag_over) = signal(false);
    let file_input = NodeRef::<html::Input>::new();

    let is_uploading = move || state.with(|s| s.is_uploading());

    // Drop and the native picker both end up here.
    let select = move |file: web_sys::File| {
        let selection = UploadSelection::new(file.name(), file.size() as u64, file);
        if let Some(Err(e)) = state.try_update(|s| s.select_file(selection)) {
            log::warn!("rejected upload file: {}", e);
        }
    };

    let open_picker = move || {
        if is_uploading() {
            return;
        }
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let clear = move || {
        state.update(|s| s.clear());
        if let Some(input) = file_input.get() {
            input.set_value("");
        }
    };

    let process = move || {
        let ticket = match state.try_update(|s| s.submit()) {
            Some(Ok(ticket)) => ticket,
            Some(Err(e)) => {
                log::warn!("upload not started: {}", e);
                return;
            }
            None => return,
        };
        log::info!("uploading {} to module {}", ticket.handle.name(), ticket.module);
        spawn_local(async move {
            let outcome = api::bulk_upload(&ticket.handle, ticket.module).await;
            match &outcome {
                Ok(r) => log::info!(
                    "bulk upload to module {}: {} ok, {} errors",
                    ticket.module,
                    r.success_count,
                    r.error_count
                ),
                Err(e) => log::error!("bulk upload to module {} failed: {}", ticket.module, e),
            }
            let applied = state
                .try_update(|s| s.resolve(ticket.seq, ticket.module, outcome))
                .unwrap_or(false);
            if !applied {
                log::debug!("discarded stale upload reply #{}", ticket.seq);
            }
        });
    };

    let on_input_change = move |_: leptos::ev::Event| {
        let file = file_input
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        match file {
            Some(file) => select(file),
            None => log::debug!("file dialog closed without a selection"),
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_drag_over.set(true);
    };

    let on_dragleave = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_drag_over.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_drag_over.set(false);
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        match file {
            Some(file) => select(file),
            None => {
                if let Some(Err(e)) = state.try_update(|s| s.select_nothing()) {
                    log::warn!("drop without a file: {}", e);
                }
            }
        }
    };

    let on_module_change = move |ev: leptos::ev::Event| {
        match UploadModule::from_code(&event_target_value(&ev)) {
            Some(module) => state.update(|s| s.change_module(module)),
            None => log::warn!("unknown upload module {:?}", event_target_value(&ev)),
        }
    };

    let module_code = move || state.with(|s| s.module().code());

    let area_class = move || {
        let mut c = "upload-area".to_string();
        if is_drag_over.get() {
            c.push_str(" drag-over");
        }
        if state.with(|s| s.selection().is_some()) {
            c.push_str(" has-file");
        }
        if is_uploading() {
            c.push_str(" disabled");
        }
        c
    };

    view! {
        <PageFrame page_id="u501_bulk_upload--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <BackButton />
                <h1>"Upload - File Upload"</h1>
                <div class="module-selector">
                    <label for="module-select">"Module:"</label>
                    <select
                        id="module-select"
                        prop:value=module_code
                        on:change=on_module_change
                    >
                        {UploadModule::all()
                            .into_iter()
                            .map(|m| view! { <option value=m.code()>{m.display_name()}</option> })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <div class="page__content">
                <div class="upload-info">
                    <h2>"Upload Contribuinte Records"</h2>
                    <p>
                        "Upload a CSV or TXT file with contribuinte records to "
                        <strong>"Module " {module_code}</strong>
                        " in the following format:"
                    </p>
                    <div class="format-example"><code>{ROW_FORMAT}</code></div>
                    <div class="format-details">
                        <p><strong>"Example:"</strong></p>
                        <code>{ROW_EXAMPLE}</code>
                    </div>
                </div>

                <div
                    class=area_class
                    on:dragover=on_dragover
                    on:dragleave=on_dragleave
                    on:drop=on_drop
                    on:click=move |_| open_picker()
                >
                    <input
                        node_ref=file_input
                        type="file"
                        accept=".csv,.txt"
                        style="display: none;"
                        on:click=|ev| ev.stop_propagation()
                        on:change=on_input_change
                    />
                    {move || match state.with(|s| s.selection().map(|f| (f.name.clone(), f.size))) {
                        Some((name, size)) => view! {
                            <div class="file-info">
                                <div class="file-icon">"📄"</div>
                                <div class="file-details">
                                    <div class="file-name">{name}</div>
                                    <div class="file-size">{format_file_size(size)}</div>
                                </div>
                                <button
                                    class="remove-file"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        clear();
                                    }
                                >
                                    "✕"
                                </button>
                            </div>
                        }.into_any(),
                        None => view! {
                            <div class="upload-placeholder">
                                <div class="upload-icon">"📁"</div>
                                <div class="upload-text">
                                    <strong>"Click to upload"</strong>
                                    " or drag and drop"
                                </div>
                                <div class="upload-hint">"CSV or TXT files only"</div>
                            </div>
                        }.into_any(),
                    }}
                </div>

                <Space>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(is_uploading)
                        on_click=move |_| open_picker()
                    >
                        "📁 Select File"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || !state.with(|s| s.can_submit()))
                        on_click=move |_| process()
                    >
                        {move || if is_uploading() { "⏳ Processing..." } else { "⚡ Process File" }}
                    </Button>
                </Space>

                {move || state.with(|s| s.error_message()).map(|e| view! {
                    <div class="error-message">{e}</div>
                })}

                {move || state
                    .with(|s| s.result().map(|(module, r)| (module, r.clone())))
                    .map(|(module, result)| view! {
                        <UploadResultCard
                            module=module
                            result=result
                            on_clear=Callback::new(move |_| clear())
                        />
                    })}
            </div>
        </PageFrame>
    }
}

#[component]
fn UploadResultCard(
    module: UploadModule,
    result: UploadResult,
    on_clear: Callback<()>,
) -> impl IntoView {
    let card_class = if result.has_errors() {
        "result-card has-errors"
    } else {
        "result-card success"
    };
    let has_errors = result.has_errors();
    let error_count = result.error_count;
    let errors = result.errors;

    view! {
        <div class="result-section">
            <div class=card_class>
                <h3>"Upload Results for " {module.display_name()}</h3>

                <div class="result-stats">
                    <div class="stat-item success">
                        <span class="stat-label">"Successfully Processed:"</span>
                        <span class="stat-value">{result.success_count}</span>
                    </div>
                    {has_errors.then(|| view! {
                        <div class="stat-item error">
                            <span class="stat-label">"Errors:"</span>
                            <span class="stat-value">{error_count}</span>
                        </div>
                    })}
                </div>

                {(!errors.is_empty()).then(|| view! {
                    <div class="error-details">
                        <h4>"Error Details:"</h4>
                        <div class="error-list">
                            {errors
                                .into_iter()
                                .map(|e| view! { <div class="error-item">{e}</div> })
                                .collect_view()}
                        </div>
                    </div>
                })}

                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_clear.run(())>
                    "Upload Another File"
                </Button>
            </div>
        </div>
    }
}
