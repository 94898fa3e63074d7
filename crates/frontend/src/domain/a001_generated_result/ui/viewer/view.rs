//! Generated Result Viewer - View Component

use super::model::PREVIEW_IMAGE_ID;
use super::view_model::ResultViewerVm;
use crate::shared::icons::icon;
use crate::shared::notifications::NotificationHost;
use contracts::domain::a001_generated_result::ArtifactKind;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

#[component]
#[allow(non_snake_case)]
pub fn ResultViewer(vm: ResultViewerVm) -> impl IntoView {
    let view_state = vm.view_state;
    let notifications = vm.notifications.clone();
    let artifacts = vm.artifacts.clone();
    let vm = StoredValue::new_local(vm);

    // Code blocks are rendered by us, so the page's initial highlight missed them
    Effect::new(move |_| vm.with_value(|vm| vm.highlight_code()));

    let copy = move |kind: ArtifactKind| {
        let vm = vm.get_value();
        spawn_local(async move { vm.copy(kind).await });
    };

    let handle_download_all = move |_| {
        let vm = vm.get_value();
        spawn_local(async move { vm.export_bundle().await });
    };

    let tabs = ArtifactKind::ALL
        .into_iter()
        .map(|kind| {
            view! {
                <button
                    class="tab-btn"
                    class:active=move || view_state.get().is_active(kind)
                    data-tab=kind.as_str()
                    on:click=move |_| vm.with_value(|vm| vm.select_tab(kind.as_str()))
                >
                    {kind.label()}
                </button>
            }
        })
        .collect_view();

    let code_panes = ArtifactKind::EXPORTABLE
        .into_iter()
        .map(|kind| {
            let text = artifacts.text(kind).unwrap_or_default().to_string();
            let language = kind.language_class().unwrap_or_default();
            view! {
                <div
                    id=kind.as_str()
                    class="tab-content"
                    class:active=move || view_state.get().is_active(kind)
                >
                    <div class="code-header">
                        <span class="code-title">{kind.label()}</span>
                        <button
                            class="copy-btn"
                            data-target=kind.as_str()
                            title="Copy to clipboard"
                            on:click=move |_| copy(kind)
                        >
                            {icon("copy")}
                            " Copy"
                        </button>
                    </div>
                    <div class="code-content">
                        <pre>
                            <code
                                class=language
                                class:wrap=move || view_state.get().wrap_enabled()
                            >
                                {text}
                            </code>
                        </pre>
                    </div>
                </div>
            }
        })
        .collect_view();

    let preview_image = match artifacts.preview_src() {
        Some(src) => view! {
            <img
                id=PREVIEW_IMAGE_ID
                src=src.to_string()
                alt="Design preview"
                style:transform=move || view_state.get().zoom().css_transform()
            />
        }
        .into_any(),
        None => view! { <p class="preview-empty">"No design preview available"</p> }.into_any(),
    };

    view! {
        <div class="result-viewer">
            // Header actions
            <div class="result-viewer__actions">
                <Space>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.with_value(|vm| vm.toggle_wrap())
                    >
                        {icon("wrap")}
                        " Word wrap"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=handle_download_all>
                        {icon("download")}
                        " Download all"
                    </Button>
                </Space>
            </div>

            // Tabs
            <div class="tabs">{tabs}</div>

            // Panes
            <div class="tab-panels">
                {code_panes}
                <div
                    id="preview"
                    class="tab-content"
                    class:active=move || view_state.get().is_active(ArtifactKind::Preview)
                >
                    <div class="preview-controls">
                        <button
                            id="zoom-out"
                            title="Zoom out"
                            on:click=move |_| vm.with_value(|vm| vm.zoom_out())
                        >
                            {icon("zoom-out")}
                        </button>
                        <span class="zoom-level">
                            {move || format!("{}%", view_state.get().zoom().percent())}
                        </span>
                        <button
                            id="zoom-in"
                            title="Zoom in"
                            on:click=move |_| vm.with_value(|vm| vm.zoom_in())
                        >
                            {icon("zoom-in")}
                        </button>
                        <button
                            id="fullscreen"
                            title="Fullscreen"
                            on:click=move |_| vm.with_value(|vm| vm.request_fullscreen())
                        >
                            {icon("fullscreen")}
                        </button>
                    </div>
                    <div class="preview-container">{preview_image}</div>
                </div>
            </div>

            <NotificationHost center=notifications />
        </div>
    }
}
