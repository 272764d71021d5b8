//! Review Modal Component
//!
//! Final list with export actions: shortcut deep link and clipboard copy.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::export;
use crate::models::CartItem;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn ReviewModal() -> impl IntoView {
    let ctx = use_app_context();
    let ui = use_ui_store();

    let selected = Memo::new(move |_| {
        ctx.session.with(|s| s.cart().selected().cloned().collect::<Vec<_>>())
    });
    let list_text = Memo::new(move |_| ctx.session.with(|s| s.export_text()));
    let shortcut_url = move || {
        let text = list_text.get();
        ctx.config.with_value(|c| export::shortcut_link(&c.shortcut_scheme, &c.shortcut_name, &text))
    };

    let close = move |_: web_sys::MouseEvent| ui.review_open().set(false);

    let on_copy = move |_: web_sys::MouseEvent| {
        let text = list_text.get_untracked();
        let reset_ms = ctx.config.with_value(|c| c.copied_reset_ms);
        spawn_local(async move {
            match commands::copy_text(&text).await {
                Ok(()) => {
                    ui.copied().set(true);
                    TimeoutFuture::new(reset_ms).await;
                    ui.copied().set(false);
                }
                Err(e) => log::error!("[export] Failed to copy list: {}", e),
            }
        });
    };

    view! {
        <Show when=move || ui.review_open().get()>
            <div class="modal-root">
                <div class="modal-backdrop" on:click=close></div>
                <div class="modal">
                    <div class="modal-header">
                        <div>
                            <h2>"Review List"</h2>
                            <p class="modal-subtitle">
                                {move || format!("{} items selected", selected.get().len())}
                            </p>
                        </div>
                        <button class="modal-close" on:click=close>"×"</button>
                    </div>

                    <div class="modal-body">
                        {move || {
                            let items = selected.get();
                            if items.is_empty() {
                                view! {
                                    <div class="empty-list">
                                        <p>"Your list is empty."</p>
                                        <button class="link-btn" on:click=close>
                                            "Go add some groceries!"
                                        </button>
                                    </div>
                                }
                                    .into_any()
                            } else {
                                items
                                    .into_iter()
                                    .map(|entry| view! { <ReviewRow entry=entry /> })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </div>

                    <div class="modal-footer">
                        <Show when=move || !selected.get().is_empty()>
                            <a class="primary-btn" href=shortcut_url>
                                "Open in Shortcuts"
                            </a>
                            <button class="secondary-btn" on:click=on_copy>
                                {move || {
                                    if ui.copied().get() { "✓ Copied to Clipboard!" } else { "Copy List Text" }
                                }}
                            </button>
                        </Show>
                        <p class="footnote">
                            {move || ctx.config.with_value(|c| {
                                format!("\"Open in Shortcuts\" requires the \"{}\" Shortcut on iOS.", c.shortcut_name)
                            })}
                        </p>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn ReviewRow(entry: CartItem) -> impl IntoView {
    let note = entry.trimmed_note().map(str::to_string);
    view! {
        <div class="review-row">
            <span class="review-emoji">{entry.item.emoji.clone()}</span>
            <div class="review-details">
                <div class="review-title">
                    <h4>{entry.item.name.clone()}</h4>
                    <span class="qty-badge">{format!("{} {}", entry.qty, entry.selected_unit)}</span>
                </div>
                {note.map(|note| view! { <div class="review-note">"⚠ " <span>{note}</span></div> })}
            </div>
        </div>
    }
}
