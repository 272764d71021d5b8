//! Item Card Component
//!
//! One catalog item: stepper, unit selector and note field. Clicking the
//! card selects an unselected item; touching unit or note selects it too.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::CatalogItem;

#[component]
pub fn ItemCard(item: CatalogItem) -> impl IntoView {
    let ctx = use_app_context();
    let id = StoredValue::new(item.id.clone());
    let default_unit = StoredValue::new(item.default_unit().to_string());

    let entry = Memo::new(move |_| {
        ctx.session.with(|s| id.with_value(|id| s.cart().get(id).cloned()))
    });
    let quantity = move || entry.get().map(|e| e.qty).unwrap_or(0);

    let units = item
        .units
        .iter()
        .map(|unit| view! { <option value=unit.clone()>{unit.clone()}</option> })
        .collect_view();

    view! {
        <div
            class=move || { if quantity() > 0 { "item-card selected" } else { "item-card" } }
            on:click=move |_| ctx.mutate(|s| id.with_value(|id| s.select(id)))
        >
            <div class="item-header">
                <span class="item-emoji">{item.emoji.clone()}</span>
                <h3 class="item-name">{item.name.clone()}</h3>
            </div>

            <div class="item-controls">
                <div class="stepper">
                    <button
                        class="stepper-btn"
                        disabled=move || quantity() == 0
                        on:click=move |ev| {
                            ev.stop_propagation();
                            ctx.mutate(|s| id.with_value(|id| s.decrement(id)));
                        }
                    >
                        "−"
                    </button>
                    <span class="stepper-qty">{quantity}</span>
                    <button
                        class="stepper-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            ctx.mutate(|s| id.with_value(|id| s.increment(id)));
                        }
                    >
                        "+"
                    </button>
                </div>

                <select
                    class="unit-select"
                    prop:value=move || {
                        entry.get().map(|e| e.selected_unit).unwrap_or_else(|| default_unit.get_value())
                    }
                    on:click=move |ev| ev.stop_propagation()
                    on:change=move |ev| {
                        let unit = event_target_value(&ev);
                        ctx.mutate(|s| id.with_value(|id| s.set_unit(id, &unit)));
                    }
                >
                    {units}
                </select>
            </div>

            <Show when=move || { quantity() > 0 }>
                <div class="note-row" on:click=move |ev| ev.stop_propagation()>
                    <span class="note-icon">"⚠"</span>
                    <input
                        type="text"
                        class="note-input"
                        placeholder="Instructions (e.g. not too soft)"
                        prop:value=move || entry.get().map(|e| e.note).unwrap_or_default()
                        on:input=move |ev| {
                            let note = event_target_value(&ev);
                            ctx.mutate(|s| id.with_value(|id| s.set_note(id, &note)));
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
