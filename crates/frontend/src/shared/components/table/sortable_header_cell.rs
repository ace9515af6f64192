//! Sortable table header cell
//!
//! # Example
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Revenue"
//!     align="right"
//!     indicator=Signal::derive(move || sort.get().indicator(column))
//!     active=Signal::derive(move || sort.get().is_active(column))
//!     on_sort=Callback::new(move |_| sort.update(|s| *s = s.toggle(column)))
//! />
//! ```

use leptos::prelude::*;

#[component]
pub fn SortableHeaderCell(
    /// Header text
    #[prop(into)]
    label: String,

    /// Sort glyph (▲ ▼ ⇅)
    #[prop(into)]
    indicator: Signal<&'static str>,

    /// Rows are currently ordered by this column
    #[prop(into)]
    active: Signal<bool>,

    /// Click on the header
    on_sort: Callback<()>,

    /// Header alignment (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let header_style = if align == "right" {
        "cursor: pointer; display: flex; justify-content: flex-end; align-items: center; user-select: none;"
    } else {
        "cursor: pointer; display: flex; align-items: center; user-select: none;"
    };

    view! {
        <th class="table__header-cell" style=format!("padding: 12px; text-align: {};", align)>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| on_sort.run(())
            >
                {label}
                <span class=move || {
                    if active.get() {
                        "table__sort-icon table__sort-icon--active"
                    } else {
                        "table__sort-icon"
                    }
                }>
                    {move || indicator.get()}
                </span>
            </div>
        </th>
    }
}
