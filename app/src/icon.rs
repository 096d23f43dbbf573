use leptos::prelude::*;

use crate::composer::BlockKind;

pub const VIEW_BOX: &str = "0 0 24 24";
pub const STROKE_WIDTH: &str = "2";

/// Outlined 24x24 glyph drawn with the current text color.
#[component]
pub fn Icon(#[prop(into)] path: String) -> impl IntoView {
    view! {
        <svg
            data-block=BlockKind::Icon.as_str()
            class="w-6 h-6"
            fill="none"
            stroke="currentColor"
            stroke-width=STROKE_WIDTH
            viewBox=VIEW_BOX
        >
            <path stroke-linecap="round" stroke-linejoin="round" d=path />
        </svg>
    }
}
