//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header(title: String) -> impl IntoView {
    view! {
        <header class="header">
            <h1>{title}</h1>
        </header>
    }
}
