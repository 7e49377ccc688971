//! メインアプリケーションコンポーネント

use leptos::html;
use leptos::prelude::*;
use nominee_common::{FormSettings, NomineeForm};
use crate::components::{
    entry_form::EntryForm,
    header::Header,
    nominee_list::NomineeList,
};
use crate::photo_store::ObjectUrlStore;

#[component]
pub fn App() -> impl IntoView {
    let settings = FormSettings::default();

    let mut roster = NomineeForm::new();
    roster.on_change(|event, form| {
        tracing::debug!("{:?} ({} records)", event, form.records().len());
    });

    // 再描画はこのシグナル経由。フォームのリスナーはログのみ
    let form = RwSignal::new(roster);
    let photos = StoredValue::new_local(ObjectUrlStore::default());
    let file_input = NodeRef::<html::Input>::new();

    view! {
        <div class="container">
            <Header title=settings.title.clone() />

            <EntryForm
                form=form
                photos=photos
                file_input=file_input
                preview_width=settings.preview_width_px
            />

            <NomineeList
                form=form
                photos=photos
                file_input=file_input
                photo_width=settings.preview_width_px
            />
        </div>
    }
}
