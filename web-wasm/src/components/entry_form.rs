//! 入力フォームコンポーネント

use leptos::ev::{Event, MouseEvent, SubmitEvent};
use leptos::html;
use leptos::prelude::*;
use nominee_common::{labels, Field, NomineeForm, Submission};
use web_sys::HtmlInputElement;
use crate::components::clear_file_input;
use crate::photo_store::ObjectUrlStore;

#[component]
pub fn EntryForm(
    form: RwSignal<NomineeForm>,
    photos: StoredValue<ObjectUrlStore, LocalStorage>,
    file_input: NodeRef<html::Input>,
    preview_width: u32,
) -> impl IntoView {
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mut submission = None;
        photos.update_value(|store| {
            form.update(|f| submission = Some(f.submit(store)));
        });
        if matches!(submission, Some(Submission::Added(_) | Submission::Updated(_))) {
            clear_file_input(file_input);
        }
    };

    let on_cancel = move |_: MouseEvent| {
        photos.update_value(|store| form.update(|f| f.cancel(store)));
        clear_file_input(file_input);
    };

    let on_photo_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let files: Vec<web_sys::File> = input
            .files()
            .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
            .unwrap_or_default();

        let mut outcome = Ok(());
        photos.update_value(|store| {
            form.update(|f| outcome = f.select_photo(store, &files));
        });
        if let Err(e) = outcome {
            tracing::warn!("photo selection failed: {}", e);
        }
    };

    let preview = move || {
        form.with(|f| f.preview().map(|h| h.as_str().to_string()))
            .map(|src| view! {
                <img
                    src=src
                    alt=labels::PREVIEW_ALT
                    style=format!("width: {}px; margin-top: 5px", preview_width)
                />
            })
    };

    view! {
        <form class="entry-form" on:submit=on_submit novalidate=true>
            <SelectInput form=form field=Field::Honorific />
            <TextInput form=form field=Field::FirstName />
            <TextInput form=form field=Field::LastName />
            <TextInput form=form field=Field::CareerHistory />
            <TextInput form=form field=Field::Achievements />

            <div class="form-group">
                <input
                    type="file"
                    accept="image/*"
                    node_ref=file_input
                    on:change=on_photo_change
                />
                <FieldError form=form field=Field::Photo />
                {preview}
            </div>

            <SelectInput form=form field=Field::Position />
            <SelectInput form=form field=Field::Party />

            <div class="form-actions">
                <button type="submit" class="btn btn-primary">
                    {move || form.with(|f| f.submit_label())}
                </button>
                <Show when=move || form.with(|f| f.is_editing())>
                    <button type="button" class="btn btn-secondary" on:click=on_cancel>
                        {labels::BUTTON_CANCEL}
                    </button>
                </Show>
            </div>
        </form>
    }
}

#[component]
fn TextInput(form: RwSignal<NomineeForm>, field: Field) -> impl IntoView {
    view! {
        <div class="form-group">
            <input
                type="text"
                name=field.name()
                placeholder=labels::field_label(field)
                prop:value=move || form.with(|f| f.value(field).to_string())
                on:input=move |ev| {
                    form.update(|f| f.set_field(field, event_target_value(&ev)));
                }
            />
            <FieldError form=form field=field />
        </div>
    }
}

#[component]
fn SelectInput(form: RwSignal<NomineeForm>, field: Field) -> impl IntoView {
    let options = labels::field_options(field).unwrap_or_default();

    view! {
        <div class="form-group">
            <select
                name=field.name()
                on:change=move |ev| {
                    form.update(|f| f.set_field(field, event_target_value(&ev)));
                }
            >
                <option
                    value=""
                    prop:selected=move || form.with(|f| f.value(field).is_empty())
                >
                    {labels::field_label(field)}
                </option>
                {options
                    .into_iter()
                    .map(move |option| view! {
                        <option
                            value=option
                            prop:selected=move || form.with(|f| f.value(field) == option)
                        >
                            {option}
                        </option>
                    })
                    .collect_view()}
            </select>
            <FieldError form=form field=field />
        </div>
    }
}

/// 登録が弾かれた後に項目の下に出すメッセージ
#[component]
fn FieldError(form: RwSignal<NomineeForm>, field: Field) -> impl IntoView {
    move || {
        form.with(|f| f.errors().get(field).map(str::to_string))
            .map(|message| view! { <div class="field-error">{message}</div> })
    }
}
