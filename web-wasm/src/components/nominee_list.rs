//! 名簿一覧コンポーネント

use leptos::ev::MouseEvent;
use leptos::html;
use leptos::prelude::*;
use nominee_common::{labels, list_view, EditMode, ListEntry, NomineeForm};
use crate::components::clear_file_input;
use crate::photo_store::ObjectUrlStore;

#[component]
pub fn NomineeList(
    form: RwSignal<NomineeForm>,
    photos: StoredValue<ObjectUrlStore, LocalStorage>,
    file_input: NodeRef<html::Input>,
    photo_width: u32,
) -> impl IntoView {
    view! {
        <ul class="nominee-list">
            <For
                each=move || form.with(|f| list_view(f.records()))
                key=|entry| entry.clone()
                children=move |entry: ListEntry| {
                    let index = entry.index;

                    let on_edit = move |_: MouseEvent| {
                        photos.update_value(|store| {
                            form.update(|f| {
                                if let Err(e) = f.start_edit(store, index) {
                                    tracing::warn!("edit failed: {}", e);
                                }
                            });
                        });
                        clear_file_input(file_input);
                    };

                    let on_delete = move |_: MouseEvent| {
                        let was_editing = form.with_untracked(|f| f.mode() == EditMode::Editing(index));
                        photos.update_value(|store| {
                            form.update(|f| {
                                if let Err(e) = f.delete(store, index) {
                                    tracing::warn!("delete failed: {}", e);
                                }
                            });
                            tracing::debug!("{} photo url(s) live", store.len());
                        });
                        if was_editing {
                            clear_file_input(file_input);
                        }
                    };

                    view! {
                        <li class="nominee-item" style="margin-bottom: 10px">
                            {entry.line.clone()}
                            {entry.photo.as_ref().map(|photo| view! {
                                <div>
                                    <img
                                        src=photo.as_str().to_string()
                                        alt=labels::PHOTO_ALT
                                        style=format!("width: {}px; margin-top: 5px", photo_width)
                                    />
                                </div>
                            })}
                            <button
                                class="btn btn-small btn-edit"
                                style="margin-left: 10px; color: blue"
                                on:click=on_edit
                            >
                                {labels::BUTTON_EDIT}
                            </button>
                            <button
                                class="btn btn-small btn-delete"
                                style="margin-left: 10px; color: red"
                                on:click=on_delete
                            >
                                {labels::BUTTON_DELETE}
                            </button>
                        </li>
                    }
                }
            />
        </ul>
    }
}
