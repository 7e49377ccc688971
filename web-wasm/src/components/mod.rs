pub mod entry_form;
pub mod header;
pub mod nominee_list;

use leptos::html;
use leptos::prelude::*;

/// フォームが選択を手放した後にファイル入力を空にする
pub fn clear_file_input(file_input: NodeRef<html::Input>) {
    if let Some(input) = file_input.get() {
        input.set_value("");
    }
}
