//! 対話形式のフォームセッション
//!
//! ブラウザ版と同じフォームコントローラを使う。メニュー1回が操作1回に
//! 対応し、一覧は変更リスナーから再表示する。ディスクには書き込まない。

use crate::config::Config;
use crate::error::{Result, RosterError};
use crate::photo_store::FilePhotoStore;
use dialoguer::{Confirm, Input, Select};
use nominee_common::{
    labels, list_view, EditMode, Field, FormEvent, NomineeForm, Submission,
};
use std::path::PathBuf;

/// メニュー項目
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    SetField(Field),
    SelectPhoto,
    Submit,
    EditRecord,
    DeleteRecord,
    Cancel,
    Quit,
}

/// 現在の状態に応じたメニュー
pub fn menu_items(form: &NomineeForm) -> Vec<(String, MenuAction)> {
    let mut items: Vec<(String, MenuAction)> = Field::ALL
        .iter()
        .filter(|f| **f != Field::Photo)
        .map(|f| {
            let value = form.value(*f);
            let shown = if value.is_empty() { "-" } else { value };
            (format!("{}: {}", labels::field_label(*f), shown), MenuAction::SetField(*f))
        })
        .collect();

    items.push((labels::LABEL_PHOTO.to_string(), MenuAction::SelectPhoto));
    items.push((form.submit_label().to_string(), MenuAction::Submit));

    if !form.records().is_empty() {
        items.push((labels::BUTTON_EDIT.to_string(), MenuAction::EditRecord));
        items.push((labels::BUTTON_DELETE.to_string(), MenuAction::DeleteRecord));
    }
    if form.is_editing() {
        items.push((labels::BUTTON_CANCEL.to_string(), MenuAction::Cancel));
    }
    items.push(("終了".to_string(), MenuAction::Quit));
    items
}

/// 番号付きの名簿一覧
pub fn render_list(form: &NomineeForm) -> String {
    let entries = list_view(form.records());
    if entries.is_empty() {
        return "(なし)".to_string();
    }
    entries
        .iter()
        .map(|e| match &e.photo {
            Some(photo) => format!("{:>3}. {} [{}]", e.index + 1, e.line, photo),
            None => format!("{:>3}. {}", e.index + 1, e.line),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// モード・プレビュー・入力エラーの表示
pub fn render_form(form: &NomineeForm, store: &FilePhotoStore) -> String {
    let mut out = Vec::new();
    if let EditMode::Editing(index) = form.mode() {
        out.push(format!("編集中 #{}", index + 1));
    }
    if let Some(preview) = form.preview() {
        out.push(format!("{}: {}", labels::LABEL_PHOTO, store.describe(preview)));
    }
    for (field, message) in form.errors().iter() {
        out.push(format!("  ✖ {}: {}", labels::field_label(field), message));
    }
    out.join("\n")
}

/// カンマ区切りのパスを分割（空要素は除外）
pub fn parse_photo_paths(input: &str) -> Vec<PathBuf> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// Quit まで対話セッションを実行
pub fn run_form_session(config: &Config) -> Result<()> {
    let mut store = FilePhotoStore::default();
    let mut form = NomineeForm::new();
    form.on_change(|event, form| {
        if matches!(
            event,
            FormEvent::Submitted(Submission::Added(_) | Submission::Updated(_)) | FormEvent::Deleted(_)
        ) {
            println!("\n{}\n", render_list(form));
        }
    });

    println!("{}\n", config.form.title);

    loop {
        let status = render_form(&form, &store);
        if !status.is_empty() {
            println!("{}", status);
        }

        match prompt_action(&form)? {
            MenuAction::SetField(field) => {
                let value = prompt_field(&form, field)?;
                form.set_field(field, value);
            }
            MenuAction::SelectPhoto => {
                let input = prompt_text("写真ファイル（カンマ区切り、空欄で解除）", "")?;
                if let Err(e) = form.select_photo(&mut store, &parse_photo_paths(&input)) {
                    println!("✖ {}", e);
                }
            }
            MenuAction::Submit => match form.submit(&mut store) {
                Submission::Added(i) => println!("✔ 追加しました #{}", i + 1),
                Submission::Updated(i) => println!("✔ 更新しました #{}", i + 1),
                Submission::Rejected(n) => println!("✖ 入力エラーが {} 件あります", n),
            },
            MenuAction::EditRecord => {
                if let Some(index) = prompt_record(&form, labels::BUTTON_EDIT)? {
                    form.start_edit(&mut store, index)?;
                }
            }
            MenuAction::DeleteRecord => {
                if let Some(index) = prompt_record(&form, labels::BUTTON_DELETE)? {
                    if !config.confirm_delete || prompt_confirm(&format!("{} #{}?", labels::BUTTON_DELETE, index + 1))? {
                        form.delete(&mut store, index)?;
                    }
                }
            }
            MenuAction::Cancel => form.cancel(&mut store),
            MenuAction::Quit => break,
        }
    }

    tracing::debug!("session closed with {} record(s), {} live photo handle(s)", form.records().len(), store.live());
    Ok(())
}

fn prompt_action(form: &NomineeForm) -> Result<MenuAction> {
    let items = menu_items(form);
    let names: Vec<&str> = items.iter().map(|(label, _)| label.as_str()).collect();

    let chosen = Select::new()
        .with_prompt(form.submit_label())
        .items(&names)
        .default(0)
        .interact()
        .map_err(|e| RosterError::Prompt(e.to_string()))?;

    Ok(items[chosen].1.clone())
}

fn prompt_field(form: &NomineeForm, field: Field) -> Result<String> {
    let current = form.value(field);

    match labels::field_options(field) {
        Some(options) => {
            // 先頭は未選択
            let mut items = vec![labels::field_label(field)];
            items.extend(options.iter().copied());
            let default = options.iter().position(|o| *o == current).map(|i| i + 1).unwrap_or(0);

            let chosen = Select::new()
                .with_prompt(labels::field_label(field))
                .items(&items)
                .default(default)
                .interact()
                .map_err(|e| RosterError::Prompt(e.to_string()))?;

            Ok(if chosen == 0 { String::new() } else { items[chosen].to_string() })
        }
        None => prompt_text(labels::field_label(field), current),
    }
}

fn prompt_text(prompt: &str, initial: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| RosterError::Prompt(e.to_string()))
}

fn prompt_record(form: &NomineeForm, prompt: &str) -> Result<Option<usize>> {
    let entries = list_view(form.records());
    let mut items: Vec<String> = entries.iter().map(|e| format!("{}. {}", e.index + 1, e.line)).collect();
    items.push("戻る".to_string());

    let chosen = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()
        .map_err(|e| RosterError::Prompt(e.to_string()))?;

    Ok((chosen < entries.len()).then_some(chosen))
}

fn prompt_confirm(prompt: &str) -> Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| RosterError::Prompt(e.to_string()))
}
