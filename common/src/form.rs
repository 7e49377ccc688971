//! フォーム・編集コントローラ
//!
//! 名簿リスト、現在のフォーム値、直近の入力エラー、写真プレビューを持つ。
//! モードは2つ:
//!
//! - `Adding`: 次の登録で末尾に追加
//! - `Editing(i)`: 次の登録で `i` 番目を置き換え
//!
//! 写真ハンドルは呼び出し側の [`PhotoStore`] を通す。未登録のハンドルは
//! フォームが、登録後はレコードが所有し、所有者が解放する。

use crate::error::{Error, Result};
use crate::labels;
use crate::photo::{PhotoHandle, PhotoStore};
use crate::schema::{validate, Field, FieldErrors};
use crate::types::{Candidate, Nominee, PhotoSelection};

/// 次の登録で上書きする位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Adding,
    Editing(usize),
}

/// 直近の登録結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Rejected,
    Accepted,
}

/// [`NomineeForm::submit`] の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// この位置に追加
    Added(usize),
    /// この位置を更新
    Updated(usize),
    /// 入力エラーの項目数
    Rejected(usize),
}

/// リスナーへの変更通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    FieldChanged(Field),
    PhotoSelected { count: usize },
    PhotoCleared,
    EditStarted(usize),
    Submitted(Submission),
    Deleted(usize),
    Cancelled,
}

type Listener = Box<dyn Fn(&FormEvent, &NomineeForm) + Send + Sync>;

/// 候補者フォームと名簿
#[derive(Default)]
pub struct NomineeForm {
    records: Vec<Nominee>,
    values: Candidate,
    errors: FieldErrors,
    mode: EditMode,
    preview: Option<PhotoHandle>,
    status: SubmitStatus,
    listeners: Vec<Listener>,
}

impl std::fmt::Debug for NomineeForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NomineeForm")
            .field("records", &self.records)
            .field("values", &self.values)
            .field("errors", &self.errors)
            .field("mode", &self.mode)
            .field("preview", &self.preview)
            .field("status", &self.status)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl NomineeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// 状態変更のたびに呼ばれるコールバックを登録
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: Fn(&FormEvent, &NomineeForm) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn records(&self) -> &[Nominee] {
        &self.records
    }

    pub fn values(&self) -> &Candidate {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn preview(&self) -> Option<&PhotoHandle> {
        self.preview.as_ref()
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Editing(_))
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            labels::BUTTON_SAVE_EDIT
        } else {
            labels::BUTTON_ADD
        }
    }

    /// テキスト・選択項目の現在値（`Photo` は常に空）
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Honorific => &self.values.honorific,
            Field::FirstName => &self.values.first_name,
            Field::LastName => &self.values.last_name,
            Field::CareerHistory => &self.values.career_history,
            Field::Achievements => &self.values.achievements,
            Field::Position => &self.values.position,
            Field::Party => &self.values.party,
            Field::Photo => "",
        }
    }

    /// テキスト・選択項目の値を設定する
    ///
    /// チェックは登録時に行う。登録が弾かれた後は、変更した項目だけ
    /// 再チェックしてメッセージを追従させる。
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        let slot = match field {
            Field::Honorific => &mut self.values.honorific,
            Field::FirstName => &mut self.values.first_name,
            Field::LastName => &mut self.values.last_name,
            Field::CareerHistory => &mut self.values.career_history,
            Field::Achievements => &mut self.values.achievements,
            Field::Position => &mut self.values.position,
            Field::Party => &mut self.values.party,
            Field::Photo => {
                tracing::warn!("photo is set through select_photo, ignoring set_field");
                return;
            }
        };
        *slot = value;

        self.revalidate(field);
        self.notify(FormEvent::FieldChanged(field));
    }

    /// 写真入力で選ばれたファイルを受け取る
    ///
    /// プレビュー用ハンドルは先頭ファイルから一度だけ作り、登録時も同じ
    /// ハンドルを使う。空の選択は選択解除。
    pub fn select_photo<S: PhotoStore>(&mut self, store: &mut S, sources: &[S::Source]) -> Result<()> {
        self.release_pending(store);
        // 編集中なら元の写真に戻しておく（作成に失敗してもこの状態で残る）
        self.preview = self.editing_record().and_then(|r| r.photo.clone());

        let event = match sources.first() {
            Some(first) => match store.create(first) {
                Ok(handle) => {
                    tracing::debug!("photo selected: {} file(s), preview {}", sources.len(), handle);
                    self.preview = Some(handle.clone());
                    self.values.photo = Some(PhotoSelection { count: sources.len(), handle });
                    FormEvent::PhotoSelected { count: sources.len() }
                }
                Err(e) => {
                    tracing::debug!("photo selection failed: {}", e);
                    self.revalidate(Field::Photo);
                    self.notify(FormEvent::PhotoCleared);
                    return Err(e);
                }
            },
            None => FormEvent::PhotoCleared,
        };

        self.revalidate(Field::Photo);
        self.notify(event);
        Ok(())
    }

    /// `index` 番目をフォームに読み込み、編集モードにする
    pub fn start_edit<S: PhotoStore>(&mut self, store: &mut S, index: usize) -> Result<()> {
        let record = self.records.get(index).ok_or(Error::NoSuchRecord {
            index,
            len: self.records.len(),
        })?;
        let values = Candidate::from(record);
        let preview = record.photo.clone();

        self.release_pending(store);
        self.values = values;
        self.preview = preview;
        self.errors.clear();
        self.status = SubmitStatus::Idle;
        self.mode = EditMode::Editing(index);

        tracing::debug!("editing record {}", index);
        self.notify(FormEvent::EditStarted(index));
        Ok(())
    }

    /// 入力チェックし、通れば追加または更新する
    pub fn submit<S: PhotoStore>(&mut self, store: &mut S) -> Submission {
        let mut nominee = match validate(&self.values) {
            Ok(nominee) => nominee,
            Err(errors) => {
                let submission = Submission::Rejected(errors.len());
                tracing::debug!("submit rejected: {} field(s)", errors.len());
                self.errors = errors;
                self.status = SubmitStatus::Rejected;
                self.notify(FormEvent::Submitted(submission));
                return submission;
            }
        };

        let submission = match self.mode {
            EditMode::Editing(index) if index < self.records.len() => {
                let slot = &mut self.records[index];
                if nominee.photo.is_none() {
                    nominee.photo = slot.photo.clone();
                } else if let Some(old) = &slot.photo {
                    if nominee.photo.as_ref() != Some(old) {
                        store.release(old);
                    }
                }
                *slot = nominee;
                Submission::Updated(index)
            }
            mode => {
                if let EditMode::Editing(index) = mode {
                    tracing::warn!("record {} under edit no longer exists, appending instead", index);
                }
                self.records.push(nominee);
                Submission::Added(self.records.len() - 1)
            }
        };

        // 選択中のハンドルはここからレコードの所有
        self.values = Candidate::default();
        self.preview = None;
        self.errors.clear();
        self.mode = EditMode::Adding;
        self.status = SubmitStatus::Accepted;

        tracing::debug!("submit accepted: {:?}", submission);
        self.notify(FormEvent::Submitted(submission));
        submission
    }

    /// `index` 番目を削除する
    ///
    /// 編集中のレコードならフォームもリセット。それより前を削除した場合は
    /// 編集位置を一つ詰める。
    pub fn delete<S: PhotoStore>(&mut self, store: &mut S, index: usize) -> Result<()> {
        if index >= self.records.len() {
            return Err(Error::NoSuchRecord {
                index,
                len: self.records.len(),
            });
        }

        let removed = self.records.remove(index);
        if let Some(photo) = &removed.photo {
            store.release(photo);
        }

        match self.mode {
            EditMode::Editing(editing) if editing == index => {
                self.release_pending(store);
                self.clear_form();
            }
            EditMode::Editing(editing) if editing > index => {
                self.mode = EditMode::Editing(editing - 1);
            }
            _ => {}
        }

        tracing::debug!("deleted record {}, {} left", index, self.records.len());
        self.notify(FormEvent::Deleted(index));
        Ok(())
    }

    /// リストはそのまま、フォームをクリアして編集を抜ける
    pub fn cancel<S: PhotoStore>(&mut self, store: &mut S) {
        self.release_pending(store);
        self.clear_form();
        self.status = SubmitStatus::Idle;
        self.notify(FormEvent::Cancelled);
    }

    fn clear_form(&mut self) {
        self.values = Candidate::default();
        self.preview = None;
        self.errors.clear();
        self.mode = EditMode::Adding;
    }

    fn editing_record(&self) -> Option<&Nominee> {
        match self.mode {
            EditMode::Editing(index) => self.records.get(index),
            EditMode::Adding => None,
        }
    }

    /// 未登録の選択写真を解放
    fn release_pending<S: PhotoStore>(&mut self, store: &mut S) {
        if let Some(selection) = self.values.photo.take() {
            store.release(&selection.handle);
        }
    }

    fn revalidate(&mut self, field: Field) {
        match self.status {
            SubmitStatus::Rejected => match validate(&self.values) {
                Ok(_) => self.errors.clear(),
                Err(errors) => match errors.get(field) {
                    Some(message) => self.errors.insert(field, message),
                    None => self.errors.remove(field),
                },
            },
            SubmitStatus::Accepted => self.status = SubmitStatus::Idle,
            SubmitStatus::Idle => {}
        }
    }

    fn notify(&self, event: FormEvent) {
        for listener in &self.listeners {
            listener(&event, self);
        }
    }
}
