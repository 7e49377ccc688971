//! 名簿操作のテスト
//!
//! ファイル実体の写真を使い、フォームコントローラで追加・編集・削除する

use nominee_common::{EditMode, Field, NomineeForm, Nominee, Submission};
use nominee_roster::photo_store::FilePhotoStore;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

fn fill(form: &mut NomineeForm, first_name: &str) {
    form.set_field(Field::Honorific, "นาย");
    form.set_field(Field::FirstName, first_name);
    form.set_field(Field::LastName, "ใจดี");
    form.set_field(Field::CareerHistory, "อดีตนายอำเภอ");
    form.set_field(Field::Achievements, "ขุดลอกคลอง");
    form.set_field(Field::Position, "รัฐมนตรีช่วยว่าการกระทรวง");
    form.set_field(Field::Party, "พรรคพลังสังคม");
}

fn photo(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, name.as_bytes()).unwrap();
    path
}

/// 写真付きの [A, B, C]
fn three_records(dir: &TempDir, store: &mut FilePhotoStore) -> NomineeForm {
    let mut form = NomineeForm::new();
    for name in ["A", "B", "C"] {
        form.select_photo(store, &[photo(dir, &format!("{}.jpg", name))]).unwrap();
        fill(&mut form, name);
        assert!(matches!(form.submit(store), Submission::Added(_)));
    }
    form
}

fn first_names(records: &[Nominee]) -> Vec<&str> {
    records.iter().map(|r| r.first_name.as_str()).collect()
}

/// 必須項目が空: その項目だけエラー、リストは変わらない
#[test]
fn test_blank_field_rejected_without_mutation() {
    let mut store = FilePhotoStore::default();
    let mut form = NomineeForm::new();
    fill(&mut form, "A");
    form.submit(&mut store);

    for field in [Field::FirstName, Field::LastName, Field::CareerHistory, Field::Achievements] {
        fill(&mut form, "B");
        form.set_field(field, "  ");
        assert_eq!(form.submit(&mut store), Submission::Rejected(1));
        assert!(form.errors().contains(field));
        assert_eq!(form.records().len(), 1);
    }
}

/// 固定値以外の選択はエラー
#[test]
fn test_out_of_set_selection_rejected() {
    let mut store = FilePhotoStore::default();
    for (field, value) in [
        (Field::Honorific, "นางสาว"),
        (Field::Position, "ประธานสภา"),
        (Field::Party, "พรรคก้าวไกล"),
    ] {
        let mut form = NomineeForm::new();
        fill(&mut form, "A");
        form.set_field(field, value);
        assert_eq!(form.submit(&mut store), Submission::Rejected(1));
        assert!(form.errors().contains(field));
        assert!(form.records().is_empty());
    }
}

/// 追加は末尾、既存の順序は保つ
#[test]
fn test_add_appends_in_order() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut store = FilePhotoStore::default();
    let mut form = three_records(&dir, &mut store);

    fill(&mut form, "D");
    assert_eq!(form.submit(&mut store), Submission::Added(3));
    assert_eq!(first_names(form.records()), vec!["A", "B", "C", "D"]);
    // 写真なしで追加
    assert!(form.records()[3].photo.is_none());
}

/// [A, B, C] で delete(1) → [A, C]、0番を編集すると A の姓だけ変わる
#[test]
fn test_delete_then_edit_example() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut store = FilePhotoStore::default();
    let mut form = three_records(&dir, &mut store);
    let before = form.records().to_vec();

    form.delete(&mut store, 1).unwrap();
    assert_eq!(form.records(), &[before[0].clone(), before[2].clone()]);

    form.start_edit(&mut store, 0).unwrap();
    form.set_field(Field::LastName, "สุขใจ");
    assert_eq!(form.submit(&mut store), Submission::Updated(0));

    let edited = &form.records()[0];
    assert_eq!(edited.last_name, "สุขใจ");
    assert_eq!(
        Nominee { last_name: before[0].last_name.clone(), ..edited.clone() },
        before[0]
    );
    assert_eq!(form.records()[1], before[2]);
}

/// 削除したレコードの写真は解放、残りはそのまま
#[test]
fn test_delete_releases_photo_handle() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut store = FilePhotoStore::default();
    let mut form = three_records(&dir, &mut store);
    let deleted = form.records()[1].photo.clone().unwrap();

    form.delete(&mut store, 1).unwrap();

    assert_eq!(store.live(), 2);
    assert!(store.resolve(&deleted).is_none());
    for record in form.records() {
        assert!(store.resolve(record.photo.as_ref().unwrap()).is_some());
    }
}

/// 選択直後にプレビューがあり、選んだファイルを指す
#[test]
fn test_preview_after_selection() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut store = FilePhotoStore::default();
    let mut form = NomineeForm::new();
    let file = photo(&dir, "face.jpg");

    form.select_photo(&mut store, &[file.clone()]).unwrap();

    let preview = form.preview().expect("preview expected");
    assert_eq!(store.resolve(preview), Some(file.as_path()));
}

/// ファイルがなければ選択なしのまま
#[test]
fn test_missing_photo_file() {
    let mut store = FilePhotoStore::default();
    let mut form = NomineeForm::new();

    let result = form.select_photo(&mut store, &[PathBuf::from("/nonexistent/face.jpg")]);
    assert!(result.is_err());
    assert!(form.values().photo.is_none());
}

/// 編集中のレコードを削除すると追加モードに戻る
#[test]
fn test_delete_record_under_edit() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut store = FilePhotoStore::default();
    let mut form = three_records(&dir, &mut store);

    form.start_edit(&mut store, 1).unwrap();
    form.delete(&mut store, 1).unwrap();
    assert_eq!(form.mode(), EditMode::Adding);

    fill(&mut form, "D");
    assert_eq!(form.submit(&mut store), Submission::Added(2));
    assert_eq!(first_names(form.records()), vec!["A", "C", "D"]);
}

/// 選び直しに失敗しても解放済みの写真をプレビューしない
#[test]
fn test_failed_reselect_clears_preview() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut store = FilePhotoStore::default();
    let mut form = NomineeForm::new();
    form.select_photo(&mut store, &[photo(&dir, "a.jpg")]).unwrap();

    let result = form.select_photo(&mut store, &[dir.path().join("missing.jpg")]);

    assert!(result.is_err());
    assert_eq!(store.live(), 0);
    assert!(form.preview().is_none());
}
