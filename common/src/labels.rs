//! UI表示文言

use crate::schema::Field;

pub const TITLE: &str = "ทำเนียบรายชื่อสมาชิกผู้แทนราษฎร";

// 選択項目の未選択表示
pub const SELECT_HONORIFIC: &str = "เลือกคำนำหน้า";
pub const SELECT_POSITION: &str = "เลือกตำแหน่ง";
pub const SELECT_PARTY: &str = "เลือกพรรค";

// テキスト入力のプレースホルダ
pub const PLACEHOLDER_FIRST_NAME: &str = "ชื่อ";
pub const PLACEHOLDER_LAST_NAME: &str = "นามสกุล";
pub const PLACEHOLDER_CAREER_HISTORY: &str = "ประวัติการทำงาน";
pub const PLACEHOLDER_ACHIEVEMENTS: &str = "ผลงานที่ผ่านมา";

pub const BUTTON_ADD: &str = "Add";
pub const BUTTON_SAVE_EDIT: &str = "บันทึกการแก้ไข";
pub const BUTTON_EDIT: &str = "แก้ไข";
pub const BUTTON_DELETE: &str = "ลบ";
pub const BUTTON_CANCEL: &str = "ยกเลิก";

// 一覧行の見出し
pub const PREFIX_CAREER_HISTORY: &str = "ประวัติ";
pub const PREFIX_ACHIEVEMENTS: &str = "ผลงาน";
pub const PREFIX_POSITION: &str = "ตำแหน่ง";
pub const PREFIX_PARTY: &str = "พรรค";

pub const LABEL_PHOTO: &str = "รูปถ่าย";
pub const PREVIEW_ALT: &str = "preview";
pub const PHOTO_ALT: &str = "nominee";

/// 項目の案内文（入力はプレースホルダ、選択は未選択表示）
pub fn field_label(field: Field) -> &'static str {
    match field {
        Field::Honorific => SELECT_HONORIFIC,
        Field::FirstName => PLACEHOLDER_FIRST_NAME,
        Field::LastName => PLACEHOLDER_LAST_NAME,
        Field::CareerHistory => PLACEHOLDER_CAREER_HISTORY,
        Field::Achievements => PLACEHOLDER_ACHIEVEMENTS,
        Field::Photo => LABEL_PHOTO,
        Field::Position => SELECT_POSITION,
        Field::Party => SELECT_PARTY,
    }
}

/// 選択項目の選択肢（自由入力項目は `None`）
pub fn field_options(field: Field) -> Option<Vec<&'static str>> {
    use crate::types::{Honorific, Party, Position};

    match field {
        Field::Honorific => Some(Honorific::ALL.iter().map(|v| v.as_str()).collect()),
        Field::Position => Some(Position::ALL.iter().map(|v| v.as_str()).collect()),
        Field::Party => Some(Party::ALL.iter().map(|v| v.as_str()).collect()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_options() {
        assert_eq!(field_options(Field::Honorific), Some(vec!["นาย", "นาง"]));
        assert_eq!(field_options(Field::Party).map(|o| o.len()), Some(11));
        assert!(field_options(Field::FirstName).is_none());
        assert!(field_options(Field::Photo).is_none());
    }

    #[test]
    fn test_every_field_has_label() {
        for field in Field::ALL {
            assert!(!field_label(*field).is_empty());
        }
    }
}
