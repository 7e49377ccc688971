//! 入力チェック
//!
//! 登録のたびに全ルールを実行し、エラーは項目ごとにまとめて返す。
//! 項目間のルールはない。

use crate::types::{Candidate, Honorific, Nominee, Party, Position};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

/// フォーム項目（表示順）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Honorific,
    FirstName,
    LastName,
    CareerHistory,
    Achievements,
    Photo,
    Position,
    Party,
}

impl Field {
    pub const ALL: &'static [Field] = &[
        Field::Honorific,
        Field::FirstName,
        Field::LastName,
        Field::CareerHistory,
        Field::Achievements,
        Field::Photo,
        Field::Position,
        Field::Party,
    ];

    /// 候補者JSON・エラーマップでのキー
    pub fn name(&self) -> &'static str {
        match self {
            Field::Honorific => "honorific",
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::CareerHistory => "careerHistory",
            Field::Achievements => "achievements",
            Field::Photo => "photo",
            Field::Position => "position",
            Field::Party => "party",
        }
    }

    /// チェック失敗時に項目の下に出すメッセージ
    pub fn message(&self) -> &'static str {
        match self {
            Field::Honorific => "กรุณาเลือกคำนำหน้า",
            Field::FirstName => "กรุณากรอกชื่อ",
            Field::LastName => "กรุณากรอกนามสกุล",
            Field::CareerHistory => "กรุณากรอกประวัติการทำงาน",
            Field::Achievements => "กรุณากรอกผลงานที่ผ่านมา",
            Field::Photo => "กรุณาอัปโหลดรูปถ่าย",
            Field::Position => "กรุณาเลือกตำแหน่ง",
            Field::Party => "กรุณาเลือกพรรค",
        }
    }
}

impl std::str::FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|f| f.name() == s)
            .ok_or_else(|| format!("Unknown field: {}", s))
    }
}

/// 項目ごとの入力エラー
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, message) in &self.0 {
            map.serialize_entry(field.name(), message)?;
        }
        map.end()
    }
}

/// 入力値を検証して名簿レコードにする
pub fn validate(candidate: &Candidate) -> Result<Nominee, FieldErrors> {
    let mut errors = FieldErrors::new();

    let honorific = choice::<Honorific>(&candidate.honorific, Field::Honorific, &mut errors);
    let first_name = required_text(&candidate.first_name, Field::FirstName, &mut errors);
    let last_name = required_text(&candidate.last_name, Field::LastName, &mut errors);
    let career_history = required_text(&candidate.career_history, Field::CareerHistory, &mut errors);
    let achievements = required_text(&candidate.achievements, Field::Achievements, &mut errors);
    let position = choice::<Position>(&candidate.position, Field::Position, &mut errors);
    let party = choice::<Party>(&candidate.party, Field::Party, &mut errors);

    let photo = match &candidate.photo {
        Some(selection) if selection.count > 1 => {
            errors.insert(Field::Photo, Field::Photo.message());
            None
        }
        Some(selection) => Some(selection.handle.clone()),
        None => None,
    };

    match (honorific, first_name, last_name, career_history, achievements, position, party) {
        (
            Some(honorific),
            Some(first_name),
            Some(last_name),
            Some(career_history),
            Some(achievements),
            Some(position),
            Some(party),
        ) if errors.is_empty() => Ok(Nominee {
            honorific,
            first_name,
            last_name,
            career_history,
            achievements,
            photo,
            position,
            party,
        }),
        _ => Err(errors),
    }
}

/// トリム後に空でないこと
fn required_text(value: &str, field: Field, errors: &mut FieldErrors) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.insert(field, field.message());
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// 固定値のいずれかと完全一致
fn choice<T: std::str::FromStr>(value: &str, field: Field, errors: &mut FieldErrors) -> Option<T> {
    match value.parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            errors.insert(field, field.message());
            None
        }
    }
}
