//! 名簿の型定義
//!
//! - Honorific / Position / Party: 選択項目の固定値
//! - Nominee: 検証済みの名簿1件
//! - Candidate: 検証前のフォーム入力値

use crate::photo::PhotoHandle;
use serde::{Deserialize, Serialize};

/// 敬称
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Honorific {
    /// 男性
    #[serde(rename = "นาย")]
    Mr,
    /// 女性
    #[serde(rename = "นาง")]
    Mrs,
}

impl Honorific {
    pub const ALL: &'static [Honorific] = &[Honorific::Mr, Honorific::Mrs];

    pub fn as_str(&self) -> &'static str {
        match self {
            Honorific::Mr => "นาย",
            Honorific::Mrs => "นาง",
        }
    }
}

/// 役職
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "นายกรัฐมนตรี")]
    PrimeMinister,
    #[serde(rename = "รองนายกรัฐมนตรี")]
    DeputyPrimeMinister,
    #[serde(rename = "รัฐมนตรีว่าการกระทรวง")]
    Minister,
    #[serde(rename = "รัฐมนตรีประจำสำนักนายกรัฐมนตรี")]
    MinisterToPrimeMinistersOffice,
    #[serde(rename = "รัฐมนตรีช่วยว่าการกระทรวง")]
    DeputyMinister,
}

impl Position {
    pub const ALL: &'static [Position] = &[
        Position::PrimeMinister,
        Position::DeputyPrimeMinister,
        Position::Minister,
        Position::MinisterToPrimeMinistersOffice,
        Position::DeputyMinister,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::PrimeMinister => "นายกรัฐมนตรี",
            Position::DeputyPrimeMinister => "รองนายกรัฐมนตรี",
            Position::Minister => "รัฐมนตรีว่าการกระทรวง",
            Position::MinisterToPrimeMinistersOffice => "รัฐมนตรีประจำสำนักนายกรัฐมนตรี",
            Position::DeputyMinister => "รัฐมนตรีช่วยว่าการกระทรวง",
        }
    }
}

/// 政党
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Party {
    #[serde(rename = "พรรคเพื่อไทย")]
    PheuThai,
    #[serde(rename = "พรรคภูมิใจไทย")]
    BhumjaiThai,
    #[serde(rename = "พรรคพลังประชารัฐ")]
    PalangPracharath,
    #[serde(rename = "พรรครวมไทยสร้างชาติ")]
    UnitedThaiNation,
    #[serde(rename = "พรรคประชาธิปัตย์")]
    Democrat,
    #[serde(rename = "พรรคชาติไทยพัฒนา")]
    ChartThaiPattana,
    #[serde(rename = "พรรคชาติพัฒนา")]
    ChartPattana,
    #[serde(rename = "พรรคประชาชาติ")]
    Prachachat,
    #[serde(rename = "พรรคเศรษฐกิจใหม่")]
    NewEconomics,
    #[serde(rename = "พรรคพลังสังคม")]
    SocialPower,
    #[serde(rename = "พรรคไทรวมพลัง")]
    ThaiRuamPalang,
}

impl Party {
    pub const ALL: &'static [Party] = &[
        Party::PheuThai,
        Party::BhumjaiThai,
        Party::PalangPracharath,
        Party::UnitedThaiNation,
        Party::Democrat,
        Party::ChartThaiPattana,
        Party::ChartPattana,
        Party::Prachachat,
        Party::NewEconomics,
        Party::SocialPower,
        Party::ThaiRuamPalang,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Party::PheuThai => "พรรคเพื่อไทย",
            Party::BhumjaiThai => "พรรคภูมิใจไทย",
            Party::PalangPracharath => "พรรคพลังประชารัฐ",
            Party::UnitedThaiNation => "พรรครวมไทยสร้างชาติ",
            Party::Democrat => "พรรคประชาธิปัตย์",
            Party::ChartThaiPattana => "พรรคชาติไทยพัฒนา",
            Party::ChartPattana => "พรรคชาติพัฒนา",
            Party::Prachachat => "พรรคประชาชาติ",
            Party::NewEconomics => "พรรคเศรษฐกิจใหม่",
            Party::SocialPower => "พรรคพลังสังคม",
            Party::ThaiRuamPalang => "พรรคไทรวมพลัง",
        }
    }
}

// 表示名と完全一致のみ（選択値はトリムしない）
macro_rules! label_conversions {
    ($($ty:ident => $what:literal),* $(,)?) => {
        $(
            impl std::str::FromStr for $ty {
                type Err = String;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    $ty::ALL
                        .iter()
                        .copied()
                        .find(|v| v.as_str() == s)
                        .ok_or_else(|| format!("Unknown {}: {:?}", $what, s))
                }
            }

            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

label_conversions!(Honorific => "honorific", Position => "position", Party => "party");

/// 検証済みの名簿エントリ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nominee {
    pub honorific: Honorific,
    pub first_name: String,
    pub last_name: String,
    pub career_history: String,
    pub achievements: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<PhotoHandle>,
    pub position: Position,
    pub party: Party,
}

/// 写真入力で選ばれたファイル
///
/// `handle` は選択時に先頭ファイルから一度だけ作り、登録時もそのまま使う。
/// 0件の選択は選択なしとして扱う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoSelection {
    pub count: usize,
    pub handle: PhotoHandle,
}

/// フォームの生の入力値（空文字 = 未入力・未選択）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidate {
    pub honorific: String,
    pub first_name: String,
    pub last_name: String,
    pub career_history: String,
    pub achievements: String,
    pub photo: Option<PhotoSelection>,
    pub position: String,
    pub party: String,
}

impl From<&Nominee> for Candidate {
    /// 編集用にレコードをフォーム値へ戻す（写真入力は空のまま）
    fn from(nominee: &Nominee) -> Self {
        Self {
            honorific: nominee.honorific.as_str().to_string(),
            first_name: nominee.first_name.clone(),
            last_name: nominee.last_name.clone(),
            career_history: nominee.career_history.clone(),
            achievements: nominee.achievements.clone(),
            photo: None,
            position: nominee.position.as_str().to_string(),
            party: nominee.party.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_set_sizes() {
        assert_eq!(Honorific::ALL.len(), 2);
        assert_eq!(Position::ALL.len(), 5);
        assert_eq!(Party::ALL.len(), 11);
    }

    #[test]
    fn test_from_str_matches_labels() {
        assert_eq!("นาง".parse::<Honorific>(), Ok(Honorific::Mrs));
        assert_eq!("รองนายกรัฐมนตรี".parse::<Position>(), Ok(Position::DeputyPrimeMinister));
        assert_eq!("พรรคไทรวมพลัง".parse::<Party>(), Ok(Party::ThaiRuamPalang));
    }

    #[test]
    fn test_from_str_rejects_unknown_and_padded() {
        assert!("".parse::<Honorific>().is_err());
        assert!("Mr.".parse::<Honorific>().is_err());
        assert!(" นาย".parse::<Honorific>().is_err());
        assert!("พรรคอนาคตใหม่".parse::<Party>().is_err());
    }

    #[test]
    fn test_every_label_round_trips_through_from_str() {
        for p in Position::ALL {
            assert_eq!(p.as_str().parse::<Position>().as_ref(), Ok(p));
        }
        for p in Party::ALL {
            assert_eq!(p.to_string().parse::<Party>().as_ref(), Ok(p));
        }
    }

    #[test]
    fn test_nominee_serialize_uses_labels() {
        let nominee = Nominee {
            honorific: Honorific::Mr,
            first_name: "สมชาย".to_string(),
            last_name: "ใจดี".to_string(),
            career_history: "ข้าราชการ".to_string(),
            achievements: "ถนน".to_string(),
            photo: None,
            position: Position::Minister,
            party: Party::Democrat,
        };

        let json = serde_json::to_string(&nominee).expect("serialize failed");
        assert!(json.contains("\"honorific\":\"นาย\""));
        assert!(json.contains("\"firstName\":\"สมชาย\""));
        assert!(json.contains("\"party\":\"พรรคประชาธิปัตย์\""));
        assert!(!json.contains("photo"));
    }

    #[test]
    fn test_candidate_from_nominee() {
        let nominee = Nominee {
            honorific: Honorific::Mrs,
            first_name: "สมหญิง".to_string(),
            last_name: "รักไทย".to_string(),
            career_history: "ครู".to_string(),
            achievements: "โรงเรียน".to_string(),
            photo: Some(PhotoHandle::new("blob:1")),
            position: Position::DeputyMinister,
            party: Party::Prachachat,
        };

        let candidate = Candidate::from(&nominee);
        assert_eq!(candidate.honorific, "นาง");
        assert_eq!(candidate.position, "รัฐมนตรีช่วยว่าการกระทรวง");
        assert_eq!(candidate.party, "พรรคประชาชาติ");
        assert!(candidate.photo.is_none());
    }
}
