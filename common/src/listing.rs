//! 名簿一覧の表示データ

use crate::labels;
use crate::photo::PhotoHandle;
use crate::types::Nominee;

/// 一覧の1行
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListEntry {
    pub index: usize,
    pub line: String,
    pub photo: Option<PhotoHandle>,
}

/// レコードの表示文字列
pub fn display_line(nominee: &Nominee) -> String {
    format!(
        "{} {} {} | {}: {} | {}: {} | {}: {} | {}: {}",
        nominee.honorific,
        nominee.first_name,
        nominee.last_name,
        labels::PREFIX_CAREER_HISTORY,
        nominee.career_history,
        labels::PREFIX_ACHIEVEMENTS,
        nominee.achievements,
        labels::PREFIX_POSITION,
        nominee.position,
        labels::PREFIX_PARTY,
        nominee.party,
    )
}

/// 名簿を一覧行に変換（リスト順）
pub fn list_view(records: &[Nominee]) -> Vec<ListEntry> {
    records
        .iter()
        .enumerate()
        .map(|(index, nominee)| ListEntry {
            index,
            line: display_line(nominee),
            photo: nominee.photo.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Honorific, Party, Position};

    fn nominee(first_name: &str, photo: Option<&str>) -> Nominee {
        Nominee {
            honorific: Honorific::Mrs,
            first_name: first_name.to_string(),
            last_name: "ศรีสุข".to_string(),
            career_history: "นักธุรกิจ".to_string(),
            achievements: "สะพาน".to_string(),
            photo: photo.map(PhotoHandle::new),
            position: Position::DeputyPrimeMinister,
            party: Party::BhumjaiThai,
        }
    }

    #[test]
    fn test_display_line() {
        let line = display_line(&nominee("มาลี", None));
        assert_eq!(
            line,
            "นาง มาลี ศรีสุข | ประวัติ: นักธุรกิจ | ผลงาน: สะพาน | ตำแหน่ง: รองนายกรัฐมนตรี | พรรค: พรรคภูมิใจไทย"
        );
    }

    #[test]
    fn test_list_view_keeps_order_and_photos() {
        let records = vec![nominee("ก", Some("blob:1")), nominee("ข", None)];
        let entries = list_view(&records);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].index, 0);
        assert!(entries[0].line.contains(" ก "));
        assert_eq!(entries[0].photo, Some(PhotoHandle::new("blob:1")));
        assert_eq!(entries[1].index, 1);
        assert!(entries[1].photo.is_none());
    }

    #[test]
    fn test_list_view_empty() {
        assert!(list_view(&[]).is_empty());
    }
}
