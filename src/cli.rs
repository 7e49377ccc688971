use clap::{Parser, Subcommand, ValueEnum};
use nominee_common::{Field, Honorific, Party, Position};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nominee-roster")]
#[command(about = "議員候補者名簿フォーム", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 対話形式で候補者を追加・編集・削除（保存はしない）
    Form,

    /// 候補者JSONファイルを検証
    Validate {
        /// 候補者JSONファイル（キーはcamelCase、`photos` はパスの配列）
        #[arg(required = true)]
        input: PathBuf,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 敬称・役職・政党の選択肢を表示
    Options {
        /// 表示する項目（省略時はすべて）
        #[arg(short, long)]
        field: Option<SelectField>,
    },

    /// 設定の表示・変更
    Config {
        /// フォームの見出し
        #[arg(long)]
        title: Option<String>,

        /// 写真プレビューの幅（px）
        #[arg(long)]
        preview_width: Option<u32>,

        /// 削除前に確認する
        #[arg(long)]
        confirm_delete: Option<bool>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// 選択式の項目
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SelectField {
    Honorific,
    Position,
    Party,
}

impl SelectField {
    pub const ALL: &'static [SelectField] = &[SelectField::Honorific, SelectField::Position, SelectField::Party];

    pub fn field(&self) -> Field {
        match self {
            SelectField::Honorific => Field::Honorific,
            SelectField::Position => Field::Position,
            SelectField::Party => Field::Party,
        }
    }

    pub fn values(&self) -> Vec<&'static str> {
        match self {
            SelectField::Honorific => Honorific::ALL.iter().map(|v| v.as_str()).collect(),
            SelectField::Position => Position::ALL.iter().map(|v| v.as_str()).collect(),
            SelectField::Party => Party::ALL.iter().map(|v| v.as_str()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_accepts_select_fields() {
        let cli = Cli::try_parse_from(["nominee-roster", "options", "--field", "party"]).unwrap();
        match cli.command {
            Commands::Options { field } => assert_eq!(field, Some(SelectField::Party)),
            _ => panic!("expected options"),
        }
    }

    #[test]
    fn test_options_rejects_free_text_field() {
        let result = Cli::try_parse_from(["nominee-roster", "options", "--field", "firstName"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_select_field_values() {
        assert_eq!(SelectField::Honorific.values(), vec!["นาย", "นาง"]);
        assert_eq!(SelectField::Position.values().len(), 5);
        assert_eq!(SelectField::Party.values().len(), 11);
        assert_eq!(SelectField::Party.field(), Field::Party);
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["nominee-roster", "validate", "c.json", "-v"]).unwrap();
        assert!(cli.verbose);
    }
}
