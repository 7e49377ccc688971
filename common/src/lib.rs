//! 議員候補者名簿 共通ライブラリ
//!
//! CLI版とWeb版（WASM）で共有する型・入力チェック・フォーム制御

pub mod error;
pub mod form;
pub mod labels;
pub mod listing;
pub mod photo;
pub mod schema;
pub mod settings;
pub mod types;

pub use error::{Error, Result};
pub use form::{EditMode, FormEvent, NomineeForm, Submission, SubmitStatus};
pub use listing::{display_line, list_view, ListEntry};
pub use photo::{PhotoHandle, PhotoStore};
pub use schema::{validate, Field, FieldErrors};
pub use settings::FormSettings;
pub use types::{Candidate, Honorific, Nominee, Party, PhotoSelection, Position};
