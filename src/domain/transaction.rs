use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Format;

/// 取引履歴に記録するタイムスタンプの書式
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 取引の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Borrowed,
    Returned,
}

/// 取引履歴の1エントリ
///
/// 会員ごとの追記専用ログに積まれる不変の事実。
/// 表示は `Borrowed '<title>' on <timestamp>` の形式。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub kind: TransactionKind,
    pub format: Format,
    pub title: String,
    pub at: NaiveDateTime,
}

impl Transaction {
    pub fn borrowed(format: Format, title: impl Into<String>, at: NaiveDateTime) -> Self {
        Self {
            kind: TransactionKind::Borrowed,
            format,
            title: title.into(),
            at,
        }
    }

    pub fn returned(format: Format, title: impl Into<String>, at: NaiveDateTime) -> Self {
        Self {
            kind: TransactionKind::Returned,
            format,
            title: title.into(),
            at,
        }
    }

    pub fn is_borrow(&self) -> bool {
        self.kind == TransactionKind::Borrowed
    }

    pub fn is_return(&self) -> bool {
        self.kind == TransactionKind::Returned
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let at = self.at.format(TIMESTAMP_FORMAT);
        match (self.kind, self.format) {
            // 電子書籍の貸出のみ区別して記録する（返却は共通の表記）
            (TransactionKind::Borrowed, Format::Electronic) => {
                write!(f, "Borrowed Ebook '{}' on {}", self.title, at)
            }
            (TransactionKind::Borrowed, Format::Physical) => {
                write!(f, "Borrowed '{}' on {}", self.title, at)
            }
            (TransactionKind::Returned, _) => write!(f, "Returned '{}' on {}", self.title, at),
        }
    }
}
