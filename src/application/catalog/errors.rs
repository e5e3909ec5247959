use thiserror::Error;

use crate::domain::{BorrowError, ItemId, MemberId, ReturnError};

/// 失敗の分類
///
/// どの失敗も操作を取り消すだけで致命的ではない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 既に存在するIDで追加しようとした
    DuplicateIdentifier,
    /// 存在しないIDを指定した
    NotFound,
    /// 在庫切れ
    Unavailable,
    /// 借りていないタイトルを返却しようとした
    NotHeld,
}

/// カタログ操作のエラー
///
/// 表示文言はコンソールにそのまま出せる形にしている。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// 蔵書IDの重複
    #[error("Book/Ebook with ID: {0} already exists")]
    DuplicateItem(ItemId),

    /// 会員IDの重複
    #[error("Member with ID: {0} already exists")]
    DuplicateMember(MemberId),

    /// 蔵書が存在しない
    #[error("Book with ID {0} not found.")]
    ItemNotFound(ItemId),

    /// 会員が存在しない
    #[error("Member with ID {0} not found.")]
    MemberNotFound(MemberId),

    /// 貸出・返却で会員または蔵書が解決できない（どちらかは区別しない）
    #[error("Invalid member ID or book ID.")]
    InvalidMemberOrItem,

    /// 紙の書籍の在庫切れ
    #[error("Sorry, '{0}' is not available.")]
    Unavailable(String),

    /// 借りていないタイトルの返却
    #[error("{member} does not have '{title}' borrowed.")]
    NotHeld { member: String, title: String },
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::DuplicateItem(_) | CatalogError::DuplicateMember(_) => {
                ErrorKind::DuplicateIdentifier
            }
            CatalogError::ItemNotFound(_)
            | CatalogError::MemberNotFound(_)
            | CatalogError::InvalidMemberOrItem => ErrorKind::NotFound,
            CatalogError::Unavailable(_) => ErrorKind::Unavailable,
            CatalogError::NotHeld { .. } => ErrorKind::NotHeld,
        }
    }
}

impl From<BorrowError> for CatalogError {
    fn from(err: BorrowError) -> Self {
        match err {
            BorrowError::Unavailable { title } => CatalogError::Unavailable(title),
        }
    }
}

impl From<ReturnError> for CatalogError {
    fn from(err: ReturnError) -> Self {
        match err {
            ReturnError::NotHeld { member, title } => CatalogError::NotHeld { member, title },
        }
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, CatalogError>;
