use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Format, ItemId, commands::UpdateItem};

// ============================================================================
// 蔵書（紙・電子）の共通部分
// ============================================================================

/// 蔵書の共通フィールド
///
/// 紙の書籍・電子書籍の両方で共有されるコアデータ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCore {
    pub id: ItemId,
    pub title: String,
    pub author: String,
}

/// 紙の書籍
///
/// ビジネスルール：
/// - 在庫数（copies）が1冊以上のときのみ貸出可能
/// - 貸出で1冊減り、返却で1冊増える
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicalBook {
    #[serde(flatten)]
    pub core: ItemCore,
    pub copies: u32,
}

impl std::ops::Deref for PhysicalBook {
    type Target = ItemCore;

    fn deref(&self) -> &Self::Target {
        &self.core
    }
}

impl std::ops::DerefMut for PhysicalBook {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.core
    }
}

/// 電子書籍
///
/// ビジネスルール：
/// - 在庫の概念がなく常に貸出可能
/// - 貸出・返却でファイルサイズは変化しない
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectronicBook {
    #[serde(flatten)]
    pub core: ItemCore,
    pub file_size_mb: u32,
}

impl std::ops::Deref for ElectronicBook {
    type Target = ItemCore;

    fn deref(&self) -> &Self::Target {
        &self.core
    }
}

impl std::ops::DerefMut for ElectronicBook {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.core
    }
}

/// 蔵書の統合型
///
/// 形態ごとの振る舞いの違いはパターンマッチで表現する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum CatalogItem {
    Physical(PhysicalBook),
    Electronic(ElectronicBook),
}

impl CatalogItem {
    /// 紙の書籍を作成する
    pub fn physical(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        author: impl Into<String>,
        copies: u32,
    ) -> Self {
        CatalogItem::Physical(PhysicalBook {
            core: ItemCore {
                id: id.into(),
                title: title.into(),
                author: author.into(),
            },
            copies,
        })
    }

    /// 電子書籍を作成する
    pub fn electronic(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        author: impl Into<String>,
        file_size_mb: u32,
    ) -> Self {
        CatalogItem::Electronic(ElectronicBook {
            core: ItemCore {
                id: id.into(),
                title: title.into(),
                author: author.into(),
            },
            file_size_mb,
        })
    }

    pub fn core(&self) -> &ItemCore {
        match self {
            CatalogItem::Physical(book) => &book.core,
            CatalogItem::Electronic(ebook) => &ebook.core,
        }
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        match self {
            CatalogItem::Physical(book) => &mut book.core,
            CatalogItem::Electronic(ebook) => &mut ebook.core,
        }
    }

    pub fn id(&self) -> ItemId {
        self.core().id
    }

    pub fn title(&self) -> &str {
        &self.core().title
    }

    pub fn author(&self) -> &str {
        &self.core().author
    }

    pub fn format(&self) -> Format {
        match self {
            CatalogItem::Physical(_) => Format::Physical,
            CatalogItem::Electronic(_) => Format::Electronic,
        }
    }

    /// 紙の書籍の在庫数（電子書籍は `None`）
    pub fn copies(&self) -> Option<u32> {
        match self {
            CatalogItem::Physical(book) => Some(book.copies),
            CatalogItem::Electronic(_) => None,
        }
    }

    /// 電子書籍のファイルサイズ（紙の書籍は `None`）
    pub fn file_size_mb(&self) -> Option<u32> {
        match self {
            CatalogItem::Physical(_) => None,
            CatalogItem::Electronic(ebook) => Some(ebook.file_size_mb),
        }
    }

    /// 貸出可能か
    ///
    /// 紙の書籍は在庫が1冊以上、電子書籍は常に可能。
    pub fn is_available(&self) -> bool {
        match self {
            CatalogItem::Physical(book) => book.copies > 0,
            CatalogItem::Electronic(_) => true,
        }
    }

    /// 一覧表示用のラベル
    pub fn label(&self) -> &'static str {
        match self {
            CatalogItem::Physical(_) => "[Book]",
            CatalogItem::Electronic(_) => "[Ebook]",
        }
    }

    /// 表示用レコードを作成する（副作用なし）
    pub fn describe(&self) -> ItemRecord {
        let detail = match self {
            CatalogItem::Physical(book) => ItemDetail::Physical {
                copies: book.copies,
            },
            CatalogItem::Electronic(ebook) => ItemDetail::Electronic {
                file_size_mb: ebook.file_size_mb,
            },
        };
        let core = self.core();

        ItemRecord {
            id: core.id,
            title: core.title.clone(),
            author: core.author.clone(),
            detail,
        }
    }

    /// 更新コマンドを適用する
    ///
    /// ビジネスルール：
    /// - タイトル・著者は空でない値が指定された場合のみ変更
    /// - 在庫数は紙の書籍のみ、ファイルサイズは電子書籍のみ変更
    /// - 形態に合わない指定は無視する
    pub fn apply_update(&mut self, update: &UpdateItem) {
        if let Some(title) = update.title.as_deref().filter(|t| !t.is_empty()) {
            self.core_mut().title = title.to_string();
        }
        if let Some(author) = update.author.as_deref().filter(|a| !a.is_empty()) {
            self.core_mut().author = author.to_string();
        }

        match self {
            CatalogItem::Physical(book) => {
                if let Some(copies) = update.copies {
                    book.copies = copies;
                }
            }
            CatalogItem::Electronic(ebook) => {
                if let Some(file_size_mb) = update.file_size_mb {
                    ebook.file_size_mb = file_size_mb;
                }
            }
        }
    }
}

// ============================================================================
// 表示用レコード
// ============================================================================

/// 形態ごとの付加情報
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum ItemDetail {
    Physical { copies: u32 },
    Electronic { file_size_mb: u32 },
}

/// 蔵書の表示用レコード
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRecord {
    pub id: ItemId,
    pub title: String,
    pub author: String,
    #[serde(flatten)]
    pub detail: ItemDetail,
}

impl fmt::Display for ItemRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Title: {}, Author: {}",
            self.id, self.title, self.author
        )?;
        match self.detail {
            ItemDetail::Physical { copies } => write!(f, ", Copies: {}", copies),
            ItemDetail::Electronic { file_size_mb } => {
                write!(f, ", File Size: {} MB", file_size_mb)
            }
        }
    }
}
