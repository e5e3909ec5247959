use serde::{Deserialize, Serialize};

/// コマンド：蔵書情報を更新する
///
/// `None` のフィールドは変更しない。空文字のタイトル・著者も変更しない。
/// `copies` は紙の書籍、`file_size_mb` は電子書籍にのみ適用される。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateItem {
    pub title: Option<String>,
    pub author: Option<String>,
    pub copies: Option<u32>,
    pub file_size_mb: Option<u32>,
}

impl UpdateItem {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn copies(mut self, copies: u32) -> Self {
        self.copies = Some(copies);
        self
    }

    pub fn file_size_mb(mut self, file_size_mb: u32) -> Self {
        self.file_size_mb = Some(file_size_mb);
        self
    }
}
