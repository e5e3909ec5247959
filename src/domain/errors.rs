/// 貸出のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BorrowError {
    /// 紙の書籍の在庫が0冊
    Unavailable { title: String },
}

/// 返却のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnError {
    /// 会員がそのタイトルを借りていない
    NotHeld { member: String, title: String },
}
