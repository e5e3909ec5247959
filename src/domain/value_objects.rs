use serde::{Deserialize, Serialize};
use std::fmt;

/// 蔵書ID - 呼び出し側が採番する
///
/// 物理書籍・電子書籍を通して一意。作成後は変更不可。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(u32);

impl ItemId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for ItemId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 会員ID - 呼び出し側が採番する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MemberId(u32);

impl MemberId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for MemberId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 蔵書の形態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// 紙の書籍（在庫数で貸出可否が決まる）
    Physical,
    /// 電子書籍（常に貸出可能）
    Electronic,
}

impl Format {
    pub fn is_electronic(&self) -> bool {
        matches!(self, Format::Electronic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_roundtrips_value() {
        let id = ItemId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(ItemId::from(42), id);
    }

    #[test]
    fn test_member_id_display() {
        assert_eq!(MemberId::new(1001).to_string(), "1001");
    }

    #[test]
    fn test_ids_compare_by_value() {
        assert_ne!(ItemId::new(1), ItemId::new(2));
        assert!(MemberId::new(1) < MemberId::new(2));
    }

    #[test]
    fn test_format_is_electronic() {
        assert!(Format::Electronic.is_electronic());
        assert!(!Format::Physical.is_electronic());
    }
}
