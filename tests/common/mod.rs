#![allow(dead_code)]

use chrono::NaiveDateTime;
use lending_catalog::adapters::mock::FixedClock;
use lending_catalog::application::catalog::Catalog;
use lending_catalog::domain::{CatalogItem, Member};
use std::sync::Arc;

/// テスト用のカタログを作成（固定時計付き）
///
/// 時計を返すので、テスト側で時刻を進められる。
pub fn create_test_catalog() -> (Catalog, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::default());
    (Catalog::new(clock.clone()), clock)
}

/// 標準のテストデータを投入したカタログ
///
/// - 1: Python Basics / John Doe（紙、3冊）
/// - 2: Advanced Python / Jane Smith（電子、5MB）
/// - 1001: Alice
pub fn seeded_catalog() -> (Catalog, Arc<FixedClock>) {
    let (mut catalog, clock) = create_test_catalog();
    catalog
        .add_item(CatalogItem::physical(1, "Python Basics", "John Doe", 3))
        .expect("seed physical book");
    catalog
        .add_item(CatalogItem::electronic(2, "Advanced Python", "Jane Smith", 5))
        .expect("seed ebook");
    catalog
        .add_member(Member::new(1001, "Alice"))
        .expect("seed member");
    (catalog, clock)
}

pub fn timestamp(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("valid timestamp")
}
