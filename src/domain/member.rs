use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{BorrowError, CatalogItem, MemberId, ReturnError, Transaction};

/// 会員
///
/// 借りているタイトルの一覧（holdings）と追記専用の取引履歴を持つ。
///
/// holdingsはIDではなくタイトルで記録する。同じタイトルの蔵書が
/// 複数あると返却時に区別できない点は既知の制約。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    id: MemberId,
    name: String,
    holdings: Vec<String>,
    transactions: Vec<Transaction>,
}

impl Member {
    /// 新規作成（holdings・履歴は空）
    pub fn new(id: impl Into<MemberId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            holdings: Vec::new(),
            transactions: Vec::new(),
        }
    }

    pub fn id(&self) -> MemberId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 名前を変更し、変更前の名前を返す
    pub fn rename(&mut self, new_name: impl Into<String>) -> String {
        std::mem::replace(&mut self.name, new_name.into())
    }

    /// 借りているタイトル（貸出順）
    pub fn holdings(&self) -> &[String] {
        &self.holdings
    }

    /// 指定タイトルを借りているか
    pub fn holds(&self, title: &str) -> bool {
        self.holdings.iter().any(|held| held == title)
    }

    /// 取引履歴（記録順・読み取り専用）
    pub fn transaction_history(&self) -> &[Transaction] {
        &self.transactions
    }

    /// 蔵書を借りる
    ///
    /// ビジネスルール：
    /// - 電子書籍は常に成功し、在庫の増減はない
    /// - 紙の書籍は在庫が1冊以上なら1冊減らして成功
    /// - 在庫0冊なら何も変更せず `BorrowError::Unavailable`
    /// - 同じタイトルを重ねて借りることは可能（holdingsに重複して積まれる）
    pub fn borrow(
        &mut self,
        item: &mut CatalogItem,
        at: NaiveDateTime,
    ) -> Result<Transaction, BorrowError> {
        let format = item.format();
        match item {
            CatalogItem::Electronic(_) => {}
            CatalogItem::Physical(book) => {
                if book.copies == 0 {
                    return Err(BorrowError::Unavailable {
                        title: book.title.clone(),
                    });
                }
                book.copies -= 1;
            }
        }

        let title = item.title().to_string();
        let transaction = Transaction::borrowed(format, title.clone(), at);
        self.holdings.push(title);
        self.transactions.push(transaction.clone());

        Ok(transaction)
    }

    /// 蔵書を返却する
    ///
    /// ビジネスルール：
    /// - タイトルで照合し、holdingsから1件だけ取り除く
    /// - 紙の書籍は在庫を1冊戻す
    /// - 借りていないタイトルなら何も変更せず `ReturnError::NotHeld`
    pub fn return_item(
        &mut self,
        item: &mut CatalogItem,
        at: NaiveDateTime,
    ) -> Result<Transaction, ReturnError> {
        let Some(position) = self.holdings.iter().position(|held| held == item.title()) else {
            return Err(ReturnError::NotHeld {
                member: self.name.clone(),
                title: item.title().to_string(),
            });
        };

        // 在庫数はu32の上限で飽和する
        if let CatalogItem::Physical(book) = item {
            book.copies = book.copies.saturating_add(1);
        }

        let title = self.holdings.remove(position);
        let transaction = Transaction::returned(item.format(), title, at);
        self.transactions.push(transaction.clone());

        Ok(transaction)
    }

    /// 表示用レコードを作成する
    pub fn describe(&self) -> MemberRecord {
        MemberRecord {
            id: self.id,
            name: self.name.clone(),
            holdings: self.holdings.clone(),
        }
    }
}

/// 会員の表示用レコード
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberRecord {
    pub id: MemberId,
    pub name: String,
    pub holdings: Vec<String>,
}

impl fmt::Display for MemberRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let holdings = if self.holdings.is_empty() {
            "None".to_string()
        } else {
            self.holdings.join(", ")
        };
        write!(
            f,
            "ID: {}, Name: {}, Borrowed Books: {}",
            self.id, self.name, holdings
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionKind;
    use chrono::NaiveDate;

    fn at(minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 25)
            .unwrap()
            .and_hms_opt(10, minute, 0)
            .unwrap()
    }

    fn alice() -> Member {
        Member::new(1001, "Alice")
    }

    fn python_basics() -> CatalogItem {
        CatalogItem::physical(1, "Python Basics", "John Doe", 3)
    }

    fn advanced_python() -> CatalogItem {
        CatalogItem::electronic(2, "Advanced Python", "Jane Smith", 5)
    }

    #[test]
    fn test_member_initialization() {
        let member = alice();
        assert_eq!(member.id(), MemberId::new(1001));
        assert_eq!(member.name(), "Alice");
        assert!(member.holdings().is_empty());
        assert!(member.transaction_history().is_empty());
    }

    // TDD: borrow() のテスト
    #[test]
    fn test_borrow_physical_book_decrements_copies() {
        let mut member = alice();
        let mut book = python_basics();

        let tx = member.borrow(&mut book, at(0)).unwrap();

        assert_eq!(book.copies(), Some(2));
        assert_eq!(member.holdings(), ["Python Basics"]);
        assert_eq!(tx.kind, TransactionKind::Borrowed);
        assert_eq!(member.transaction_history(), [tx]);
    }

    #[test]
    fn test_borrow_fails_when_no_copies_left() {
        let mut member = alice();
        let mut book = CatalogItem::physical(3, "Rare Book", "Nobody", 0);

        let result = member.borrow(&mut book, at(0));

        assert_eq!(
            result.unwrap_err(),
            BorrowError::Unavailable {
                title: "Rare Book".to_string()
            }
        );
        assert_eq!(book.copies(), Some(0));
        assert!(member.holdings().is_empty());
        assert!(member.transaction_history().is_empty());
    }

    #[test]
    fn test_borrow_last_copy_then_exhausted() {
        let mut member = alice();
        let mut book = CatalogItem::physical(3, "Rare Book", "Nobody", 1);

        assert!(member.borrow(&mut book, at(0)).is_ok());
        assert_eq!(book.copies(), Some(0));
        assert!(member.borrow(&mut book, at(1)).is_err());
        assert_eq!(member.holdings().len(), 1);
    }

    #[test]
    fn test_borrow_ebook_always_succeeds() {
        let mut member = alice();
        let mut ebook = advanced_python();

        for minute in 0..3 {
            assert!(member.borrow(&mut ebook, at(minute)).is_ok());
        }

        assert_eq!(ebook.file_size_mb(), Some(5));
        assert_eq!(member.holdings().len(), 3);
        assert!(
            member.transaction_history()[0]
                .to_string()
                .starts_with("Borrowed Ebook 'Advanced Python'")
        );
    }

    #[test]
    fn test_borrow_same_title_stacks_holdings() {
        let mut member = alice();
        let mut book = python_basics();

        member.borrow(&mut book, at(0)).unwrap();
        member.borrow(&mut book, at(1)).unwrap();

        assert_eq!(book.copies(), Some(1));
        assert_eq!(member.holdings(), ["Python Basics", "Python Basics"]);
    }

    // TDD: return_item() のテスト
    #[test]
    fn test_return_physical_book_restores_copies() {
        let mut member = alice();
        let mut book = python_basics();

        member.borrow(&mut book, at(0)).unwrap();
        let tx = member.return_item(&mut book, at(5)).unwrap();

        assert_eq!(book.copies(), Some(3));
        assert!(!member.holds("Python Basics"));
        assert_eq!(
            tx.to_string(),
            "Returned 'Python Basics' on 2025-03-25 10:05:00"
        );
    }

    #[test]
    fn test_return_when_copies_at_max_saturates() {
        let mut member = alice();
        let mut book = python_basics();

        member.borrow(&mut book, at(0)).unwrap();
        book.apply_update(&crate::domain::commands::UpdateItem::default().copies(u32::MAX));
        let result = member.return_item(&mut book, at(1));

        assert!(result.is_ok());
        assert_eq!(book.copies(), Some(u32::MAX));
        assert!(member.holdings().is_empty());
    }

    #[test]
    fn test_return_not_held_is_rejected() {
        let mut member = alice();
        let mut book = python_basics();

        let result = member.return_item(&mut book, at(0));

        assert_eq!(
            result.unwrap_err(),
            ReturnError::NotHeld {
                member: "Alice".to_string(),
                title: "Python Basics".to_string()
            }
        );
        assert_eq!(book.copies(), Some(3));
        assert!(member.transaction_history().is_empty());
    }

    #[test]
    fn test_return_removes_only_one_occurrence() {
        let mut member = alice();
        let mut book = python_basics();

        member.borrow(&mut book, at(0)).unwrap();
        member.borrow(&mut book, at(1)).unwrap();
        member.return_item(&mut book, at(2)).unwrap();

        assert_eq!(member.holdings(), ["Python Basics"]);
        assert_eq!(book.copies(), Some(2));
    }

    #[test]
    fn test_return_ebook_leaves_file_size() {
        let mut member = alice();
        let mut ebook = advanced_python();

        member.borrow(&mut ebook, at(0)).unwrap();
        member.return_item(&mut ebook, at(1)).unwrap();

        assert_eq!(ebook.file_size_mb(), Some(5));
        assert!(member.holdings().is_empty());
    }

    #[test]
    fn test_transaction_history_preserves_order() {
        let mut member = alice();
        let mut book = python_basics();
        let mut ebook = advanced_python();

        member.borrow(&mut book, at(0)).unwrap();
        member.borrow(&mut ebook, at(1)).unwrap();
        member.return_item(&mut book, at(2)).unwrap();

        let kinds: Vec<_> = member
            .transaction_history()
            .iter()
            .map(|tx| (tx.kind, tx.title.as_str()))
            .collect();
        assert_eq!(
            kinds,
            vec![
                (TransactionKind::Borrowed, "Python Basics"),
                (TransactionKind::Borrowed, "Advanced Python"),
                (TransactionKind::Returned, "Python Basics"),
            ]
        );
    }

    #[test]
    fn test_rename_returns_old_name() {
        let mut member = alice();
        assert_eq!(member.rename("Bob"), "Alice");
        assert_eq!(member.name(), "Bob");
    }

    #[test]
    fn test_describe_member() {
        let mut member = alice();
        assert_eq!(
            member.describe().to_string(),
            "ID: 1001, Name: Alice, Borrowed Books: None"
        );

        member.borrow(&mut python_basics(), at(0)).unwrap();
        member.borrow(&mut advanced_python(), at(1)).unwrap();
        assert_eq!(
            member.describe().to_string(),
            "ID: 1001, Name: Alice, Borrowed Books: Python Basics, Advanced Python"
        );
    }
}
