use crate::domain::{
    CatalogItem, ItemId, ItemRecord, Member, MemberId, MemberRecord, Transaction,
    commands::UpdateItem,
};
use crate::ports::Clock;
use std::sync::Arc;

use super::errors::{CatalogError, Result};
use super::search;

/// 会員1人分の取引履歴ビュー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberHistory<'a> {
    pub member_id: MemberId,
    pub name: &'a str,
    pub transactions: &'a [Transaction],
}

/// カタログ - 蔵書と会員を所有し、両者にまたがる操作を調停する
///
/// ビジネスルール：
/// - 蔵書IDと会員IDはそれぞれ一意（重複追加は何もせず拒否）
/// - 貸出・返却は会員と蔵書をIDで解決してから会員に委譲する
/// - 一覧・検索の順序は追加順
///
/// 単一の操作者による逐次実行を前提とし、内部でロックは取らない。
pub struct Catalog {
    items: Vec<CatalogItem>,
    members: Vec<Member>,
    clock: Arc<dyn Clock>,
}

impl Catalog {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            items: Vec::new(),
            members: Vec::new(),
            clock,
        }
    }

    // ========================================================================
    // 蔵書
    // ========================================================================

    /// 蔵書を追加する
    ///
    /// 同じIDが既にあれば既存の蔵書は変更せず `DuplicateItem` を返す。
    pub fn add_item(&mut self, item: CatalogItem) -> Result<()> {
        let id = item.id();
        if self.item(id).is_some() {
            tracing::warn!(item_id = %id, "item already exists");
            return Err(CatalogError::DuplicateItem(id));
        }

        tracing::info!(item_id = %id, title = item.title(), "item added");
        self.items.push(item);
        Ok(())
    }

    /// 蔵書を削除し、削除した蔵書を返す
    ///
    /// 貸出中かどうかは確認しない。
    pub fn remove_item(&mut self, id: impl Into<ItemId>) -> Result<CatalogItem> {
        let id = id.into();
        let Some(position) = self.items.iter().position(|item| item.id() == id) else {
            tracing::warn!(item_id = %id, "item to remove not found");
            return Err(CatalogError::ItemNotFound(id));
        };

        let removed = self.items.remove(position);
        tracing::info!(item_id = %id, title = removed.title(), "item removed");
        Ok(removed)
    }

    /// 蔵書情報を更新し、更新後のレコードを返す
    pub fn update_item(&mut self, id: impl Into<ItemId>, update: &UpdateItem) -> Result<ItemRecord> {
        let id = id.into();
        let Some(item) = self.item_mut(id) else {
            tracing::warn!(item_id = %id, "item to update not found");
            return Err(CatalogError::ItemNotFound(id));
        };

        item.apply_update(update);
        tracing::info!(item_id = %id, "item updated");
        Ok(item.describe())
    }

    pub fn item(&self, id: impl Into<ItemId>) -> Option<&CatalogItem> {
        let id = id.into();
        self.items.iter().find(|item| item.id() == id)
    }

    fn item_mut(&mut self, id: ItemId) -> Option<&mut CatalogItem> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// すべての蔵書（追加順）
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn item_records(&self) -> Vec<ItemRecord> {
        self.items.iter().map(CatalogItem::describe).collect()
    }

    /// タイトルまたは著者で検索する（大文字小文字を区別しない）
    ///
    /// 一致なしは空のVecを返す（エラーではない）。
    pub fn search(&self, term: &str) -> Vec<&CatalogItem> {
        let found: Vec<_> = self
            .items
            .iter()
            .filter(|item| search::matches(item, term))
            .collect();

        tracing::debug!(term, hits = found.len(), "search");
        found
    }

    // ========================================================================
    // 会員
    // ========================================================================

    /// 会員を追加する
    ///
    /// 同じIDが既にあれば既存の会員は変更せず `DuplicateMember` を返す。
    pub fn add_member(&mut self, member: Member) -> Result<()> {
        let id = member.id();
        if self.member(id).is_some() {
            tracing::warn!(member_id = %id, "member already exists");
            return Err(CatalogError::DuplicateMember(id));
        }

        tracing::info!(member_id = %id, name = member.name(), "member added");
        self.members.push(member);
        Ok(())
    }

    /// 会員を削除し、削除した会員を返す
    ///
    /// 借りている蔵書の在庫は戻さない。
    pub fn remove_member(&mut self, id: impl Into<MemberId>) -> Result<Member> {
        let id = id.into();
        let Some(position) = self.members.iter().position(|member| member.id() == id) else {
            tracing::warn!(member_id = %id, "member to remove not found");
            return Err(CatalogError::MemberNotFound(id));
        };

        let removed = self.members.remove(position);
        if !removed.holdings().is_empty() {
            tracing::warn!(
                member_id = %id,
                held = removed.holdings().len(),
                "removed member still holds items"
            );
        }
        tracing::info!(member_id = %id, name = removed.name(), "member removed");
        Ok(removed)
    }

    /// 会員名を変更し、変更前の名前を返す
    ///
    /// 全会員を探してから見つからないと判断する。
    pub fn rename_member(
        &mut self,
        id: impl Into<MemberId>,
        new_name: impl Into<String>,
    ) -> Result<String> {
        let id = id.into();
        let Some(member) = self.member_mut(id) else {
            tracing::warn!(member_id = %id, "member to rename not found");
            return Err(CatalogError::MemberNotFound(id));
        };

        let new_name = new_name.into();
        let old_name = member.rename(new_name.clone());
        tracing::info!(member_id = %id, %old_name, %new_name, "member renamed");
        Ok(old_name)
    }

    pub fn member(&self, id: impl Into<MemberId>) -> Option<&Member> {
        let id = id.into();
        self.members.iter().find(|member| member.id() == id)
    }

    fn member_mut(&mut self, id: MemberId) -> Option<&mut Member> {
        self.members.iter_mut().find(|member| member.id() == id)
    }

    /// すべての会員（追加順）
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn member_records(&self) -> Vec<MemberRecord> {
        self.members.iter().map(Member::describe).collect()
    }

    /// 全会員の取引履歴（会員の追加順）
    pub fn transaction_histories(&self) -> Vec<MemberHistory<'_>> {
        self.members
            .iter()
            .map(|member| MemberHistory {
                member_id: member.id(),
                name: member.name(),
                transactions: member.transaction_history(),
            })
            .collect()
    }

    // ========================================================================
    // 貸出・返却
    // ========================================================================

    /// 会員に蔵書を貸し出す
    ///
    /// ビジネスルール：
    /// - 会員・蔵書の両方が存在すること（どちらが欠けたかは区別しない）
    /// - 紙の書籍は在庫が1冊以上あること
    pub fn issue(
        &mut self,
        member_id: impl Into<MemberId>,
        item_id: impl Into<ItemId>,
    ) -> Result<Transaction> {
        let (member_id, item_id) = (member_id.into(), item_id.into());
        let at = self.clock.now();
        let (member, item) = self.resolve(member_id, item_id)?;

        match member.borrow(item, at) {
            Ok(transaction) => {
                tracing::info!(%member_id, %item_id, title = %transaction.title, "item issued");
                Ok(transaction)
            }
            Err(err) => {
                tracing::warn!(%member_id, %item_id, ?err, "issue rejected");
                Err(err.into())
            }
        }
    }

    /// 会員から蔵書の返却を受け付ける
    ///
    /// 照合はタイトルで行う（会員のholdingsがタイトルで記録されるため）。
    pub fn return_item(
        &mut self,
        member_id: impl Into<MemberId>,
        item_id: impl Into<ItemId>,
    ) -> Result<Transaction> {
        let (member_id, item_id) = (member_id.into(), item_id.into());
        let at = self.clock.now();
        let (member, item) = self.resolve(member_id, item_id)?;

        match member.return_item(item, at) {
            Ok(transaction) => {
                tracing::info!(%member_id, %item_id, title = %transaction.title, "item returned");
                Ok(transaction)
            }
            Err(err) => {
                tracing::warn!(%member_id, %item_id, ?err, "return rejected");
                Err(err.into())
            }
        }
    }

    /// 会員と蔵書をIDで同時に解決する
    fn resolve(
        &mut self,
        member_id: MemberId,
        item_id: ItemId,
    ) -> Result<(&mut Member, &mut CatalogItem)> {
        let member = self.members.iter_mut().find(|m| m.id() == member_id);
        let item = self.items.iter_mut().find(|i| i.id() == item_id);

        match (member, item) {
            (Some(member), Some(item)) => Ok((member, item)),
            _ => {
                tracing::warn!(%member_id, %item_id, "invalid member or item id");
                Err(CatalogError::InvalidMemberOrItem)
            }
        }
    }
}
