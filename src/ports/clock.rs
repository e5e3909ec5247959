use chrono::NaiveDateTime;

/// 時刻ポート
///
/// 取引履歴に記録する現在時刻を供給する。
/// 実装はシステム時計、テスト用の固定時計など。
pub trait Clock: Send + Sync {
    /// 現在時刻（ローカル時刻）
    fn now(&self) -> NaiveDateTime;
}
