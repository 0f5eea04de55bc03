/// 画面遷移機能モジュール
///
/// ルート識別子と、表示中ビューを切り替えるコラボレーターの契約を提供します。
/// 実際のビュー描画・ルートマッチングはUI層の責務。

/// 従業員画面のルート識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePath {
    /// 請求書一覧画面
    Bills,
    /// 新規請求書作成画面
    NewBill,
}

impl RoutePath {
    /// ルートに対応するハッシュパスを取得する
    pub fn as_path(&self) -> &'static str {
        match self {
            RoutePath::Bills => "#employee/bills",
            RoutePath::NewBill => "#employee/bill/new",
        }
    }
}

/// 画面遷移コラボレーター
///
/// 指定されたルートへ表示中のビューを切り替える。戻り値はない。
pub trait Navigator: Send + Sync {
    fn on_navigate(&self, route: RoutePath);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(RoutePath::Bills.as_path(), "#employee/bills");
        assert_eq!(RoutePath::NewBill.as_path(), "#employee/bill/new");
    }
}
