// 機能別モジュール構造
pub mod features;
pub mod shared;

use shared::config::environment::{initialize_logging_system, load_environment_variables};

// 主要な型の再エクスポート
pub use features::auth::session::Session;
pub use features::bills::BillsController;
pub use features::navigation::{Navigator, RoutePath};
pub use features::new_bill::NewBillController;
pub use shared::errors::{AppError, AppResult};

/// アプリケーションの実行環境を初期化する
///
/// # 処理内容
/// 1. 環境変数の読み込み（開発環境では.envファイル）
/// 2. ログシステムの初期化
///
/// UI層の起動処理から一度だけ呼び出すこと。
pub fn initialize() {
    load_environment_variables();
    initialize_logging_system();
}
