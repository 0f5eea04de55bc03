/// 新規請求書作成機能モジュール
///
/// このモジュールは新規請求書の送信に関連する機能を提供します：
/// - 領収書ファイルのクライアント側バリデーション
/// - 領収書の即時アップロードと参照の保持
/// - フォーム送信時のレコード組み立てと2段階永続化
pub mod controller;
pub mod models;

pub use controller::NewBillController;
pub use models::{
    CapturedReceipt, FileChangeOutcome, FileSelection, NewBillForm, DEFAULT_PCT, EXPENSE_TYPES,
    SUPPORTED_RECEIPT_EXTENSIONS, UNSUPPORTED_FILE_MESSAGE,
};
