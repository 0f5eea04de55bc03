/// 共有モジュール
///
/// アプリケーション全体で使用される共通機能（エラー型、設定、APIクライアント）
/// を提供します。
pub mod api_client;
pub mod config;
pub mod errors;
