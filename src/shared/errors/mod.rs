use thiserror::Error;

use crate::features::auth::models::SessionError;

/// アプリケーション全体で使用される統一エラー型
#[derive(Debug, Error)]
pub enum AppError {
    /// バリデーション関連のエラー
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// リソースが見つからない場合のエラー（HTTP 404）
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// リモートストア側の内部エラー（HTTP 500）
    #[error("サーバーエラー: {0}")]
    ServerError(String),

    /// 外部サービス連携でのエラー（接続失敗、その他のHTTPエラー）
    #[error("外部サービスエラー: {0}")]
    ExternalService(String),

    /// セッション関連のエラー
    #[error("セッションエラー: {0}")]
    Session(String),

    /// 設定関連のエラー
    #[error("設定エラー: {0}")]
    Configuration(String),

    /// 並行処理関連のエラー（古いリクエストの破棄など）
    #[error("並行処理エラー: {0}")]
    Concurrency(String),

    /// 日付フォーマットのエラー（回復可能）
    #[error("日付フォーマットエラー: {0}")]
    DateFormat(String),
}

/// エラーの重要度を表す列挙型
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ErrorSeverity {
    /// 低重要度（ユーザー入力エラー、破棄された古いリクエストなど）
    Low,
    /// 中重要度（外部サービス一時的エラーなど）
    Medium,
    /// 高重要度（ストア側の内部エラーなど）
    High,
}

impl AppError {
    /// ユーザーに表示するためのメッセージを取得
    ///
    /// 製品のユーザー向け文言はフランス語（Billedの対象市場）。
    ///
    /// # 戻り値
    /// ユーザーに表示可能なエラーメッセージ
    pub fn user_message(&self) -> &str {
        match self {
            AppError::Validation(msg) => msg,
            AppError::NotFound(msg) => msg,
            AppError::ServerError(msg) => msg,
            AppError::ExternalService(_) => "Erreur de communication avec le serveur",
            AppError::Session(_) => "Utilisateur non connecté",
            AppError::Configuration(_) => "Erreur de configuration",
            AppError::Concurrency(_) => "Requête obsolète ignorée",
            AppError::DateFormat(_) => "Date invalide",
        }
    }

    /// エラーの詳細情報を取得
    ///
    /// # 戻り値
    /// エラーの詳細情報（ログ出力用）
    pub fn details(&self) -> String {
        format!("{self}")
    }

    /// エラーの重要度を取得
    ///
    /// # 戻り値
    /// エラーの重要度レベル
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Validation(_) => ErrorSeverity::Low,
            AppError::NotFound(_) => ErrorSeverity::Low,
            AppError::ServerError(_) => ErrorSeverity::High,
            AppError::ExternalService(_) => ErrorSeverity::Medium,
            AppError::Session(_) => ErrorSeverity::Low,
            AppError::Configuration(_) => ErrorSeverity::High,
            AppError::Concurrency(_) => ErrorSeverity::Low,
            AppError::DateFormat(_) => ErrorSeverity::Low,
        }
    }

    /// バリデーションエラーを作成するヘルパー関数
    pub fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation(message.into())
    }

    /// リソース未発見エラーを作成するヘルパー関数
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        AppError::NotFound(message.into())
    }

    /// サーバーエラーを作成するヘルパー関数
    pub fn server_error<S: Into<String>>(message: S) -> Self {
        AppError::ServerError(message.into())
    }

    /// 外部サービスエラーを作成するヘルパー関数
    pub fn external_service<S: Into<String>>(message: S) -> Self {
        AppError::ExternalService(message.into())
    }

    /// 設定エラーを作成するヘルパー関数
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// 並行処理エラーを作成するヘルパー関数
    pub fn concurrency<S: Into<String>>(message: S) -> Self {
        AppError::Concurrency(message.into())
    }

    /// 日付フォーマットエラーを作成するヘルパー関数
    pub fn date_format<S: Into<String>>(message: S) -> Self {
        AppError::DateFormat(message.into())
    }
}

/// AppErrorからStringへの変換（UI層での使用のため）
impl From<AppError> for String {
    fn from(error: AppError) -> Self {
        error.user_message().to_string()
    }
}

/// SessionErrorからAppErrorへの変換
impl From<SessionError> for AppError {
    fn from(error: SessionError) -> Self {
        AppError::Session(error.to_string())
    }
}

/// Result型のエイリアス（アプリケーション全体で使用）
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_severity() {
        // 各エラータイプの重要度をテスト
        assert_eq!(
            AppError::validation("テスト").severity(),
            ErrorSeverity::Low
        );
        assert_eq!(
            AppError::not_found("Erreur 404").severity(),
            ErrorSeverity::Low
        );
        assert_eq!(
            AppError::server_error("Erreur 500").severity(),
            ErrorSeverity::High
        );
        assert_eq!(
            AppError::external_service("接続失敗").severity(),
            ErrorSeverity::Medium
        );
        assert_eq!(
            AppError::concurrency("古いリクエスト").severity(),
            ErrorSeverity::Low
        );
    }

    #[test]
    fn test_user_message_passthrough() {
        // ストア読み取りエラーはメッセージをそのまま表示する
        let not_found = AppError::not_found("Erreur 404");
        assert_eq!(not_found.user_message(), "Erreur 404");

        let server_error = AppError::server_error("Erreur 500");
        assert_eq!(server_error.user_message(), "Erreur 500");

        let validation = AppError::validation("message exact");
        assert_eq!(validation.user_message(), "message exact");
    }

    #[test]
    fn test_user_message_generic() {
        // 非表示系エラーは汎用メッセージになる
        let session = AppError::Session("格納データなし".to_string());
        assert_eq!(session.user_message(), "Utilisateur non connecté");
    }

    #[test]
    fn test_details_contains_message() {
        let error = AppError::date_format("2004-04-04x");
        assert!(error.details().contains("2004-04-04x"));
    }

    #[test]
    fn test_string_conversion() {
        // String変換のテスト
        let error = AppError::not_found("Erreur 404");
        let error_string: String = error.into();
        assert_eq!(error_string, "Erreur 404");
    }

    #[test]
    fn test_session_error_conversion() {
        let error: AppError = SessionError::NotFound.into();
        assert!(matches!(error, AppError::Session(_)));
    }
}
