/// 汎用APIクライアント
///
/// リモートストアAPIサーバーとの通信を行う汎用的なクライアント。
/// 読み取りの自動リトライは行わない（失敗はそのまま呼び出し側に返し、
/// 再取得の判断はUI層に委ねる）。
use crate::shared::config::environment::ApiConfig;
use crate::shared::errors::AppError;
use log::{debug, info, warn};
use reqwest::{multipart, Client, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

/// HTTPステータスコードを統一エラー型へ変換する
///
/// # 引数
/// * `status_code` - HTTPステータスコード
///
/// # 戻り値
/// ユーザー向けメッセージ "Erreur {code}" を保持する型付きエラー
pub fn status_error(status_code: u16) -> AppError {
    match status_code {
        404 => AppError::not_found("Erreur 404"),
        500 => AppError::server_error("Erreur 500"),
        _ => AppError::external_service(format!("Erreur {status_code}")),
    }
}

/// 汎用APIクライアント
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

impl ApiClient {
    /// 新しいAPIクライアントを作成
    pub fn new() -> Result<Self, AppError> {
        let config = ApiConfig::from_env();
        Self::new_with_config(config)
    }

    /// 設定を指定してAPIクライアントを作成
    pub fn new_with_config(config: ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::configuration(format!("HTTPクライアント初期化失敗: {e}")))?;

        Ok(Self { client, config })
    }

    /// GETリクエストを送信
    pub async fn get<T>(&self, endpoint: &str) -> Result<T, AppError>
    where
        T: DeserializeOwned,
    {
        info!("GETリクエスト送信: endpoint={endpoint}");

        let url = format!("{}{endpoint}", self.config.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::external_service(format!("APIサーバーへの接続に失敗しました: {e}")))?;

        self.parse_response(response, "GET", endpoint).await
    }

    /// PATCHリクエストを送信
    pub async fn patch<B, T>(&self, endpoint: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        info!("PATCHリクエスト送信: endpoint={endpoint}");

        let url = format!("{}{endpoint}", self.config.base_url);
        let response = self
            .client
            .patch(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::external_service(format!("APIサーバーへの接続に失敗しました: {e}")))?;

        self.parse_response(response, "PATCH", endpoint).await
    }

    /// マルチパートフォームをPOSTで送信（ファイルアップロード用）
    pub async fn post_multipart<T>(
        &self,
        endpoint: &str,
        form: multipart::Form,
    ) -> Result<T, AppError>
    where
        T: DeserializeOwned,
    {
        info!("マルチパートPOSTリクエスト送信: endpoint={endpoint}");

        let url = format!("{}{endpoint}", self.config.base_url);
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::external_service(format!("APIサーバーへの接続に失敗しました: {e}")))?;

        self.parse_response(response, "POST", endpoint).await
    }

    /// レスポンスを解析し、成功時はボディをデシリアライズする
    async fn parse_response<T>(
        &self,
        response: Response,
        method: &str,
        endpoint: &str,
    ) -> Result<T, AppError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();

        if status.is_success() {
            let result: T = response
                .json()
                .await
                .map_err(|e| AppError::external_service(format!("レスポンス解析エラー: {e}")))?;

            info!("{method}リクエスト成功: endpoint={endpoint}");
            return Ok(result);
        }

        // エラーレスポンス: ボディはログにのみ残し、型付きエラーへ変換する
        let status_code = status.as_u16();
        let response_text = response
            .text()
            .await
            .unwrap_or_else(|_| "レスポンス読み取り失敗".to_string());

        warn!("{method}リクエスト失敗: endpoint={endpoint}, status={status_code}");
        debug!("エラーレスポンスボディ: {response_text}");

        Err(status_error(status_code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::ErrorSeverity;

    #[test]
    fn test_status_error_not_found() {
        // 404はリソース未発見エラーになる
        let error = status_error(404);
        assert!(matches!(error, AppError::NotFound(_)));
        assert_eq!(error.user_message(), "Erreur 404");
    }

    #[test]
    fn test_status_error_server_error() {
        // 500はサーバーエラーになる
        let error = status_error(500);
        assert!(matches!(error, AppError::ServerError(_)));
        assert_eq!(error.user_message(), "Erreur 500");
        assert_eq!(error.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_status_error_other() {
        // その他のステータスは外部サービスエラーになる
        let error = status_error(418);
        assert!(matches!(error, AppError::ExternalService(_)));
        assert!(error.details().contains("Erreur 418"));
    }

    #[test]
    fn test_new_with_config() {
        let client = ApiClient::new_with_config(ApiConfig::default());
        assert!(client.is_ok());
    }
}
