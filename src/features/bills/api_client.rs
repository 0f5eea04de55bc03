// リモートストアAPIサーバーとの通信を行うクライアント

use crate::features::bills::models::{Bill, BillPayload, ReceiptFile, StoredReceipt};
use crate::shared::api_client::ApiClient;
use crate::shared::config::environment::ApiConfig;
use crate::shared::errors::AppError;
use async_trait::async_trait;
use log::info;
use reqwest::multipart;
use serde::Deserialize;

/// 請求書レコードストアの抽象
///
/// コントローラーはこの契約だけに依存する。実体はネットワーク越しの
/// リモートストア（`ApiBillStore`）、テストではインメモリのフェイク。
#[async_trait]
pub trait BillStore: Send + Sync {
    /// 請求書レコードの一覧を取得する
    async fn list(&self) -> Result<Vec<Bill>, AppError>;

    /// 領収書ファイルをアップロードし、レコードの器を作成する
    async fn create(&self, file: ReceiptFile, email: &str) -> Result<StoredReceipt, AppError>;

    /// 既存レコードを更新する
    async fn update(&self, bill_id: &str, bill: &BillPayload) -> Result<Bill, AppError>;
}

/// APIサーバーからの請求書一覧取得レスポンス
#[derive(Debug, Deserialize)]
struct GetBillsResponse {
    success: bool,
    bills: Vec<Bill>,
    count: usize,
}

/// APIサーバーからの領収書アップロードレスポンス
#[derive(Debug, Deserialize)]
struct UploadReceiptResponse {
    success: bool,
    #[serde(rename = "fileUrl")]
    file_url: String,
    key: String,
}

/// APIサーバーからの請求書更新レスポンス
#[derive(Debug, Deserialize)]
struct UpdateBillResponse {
    success: bool,
    bill: Bill,
}

/// リモートストアAPIサーバーを使うBillStore実装
pub struct ApiBillStore {
    client: ApiClient,
}

impl ApiBillStore {
    /// 環境設定からストアクライアントを作成する
    pub fn new() -> Result<Self, AppError> {
        Ok(Self {
            client: ApiClient::new()?,
        })
    }

    /// 設定を指定してストアクライアントを作成する
    pub fn new_with_config(config: ApiConfig) -> Result<Self, AppError> {
        Ok(Self {
            client: ApiClient::new_with_config(config)?,
        })
    }
}

#[async_trait]
impl BillStore for ApiBillStore {
    async fn list(&self) -> Result<Vec<Bill>, AppError> {
        let response: GetBillsResponse = self.client.get("/api/v1/bills").await?;

        info!("請求書一覧取得成功: count={}", response.count);
        Ok(response.bills)
    }

    async fn create(&self, file: ReceiptFile, email: &str) -> Result<StoredReceipt, AppError> {
        info!(
            "領収書アップロード開始: file_name={}, size={}bytes",
            file.file_name,
            file.content.len()
        );

        // マルチパートフォームデータを構築（ファイル + 所有者のメールアドレス）
        let form = multipart::Form::new()
            .part(
                "file",
                multipart::Part::bytes(file.content)
                    .file_name(file.file_name.clone())
                    .mime_str(&get_content_type(&file.file_name))
                    .map_err(|e| AppError::validation(format!("MIMEタイプ設定エラー: {e}")))?,
            )
            .text("email", email.to_string());

        let response: UploadReceiptResponse =
            self.client.post_multipart("/api/v1/bills", form).await?;

        info!(
            "領収書アップロード成功: key={}, url={}",
            response.key, response.file_url
        );

        Ok(StoredReceipt {
            file_url: response.file_url,
            key: response.key,
        })
    }

    async fn update(&self, bill_id: &str, bill: &BillPayload) -> Result<Bill, AppError> {
        let endpoint = format!("/api/v1/bills/{bill_id}");
        let response: UpdateBillResponse = self.client.patch(&endpoint, bill).await?;

        info!("請求書更新成功: bill_id={bill_id}");
        Ok(response.bill)
    }
}

/// ファイル名からContent-Typeを取得する
fn get_content_type(filename: &str) -> String {
    let extension = std::path::Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        _ => "application/octet-stream",
    }
    .to_string()
}
