use serde::{Deserialize, Serialize};

/// 請求書データモデル（ストア上の生レコード）
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Bill {
    pub id: String,
    #[serde(default)]
    pub email: String,
    /// 経費カテゴリ
    #[serde(rename = "type")]
    pub bill_type: String,
    pub name: String,
    pub amount: f64,
    /// ISO形式の日付文字列（破損している可能性がある）
    pub date: String,
    pub vat: Option<String>,
    pub pct: Option<i64>,
    pub commentary: Option<String>,
    #[serde(rename = "fileUrl")]
    pub file_url: Option<String>,
    #[serde(rename = "fileName")]
    pub file_name: Option<String>,
    pub status: String,
}

/// 表示用の請求書モデル
///
/// `date`は表示用フォーマット済み（フォーマット失敗時は元の値のまま）、
/// `status`は正規ラベル。`date_fallback`でフォーマット失敗レコードを
/// 区別できる。
#[derive(Debug, Serialize, Clone)]
pub struct FormattedBill {
    pub id: String,
    pub email: String,
    #[serde(rename = "type")]
    pub bill_type: String,
    pub name: String,
    pub amount: f64,
    pub date: String,
    pub vat: Option<String>,
    pub pct: Option<i64>,
    pub commentary: Option<String>,
    #[serde(rename = "fileUrl")]
    pub file_url: Option<String>,
    #[serde(rename = "fileName")]
    pub file_name: Option<String>,
    pub status: String,
    /// 日付フォーマットに失敗し、元の文字列を表示している場合はtrue
    #[serde(skip)]
    pub date_fallback: bool,
}

/// 請求書作成・更新用ペイロード
///
/// フォーム送信時に組み立てられ、ストアの`update`に渡される。
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct BillPayload {
    pub email: String,
    #[serde(rename = "type")]
    pub bill_type: String,
    pub name: String,
    pub amount: f64,
    pub date: String,
    pub vat: Option<String>,
    pub pct: i64,
    pub commentary: Option<String>,
    #[serde(rename = "fileUrl")]
    pub file_url: Option<String>,
    #[serde(rename = "fileName")]
    pub file_name: Option<String>,
    pub status: String,
}

/// アップロード対象の領収書ファイル
#[derive(Debug, Clone)]
pub struct ReceiptFile {
    /// 元のファイル名（パスを含まない）
    pub file_name: String,
    /// ファイル内容
    pub content: Vec<u8>,
}

/// アップロード完了後にストアが返すファイル記述子
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredReceipt {
    /// 保存されたファイルのURL
    pub file_url: String,
    /// 作成されたレコードのキー（後続のupdateのセレクタ）
    pub key: String,
}

/// 領収書プレビュー表示用モデル
///
/// モーダル幅の半分の画像幅で中央表示する。URLがない場合は空の
/// プレビューとして扱う（例外にはしない）。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceiptPreview {
    #[serde(rename = "fileUrl")]
    pub file_url: Option<String>,
    #[serde(rename = "imageWidth")]
    pub image_width: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bill_deserialization() {
        // ストアのレコード形式からの復元テスト
        let json = r#"{
            "id": "47qAXb6fIm2zOKkLzMro",
            "email": "a@a",
            "type": "Hôtel et logement",
            "name": "encore",
            "amount": 400,
            "date": "2004-04-04",
            "vat": "80",
            "pct": 20,
            "commentary": "séminaire billed",
            "fileUrl": "https://test.storage.tld/facture-1.jpg",
            "fileName": "preview-facture-free-201801-pdf-1.jpg",
            "status": "pending"
        }"#;

        let bill: Bill = serde_json::from_str(json).unwrap();
        assert_eq!(bill.id, "47qAXb6fIm2zOKkLzMro");
        assert_eq!(bill.bill_type, "Hôtel et logement");
        assert_eq!(bill.amount, 400.0);
        assert_eq!(bill.status, "pending");
        assert_eq!(bill.pct, Some(20));
    }

    #[test]
    fn test_bill_deserialization_minimal() {
        // 任意フィールドなしのレコードも復元できる
        let json = r#"{
            "id": "BeKy5Mo4jkmdfPGYpTxZ",
            "type": "Transports",
            "name": "test1",
            "amount": 100,
            "date": "2001-01-01",
            "status": "refused"
        }"#;

        let bill: Bill = serde_json::from_str(json).unwrap();
        assert_eq!(bill.email, "");
        assert_eq!(bill.vat, None);
        assert_eq!(bill.file_url, None);
    }

    #[test]
    fn test_bill_payload_serialization() {
        // updateに渡すペイロードのキー名を確認（camelCaseと"type"）
        let payload = BillPayload {
            email: "e@e".to_string(),
            bill_type: "Transports".to_string(),
            name: "vol Paris".to_string(),
            amount: 348.0,
            date: "2023-04-04".to_string(),
            vat: Some("70".to_string()),
            pct: 20,
            commentary: None,
            file_url: Some("https://test.storage.tld/justificatif.png".to_string()),
            file_name: Some("justificatif.png".to_string()),
            status: "pending".to_string(),
        };

        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"type\":\"Transports\""));
        assert!(json.contains("\"fileUrl\""));
        assert!(json.contains("\"fileName\""));
        assert!(json.contains("\"status\":\"pending\""));
    }
}
