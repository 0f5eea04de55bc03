use serde::Deserialize;

/// 領収書として受け付けるファイル拡張子（小文字で比較する）
pub const SUPPORTED_RECEIPT_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

/// 許可されていないファイル形式を選択したときのアラート文言
pub const UNSUPPORTED_FILE_MESSAGE: &str =
    "Seuls les fichiers aux formats .jpg/.jpeg/.png/.gif sont acceptés";

/// 経費カテゴリの一覧（表示層が所有する固定の7種）
pub const EXPENSE_TYPES: [&str; 7] = [
    "Transports",
    "Restaurants et bars",
    "Hôtel et logement",
    "Services en ligne",
    "IT et électronique",
    "Equipement et matériel",
    "Fournitures de bureau",
];

/// フォームでpctが未入力の場合に適用する既定値
pub const DEFAULT_PCT: i64 = 20;

/// 新規請求書フォームの入力値
///
/// UI層がフォーム要素の値を読み取って組み立てる。メールアドレスは
/// フォームには含まれず、セッションから補われる。
#[derive(Debug, Clone, Deserialize)]
pub struct NewBillForm {
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    pub amount: f64,
    pub date: String,
    pub vat: Option<String>,
    pub pct: Option<i64>,
    pub commentary: Option<String>,
}

/// ファイル選択イベントの内容
#[derive(Debug, Clone)]
pub struct FileSelection {
    /// 選択されたファイルの名前（ブラウザ相当のパス接頭辞を含む場合がある）
    pub file_name: String,
    /// ファイル内容
    pub content: Vec<u8>,
}

/// ファイル選択処理の結果としてUI層に渡すコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileChangeOutcome {
    /// 許可されていない形式。UI層はファイル入力を空に戻し、
    /// メッセージをブロッキングアラートとして表示する。
    Rejected { message: String },
    /// 受理された。アップロードの成否はフォームを壊さない。
    Accepted,
}

/// アップロード完了後に保持する領収書参照
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedReceipt {
    /// アップロード時に作成されたレコードのキー
    pub bill_id: String,
    /// 保存されたファイルのURL
    pub file_url: String,
    /// 選択された元のファイル名
    pub file_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_types_has_seven_categories() {
        assert_eq!(EXPENSE_TYPES.len(), 7);
        assert!(EXPENSE_TYPES.contains(&"Transports"));
        assert!(EXPENSE_TYPES.contains(&"Fournitures de bureau"));
    }

    #[test]
    fn test_new_bill_form_deserialization() {
        // フォーム値のJSON形式からの復元テスト（"type"キーを使う）
        let json = r#"{
            "type": "Transports",
            "name": "vol Paris Londres",
            "amount": 348,
            "date": "2023-04-04",
            "vat": "70",
            "pct": 20,
            "commentary": "séminaire"
        }"#;

        let form: NewBillForm = serde_json::from_str(json).unwrap();
        assert_eq!(form.expense_type, "Transports");
        assert_eq!(form.amount, 348.0);
        assert_eq!(form.pct, Some(20));
    }

    #[test]
    fn test_new_bill_form_optional_fields() {
        let json = r#"{
            "type": "Transports",
            "name": "test",
            "amount": 100,
            "date": "2023-04-04"
        }"#;

        let form: NewBillForm = serde_json::from_str(json).unwrap();
        assert_eq!(form.vat, None);
        assert_eq!(form.pct, None);
        assert_eq!(form.commentary, None);
    }
}
