use crate::features::auth::session::Session;
use crate::features::bills::api_client::BillStore;
use crate::features::bills::models::{BillPayload, ReceiptFile};
use crate::features::navigation::{Navigator, RoutePath};
use crate::features::new_bill::models::{
    CapturedReceipt, FileChangeOutcome, FileSelection, NewBillForm, DEFAULT_PCT,
    SUPPORTED_RECEIPT_EXTENSIONS, UNSUPPORTED_FILE_MESSAGE,
};
use crate::shared::errors::AppError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// 新規請求書作成画面のコントローラー
///
/// 選択された領収書ファイルを検証して即時アップロードし、フォーム送信時に
/// 完全な請求書レコードを組み立てて永続化する。
pub struct NewBillController {
    session: Session,
    navigator: Arc<dyn Navigator>,
    store: Option<Arc<dyn BillStore>>,
    /// アップロード済み領収書の参照。最後に検証を通過したファイルのみ保持する。
    receipt: Mutex<Option<CapturedReceipt>>,
    /// ファイル選択の世代。古いアップロード結果の保持を防ぐ。
    selection_generation: AtomicU64,
}

impl NewBillController {
    /// 新しいコントローラーを作成する
    ///
    /// # 引数
    /// * `session` - セッションアクセサ
    /// * `navigator` - 画面遷移コラボレーター
    /// * `store` - 請求書ストア（単体テストではNone）
    pub fn new(
        session: Session,
        navigator: Arc<dyn Navigator>,
        store: Option<Arc<dyn BillStore>>,
    ) -> Self {
        Self {
            session,
            navigator,
            store,
            receipt: Mutex::new(None),
            selection_generation: AtomicU64::new(0),
        }
    }

    /// ファイル選択を検証し、受理された場合は領収書をアップロードする
    ///
    /// 許可されていない拡張子の場合はアップロードを発行せず、UI層に
    /// ブロッキングアラートとファイル入力のリセットを指示する。
    /// アップロード失敗はログに残すのみで、フォームは壊さない
    /// （ファイル参照は未設定のまま残る）。
    ///
    /// # 引数
    /// * `selection` - 選択されたファイルの名前と内容
    ///
    /// # 戻り値
    /// UI層に渡す処理結果コマンド
    pub async fn handle_change_file(&self, selection: FileSelection) -> FileChangeOutcome {
        let file_name = base_file_name(&selection.file_name);

        if let Err(e) = validate_receipt_file(&file_name) {
            log::warn!("許可されていないファイル形式のため受け付けません: file_name={file_name}");
            return FileChangeOutcome::Rejected {
                message: e.user_message().to_string(),
            };
        }

        let Some(store) = &self.store else {
            log::debug!("ストア未設定のためアップロードをスキップします");
            return FileChangeOutcome::Accepted;
        };

        let email = match self.session.current_user() {
            Ok(user) => user.email,
            Err(e) => {
                log::error!("ログインユーザーを取得できないためアップロードを中止します: {e}");
                return FileChangeOutcome::Accepted;
            }
        };

        let token = self.selection_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let file = ReceiptFile {
            file_name: file_name.clone(),
            content: selection.content,
        };

        match store.create(file, &email).await {
            Ok(stored) => {
                // アップロード中に新しいファイルが選択されていたら、この参照は保持しない
                if self.selection_generation.load(Ordering::SeqCst) == token {
                    *self.receipt.lock().unwrap() = Some(CapturedReceipt {
                        bill_id: stored.key,
                        file_url: stored.file_url,
                        file_name,
                    });
                } else {
                    log::debug!("新しいファイル選択があったため古いアップロード結果を破棄します");
                }
                FileChangeOutcome::Accepted
            }
            Err(e) => {
                log::error!("領収書のアップロードに失敗しました: file_name={file_name}, error={e}");
                FileChangeOutcome::Accepted
            }
        }
    }

    /// フォーム送信を処理する
    ///
    /// フォーム値・セッションのメールアドレス・アップロード済み領収書の参照
    /// から完全なペイロードを組み立て、永続化の完了を待ってから一覧画面へ
    /// 戻る。書き込み失敗は`update_bill`内で処理されるため送信自体は
    /// 失敗しない。
    ///
    /// # 引数
    /// * `form` - フォームの入力値
    pub async fn handle_submit(&self, form: NewBillForm) -> Result<(), AppError> {
        let user = self.session.current_user()?;
        let receipt = self.receipt.lock().unwrap().clone();

        let bill = BillPayload {
            email: user.email,
            bill_type: form.expense_type,
            name: form.name,
            amount: form.amount,
            date: form.date,
            vat: form.vat,
            pct: form.pct.unwrap_or(DEFAULT_PCT),
            commentary: form.commentary,
            file_url: receipt.as_ref().map(|r| r.file_url.clone()),
            file_name: receipt.as_ref().map(|r| r.file_name.clone()),
            status: "pending".to_string(),
        };

        // 永続化の完了を待ってから一覧画面へ戻る
        self.update_bill(&bill).await;
        self.navigator.on_navigate(RoutePath::Bills);

        Ok(())
    }

    /// 請求書レコードを更新する
    ///
    /// ストア未設定の場合は何もしない。領収書が未アップロードの間は
    /// 更新対象のレコードが存在しないため、更新は発行しない。
    /// 書き込み失敗はログに残すのみで、呼び出し側には伝播しない。
    pub async fn update_bill(&self, bill: &BillPayload) {
        let Some(store) = &self.store else {
            return;
        };

        let bill_id = self
            .receipt
            .lock()
            .unwrap()
            .as_ref()
            .map(|r| r.bill_id.clone());
        let Some(bill_id) = bill_id else {
            log::warn!("領収書が未アップロードのため請求書の更新をスキップします");
            return;
        };

        if let Err(e) = store.update(&bill_id, bill).await {
            log::error!("請求書の更新に失敗しました: bill_id={bill_id}, error={e}");
        }
    }

    /// 現在保持しているアップロード済み領収書の参照を取得する
    pub fn captured_receipt(&self) -> Option<CapturedReceipt> {
        self.receipt.lock().unwrap().clone()
    }
}

/// パス接頭辞（`C:\fakepath\` など）を取り除いたファイル名を返す
fn base_file_name(raw: &str) -> String {
    raw.rsplit(&['\\', '/'][..])
        .next()
        .unwrap_or(raw)
        .to_string()
}

/// 領収書ファイルの拡張子を検証する
///
/// 拡張子は大文字小文字を区別せずに許可リストと比較する。
fn validate_receipt_file(file_name: &str) -> Result<(), AppError> {
    let extension = std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    if SUPPORTED_RECEIPT_EXTENSIONS.contains(&extension.as_str()) {
        Ok(())
    } else {
        Err(AppError::validation(UNSUPPORTED_FILE_MESSAGE))
    }
}
