use crate::features::auth::session::Session;
use crate::features::bills::api_client::BillStore;
use crate::features::bills::format::prepare_bills;
use crate::features::bills::models::{FormattedBill, ReceiptPreview};
use crate::features::navigation::{Navigator, RoutePath};
use crate::shared::errors::{AppError, ErrorSeverity};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// 請求書一覧画面のコントローラー
///
/// ログイン中従業員の請求書を新しい順に取得・整形し、画面上の2つの操作
/// （新規作成画面への遷移、領収書プレビュー）を仲介する。
pub struct BillsController {
    session: Session,
    navigator: Arc<dyn Navigator>,
    store: Option<Arc<dyn BillStore>>,
    /// 一覧取得のリクエスト世代。古いレスポンスの描画を防ぐ。
    request_generation: AtomicU64,
}

impl BillsController {
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
            request_generation: AtomicU64::new(0),
        }
    }

    /// 請求書一覧を取得し、表示用に整形して返す
    ///
    /// レコードごとの日付フォーマット失敗は回復可能（元の値のまま表示）。
    /// ストア自体の読み取り失敗は型付きエラーとして呼び出し側へ伝播し、
    /// UI層が全画面のエラーメッセージとして描画する。自動リトライはしない。
    ///
    /// # 戻り値
    /// 日付降順（同一日付はストアの元の順序）の表示用請求書列
    pub async fn load_bills(&self) -> Result<Vec<FormattedBill>, AppError> {
        let Some(store) = &self.store else {
            log::debug!("ストア未設定のため空の一覧を返します");
            return Ok(Vec::new());
        };

        if let Ok(user) = self.session.current_user() {
            log::debug!("請求書一覧を取得します: email={}", user.email);
        }

        let token = self.request_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let result = store.list().await;

        // 取得中に新しいリクエストが開始されていたら、この結果は描画させない
        if self.request_generation.load(Ordering::SeqCst) != token {
            log::debug!("新しいリクエストが開始されたため古い結果を破棄します: token={token}");
            return Err(AppError::concurrency("古い一覧取得結果を破棄しました"));
        }

        match result {
            Ok(bills) => {
                log::info!("請求書一覧取得成功: count={}", bills.len());
                Ok(prepare_bills(bills))
            }
            Err(e) => {
                match e.severity() {
                    ErrorSeverity::High => log::error!("請求書一覧の取得に失敗しました: {e}"),
                    _ => log::warn!("請求書一覧の取得に失敗しました: {e}"),
                }
                Err(e)
            }
        }
    }

    /// 新規請求書作成画面へ遷移する
    pub fn handle_click_new_bill(&self) {
        self.navigator.on_navigate(RoutePath::NewBill);
    }

    /// 領収書プレビューを組み立てる
    ///
    /// # 引数
    /// * `bill_url` - アイコン要素が保持する領収書ファイルのURL属性
    /// * `modal_width` - 表示先モーダルの幅
    ///
    /// # 戻り値
    /// モーダル幅の半分の画像幅を持つプレビューモデル。URLがない場合は
    /// 空のプレビュー（エラーにはしない）。
    pub fn handle_click_icon_eye(&self, bill_url: Option<&str>, modal_width: f64) -> ReceiptPreview {
        let image_width = (modal_width * 0.5).floor() as u32;

        ReceiptPreview {
            file_url: bill_url.map(str::to_string),
            image_width,
        }
    }
}
