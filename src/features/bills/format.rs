use crate::features::bills::models::{Bill, FormattedBill};
use crate::shared::errors::AppError;
use chrono::{Datelike, NaiveDate};

/// フランス語の月略称（Intl短縮形の先頭3文字。juin/juilletはいずれもJui）
const FRENCH_MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

/// ISO形式の日付文字列を表示用フォーマットへ変換する
///
/// # 引数
/// * `raw` - `YYYY-MM-DD`形式の日付文字列
///
/// # 戻り値
/// `"4 Avr. 04"` 形式の表示用文字列、または解析できない場合はエラー
pub fn format_date(raw: &str) -> Result<String, AppError> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| AppError::date_format(format!("日付を解析できません: {raw}: {e}")))?;

    let month = FRENCH_MONTH_ABBREVIATIONS[date.month0() as usize];
    Ok(format!(
        "{} {}. {:02}",
        date.day(),
        month,
        date.year() % 100
    ))
}

/// 生のステータス値を正規ラベルへ変換する
///
/// 正規値以外はラベル変換せず、そのまま表示する（クラッシュさせない）。
pub fn format_status(raw: &str) -> String {
    match raw {
        "pending" => "En attente".to_string(),
        "accepted" => "Accepté".to_string(),
        "refused" => "Refused".to_string(),
        other => other.to_string(),
    }
}

/// 生レコードを表示用モデルへ変換する全域関数
///
/// 日付フォーマットに失敗してもレコードは捨てず、元の日付文字列のまま
/// `date_fallback`を立てて返す。失敗は警告ログに残す。
pub fn format_bill(bill: Bill) -> FormattedBill {
    let (date, date_fallback) = match format_date(&bill.date) {
        Ok(formatted) => (formatted, false),
        Err(e) => {
            // 破損データはここで回復する: ログを残し、未フォーマットの日付を表示する
            log::warn!(
                "日付のフォーマットに失敗したため元の値を表示します: id={}, date={}, error={e}",
                bill.id,
                bill.date
            );
            (bill.date.clone(), true)
        }
    };

    FormattedBill {
        id: bill.id,
        email: bill.email,
        bill_type: bill.bill_type,
        name: bill.name,
        amount: bill.amount,
        date,
        vat: bill.vat,
        pct: bill.pct,
        commentary: bill.commentary,
        file_url: bill.file_url,
        file_name: bill.file_name,
        status: format_status(&bill.status),
        date_fallback,
    }
}

/// 生レコード列を表示順（日付降順）の表示用モデル列へ変換する
///
/// ソートは安定で、同一日付のレコードはストアの元の順序を保つ。
/// ソートキーは生の日付文字列（ISO形式は辞書順が時系列順に一致する）。
pub fn prepare_bills(mut bills: Vec<Bill>) -> Vec<FormattedBill> {
    bills.sort_by(|a, b| b.date.cmp(&a.date));
    bills.into_iter().map(format_bill).collect()
}
