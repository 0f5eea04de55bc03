use serde::{Deserialize, Serialize};

/// ログイン中ユーザーを表す構造体
///
/// セッションストレージにJSON形式（`{"type": ..., "email": ...}`）で
/// 保存される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// ユーザー種別（"Employee" または "Admin"）
    #[serde(rename = "type")]
    pub user_type: String,
    /// メールアドレス
    #[serde(default)]
    pub email: String,
}

/// セッションエラーの種類
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// ログインユーザーが保存されていない
    #[error("ログインユーザーが見つかりません")]
    NotFound,

    /// 保存されたユーザー情報の解析エラー
    #[error("ユーザー情報の解析に失敗しました: {0}")]
    Parse(String),

    /// ユーザー情報のシリアライズエラー
    #[error("ユーザー情報のシリアライズに失敗しました: {0}")]
    Serialize(String),
}
