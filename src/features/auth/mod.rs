/// 認証・セッション機能モジュール
///
/// ログイン中ユーザーの読み取りを提供します。認証フロー自体（ログイン画面、
/// トークン発行）はこのクレートの対象外で、セッションストレージに保存された
/// ユーザー情報へのアクセサのみを持ちます。
pub mod models;
pub mod session;

pub use models::{SessionError, User};
pub use session::{MemorySessionStorage, Session, SessionStorage, USER_STORAGE_KEY};
