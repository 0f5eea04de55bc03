use crate::features::auth::models::{SessionError, User};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// セッションストレージ内でユーザー情報を保持するキー
pub const USER_STORAGE_KEY: &str = "user";

/// キー・バリュー型セッションストレージの抽象
///
/// UI層が実際の保存先（ブラウザ相当のローカルストレージなど）を提供する。
pub trait SessionStorage: Send + Sync {
    /// 指定キーの値を取得する
    fn get_item(&self, key: &str) -> Option<String>;

    /// 指定キーに値を保存する
    fn set_item(&self, key: &str, value: String);

    /// 指定キーの値を削除する
    fn remove_item(&self, key: &str);
}

/// メモリ上のセッションストレージ実装
///
/// デスクトップ実行およびテストで使用する。
#[derive(Default)]
pub struct MemorySessionStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().unwrap().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: String) {
        self.items.lock().unwrap().insert(key.to_string(), value);
    }

    fn remove_item(&self, key: &str) {
        self.items.lock().unwrap().remove(key);
    }
}

/// セッションアクセサ
///
/// コントローラーが周囲の状態（グローバルなストレージ）へ直接手を伸ばさない
/// よう、構築時に明示的に渡される。ログインユーザーの読み取りは
/// `current_user` の一箇所に集約する。
#[derive(Clone)]
pub struct Session {
    storage: Arc<dyn SessionStorage>,
}

impl Session {
    /// 新しいセッションアクセサを作成する
    ///
    /// # 引数
    /// * `storage` - キー・バリュー型セッションストレージ
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// ログイン中ユーザーを取得する
    ///
    /// # 戻り値
    /// ログイン中ユーザー、保存されていない場合はエラー
    pub fn current_user(&self) -> Result<User, SessionError> {
        let raw = self
            .storage
            .get_item(USER_STORAGE_KEY)
            .ok_or(SessionError::NotFound)?;

        serde_json::from_str(&raw).map_err(|e| SessionError::Parse(e.to_string()))
    }

    /// ログインユーザーを保存する
    ///
    /// # 引数
    /// * `user` - 保存するユーザー情報
    pub fn store_user(&self, user: &User) -> Result<(), SessionError> {
        let json = serde_json::to_string(user).map_err(|e| SessionError::Serialize(e.to_string()))?;
        self.storage.set_item(USER_STORAGE_KEY, json);

        log::debug!("ログインユーザーを保存しました: email={}", user.email);
        Ok(())
    }

    /// セッションを破棄する
    pub fn clear(&self) {
        self.storage.remove_item(USER_STORAGE_KEY);
        log::info!("セッションを破棄しました");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_session() -> Session {
        Session::new(Arc::new(MemorySessionStorage::new()))
    }

    #[test]
    fn test_current_user_not_found() {
        // 未ログイン状態ではNotFoundエラー
        let session = setup_session();
        let result = session.current_user();

        assert!(matches!(result, Err(SessionError::NotFound)));
    }

    #[test]
    fn test_store_and_read_user() {
        let session = setup_session();
        let user = User {
            user_type: "Employee".to_string(),
            email: "employee@test.tld".to_string(),
        };

        session.store_user(&user).unwrap();
        let read_back = session.current_user().unwrap();

        assert_eq!(read_back, user);
    }

    #[test]
    fn test_current_user_parse_error() {
        // 壊れたJSONは解析エラーになる
        let storage = Arc::new(MemorySessionStorage::new());
        storage.set_item(USER_STORAGE_KEY, "壊れたデータ".to_string());

        let session = Session::new(storage);
        let result = session.current_user();

        assert!(matches!(result, Err(SessionError::Parse(_))));
    }

    #[test]
    fn test_clear() {
        let session = setup_session();
        session
            .store_user(&User {
                user_type: "Employee".to_string(),
                email: "e@e".to_string(),
            })
            .unwrap();

        session.clear();

        assert!(matches!(
            session.current_user(),
            Err(SessionError::NotFound)
        ));
    }
}
