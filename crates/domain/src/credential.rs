//! # 認証情報
//!
//! HTTP Basic 認証で照合される、プロセス起動時に固定される
//! ユーザー名・パスワードの組を表す。
//!
//! ## 設計方針
//!
//! - グローバル可変状態を持たず、起動時に [`CredentialSet`] として注入する
//! - 比較は `subtle` による定数時間比較（タイミングサイドチャネル対策）。
//!   平文保持のままである点は元サービスの観測可能な挙動を維持するための
//!   意図的な選択であり、ハッシュ化は行わない
//! - 有効期限・永続化・ロックアウトは扱わない

use subtle::{Choice, ConstantTimeEq};

/// 認証情報（ユーザー名とパスワードの組）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
   username: String,
   password: String,
}

impl Credential {
   pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
      Self {
         username: username.into(),
         password: password.into(),
      }
   }

   pub fn username(&self) -> &str {
      &self.username
   }

   /// 与えられた組がこの認証情報と一致するか
   ///
   /// ユーザー名とパスワードの両方を定数時間で比較し、結果を AND で結合する。
   fn matches(&self, username: &str, password: &str) -> Choice {
      self.username.as_bytes().ct_eq(username.as_bytes())
         & self.password.as_bytes().ct_eq(password.as_bytes())
   }
}

/// 起動時に注入される認証情報の集合
///
/// 元サービスは 2 組の固定認証情報を持つが、この型は任意の組数を受け付ける。
#[derive(Debug, Clone, Default)]
pub struct CredentialSet {
   credentials: Vec<Credential>,
}

impl CredentialSet {
   pub fn new(credentials: Vec<Credential>) -> Self {
      Self { credentials }
   }

   /// 与えられた組がいずれかの認証情報と完全一致するか検証する
   ///
   /// 早期 return せず全組を評価し、一致結果を OR で畳み込む。
   pub fn verify(&self, username: &str, password: &str) -> bool {
      let mut matched = Choice::from(0u8);
      for credential in &self.credentials {
         matched |= credential.matches(username, password);
      }
      matched.into()
   }

   pub fn len(&self) -> usize {
      self.credentials.len()
   }

   pub fn is_empty(&self) -> bool {
      self.credentials.is_empty()
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   fn default_set() -> CredentialSet {
      CredentialSet::new(vec![
         Credential::new("Mona", "42"),
         Credential::new("Liza", "315"),
      ])
   }

   #[test]
   fn test_1組目の認証情報で検証に成功する() {
      assert!(default_set().verify("Mona", "42"));
   }

   #[test]
   fn test_2組目の認証情報で検証に成功する() {
      assert!(default_set().verify("Liza", "315"));
   }

   #[test]
   fn test_パスワードが異なると検証に失敗する() {
      assert!(!default_set().verify("Mona", "315"));
   }

   #[test]
   fn test_未知のユーザー名は検証に失敗する() {
      assert!(!default_set().verify("Eve", "42"));
   }

   #[test]
   fn test_空の組は検証に失敗する() {
      assert!(!default_set().verify("", ""));
   }

   #[test]
   fn test_空の集合は常に検証に失敗する() {
      let set = CredentialSet::default();
      assert!(set.is_empty());
      assert!(!set.verify("Mona", "42"));
   }

   #[test]
   fn test_lenは組数を返す() {
      assert_eq!(default_set().len(), 2);
   }
}
