//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that tells business-rule violations apart
//! from environment/runtime failures.

use serde::Serialize;

/// エラー種別の列挙体
///
/// すべての [`CommonError`](super::common_error::CommonError) はいずれか
/// 一つの種別に属します。
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::Domain;
/// assert_eq!(kind.as_str(), "Domain");
/// assert!(kind.is_domain());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// Domain: 業務ルール違反（不正なフィールド、通貨の不一致など）
    Domain,
    /// Infrastructure: 環境・実行時の障害（環境変数の欠落、I/O など）
    Infrastructure,
}

impl ErrorKind {
    /// 種別の表示名を取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::Infrastructure.as_str(), "Infrastructure");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Domain => "Domain",
            ErrorKind::Infrastructure => "Infrastructure",
        }
    }

    /// 業務ルール違反かどうか
    #[inline]
    pub const fn is_domain(&self) -> bool {
        matches!(self, ErrorKind::Domain)
    }

    /// 環境・実行時の障害かどうか
    ///
    /// 境界でログに残すべきエラーです。
    #[inline]
    pub const fn is_infrastructure(&self) -> bool {
        matches!(self, ErrorKind::Infrastructure)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
