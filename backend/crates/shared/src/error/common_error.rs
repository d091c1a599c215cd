//! Common Error - Root of the library's error hierarchy
//!
//! Defines the [`CommonError`] enum and [`CommonResult<T>`] type alias.

use std::borrow::Cow;
use std::error::Error;

use super::domain_error::DomainError;
use super::infrastructure_error::InfrastructureError;
use super::kind::ErrorKind;

/// 共通ライブラリのルートエラー型
///
/// ライブラリ由来のすべてのエラーを扱う場合は `CommonError` を受け取ります。
/// 業務ルール違反と環境障害を区別したい場合は、バリアントまたは
/// [`CommonError::kind`] でマッチします。
///
/// 両方の子エラーは `From` を実装しているため、`?` で自動的に変換されます。
///
/// ## Examples
/// ```rust
/// use kernel::{CommonError, CommonResult, DomainError, ErrorKind};
///
/// fn check(symbol: &str) -> CommonResult<()> {
///     if symbol.trim().is_empty() {
///         return Err(DomainError::new("Asset symbol must be non-empty").into());
///     }
///     Ok(())
/// }
///
/// let err = check(" ").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Domain);
/// ```
#[derive(Debug, thiserror::Error)]
pub enum CommonError {
    /// 業務ルール違反
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// 環境・実行時の障害
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

/// 共通 Result 型エイリアス
///
/// `Result<T, CommonError>` の省略形です。
pub type CommonResult<T> = Result<T, CommonError>;

impl CommonError {
    // ========================================================================
    // Convenience constructors
    // ========================================================================

    /// ドメイン層のエラーを生成
    #[inline]
    pub fn domain(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Domain(DomainError::new(message))
    }

    /// インフラ層のエラーを生成
    #[inline]
    pub fn infrastructure(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Infrastructure(InfrastructureError::new(message))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// エラー種別を取得
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self {
            CommonError::Domain(_) => ErrorKind::Domain,
            CommonError::Infrastructure(_) => ErrorKind::Infrastructure,
        }
    }

    /// メッセージを取得
    #[inline]
    pub fn message(&self) -> &str {
        match self {
            CommonError::Domain(e) => e.message(),
            CommonError::Infrastructure(e) => e.message(),
        }
    }

    #[inline]
    pub fn is_domain(&self) -> bool {
        self.kind().is_domain()
    }

    #[inline]
    pub fn is_infrastructure(&self) -> bool {
        self.kind().is_infrastructure()
    }
}

// ============================================================================
// Result extension traits
// ============================================================================

/// 外部エラーを [`InfrastructureError`] に変換する拡張トレイト
pub trait ResultExt<T, E> {
    /// 指定メッセージ付きの `InfrastructureError` でラップする
    fn map_infra_err(
        self,
        message: impl Into<Cow<'static, str>>,
    ) -> Result<T, InfrastructureError>
    where
        E: Error + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn map_infra_err(
        self,
        message: impl Into<Cow<'static, str>>,
    ) -> Result<T, InfrastructureError>
    where
        E: Error + Send + Sync + 'static,
    {
        self.map_err(|e| InfrastructureError::new(message).with_source(e))
    }
}

/// 値の欠落を [`DomainError`] に変換する拡張トレイト
pub trait OptionExt<T> {
    /// `None` の場合、指定メッセージの `DomainError` を返す
    fn ok_or_domain_err(self, message: impl Into<Cow<'static, str>>) -> Result<T, DomainError>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_domain_err(self, message: impl Into<Cow<'static, str>>) -> Result<T, DomainError> {
        self.ok_or_else(|| DomainError::new(message))
    }
}
