//! # Path Translation Module / 路径转换模块
//!
//! Moves path strings between the Unix namespace the orchestrator lives in and
//! the Windows namespace the Unity editor expects, but only when the host is
//! WSL. On a native host every call is the identity.
//!
//! 在编排器所在的 Unix 命名空间与 Unity 编辑器期望的 Windows 命名空间之间转换路径字符串，
//! 仅当宿主为 WSL 时才会转换。在原生宿主上每次调用都是恒等变换。

use crate::core::error::ValidateResult;
use crate::infra::command::{ConversionDirection, PathConverter};
use crate::infra::environment::HostEnvironment;

/// Returns `true` for strings that are recognizably Windows paths: a drive
/// letter followed by `:` and a separator (`C:\`, `d:/`), or anything that
/// contains a backslash.
///
/// 对于可识别为 Windows 路径的字符串返回 `true`：盘符后跟 `:` 和分隔符（`C:\`、`d:/`），
/// 或任何包含反斜杠的字符串。
pub fn looks_like_windows_path(path: &str) -> bool {
    let mut chars = path.chars();
    let has_drive_prefix = matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(drive), Some(':'), Some('\\' | '/')) if drive.is_ascii_alphabetic()
    );
    has_drive_prefix || path.contains('\\')
}

/// Namespace-aware path translator. Built once at startup from the detected
/// host and a converter.
pub struct PathTranslator<C> {
    host: HostEnvironment,
    converter: C,
}

impl<C: PathConverter> PathTranslator<C> {
    pub fn new(host: HostEnvironment, converter: C) -> Self {
        Self { host, converter }
    }

    pub fn converter(&self) -> &C {
        &self.converter
    }

    /// Brings a possibly-Windows path into the Unix namespace.
    ///
    /// Only converts under WSL, and only when the path looks like a Windows
    /// path; anything else is returned unchanged.
    pub async fn to_unix(&self, path: &str) -> ValidateResult<String> {
        if self.host.is_wsl() && looks_like_windows_path(path) {
            self.converter.convert(ConversionDirection::ToUnix, path).await
        } else {
            Ok(path.to_string())
        }
    }

    /// Expresses a path in the Windows namespace for the runner.
    ///
    /// Under WSL this always calls the converter, with no lexical pre-check:
    /// outbound paths are built natively and assumed convertible.
    ///
    /// 在 WSL 下总是调用转换器，不做词法预检查。
    pub async fn to_windows(&self, path: &str) -> ValidateResult<String> {
        if self.host.is_wsl() {
            self.converter.convert(ConversionDirection::ToWindows, path).await
        } else {
            Ok(path.to_string())
        }
    }
}
