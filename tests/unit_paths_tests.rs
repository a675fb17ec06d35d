//! # Path Translation Unit Tests / 路径转换单元测试
//!
//! Covers host detection, the Windows-path heuristic, the two translator
//! directions, and the real `wslpath`-style converter against stand-in tools.
//!
//! 覆盖宿主检测、Windows 路径启发式判断、两个转换方向以及针对替代工具的真实转换器。

mod common;

use common::{FakeConverter, native_translator, wsl_translator};
use unity_validate::core::error::ValidateError;
use unity_validate::infra::command::ConversionDirection;
use unity_validate::infra::environment::HostEnvironment;
use unity_validate::infra::paths::{PathTranslator, looks_like_windows_path};

#[cfg(test)]
mod environment_tests {
    use super::*;

    #[test]
    fn test_no_signals_means_native() {
        assert_eq!(HostEnvironment::detect_with(|_| false), HostEnvironment::Native);
    }

    #[test]
    fn test_distro_name_means_wsl() {
        let host = HostEnvironment::detect_with(|name| name == "WSL_DISTRO_NAME");
        assert_eq!(host, HostEnvironment::Wsl);
        assert!(host.is_wsl());
    }

    #[test]
    fn test_interop_alone_means_wsl() {
        let host = HostEnvironment::detect_with(|name| name == "WSL_INTEROP");
        assert_eq!(host, HostEnvironment::Wsl);
    }

    #[test]
    fn test_unrelated_variables_are_ignored() {
        let host = HostEnvironment::detect_with(|name| name == "WSLENV" || name == "PATH");
        assert_eq!(host, HostEnvironment::Native);
    }
}

#[cfg(test)]
mod windows_path_heuristic_tests {
    use super::*;

    #[test]
    fn test_drive_letter_with_backslash() {
        assert!(looks_like_windows_path(r"C:\Program Files\Unity\Editor\Unity.exe"));
    }

    #[test]
    fn test_drive_letter_with_forward_slash() {
        assert!(looks_like_windows_path("d:/Unity/Editor/Unity.exe"));
    }

    #[test]
    fn test_any_backslash_counts() {
        assert!(looks_like_windows_path(r"Editor\Unity.exe"));
        assert!(looks_like_windows_path(r"\\server\share\Unity.exe"));
    }

    #[test]
    fn test_unix_paths_are_not_windows_paths() {
        assert!(!looks_like_windows_path("/opt/unity/Editor/Unity"));
        assert!(!looks_like_windows_path("relative/path"));
        assert!(!looks_like_windows_path(""));
    }

    #[test]
    fn test_drive_without_separator_is_not_windows_path() {
        assert!(!looks_like_windows_path("C:"));
        assert!(!looks_like_windows_path("C:Unity"));
    }

    #[test]
    fn test_non_letter_drive_is_not_windows_path() {
        assert!(!looks_like_windows_path("1:/Unity"));
    }
}

#[cfg(test)]
mod translator_tests {
    use super::*;

    #[tokio::test]
    async fn test_to_unix_is_identity_on_native_host() {
        let translator = native_translator();
        for path in ["/opt/unity", r"C:\Unity\Unity.exe", "d:/x", "relative"] {
            assert_eq!(translator.to_unix(path).await.unwrap(), path);
        }
        assert_eq!(translator.converter().call_count(), 0);
    }

    #[tokio::test]
    async fn test_to_windows_is_identity_on_native_host() {
        let translator = native_translator();
        for path in ["/home/dev/game", r"C:\already\windows"] {
            assert_eq!(translator.to_windows(path).await.unwrap(), path);
        }
        assert_eq!(translator.converter().call_count(), 0);
    }

    #[tokio::test]
    async fn test_to_unix_converts_windows_paths_under_wsl() {
        let translator = wsl_translator();
        let converted = translator
            .to_unix(r"C:\Program Files\Unity\Unity.exe")
            .await
            .unwrap();

        assert_eq!(converted, "/mnt/c/Program Files/Unity/Unity.exe");
        assert_eq!(
            translator.converter().calls(),
            vec![(
                ConversionDirection::ToUnix,
                r"C:\Program Files\Unity\Unity.exe".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_to_unix_leaves_unix_paths_alone_under_wsl() {
        let translator = wsl_translator();
        let path = "/mnt/c/Program Files/Unity/Unity.exe";

        assert_eq!(translator.to_unix(path).await.unwrap(), path);
        assert_eq!(translator.converter().call_count(), 0);
    }

    #[tokio::test]
    async fn test_to_windows_always_converts_under_wsl() {
        let translator = wsl_translator();
        translator.to_windows("/home/dev/game").await.unwrap();
        translator.to_windows(r"C:\already\windows").await.unwrap();
        translator.to_windows("relative/results.xml").await.unwrap();

        let calls = translator.converter().calls();
        assert_eq!(calls.len(), 3);
        assert!(
            calls
                .iter()
                .all(|(direction, _)| *direction == ConversionDirection::ToWindows)
        );
    }

    #[tokio::test]
    async fn test_converter_failure_propagates_with_path() {
        let translator =
            PathTranslator::new(HostEnvironment::Wsl, FakeConverter::failing_on("/broken"));

        let err = translator.to_windows("/broken").await.unwrap_err();
        match err {
            ValidateError::PathConversion { path, reason, .. } => {
                assert_eq!(path, "/broken");
                assert!(reason.contains("fake converter refused"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

#[cfg(all(test, unix))]
mod wslpath_converter_tests {
    use unity_validate::core::error::ValidateError;
    use unity_validate::infra::command::{ConversionDirection, PathConverter, WslPathConverter};

    #[test]
    fn test_default_tool_is_wslpath() {
        assert_eq!(WslPathConverter::default().tool(), "wslpath");
    }

    #[tokio::test]
    async fn test_stdout_is_trimmed_and_flag_is_passed() {
        // `echo` stands in for wslpath: it prints its arguments plus a newline.
        let converter = WslPathConverter::new("echo");

        let to_windows = converter
            .convert(ConversionDirection::ToWindows, "/home/dev/game")
            .await
            .unwrap();
        assert_eq!(to_windows, "-w /home/dev/game");

        let to_unix = converter
            .convert(ConversionDirection::ToUnix, r"C:\game")
            .await
            .unwrap();
        assert_eq!(to_unix, r"-u C:\game");
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_a_conversion_error() {
        let converter = WslPathConverter::new("false");

        let err = converter
            .convert(ConversionDirection::ToWindows, "/home/dev/game")
            .await
            .unwrap_err();
        assert!(matches!(
            &err,
            ValidateError::PathConversion { path, .. } if path == "/home/dev/game"
        ));
        assert!(err.to_string().contains("/home/dev/game"));
        assert!(err.to_string().contains("via false:"));
    }

    #[tokio::test]
    async fn test_multi_line_stderr_is_reported_on_one_line() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tempfile::TempDir::new().unwrap();
        let tool = temp_dir.path().join("badconv");
        std::fs::write(
            &tool,
            "#!/bin/sh\necho '' >&2\necho 'badconv: line one' >&2\necho 'second line' >&2\nexit 1\n",
        )
        .unwrap();
        let mut permissions = std::fs::metadata(&tool).unwrap().permissions();
        permissions.set_mode(0o755);
        std::fs::set_permissions(&tool, permissions).unwrap();

        let tool = tool.to_string_lossy().into_owned();
        let err = WslPathConverter::new(tool.clone())
            .convert(ConversionDirection::ToUnix, r"C:\Unity.exe")
            .await
            .unwrap_err();

        match &err {
            ValidateError::PathConversion { tool: reported, reason, .. } => {
                assert_eq!(reported, &tool);
                assert_eq!(reason, "badconv: line one");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        let message = err.to_string();
        assert!(!message.contains('\n') && !message.contains('\r'));
        assert!(message.contains(&format!("via {tool}:")));
        assert!(!message.contains("second line"));
    }

    #[tokio::test]
    async fn test_missing_tool_is_a_conversion_error() {
        let converter = WslPathConverter::new("this_converter_does_not_exist_12345");

        let err = converter
            .convert(ConversionDirection::ToUnix, r"C:\x")
            .await
            .unwrap_err();
        assert!(matches!(err, ValidateError::PathConversion { .. }));
    }
}
