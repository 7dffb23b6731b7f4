use char_freq::{Error, TextLoader};
use test_utils::constants::{HANGUL_SAMPLE, INVALID_CP949_BYTES};
use test_utils::Workspace;

#[cfg(test)]
mod text_loader_tests {
    use super::*;

    #[test]
    fn test_default_label_resolves_to_korean_code_page() {
        let loader = TextLoader::new("windows-949").unwrap();
        assert_eq!(loader.encoding_name(), "EUC-KR");
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let result = TextLoader::new("cp-does-not-exist");
        assert!(matches!(result, Err(Error::UnsupportedEncodingError(label)) if label == "cp-does-not-exist"));
    }

    #[test]
    fn test_validate_missing_file() {
        let workspace = Workspace::new();
        let path = workspace.path("absent.txt");

        let result = TextLoader::validate(&path);
        assert!(matches!(result, Err(Error::MissingInputError(p)) if p == path));
    }

    #[test]
    fn test_validate_rejects_directory() {
        let workspace = Workspace::new();

        let result = TextLoader::validate(workspace.root());
        assert!(matches!(result, Err(Error::MissingInputError(_))));
    }

    #[test]
    fn test_load_cp949_file() {
        let workspace = Workspace::new();
        let path = workspace.write_encoded("test.txt", HANGUL_SAMPLE, "windows-949");

        let loader = TextLoader::new("windows-949").unwrap();
        assert_eq!(loader.load(&path).unwrap(), HANGUL_SAMPLE);
    }

    #[test]
    fn test_load_utf8_file_with_utf8_label() {
        let workspace = Workspace::new();
        let path = workspace.write_encoded("test.txt", HANGUL_SAMPLE, "utf-8");

        let loader = TextLoader::new("utf-8").unwrap();
        assert_eq!(loader.load(&path).unwrap(), HANGUL_SAMPLE);
    }

    #[test]
    fn test_load_invalid_bytes_fails_to_decode() {
        let workspace = Workspace::new();
        let path = workspace.write_bytes("test.txt", INVALID_CP949_BYTES);

        let loader = TextLoader::new("windows-949").unwrap();
        let result = loader.load(&path);

        assert!(matches!(result, Err(Error::DecodeError { encoding, .. }) if encoding == "EUC-KR"));
    }

    #[test]
    fn test_utf8_text_read_as_cp949_fails_to_decode() {
        let workspace = Workspace::new();
        // "가" in UTF-8 is EA B0 80; 0x80 is not a valid CP949 trail byte
        let path = workspace.write_encoded("test.txt", "가", "utf-8");

        let loader = TextLoader::new("windows-949").unwrap();
        assert!(matches!(loader.load(&path), Err(Error::DecodeError { .. })));
    }

    #[test]
    fn test_load_empty_file() {
        let workspace = Workspace::new();
        let path = workspace.write_bytes("test.txt", b"");

        let loader = TextLoader::new("windows-949").unwrap();
        assert_eq!(loader.load(&path).unwrap(), "");
    }
}
