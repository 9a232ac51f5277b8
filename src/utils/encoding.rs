//! Text decoding for templates and dictionaries.
//!
//! Handles:
//! - BOM detection (UTF-8, UTF-16 LE/BE), with the BOM stripped
//! - UTF-8 fast-path with strict validation
//! - Fallback encoding detection using chardetng

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use std::io;
use std::path::Path;

/// Read a text file, returning its content and the encoding used.
///
/// Only I/O failures are errors; undecodable bytes become U+FFFD.
pub fn read_text(path: &Path) -> io::Result<(String, &'static str)> {
    let bytes = std::fs::read(path)?;
    Ok(decode_text(&bytes))
}

/// Decode raw bytes with BOM sniffing and a chardetng fallback.
pub fn decode_text(bytes: &[u8]) -> (String, &'static str) {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (decoded, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return (decoded.into_owned(), label(encoding));
    }

    // Most translation files are UTF-8.
    if let Ok(text) = std::str::from_utf8(bytes) {
        return (text.to_string(), "utf-8");
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    tracing::debug!("non-UTF-8 input, decoding as {}", encoding.name());
    let (decoded, _, _) = encoding.decode(bytes);
    (decoded.into_owned(), label(encoding))
}

fn label(encoding: &'static Encoding) -> &'static str {
    if encoding == UTF_8 {
        "utf-8"
    } else if encoding == UTF_16LE {
        "utf-16-le"
    } else if encoding == UTF_16BE {
        "utf-16-be"
    } else {
        encoding.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all("greeting = Olá".as_bytes()).unwrap();
        file.flush().unwrap();

        let (content, encoding) = read_text(file.path()).unwrap();
        assert_eq!(content, "greeting = Olá");
        assert_eq!(encoding, "utf-8");
    }

    #[test]
    fn test_utf8_bom_is_stripped() {
        let mut bytes = vec![0xef, 0xbb, 0xbf];
        bytes.extend_from_slice(b"a = 1");
        let (content, encoding) = decode_text(&bytes);
        assert_eq!(content, "a = 1");
        assert_eq!(encoding, "utf-8");
    }

    #[test]
    fn test_utf16_le_bom() {
        let mut bytes = vec![0xff, 0xfe];
        for unit in "k = v".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        let (content, encoding) = decode_text(&bytes);
        assert_eq!(content, "k = v");
        assert_eq!(encoding, "utf-16-le");
    }

    #[test]
    fn test_invalid_utf8_falls_back_to_detection() {
        // "olá" in windows-1252
        let (content, _) = decode_text(&[b'o', b'l', 0xe1]);
        assert!(content.starts_with("ol"));
        assert_eq!(content.chars().count(), 3);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_text(Path::new("/definitely/not/here.lang")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
