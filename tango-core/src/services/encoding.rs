use std::fs;
use std::path::Path;

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use log::warn;

use crate::Result;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding: String,
    /// Malformed sequences were replaced with U+FFFD.
    pub had_errors: bool,
}

pub fn decode(bytes: &[u8]) -> DecodedText {
    // BOM UTF-8 (EF BB BF)
    let bytes = bytes.strip_prefix(&UTF8_BOM[..]).unwrap_or(bytes);

    let encoding: &'static Encoding = if std::str::from_utf8(bytes).is_ok() {
        UTF_8
    } else {
        // Not UTF-8: Shift_JIS / EUC-JP subtitles are the usual suspects
        let mut detector = EncodingDetector::new();
        detector.feed(bytes, true);
        detector.guess(None, true)
    };

    let (text, used, had_errors) = encoding.decode(bytes);

    DecodedText {
        text: text.into_owned(),
        encoding: used.name().to_lowercase(),
        had_errors,
    }
}

pub fn read_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    let decoded = decode(&bytes);

    if decoded.encoding != "utf-8" {
        warn!("{} decoded as {}", path.display(), decoded.encoding);
    }
    if decoded.had_errors {
        warn!("{} contains undecodable bytes", path.display());
    }

    Ok(decoded.text)
}
