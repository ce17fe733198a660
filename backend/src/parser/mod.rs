//! CSV loader with encoding and delimiter auto-detection.
//!
//! Reads the medication file once into a [`Dataset`], keeping column names
//! and row order exactly as stored. Nothing here knows about the medication
//! schema.

use std::path::Path;

use crate::error::{LoadError, LoadResult};
use crate::models::Dataset;

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> String {
    let result = chardet::detect(bytes);
    let charset = result.0;

    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" | "utf-8-sig" | "" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to string using the specified encoding.
///
/// UTF-8 input that turns out to be invalid falls back to Windows-1252,
/// which maps every byte.
pub fn decode_content(bytes: &[u8], encoding: &str) -> LoadResult<String> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);

    let decoded = match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" | "ascii" => match std::str::from_utf8(bytes) {
            Ok(s) => s.to_string(),
            Err(_) => encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned(),
        },
        "iso-8859-1" | "latin-1" | "latin1" | "windows-1252" | "cp1252" => {
            encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned()
        }
        other => match encoding_rs::Encoding::for_label(other.as_bytes()) {
            Some(codec) => codec.decode(bytes).0.into_owned(),
            None => String::from_utf8(bytes.to_vec())
                .map_err(|_| LoadError::Encoding(other.to_string()))?,
        },
    };

    Ok(decoded)
}

/// Detect the delimiter by counting occurrences in the first line.
///
/// Defaults to `,` when no candidate appears.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [',', ';', '\t', '|'];
    let mut best_sep = ',';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Parse CSV text with an explicit delimiter.
///
/// Quoted fields may contain delimiters and newlines. Headers and cells are
/// kept byte for byte, surrounding whitespace included. Rows with fewer
/// cells than the header are padded, extra cells are dropped. Blank lines
/// are skipped.
pub fn parse_str(content: &str, delimiter: char) -> LoadResult<Dataset> {
    if content.trim().is_empty() {
        return Err(LoadError::EmptyFile);
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.iter().all(String::is_empty) {
        return Err(LoadError::NoHeaders);
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Dataset::new(headers, rows))
}

/// Parse CSV bytes with auto-detection of encoding and delimiter.
///
/// Valid UTF-8 is taken as is; chardet is only asked about other input.
pub fn parse_bytes(bytes: &[u8]) -> LoadResult<Dataset> {
    if bytes.is_empty() {
        return Err(LoadError::EmptyFile);
    }
    let unmarked = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    let content = match std::str::from_utf8(unmarked) {
        Ok(text) => text.to_string(),
        Err(_) => decode_content(bytes, &detect_encoding(bytes))?,
    };
    let delimiter = detect_delimiter(&content);
    parse_str(&content, delimiter)
}

/// Read and parse the dataset file.
///
/// Any failure here is meant to stop the process before it starts serving.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> LoadResult<Dataset> {
    let bytes = std::fs::read(path.as_ref())?;
    parse_bytes(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_simple_csv() {
        let ds = parse_str("name,age\nAlice,30\nBob,25", ',').unwrap();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.headers(), ["name", "age"]);
        assert_eq!(ds.cell(0, "name"), Some("Alice"));
        assert_eq!(ds.cell(1, "age"), Some("25"));
    }

    #[test]
    fn test_quoted_values_keep_delimiters() {
        let csv = "Brand Name,Common Side Effects\n\"Ritalin\",\"Insomnia, appetite loss\"";
        let ds = parse_str(csv, ',').unwrap();

        assert_eq!(ds.cell(0, "Common Side Effects"), Some("Insomnia, appetite loss"));
    }

    #[test]
    fn test_multiline_quoted_value() {
        let csv = "a,b\n\"line one\nline two\",x";
        let ds = parse_str(csv, ',').unwrap();

        assert_eq!(ds.len(), 1);
        assert_eq!(ds.cell(0, "a"), Some("line one\nline two"));
    }

    #[test]
    fn test_empty_lines_skipped() {
        let ds = parse_str("a;b\n1;2\n\n3;4\n", ';').unwrap();
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn test_missing_and_extra_values() {
        let ds = parse_str("a,b,c\n1,,3\n4\n5,6,7,8", ',').unwrap();

        assert_eq!(ds.cell(0, "b"), Some(""));
        assert_eq!(ds.cell(1, "c"), Some(""));
        assert_eq!(ds.row(2).unwrap(), ["5", "6", "7"]);
    }

    #[test]
    fn test_row_order_preserved() {
        let ds = parse_str("n\nz\na\nm", ',').unwrap();
        let names: Vec<_> = ds.rows().map(|(_, r)| r[0].clone()).collect();
        assert_eq!(names, ["z", "a", "m"]);
    }

    #[test]
    fn test_empty_csv_error() {
        assert!(matches!(parse_str("", ','), Err(LoadError::EmptyFile)));
        assert!(matches!(parse_bytes(b""), Err(LoadError::EmptyFile)));
    }

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(detect_delimiter("a;b;c\n1;2;3"), ';');
        assert_eq!(detect_delimiter("a,b,c\n1,2,3"), ',');
        assert_eq!(detect_delimiter("a\tb\tc"), '\t');
        assert_eq!(detect_delimiter("a|b|c"), '|');
        assert_eq!(detect_delimiter("single"), ',');
    }

    #[test]
    fn test_latin1_decoding() {
        // "Société" in ISO-8859-1
        let bytes: &[u8] = &[0x53, 0x6F, 0x63, 0x69, 0xE9, 0x74, 0xE9];
        let decoded = decode_content(bytes, "iso-8859-1").unwrap();
        assert_eq!(decoded, "Société");
    }

    #[test]
    fn test_latin1_currency_and_broken_bar() {
        // 0xA4 is '¤' and 0xA6 is '¦' in Latin-1 (not '€' / 'Š')
        let decoded = decode_content(&[0xA4, 0x20, 0xA6], "iso-8859-1").unwrap();
        assert_eq!(decoded, "¤ ¦");
    }

    #[test]
    fn test_utf8_emoji_kept() {
        let ds = parse_bytes("Brand Name,Notes\nStrattera,💊 non-stimulant\n".as_bytes()).unwrap();
        assert_eq!(ds.cell(0, "Notes"), Some("💊 non-stimulant"));

        let ds = parse_bytes("\u{FEFF}Brand Name\nConcerta®\n".as_bytes()).unwrap();
        assert_eq!(ds.headers(), ["Brand Name"]);
        assert_eq!(ds.cell(0, "Brand Name"), Some("Concerta®"));
    }

    #[test]
    fn test_whitespace_preserved() {
        let ds = parse_str(" Brand Name ,Notes\nRitalin,  padded  \n", ',').unwrap();
        assert_eq!(ds.headers(), [" Brand Name ", "Notes"]);
        assert_eq!(ds.cell(0, "Notes"), Some("  padded  "));
    }

    #[test]
    fn test_utf8_bom_stripped() {
        let ds = parse_bytes(b"\xEF\xBB\xBFBrand Name,Generic Name\nAdderall,amphetamine").unwrap();
        assert_eq!(ds.headers()[0], "Brand Name");
    }

    #[test]
    fn test_load_dataset_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Medication Type,Brand Name").unwrap();
        writeln!(file, "Stimulant,Vyvanse").unwrap();

        let ds = load_dataset(file.path()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.cell(0, "Brand Name"), Some("Vyvanse"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_dataset(dir.path().join("missing.csv"));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
