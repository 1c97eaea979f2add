use crate::error::LoadError;
use crate::models::WordPair;
use std::fs;
use std::path::Path;

pub fn load_csv(path: &Path) -> Result<Vec<WordPair>, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_csv(&content))
}

/// One pair per non-blank line. Lines are not validated.
pub fn parse_csv(content: &str) -> Vec<WordPair> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let (source, target) = parse_csv_line(line);
            WordPair::new(source, target)
        })
        .collect()
}

/// Splits on plain commas. There is no quoting, so a comma can never be part of a field.
/// A missing second field comes back empty; fields past the second are ignored.
pub fn parse_csv_line(line: &str) -> (String, String) {
    let mut fields = line.split(',').map(str::trim);
    let source = fields.next().unwrap_or_default().to_string();
    let target = fields.next().unwrap_or_default().to_string();
    (source, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_csv_line_simple() {
        let (source, target) = parse_csv_line("gato,cat");
        assert_eq!(source, "gato");
        assert_eq!(target, "cat");
    }

    #[test]
    fn test_parse_csv_line_trims_fields() {
        let (source, target) = parse_csv_line("  perro ,  dog  ");
        assert_eq!(source, "perro");
        assert_eq!(target, "dog");
    }

    #[test]
    fn test_parse_csv_line_keeps_alternatives() {
        let (source, target) = parse_csv_line("gato/gatito,cat/kitten");
        assert_eq!(source, "gato/gatito");
        assert_eq!(target, "cat/kitten");
    }

    #[test]
    fn test_parse_csv_line_without_comma() {
        let (source, target) = parse_csv_line("solo");
        assert_eq!(source, "solo");
        assert_eq!(target, "");
    }

    #[test]
    fn test_parse_csv_line_extra_fields_ignored() {
        let (source, target) = parse_csv_line("casa,house,noun");
        assert_eq!(source, "casa");
        assert_eq!(target, "house");
    }

    #[test]
    fn test_parse_csv_line_quotes_are_literal() {
        let (source, target) = parse_csv_line("\"uno, dos\",one");
        assert_eq!(source, "\"uno");
        assert_eq!(target, "dos\"");
    }

    #[test]
    fn test_parse_csv_skips_blank_lines() {
        let words = parse_csv("gato,cat\n\n   \nperro,dog\n");
        assert_eq!(words.len(), 2);
        assert_eq!(words[0], WordPair::new("gato", "cat"));
        assert_eq!(words[1], WordPair::new("perro", "dog"));
    }

    #[test]
    fn test_parse_csv_handles_crlf() {
        let words = parse_csv("gato,cat\r\nperro,dog\r\n");
        assert_eq!(words[0].target, "cat");
        assert_eq!(words[1].target, "dog");
    }

    #[test]
    fn test_load_csv_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "yo,I\ntú,you\n").unwrap();

        let words = load_csv(file.path()).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].source, "tú");
        assert_eq!(words[1].id, "tú|you");
    }

    #[test]
    fn test_load_csv_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.csv");

        let err = load_csv(&path).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("missing.csv"));
    }
}
