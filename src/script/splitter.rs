//! Statement splitting for SQL scripts.
//!
//! A script is split on the `;` delimiter into trimmed, non-empty
//! statements. The delimiter is a hard boundary: `;` inside string literals,
//! comments, or quoted identifiers is not recognized. Downstream scripts
//! rely on these exact boundaries, so this limitation is deliberate.

/// Splits raw script text into an ordered sequence of statements.
///
/// Each candidate is trimmed of ASCII whitespace; empty candidates are
/// dropped and do not count as statements. A script with no valid statements
/// yields an empty vector.
pub fn split_statements(script: &str) -> Vec<String> {
    script
        .split(';')
        .map(str::trim)
        .filter(|candidate| !candidate.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_script() {
        assert_eq!(split_statements(""), Vec::<String>::new());
    }

    #[test]
    fn test_whitespace_only_script() {
        assert_eq!(split_statements("   "), Vec::<String>::new());
        assert_eq!(split_statements(" \t\r\n "), Vec::<String>::new());
    }

    #[test]
    fn test_trailing_delimiter() {
        assert_eq!(split_statements("A;B;"), vec!["A", "B"]);
    }

    #[test]
    fn test_empty_segment_between_delimiters() {
        assert_eq!(split_statements("A;;B"), vec!["A", "B"]);
    }

    #[test]
    fn test_statements_are_trimmed() {
        let script = "  CREATE TABLE t (id int) ;\n\n  INSERT INTO t VALUES (1)\t;";
        assert_eq!(
            split_statements(script),
            vec!["CREATE TABLE t (id int)", "INSERT INTO t VALUES (1)"]
        );
    }

    #[test]
    fn test_order_preserved() {
        let script = "DROP TABLE a; CREATE TABLE a (x int); INSERT INTO a VALUES (1)";
        assert_eq!(
            split_statements(script),
            vec![
                "DROP TABLE a",
                "CREATE TABLE a (x int)",
                "INSERT INTO a VALUES (1)"
            ]
        );
    }

    #[test]
    fn test_no_statement_is_empty_after_trim() {
        let script = " ;; ; A ;\n;B; ;\t";
        for statement in split_statements(script) {
            assert!(!statement.trim().is_empty());
        }
    }

    #[test]
    fn test_rejoin_idempotence() {
        let script = "CREATE TABLE t (id int);\nINSERT INTO t VALUES (1);;\n SELECT * FROM t ;";
        let first = split_statements(script);
        let rejoined = first.join(";");
        let second = split_statements(&rejoined);
        assert_eq!(first, second);
    }

    #[test]
    fn test_delimiter_inside_literal_is_a_boundary() {
        // Known limitation: no literal awareness.
        assert_eq!(
            split_statements("SELECT 'a;b'"),
            vec!["SELECT 'a", "b'"]
        );
    }
}
