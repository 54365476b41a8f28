//! Delimited table loading

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::table::RawTable;
use crate::{Error, Result};

/// Cell contents treated as missing values
pub const NA_TOKENS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "null", "NULL", "None", "<NA>", "#N/A",
];

/// Field delimiter of an input table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// Tab-separated (`.tsv`, `.txt`, `.tab`)
    Tab,
    /// Comma-separated (`.csv`)
    Comma,
}

impl Delimiter {
    /// Delimiter byte
    pub fn byte(self) -> u8 {
        match self {
            Self::Tab => b'\t',
            Self::Comma => b',',
        }
    }

    /// Pick the delimiter from a file extension, defaulting to tab
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("csv") => Self::Comma,
            _ => Self::Tab,
        }
    }
}

/// Load a table, choosing the delimiter from the file extension
pub fn load_table(path: impl AsRef<Path>) -> Result<RawTable> {
    let path = path.as_ref();
    load_table_with(path, Delimiter::from_path(path))
}

/// Load a table with an explicit delimiter
pub fn load_table_with(path: impl AsRef<Path>, delimiter: Delimiter) -> Result<RawTable> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)?;
    let table = read_table(BufReader::new(file), delimiter)
        .map_err(|e| match e {
            Error::Parse(msg) => Error::Parse(format!("{}: {msg}", path.display())),
            other => other,
        })?;

    tracing::debug!(
        path = %path.display(),
        rows = table.n_rows(),
        columns = table.n_cols(),
        "loaded table"
    );
    Ok(table)
}

/// Read a table with a header row from any reader
pub fn read_table<R: Read>(reader: R, delimiter: Delimiter) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter.byte())
        .has_headers(true)
        .flexible(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(Error::Parse("missing header row".to_string()));
    }

    let mut table = RawTable::new(headers);
    for record in reader.records() {
        let record = record?;
        let row = record
            .iter()
            .map(|cell| {
                if NA_TOKENS.contains(&cell) {
                    None
                } else {
                    Some(cell.to_string())
                }
            })
            .collect();
        table.push_row(row)?;
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_tab_separated() {
        let data = "run\tgene_a\tphenotype_reg\nr1\t0.5\t1\nr2\tNA\t0\n";
        let table = read_table(data.as_bytes(), Delimiter::Tab).unwrap();

        assert_eq!(table.columns, vec!["run", "gene_a", "phenotype_reg"]);
        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.rows[1][1], None);
        assert_eq!(table.rows[0][1].as_deref(), Some("0.5"));
    }

    #[test]
    fn test_empty_cells_are_missing() {
        let data = "a,b\n1,\n,2\n";
        let table = read_table(data.as_bytes(), Delimiter::Comma).unwrap();
        assert_eq!(table.rows[0][1], None);
        assert_eq!(table.rows[1][0], None);
    }

    #[test]
    fn test_ragged_rows_fail() {
        let data = "a\tb\n1\t2\n3\n";
        let err = read_table(data.as_bytes(), Delimiter::Tab).unwrap_err();
        assert!(matches!(err, Error::Csv(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = load_table("/definitely/not/here.tsv").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_delimiter_from_extension() {
        assert_eq!(Delimiter::from_path(Path::new("x.tsv")), Delimiter::Tab);
        assert_eq!(Delimiter::from_path(Path::new("x.CSV")), Delimiter::Comma);
        assert_eq!(Delimiter::from_path(Path::new("x")), Delimiter::Tab);
    }

    #[test]
    fn test_load_table_from_file() {
        let mut file = tempfile::Builder::new().suffix(".tsv").tempfile().unwrap();
        writeln!(file, "gene_a\tgender").unwrap();
        writeln!(file, "1.0\tF").unwrap();
        let table = load_table(file.path()).unwrap();
        assert_eq!(table.n_rows(), 1);
        assert_eq!(table.rows[0][1].as_deref(), Some("F"));
    }

    #[test]
    fn test_empty_file_fails() {
        let file = NamedTempFile::new().unwrap();
        assert!(load_table_with(file.path(), Delimiter::Tab).is_err());
    }
}
