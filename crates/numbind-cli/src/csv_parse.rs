use crate::cmd::config::CmdError;

use std::fs::File;
use std::io::Read;
use std::path::Path;

pub fn mk_rdr<P: AsRef<Path>>(filename: P, delimiter: u8) -> Result<csv::Reader<File>, CmdError> {
    let file = File::open(filename)?;
    let rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);
    Ok(rdr)
}

/// Collect the named columns as numbers, in the order asked for.
///
/// A record with a blank or missing cell in any requested column is dropped
/// as a whole, so values at the same index always come from the same row.
pub fn read_columns<R: Read>(
    mut rdr: csv::Reader<R>,
    names: &[&str],
    source: &str,
) -> Result<Vec<Vec<f64>>, CmdError> {
    let headers = rdr.headers()?.clone();
    let indices = names
        .iter()
        .map(|name| {
            headers.iter().position(|h| h == *name).ok_or_else(|| CmdError::MissingColumn {
                column: name.to_string(),
                path: source.to_string(),
            })
        })
        .collect::<Result<Vec<usize>, _>>()?;

    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); names.len()];
    let mut skipped = 0usize;
    for (row, record) in rdr.records().enumerate() {
        let record = record?;
        let fields: Option<Vec<&str>> =
            indices.iter().map(|&idx| record.get(idx).filter(|f| !f.is_empty())).collect();
        let Some(fields) = fields else {
            skipped += 1;
            continue;
        };

        for ((field, name), column) in fields.into_iter().zip(names).zip(columns.iter_mut()) {
            let value = field.parse::<f64>().map_err(|_| CmdError::Parse {
                column: name.to_string(),
                row: row + 1,
                value: field.to_string(),
            })?;
            column.push(value);
        }
    }
    if skipped > 0 {
        tracing::debug!(skipped, source, "dropped rows with blank cells");
    }
    Ok(columns)
}
