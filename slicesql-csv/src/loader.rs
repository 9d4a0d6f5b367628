use std::path::Path;

use slicesql_partition::MemoryKeySource;
use slicesql_result::Result;
use slicesql_types::{KeyTuple, Literal};

use crate::reader::{CsvKeyOptions, infer_schema, open_reader, resolve_projection};

/// Read a key export into a [`MemoryKeySource`] ordered by the primary key.
///
/// Columns are typed by Arrow's inference over the first
/// [`max_infer_records`](CsvKeyOptions::max_infer_records) rows. Only the primary-key columns
/// are read; empty cells become `NULL` and are rejected as keys.
pub fn load_key_source(path: &Path, options: &CsvKeyOptions) -> Result<MemoryKeySource> {
    let schema = infer_schema(path, options)?;
    let columns: Vec<String> = match &options.primary_key {
        Some(pk) => pk.clone(),
        None => schema.fields().iter().map(|f| f.name().clone()).collect(),
    };
    let projection = resolve_projection(&schema, &columns)?;
    tracing::debug!(
        "[CSV] loading keys {:?} from {} (projection {:?})",
        columns,
        path.display(),
        projection
    );

    let reader = open_reader(path, options, schema, projection)?;
    let mut rows: Vec<KeyTuple> = Vec::new();
    for batch in reader {
        let batch = batch?;
        let arrays = batch.columns();
        for row in 0..batch.num_rows() {
            let tuple = arrays
                .iter()
                .map(|array| Literal::from_array_ref(array, row))
                .collect::<Result<KeyTuple>>()?;
            rows.push(tuple);
        }
    }
    tracing::info!("[CSV] read {} key rows from {}", rows.len(), path.display());

    MemoryKeySource::new(columns, rows)
}
