use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::csv::reader::{Format, Reader, ReaderBuilder};
use arrow::datatypes::SchemaRef;
use slicesql_result::{Error, Result};

#[derive(Debug, Clone)]
pub struct CsvKeyOptions {
    pub has_header: bool,
    pub delimiter: u8,
    /// Rows sampled for type inference.
    pub max_infer_records: usize,
    /// Primary-key columns in key order. `None` treats every column as part of the key.
    pub primary_key: Option<Vec<String>>,
}

impl Default for CsvKeyOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            delimiter: b',',
            max_infer_records: 1000,
            primary_key: None,
        }
    }
}

impl CsvKeyOptions {
    pub(crate) fn to_format(&self) -> Format {
        let mut format = Format::default().with_header(self.has_header);
        if self.delimiter != b',' {
            format = format.with_delimiter(self.delimiter);
        }
        format
    }
}

pub(crate) fn infer_schema(path: &Path, options: &CsvKeyOptions) -> Result<SchemaRef> {
    let mut file = File::open(path)?;
    let (schema, sampled) = options
        .to_format()
        .infer_schema(&mut file, Some(options.max_infer_records))?;
    tracing::trace!(
        "[CSV] inferred {} fields from {} records of {}",
        schema.fields().len(),
        sampled,
        path.display()
    );
    Ok(Arc::new(schema))
}

/// Indexes of `wanted` within `schema`, in the order requested.
pub(crate) fn resolve_projection(schema: &SchemaRef, wanted: &[String]) -> Result<Vec<usize>> {
    wanted
        .iter()
        .map(|name| {
            schema.index_of(name).map_err(|_| {
                let available: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
                Error::InvalidArgumentError(format!(
                    "primary key column '{name}' not found in CSV header {available:?}"
                ))
            })
        })
        .collect()
}

pub(crate) fn open_reader(
    path: &Path,
    options: &CsvKeyOptions,
    schema: SchemaRef,
    projection: Vec<usize>,
) -> Result<Reader<File>> {
    let file = File::open(path)?;
    let reader = ReaderBuilder::new(schema)
        .with_format(options.to_format())
        .with_projection(projection)
        .build(file)?;
    Ok(reader)
}
