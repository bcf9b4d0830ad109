//! Resolves a schema/object pair to an [`ObjectRef`].

use super::{sql, ObjectKind, ObjectRef};
use crate::db::CatalogClient;
use crate::error::{DdlError, Result};
use tracing::debug;

/// Longest identifier the catalog accepts.
const MAX_NAME_LEN: usize = 128;

/// Validates a schema or object name and returns it uppercased.
///
/// `field` names the input in the error message.
pub fn normalize_name(field: &'static str, value: &str) -> Result<String> {
    let invalid = |reason| DdlError::InvalidName {
        field,
        value: value.to_string(),
        reason,
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(invalid("must not be empty"));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(invalid("longer than 128 characters"));
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '#'))
    {
        return Err(invalid("only letters, digits, '_', '$' and '#' are allowed"));
    }

    Ok(trimmed.to_uppercase())
}

/// Looks up the catalog type of `schema.name`.
///
/// Exactly one eligible catalog row with a supported type must exist.
pub async fn classify(client: &dyn CatalogClient, schema: &str, name: &str) -> Result<ObjectRef> {
    let schema = normalize_name("schema", schema)?;
    let name = normalize_name("object", name)?;

    debug!("Classifying {schema}.{name}");
    let result = client
        .execute_query(sql::CLASSIFY_OBJECT, &[schema.as_str(), name.as_str()])
        .await
        .map_err(|e| match e {
            DdlError::Query(msg) => {
                DdlError::classification(format!("lookup of {schema}.{name} failed: {msg}"))
            }
            other => other,
        })?;
    debug!(
        "Catalog lookup returned {} row(s) in {:?}",
        result.rows.len(),
        result.execution_time
    );

    let mut labels = result.first_column();
    match labels.len() {
        0 => Err(DdlError::ObjectNotFound { schema, name }),
        1 => {
            let label = labels.remove(0);
            match ObjectKind::from_catalog_label(&label) {
                ObjectKind::Illegal => Err(DdlError::UnsupportedObjectType {
                    schema,
                    name,
                    label,
                }),
                kind => Ok(ObjectRef::new(schema, name, kind)),
            }
        }
        _ => Err(DdlError::AmbiguousObject {
            schema,
            name,
            types: labels,
        }),
    }
}
