//! Fetches the definition text for a classified object.

use super::{sql, ObjectKind, ObjectRef};
use crate::db::CatalogClient;
use crate::error::{DdlError, Result};
use tracing::debug;

/// Produces the DDL to emit for `object`.
///
/// Tables yield their own DDL followed by the DDL of their indexes. Both are
/// fetched concurrently; if either fails the other is dropped and nothing is
/// returned.
pub async fn retrieve(client: &dyn CatalogClient, object: &ObjectRef) -> Result<String> {
    match object.kind() {
        ObjectKind::PackageBody => fetch_ddl(client, object).await,
        ObjectKind::Table => {
            let (table_ddl, index_ddl) = tokio::try_join!(
                fetch_ddl(client, object),
                fetch_dependent_ddl(client, object, ObjectKind::Index),
            )?;
            Ok(format!("{table_ddl}\n{index_ddl}"))
        }
        ObjectKind::Index | ObjectKind::Illegal => Err(DdlError::unsupported(format!(
            "no DDL retrieval is defined for {object}"
        ))),
    }
}

async fn fetch_ddl(client: &dyn CatalogClient, object: &ObjectRef) -> Result<String> {
    let label = metadata_label(object.kind())?;
    debug!("get_ddl({label}, {}, {})", object.name(), object.schema());

    let result = client
        .execute_query(sql::GET_DDL, &[label, object.name(), object.schema()])
        .await
        .map_err(|e| retrieval_error(e, &format!("DDL of {object}")))?;
    debug!("get_ddl for {object} took {:?}", result.execution_time);

    result
        .single_text()
        .ok_or_else(|| DdlError::retrieval(format!("no DDL returned for {object}")))
}

async fn fetch_dependent_ddl(
    client: &dyn CatalogClient,
    object: &ObjectRef,
    dependent: ObjectKind,
) -> Result<String> {
    let label = metadata_label(dependent)?;
    debug!(
        "get_dependent_ddl({label}, {}, {})",
        object.name(),
        object.schema()
    );

    let result = client
        .execute_query(sql::GET_DEPENDENT_DDL, &[label, object.name(), object.schema()])
        .await
        .map_err(|e| retrieval_error(e, &format!("{dependent} DDL of {object}")))?;
    debug!(
        "get_dependent_ddl for {object} took {:?}",
        result.execution_time
    );

    result.single_text().ok_or_else(|| {
        DdlError::retrieval(format!("no {dependent} DDL returned for {object}"))
    })
}

fn metadata_label(kind: ObjectKind) -> Result<&'static str> {
    kind.metadata_label()
        .ok_or_else(|| DdlError::unsupported(format!("{kind} objects have no metadata type")))
}

fn retrieval_error(error: DdlError, what: &str) -> DdlError {
    match error {
        DdlError::Query(msg) => DdlError::retrieval(format!("fetching {what} failed: {msg}")),
        other => other,
    }
}
