//! Catalog statements issued during an extraction.
//!
//! Bind variables are positional: the client binds parameters in the order
//! the placeholders appear.

/// Catalog types that cannot be extracted as a whole object.
pub const EXCLUDED_TYPES: [&str; 3] = ["TABLE PARTITION", "SYNONYM", "PACKAGE"];

/// Looks up the type of an object. Binds: owner, object name.
pub const CLASSIFY_OBJECT: &str = "select object_type \
       from dba_objects \
      where owner = :owner \
        and object_name = :name \
        and object_type not in ('TABLE PARTITION', 'SYNONYM', 'PACKAGE')";

/// Generates the DDL of one object. Binds: metadata type, object name, owner.
pub const GET_DDL: &str = "select dbms_metadata.get_ddl(:kind, :name, :owner) from dual";

/// Generates the DDL of objects depending on a base object.
/// Binds: dependent metadata type, base object name, owner.
pub const GET_DEPENDENT_DDL: &str =
    "select dbms_metadata.get_dependent_ddl(:kind, :name, :owner) from dual";

/// Builds the block that toggles statement terminators in generated DDL.
pub fn session_transform(sql_terminator: bool) -> String {
    format!(
        "begin \
           dbms_metadata.set_transform_param(dbms_metadata.session_transform, 'SQLTERMINATOR', {sql_terminator}); \
         end;"
    )
}
