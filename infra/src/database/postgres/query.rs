//! Fragments shared by the dynamic queries
//!
//! Only whitelisted column names are pushed as SQL text; every value goes
//! through a bind parameter.

use lp_shared::types::pagination::PageRequest;
use sqlx::{Postgres, QueryBuilder};

/// Appends `ORDER BY` with an `id` tie-breaker, then `LIMIT` and `OFFSET`
pub(crate) fn push_order_and_page<S>(
    builder: &mut QueryBuilder<'_, Postgres>,
    column: &'static str,
    request: &PageRequest<S>,
) {
    builder
        .push(" ORDER BY ")
        .push(column)
        .push(" ")
        .push(request.sort_order.as_sql());
    if column != "id" {
        builder.push(", id ASC");
    }

    let offset = i64::try_from(request.offset()).unwrap_or(i64::MAX);
    builder
        .push(" LIMIT ")
        .push_bind(i64::from(request.limit))
        .push(" OFFSET ")
        .push_bind(offset);
}

/// Appends the `WHERE` clause of a user listing
pub(crate) fn push_user_filters(
    builder: &mut QueryBuilder<'_, Postgres>,
    search: Option<&str>,
    exclude_deleted: bool,
) {
    let mut separator = " WHERE ";

    if exclude_deleted {
        builder.push(separator).push("deleted_at IS NULL");
        separator = " AND ";
    }

    if let Some(term) = search {
        let pattern = format!("%{}%", escape_like(term));
        builder
            .push(separator)
            .push("(name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR email ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
}

/// Escapes LIKE wildcards so a search term matches literally
pub(crate) fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
