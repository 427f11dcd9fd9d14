//! Generic paginated list-and-filter queries.
//!
//! Every list endpoint is one [`ListQuery`] describing where rows come from
//! (base table plus joins for display names), which column the `name` filter
//! applies to, and how rows are ordered. [`fetch_page`] turns that description
//! and a [`PageRequest`] into a count query and a data query built with
//! `sqlx::QueryBuilder`, so user input is always a bound parameter.

use sqlx::{FromRow, Postgres, QueryBuilder, postgres::PgRow};

use crate::{
    db::DbPool,
    pagination::{Page, PageRequest},
};

/// Static description of one paginated listing.
#[derive(Debug, Clone, Copy)]
pub struct ListQuery {
    /// Base table with alias and any joins, e.g. `keys k LEFT JOIN staffs s ON s.id = k.staff_id`
    pub from: &'static str,

    /// Select list producing the columns of the row type
    pub columns: &'static str,

    /// Text column the `name` query parameter is matched against
    pub filter_column: &'static str,

    /// Primary identity column; pages are ordered by it ascending
    pub id_column: &'static str,
}

impl ListQuery {
    /// Predicates implied by a page request, in the order they are applied.
    pub fn predicates<'a>(&self, request: &'a PageRequest) -> Vec<Predicate<'a>> {
        request
            .name
            .as_deref()
            .map(|needle| Predicate::ContainsIgnoreCase {
                column: self.filter_column,
                needle,
            })
            .into_iter()
            .collect()
    }
}

/// A single WHERE condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate<'a> {
    /// Case-insensitive substring match; the needle is matched literally.
    ContainsIgnoreCase {
        column: &'static str,
        needle: &'a str,
    },
}

/// LIMIT / OFFSET pair for the data query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub limit: i64,
    pub offset: i64,
}

impl From<&PageRequest> for Bounds {
    fn from(request: &PageRequest) -> Self {
        Self {
            limit: request.page_size,
            offset: request.offset(),
        }
    }
}

/// Builds the count and data statements for one listing.
pub struct SelectBuilder<'a> {
    from: &'static str,
    predicates: Vec<Predicate<'a>>,
}

impl<'a> SelectBuilder<'a> {
    pub fn new(from: &'static str, predicates: Vec<Predicate<'a>>) -> Self {
        Self { from, predicates }
    }

    /// `SELECT COUNT(*) FROM <from> [WHERE ...]`
    pub fn count(&self) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM ");
        builder.push(self.from);
        self.push_where(&mut builder);
        builder
    }

    /// `SELECT <columns> FROM <from> [WHERE ...] ORDER BY <id_column> LIMIT $n OFFSET $m`
    pub fn page(
        &self,
        columns: &str,
        id_column: &str,
        bounds: Bounds,
    ) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new("SELECT ");
        builder.push(columns).push(" FROM ").push(self.from);
        self.push_where(&mut builder);
        builder
            .push(" ORDER BY ")
            .push(id_column)
            .push(" LIMIT ")
            .push_bind(bounds.limit)
            .push(" OFFSET ")
            .push_bind(bounds.offset);
        builder
    }

    fn push_where(&self, builder: &mut QueryBuilder<'static, Postgres>) {
        for (index, predicate) in self.predicates.iter().enumerate() {
            builder.push(if index == 0 { " WHERE " } else { " AND " });
            match predicate {
                Predicate::ContainsIgnoreCase { column, needle } => {
                    builder
                        .push(*column)
                        .push(" ILIKE ")
                        .push_bind(contains_pattern(needle));
                }
            }
        }
    }
}

/// `%needle%` with LIKE wildcards in the needle escaped.
pub fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Run a paginated listing and assemble the response envelope.
///
/// The count and the page are read inside one `REPEATABLE READ` read-only
/// transaction, so `total` and `data` describe the same snapshot.
///
/// # Errors
///
/// Any query or row-decoding failure is returned as-is; callers surface it as
/// an internal error.
pub async fn fetch_page<T>(
    pool: &DbPool,
    list: &ListQuery,
    request: &PageRequest,
) -> Result<Page<T>, sqlx::Error>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let select = SelectBuilder::new(list.from, list.predicates(request));

    let mut tx = pool.begin().await?;
    sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
        .execute(&mut *tx)
        .await?;

    let mut count = select.count();
    let total = count.build_query_scalar::<i64>().fetch_one(&mut *tx).await?;

    let mut page = select.page(list.columns, list.id_column, Bounds::from(request));
    let rows: Vec<T> = page.build_query_as::<T>().fetch_all(&mut *tx).await?;

    tx.commit().await?;

    tracing::debug!(
        from = list.from,
        total,
        page = request.page,
        page_size = request.page_size,
        "listed page"
    );
    Ok(Page::new(rows, total, request))
}

/// Fetch a single row of a listing by its identity, with the same joined
/// display fields the listing returns.
pub async fn fetch_by_id<T>(pool: &DbPool, list: &ListQuery, id: i32) -> Result<Option<T>, sqlx::Error>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    by_id(list, id).build_query_as::<T>().fetch_optional(pool).await
}

fn by_id(list: &ListQuery, id: i32) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT ");
    builder
        .push(list.columns)
        .push(" FROM ")
        .push(list.from)
        .push(" WHERE ")
        .push(list.id_column)
        .push(" = ")
        .push_bind(id);
    builder
}
