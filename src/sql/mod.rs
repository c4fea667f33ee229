//! SQL serialization: query IR to statement text plus ordered parameters.
//!
//! [`SqlSerializer`] is a pure, synchronous compiler over a populated
//! [`Query`]. Each clause renderer returns its text together with the
//! parameters it appended locally; the caller merges them in appearance
//! order, so no shared mutable accumulator exists. Compiling the same query
//! twice yields identical output.
//!
//! The serializer never fails. A structurally degenerate query (an insert
//! with an empty data mapping, say) compiles to degenerate but well-formed
//! text; validation belongs to the caller.
//!
//! # Examples
//!
//! ```
//! use riptide::{Comparison, Filter, Query, SqlSerializer, StructuredData};
//!
//! let query = Query::new("users").filter(Filter::compare(
//!     "age",
//!     Comparison::GreaterThan,
//!     18,
//! ));
//! let compiled = SqlSerializer::new(&query).compile();
//!
//! assert_eq!(compiled.statement, "SELECT * FROM users WHERE age > ?;");
//! assert_eq!(compiled.parameters, vec![StructuredData::Integer(18)]);
//! ```

use crate::query::{
    Action, Comparison, Direction, Filter, Operation, Query, QueryField, Scope, Sort, Union,
    UnionOperation,
};
use crate::value::StructuredData;

/// Positional placeholder emitted for every bound parameter.
const PLACEHOLDER: &str = "?";

/// A compiled statement: text plus parameters in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledStatement {
    /// Single `;`-terminated statement with `?` placeholders.
    pub statement: String,
    /// Bound values, one per placeholder, in appearance order.
    pub parameters: Vec<StructuredData>,
}

/// Single-use compiler from a [`Query`] to a [`CompiledStatement`].
///
/// Stateless across invocations and safely reentrant; independent
/// serializer instances over equal queries produce identical output.
pub struct SqlSerializer<'a> {
    query: &'a Query,
}

impl<'a> SqlSerializer<'a> {
    pub fn new(query: &'a Query) -> Self {
        SqlSerializer { query }
    }

    /// Render the statement.
    ///
    /// Clause order: action+table, then the data clause (insert/update) or
    /// the union clause — never both — then where, sorts, limit, offset.
    pub fn compile(self) -> CompiledStatement {
        let query = self.query;
        let mut fragments = vec![action_clause(&query.action, &query.fields)];
        let mut parameters = Vec::new();

        fragments.push(query.entity.clone());

        if let Some((clause, values)) = data_clause(&query.action, query.data.as_deref()) {
            fragments.push(clause);
            parameters.extend(values);
        } else if let Some(clause) = union_clause(&query.unions) {
            fragments.push(clause);
        }

        if let Some((clause, values)) = where_clause(&query.filters) {
            fragments.push(clause);
            parameters.extend(values);
        }

        if !query.sorts.is_empty() {
            fragments.push(sort_clause(&query.sorts));
        }

        if let Some(limit) = query.limit.filter(|limit| limit.count > 0) {
            fragments.push(format!("LIMIT {}", limit.count));
        }

        if let Some(offset) = query.offset.filter(|offset| offset.count > 0) {
            fragments.push(format!("OFFSET {}", offset.count));
        }

        let statement = format!("{};", fragments.join(" "));
        log::trace!(
            "compiled `{}` with {} parameter(s)",
            statement,
            parameters.len()
        );

        CompiledStatement {
            statement,
            parameters,
        }
    }
}

/// The statement prefix up to and including `FROM`/`INTO`/the bare verb.
fn action_clause(action: &Action, fields: &[QueryField]) -> String {
    match action {
        Action::Select { distinct } => {
            let field_list = fields
                .iter()
                .map(QueryField::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            let mut select = vec!["SELECT"];
            if *distinct {
                select.push("DISTINCT");
            }
            if fields.is_empty() {
                select.push("*");
            } else {
                select.push(&field_list);
            }
            select.push("FROM");
            select.join(" ")
        }
        Action::Delete => "DELETE FROM".to_string(),
        Action::Insert => "INSERT INTO".to_string(),
        Action::Update => "UPDATE".to_string(),
        Action::Count => aggregate_clause("count", fields),
        Action::Maximum => aggregate_clause("max", fields),
        Action::Minimum => aggregate_clause("min", fields),
        Action::Average => aggregate_clause("avg", fields),
        Action::Sum => aggregate_clause("sum", fields),
    }
}

/// Aggregates consume the first selected field, falling back to `*`.
fn aggregate_clause(function: &str, fields: &[QueryField]) -> String {
    let argument = fields
        .first()
        .map(QueryField::to_string)
        .unwrap_or_else(|| "*".to_string());
    format!("SELECT {function}({argument}) FROM")
}

/// Data clause for inserts and updates.
///
/// A present value becomes a placeholder plus a parameter; an explicit
/// `None` becomes the literal `NULL` and binds nothing. Column order is the
/// mapping's iteration order.
fn data_clause(
    action: &Action,
    data: Option<&[(QueryField, Option<StructuredData>)]>,
) -> Option<(String, Vec<StructuredData>)> {
    let items: &[(QueryField, Option<StructuredData>)] = data?;
    match action {
        Action::Insert => {
            let columns = items
                .iter()
                .map(|(field, _)| field.to_string())
                .collect::<Vec<_>>()
                .join(", ");

            let mut values = Vec::new();
            let placeholders = items
                .iter()
                .map(|(_, value)| match value {
                    Some(value) => {
                        values.push(value.clone());
                        PLACEHOLDER
                    }
                    None => "NULL",
                })
                .collect::<Vec<_>>()
                .join(", ");

            Some((format!("({columns}) VALUES ({placeholders})"), values))
        }
        Action::Update => {
            let mut values = Vec::new();
            let updates = items
                .iter()
                .map(|(field, value)| match value {
                    Some(value) => {
                        values.push(value.clone());
                        format!("{field} = {PLACEHOLDER}")
                    }
                    None => format!("{field} = NULL"),
                })
                .collect::<Vec<_>>()
                .join(", ");

            Some((format!("SET {updates}"), values))
        }
        _ => None,
    }
}

/// Space-joined join clauses, in list order.
fn union_clause(unions: &[Union]) -> Option<String> {
    if unions.is_empty() {
        return None;
    }
    Some(
        unions
            .iter()
            .map(union_sql)
            .collect::<Vec<_>>()
            .join(" "),
    )
}

fn union_sql(union: &Union) -> String {
    let join = match union.operation {
        UnionOperation::Default => "INNER JOIN",
        UnionOperation::Left => "LEFT JOIN",
        UnionOperation::Right => "RIGHT JOIN",
    };
    format!(
        "{join} {} ON {}={}",
        union.entity, union.foreign_key, union.other_key
    )
}

/// `WHERE …`, present only when at least one filter exists.
///
/// Top-level filters are joined with ` AND ` regardless of any group logic
/// nested inside them.
fn where_clause(filters: &[Filter]) -> Option<(String, Vec<StructuredData>)> {
    if filters.is_empty() {
        return None;
    }

    let mut values = Vec::new();
    let rendered = filters
        .iter()
        .map(|filter| {
            let (text, filter_values) = filter_sql(filter);
            values.extend(filter_values);
            text
        })
        .collect::<Vec<_>>()
        .join(" AND ");

    Some((format!("WHERE {rendered}"), values))
}

/// Recursive filter renderer. Returns text plus locally bound parameters;
/// the caller merges them, so rendering has no shared state.
fn filter_sql(filter: &Filter) -> (String, Vec<StructuredData>) {
    match filter {
        Filter::Compare(field, comparison, value) => (
            format!("{field} {} {PLACEHOLDER}", comparison_sql(*comparison)),
            vec![value.clone()],
        ),
        Filter::Subset(field, scope, subset_values) => {
            let placeholders = subset_values
                .iter()
                .map(|_| PLACEHOLDER)
                .collect::<Vec<_>>()
                .join(", ");
            (
                format!("{field} {} ({placeholders})", scope_sql(*scope)),
                subset_values.clone(),
            )
        }
        // Groups are parenthesized at every depth, nested ones included.
        Filter::Group(operation, children) => {
            let mut values = Vec::new();
            let rendered = children
                .iter()
                .map(|child| {
                    let (text, child_values) = filter_sql(child);
                    values.extend(child_values);
                    text
                })
                .collect::<Vec<_>>()
                .join(&format!(" {} ", operation_sql(*operation)));
            (format!("({rendered})"), values)
        }
    }
}

/// Each sort carries its own `ORDER BY`, and sorts are space-joined.
/// Reproduces the legacy serializer byte-for-byte; see DESIGN.md.
fn sort_clause(sorts: &[Sort]) -> String {
    sorts
        .iter()
        .map(|sort| {
            let direction = match sort.direction {
                Direction::Ascending => "ASC",
                Direction::Descending => "DESC",
            };
            format!("ORDER BY {} {direction}", sort.field)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn comparison_sql(comparison: Comparison) -> &'static str {
    match comparison {
        Comparison::Equals => "=",
        Comparison::NotEquals => "!=",
        Comparison::GreaterThan => ">",
        Comparison::LessThan => "<",
    }
}

fn scope_sql(scope: Scope) -> &'static str {
    match scope {
        Scope::In => "IN",
        Scope::NotIn => "NOT IN",
    }
}

fn operation_sql(operation: Operation) -> &'static str {
    match operation {
        Operation::And => "AND",
        Operation::Or => "OR",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryField;

    fn compile(query: &Query) -> CompiledStatement {
        SqlSerializer::new(query).compile()
    }

    #[test]
    fn test_select_fields_and_distinct() {
        let query = Query::new("users")
            .with_action(Action::Select { distinct: true })
            .field("name")
            .field("age");
        assert_eq!(
            compile(&query).statement,
            "SELECT DISTINCT name, age FROM users;"
        );
    }

    #[test]
    fn test_aggregates_consume_first_field() {
        let query = Query::new("users").with_action(Action::Count);
        assert_eq!(compile(&query).statement, "SELECT count(*) FROM users;");

        let query = Query::new("users").with_action(Action::Average).field("age");
        assert_eq!(compile(&query).statement, "SELECT avg(age) FROM users;");

        let query = Query::new("users")
            .with_action(Action::Maximum)
            .field("age")
            .field("ignored");
        assert_eq!(compile(&query).statement, "SELECT max(age) FROM users;");
    }

    #[test]
    fn test_insert_null_renders_literal_and_binds_nothing() {
        let query = Query::new("users").with_action(Action::Insert).with_data(vec![
            (QueryField::new("name"), Some(StructuredData::String("Ann".to_string()))),
            (QueryField::new("nickname"), None),
            (QueryField::new("age"), Some(StructuredData::Integer(30))),
        ]);
        let compiled = compile(&query);
        assert_eq!(
            compiled.statement,
            "INSERT INTO users (name, nickname, age) VALUES (?, NULL, ?);"
        );
        assert_eq!(
            compiled.parameters,
            vec![
                StructuredData::String("Ann".to_string()),
                StructuredData::Integer(30),
            ]
        );
    }

    #[test]
    fn test_update_null_renders_assignment() {
        let query = Query::new("users").with_action(Action::Update).with_data(vec![
            (QueryField::new("name"), Some(StructuredData::String("Ann".to_string()))),
            (QueryField::new("nickname"), None),
        ]);
        let compiled = compile(&query);
        assert_eq!(
            compiled.statement,
            "UPDATE users SET name = ?, nickname = NULL;"
        );
        assert_eq!(
            compiled.parameters,
            vec![StructuredData::String("Ann".to_string())]
        );
    }

    #[test]
    fn test_data_clause_suppresses_union_clause() {
        let query = Query::new("users")
            .with_action(Action::Update)
            .with_data(vec![(
                QueryField::new("name"),
                Some(StructuredData::String("Ann".to_string())),
            )])
            .join(Union::new(
                "pets",
                UnionOperation::Default,
                QueryField::qualified("users", "id"),
                QueryField::qualified("pets", "user_id"),
            ));
        assert_eq!(compile(&query).statement, "UPDATE users SET name = ?;");
    }

    #[test]
    fn test_union_clause_renders_in_order() {
        let query = Query::new("users")
            .join(Union::new(
                "pets",
                UnionOperation::Left,
                QueryField::qualified("users", "id"),
                QueryField::qualified("pets", "user_id"),
            ))
            .join(Union::new(
                "toys",
                UnionOperation::Right,
                QueryField::qualified("pets", "id"),
                QueryField::qualified("toys", "pet_id"),
            ));
        assert_eq!(
            compile(&query).statement,
            "SELECT * FROM users LEFT JOIN pets ON users.id=pets.user_id \
             RIGHT JOIN toys ON pets.id=toys.pet_id;"
        );
    }

    #[test]
    fn test_nested_groups_parenthesized_at_every_depth() {
        let query = Query::new("users").filter(Filter::group(
            Operation::Or,
            vec![
                Filter::compare("name", Comparison::Equals, "Ann"),
                Filter::group(
                    Operation::And,
                    vec![
                        Filter::compare("age", Comparison::GreaterThan, 18),
                        Filter::compare("age", Comparison::LessThan, 65),
                    ],
                ),
            ],
        ));
        let compiled = compile(&query);
        assert_eq!(
            compiled.statement,
            "SELECT * FROM users WHERE (name = ? OR (age > ? AND age < ?));"
        );
        assert_eq!(
            compiled.parameters,
            vec![
                StructuredData::String("Ann".to_string()),
                StructuredData::Integer(18),
                StructuredData::Integer(65),
            ]
        );
    }

    #[test]
    fn test_top_level_filters_always_conjunctive() {
        let query = Query::new("users")
            .filter(Filter::group(
                Operation::Or,
                vec![
                    Filter::compare("age", Comparison::LessThan, 13),
                    Filter::compare("age", Comparison::GreaterThan, 19),
                ],
            ))
            .filter(Filter::compare("active", Comparison::Equals, true));
        assert_eq!(
            compile(&query).statement,
            "SELECT * FROM users WHERE (age < ? OR age > ?) AND active = ?;"
        );
    }

    #[test]
    fn test_zero_limit_and_offset_omitted() {
        let query = Query::new("users").limit(0).offset(0);
        assert_eq!(compile(&query).statement, "SELECT * FROM users;");

        let query = Query::new("users").limit(5).offset(10);
        assert_eq!(
            compile(&query).statement,
            "SELECT * FROM users LIMIT 5 OFFSET 10;"
        );
    }

    #[test]
    fn test_degenerate_insert_compiles_without_error() {
        let query = Query::new("users").with_action(Action::Insert).with_data(vec![]);
        let compiled = compile(&query);
        assert_eq!(compiled.statement, "INSERT INTO users () VALUES ();");
        assert!(compiled.parameters.is_empty());
    }
}
