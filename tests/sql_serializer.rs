//! Contract tests for the SQL serializer.
//!
//! These pin the exact statement text and parameter ordering the serializer
//! must produce, including the legacy quirks it reproduces deliberately
//! (per-sort `ORDER BY` prefixes, space-joined).

use riptide::{
    Action, Comparison, Direction, Filter, Operation, Query, QueryField, Scope, SqlSerializer,
    StructuredData, Union, UnionOperation,
};

fn compile(query: &Query) -> riptide::CompiledStatement {
    SqlSerializer::new(query).compile()
}

#[test]
fn test_plain_select_has_no_parameters() {
    let query = Query::new("users");
    let compiled = compile(&query);
    assert_eq!(compiled.statement, "SELECT * FROM users;");
    assert!(compiled.parameters.is_empty());
}

#[test]
fn test_single_compare_binds_one_parameter() {
    let query = Query::new("users").filter(Filter::compare("age", Comparison::GreaterThan, 18));
    let compiled = compile(&query);
    assert_eq!(compiled.statement, "SELECT * FROM users WHERE age > ?;");
    assert_eq!(compiled.parameters, vec![StructuredData::Integer(18)]);
}

#[test]
fn test_subset_binds_each_value_in_order() {
    let query = Query::new("users").filter(Filter::subset(
        "id",
        Scope::NotIn,
        vec![5i64, 3, 8],
    ));
    let compiled = compile(&query);
    assert_eq!(
        compiled.statement,
        "SELECT * FROM users WHERE id NOT IN (?, ?, ?);"
    );
    assert_eq!(
        compiled.parameters,
        vec![
            StructuredData::Integer(5),
            StructuredData::Integer(3),
            StructuredData::Integer(8),
        ]
    );
}

#[test]
fn test_compilation_is_deterministic_across_instances() {
    let query = Query::new("users")
        .filter(Filter::compare("name", Comparison::NotEquals, "Ann"))
        .filter(Filter::subset("age", Scope::In, vec![18i64, 21]))
        .sort("name", Direction::Ascending)
        .limit(3)
        .offset(6);

    let first = SqlSerializer::new(&query).compile();
    let second = SqlSerializer::new(&query).compile();
    assert_eq!(first, second);
}

#[test]
fn test_insert_columns_follow_mapping_order() {
    let query = Query::new("users").with_action(Action::Insert).with_data(vec![
        (
            QueryField::new("name"),
            Some(StructuredData::String("Ann".to_string())),
        ),
        (QueryField::new("age"), Some(StructuredData::Integer(30))),
    ]);
    let compiled = compile(&query);
    assert_eq!(
        compiled.statement,
        "INSERT INTO users (name, age) VALUES (?, ?);"
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
fn test_sorts_are_space_joined_with_repeated_prefix() {
    let query = Query::new("users")
        .sort("name", Direction::Ascending)
        .sort("age", Direction::Descending);
    assert_eq!(
        compile(&query).statement,
        "SELECT * FROM users ORDER BY name ASC ORDER BY age DESC;"
    );
}

#[test]
fn test_full_clause_ordering() {
    let query = Query::new("users")
        .join(Union::new(
            "pets",
            UnionOperation::Default,
            QueryField::qualified("users", "id"),
            QueryField::qualified("pets", "user_id"),
        ))
        .filter(Filter::group(
            Operation::Or,
            vec![
                Filter::compare("age", Comparison::LessThan, 13),
                Filter::compare("age", Comparison::GreaterThan, 19),
            ],
        ))
        .sort("age", Direction::Descending)
        .limit(20)
        .offset(40);
    let compiled = compile(&query);
    assert_eq!(
        compiled.statement,
        "SELECT * FROM users INNER JOIN pets ON users.id=pets.user_id \
         WHERE (age < ? OR age > ?) ORDER BY age DESC LIMIT 20 OFFSET 40;"
    );
    assert_eq!(
        compiled.parameters,
        vec![StructuredData::Integer(13), StructuredData::Integer(19)]
    );
}

#[test]
fn test_parameter_order_spans_data_and_where() {
    let query = Query::new("users")
        .with_action(Action::Update)
        .with_data(vec![(
            QueryField::new("name"),
            Some(StructuredData::String("Bea".to_string())),
        )])
        .filter(Filter::compare("id", Comparison::Equals, 7));
    let compiled = compile(&query);
    assert_eq!(
        compiled.statement,
        "UPDATE users SET name = ? WHERE id = ?;"
    );
    assert_eq!(
        compiled.parameters,
        vec![
            StructuredData::String("Bea".to_string()),
            StructuredData::Integer(7),
        ]
    );
}
