use super::*;
use crate::config::QuoterConfig;
use crate::error::QueryError;
use crate::expr::Expression;
use crate::quoter::Quoter;
use crate::statement::{SqlQuery, Statement, StatementType};
use crate::value::Value;

fn user_columns() -> Select {
    Select::with_columns([
        ("users.id", "id"),
        ("users.username", "name"),
        ("users.password", "pass"),
    ])
}

fn counted_users() -> Select {
    let mut q = Select::new();
    q.select(("u.id", "id"))
        .select(("u.username", "name"))
        .select((Expression::new("COUNT(u.id)"), "amount"))
        .from(("users", "u"));
    q
}

fn posts_delete() -> Delete {
    let mut q = Delete::with_table("posts");
    q.where_("posts.id", "IN", ["1", "2", "3"])
        .or_where_open()
        .where_("posts.title", "LIKE", "%test%")
        .or_where("posts.title", "LIKE", "%qwer%")
        .or_where_close();
    q
}

// ==================== SELECT ====================

#[test]
fn test_select_empty() {
    let mut q = Select::new();
    assert_eq!(q.compile().unwrap(), "SELECT *");
}

#[test]
fn test_select_simple_scenario() {
    let mut q = Select::with_columns([("users.id", "id"), ("users.username", "name")]);
    q.from(("users", "u")).where_("u.name", "=", "test");
    assert_eq!(
        q.compile().unwrap(),
        "SELECT users.id AS id, users.username AS name FROM users AS u WHERE u.name = 'test'"
    );
}

#[test]
fn test_select_full_query() {
    let mut q = user_columns();
    q.distinct(true)
        .from(("users", "u"))
        .left_join(("posts", "p"))
        .on("p.user_id", "=", "u.id")
        .unwrap()
        .right_join(("venues", "v"))
        .on("v.user_id", "=", "u.id")
        .unwrap()
        .where_("u.name", "=", "test")
        .having_open()
        .having("u.age", ">", "10")
        .or_having("u.age", "<", "14")
        .having_close()
        .order_by("u.age", "DESC")
        .limit(10);

    assert_eq!(
        q.compile().unwrap(),
        "SELECT DISTINCT users.id AS id, users.username AS name, users.password AS pass \
         FROM users AS u LEFT JOIN posts AS p ON (p.user_id = u.id) \
         RIGHT JOIN venues AS v ON (v.user_id = u.id) WHERE u.name = 'test' \
         HAVING (u.age > '10' OR u.age < '14') ORDER BY u.age DESC LIMIT 10"
    );
}

#[test]
fn test_select_reset() {
    let mut q = user_columns();
    q.distinct(true)
        .from(("users", "u"))
        .join_with(("posts", "p"), "LEFT")
        .on("p.user_id", "=", "u.id")
        .unwrap()
        .where_("u.name", "=", "test")
        .order_by("u.age", "DESC")
        .limit(10)
        .offset(3)
        .param(":x", 1);
    q.compile().unwrap();
    assert!(q.last_sql().is_some());

    q.reset();
    assert_eq!(q.compile().unwrap(), "SELECT *");
    assert_eq!(q.compile(), Select::new().compile());

    // Idempotent.
    q.reset().reset();
    assert_eq!(q.last_sql(), None);
    assert_eq!(q.compile().unwrap(), "SELECT *");
}

#[test]
fn test_select_group_by() {
    let mut q = counted_users();
    q.group_by("u.active").group_by("u.blocked");
    assert_eq!(
        q.compile().unwrap(),
        "SELECT u.id AS id, u.username AS name, COUNT(u.id) AS amount FROM users AS u \
         GROUP BY u.active, u.blocked"
    );
}

#[test]
fn test_select_union_all() {
    let mut other = counted_users();
    other.group_by("u.active");

    let mut q = counted_users();
    q.group_by("u.blocked").union_all(other).unwrap();

    assert_eq!(
        q.compile().unwrap(),
        "(SELECT u.id AS id, u.username AS name, COUNT(u.id) AS amount FROM users AS u \
         GROUP BY u.blocked) UNION ALL (SELECT u.id AS id, u.username AS name, \
         COUNT(u.id) AS amount FROM users AS u GROUP BY u.active)"
    );
}

#[test]
fn test_select_union_distinct_with_table_name() {
    let mut q = Select::new();
    q.from(("other_users", "ou")).union("users", false).unwrap();
    assert_eq!(
        q.compile().unwrap(),
        "(SELECT * FROM other_users AS ou) UNION (SELECT * FROM users)"
    );
}

#[test]
fn test_select_union_multiple() {
    let mut q = Select::new();
    q.from("a")
        .union("b", false)
        .unwrap()
        .union_all("c")
        .unwrap();
    assert_eq!(
        q.compile().unwrap(),
        "(SELECT * FROM a) UNION (SELECT * FROM b) UNION ALL (SELECT * FROM c)"
    );
}

#[test]
fn test_select_union_rejects_non_select() {
    let mut q = counted_users();
    q.group_by("u.blocked");
    let err = q.union_all(posts_delete()).unwrap_err();
    assert!(err.is_invalid_argument());

    // The rejected operand leaves the query untouched.
    assert!(!q.compile().unwrap().contains("UNION"));
}

#[test]
fn test_select_having_simple() {
    let mut q = user_columns();
    q.from(("users", "u"))
        .having("u.age", "<", 18)
        .or_having_open()
        .having("u.age", ">=", 18)
        .and_having("u.status", "=", "child")
        .or_having_close();
    assert_eq!(
        q.compile().unwrap(),
        "SELECT users.id AS id, users.username AS name, users.password AS pass FROM users AS u \
         HAVING u.age < 18 OR (u.age >= 18 AND u.status = 'child')"
    );
}

#[test]
fn test_select_having_complex() {
    let mut q = user_columns();
    q.from(("users", "u"))
        .having_open()
        .having("u.age", "<", 18)
        .or_having("u.status", "=", "child")
        .having_close()
        .or_having_open()
        .having("u.age", ">=", 18)
        .and_having("u.status", "=", "child")
        .or_having_close();
    assert_eq!(
        q.compile().unwrap(),
        "SELECT users.id AS id, users.username AS name, users.password AS pass FROM users AS u \
         HAVING (u.age < 18 OR u.status = 'child') OR (u.age >= 18 AND u.status = 'child')"
    );
}

#[test]
fn test_select_columns_via_methods() {
    let expected = "SELECT users.id AS id, users.username AS name, users.password AS pass FROM users AS u";

    let mut q = Select::new();
    q.select(("users.id", "id"))
        .select(("users.username", "name"))
        .select(("users.password", "pass"))
        .from(("users", "u"));
    assert_eq!(q.compile().unwrap(), expected);

    let mut q = Select::new();
    q.select_array([
        ("users.id", "id"),
        ("users.username", "name"),
        ("users.password", "pass"),
    ])
    .from(("users", "u"));
    assert_eq!(q.compile().unwrap(), expected);
}

#[test]
fn test_select_duplicate_columns_and_tables() {
    let mut q = Select::with_columns(["id", "id", "name"]);
    q.from("users").from("users");
    assert_eq!(q.compile().unwrap(), "SELECT id, name FROM users");
}

#[test]
fn test_select_join_using() {
    let mut q = Select::with_columns([
        ("users.id", "id"),
        ("users.username", "uname"),
        ("users.password", "pass"),
    ]);
    q.from(("users", "u"))
        .join(("posts", "p"))
        .using(["post_id"])
        .unwrap();
    assert_eq!(
        q.compile().unwrap(),
        "SELECT users.id AS id, users.username AS uname, users.password AS pass \
         FROM users AS u JOIN posts AS p USING (post_id)"
    );
}

#[test]
fn test_select_join_on_then_using() {
    let mut q = Select::with_columns(["u.id", "u.username", "pass"]);
    q.from("users").from("u").join(("posts", "p"));
    q.on("p.user_id", "=", "u.id").unwrap();
    let err = q.using(["user_id"]).unwrap_err();
    assert!(err.is_incompatible_clause());
}

#[test]
fn test_select_join_using_then_on() {
    let mut q = Select::with_columns(["u.user_id", "u.username", "pass"]);
    q.from("users").from("u").join(("posts", "p"));
    q.using(["user_id"]).unwrap();
    let err = q.on("p.user_id", "=", "u.user_id").unwrap_err();
    assert!(err.is_incompatible_clause());
}

#[test]
fn test_select_on_without_join() {
    let mut q = Select::new();
    q.from("users");
    assert!(q.on("a", "=", "b").unwrap_err().is_invalid_argument());
    assert!(q.using(["id"]).unwrap_err().is_invalid_argument());
}

#[test]
fn test_select_limit_offset() {
    let mut q = Select::with_columns(["id", "username", "pass"]);
    q.from("users").from("u").limit(10).offset(10);
    assert_eq!(
        q.compile().unwrap(),
        "SELECT id, username, pass FROM users, u LIMIT 10 OFFSET 10"
    );

    q.clear_limit().clear_offset();
    assert_eq!(q.compile().unwrap(), "SELECT id, username, pass FROM users, u");
}

#[test]
fn test_select_multiple_order_by() {
    let mut q = Select::with_columns(["id"]);
    q.from("users")
        .order_by("name", "asc")
        .order_by_column("id")
        .order_by(("created", "c"), "");
    assert_eq!(
        q.compile().unwrap(),
        "SELECT id FROM users ORDER BY name ASC, id, c"
    );
}

// ==================== WHERE ====================

#[test]
fn test_where_groups() {
    let mut q = Select::with_columns(["id", "username", "pass"]);
    q.from("users")
        .from("u")
        .where_open()
        .where_("u.age", ">", 18)
        .or_where("u.adult", "=", 1)
        .where_close()
        .and_where_open()
        .where_("u.allowed", "=", 1)
        .and_where("u.signed", "=", 1)
        .and_where_close()
        .or_where_open()
        .where_("u.username", "=", "test")
        .where_("u.color", "=", "blue")
        .or_where_close();
    assert_eq!(
        q.compile().unwrap(),
        "SELECT id, username, pass FROM users, u WHERE (u.age > 18 OR u.adult = 1) \
         AND (u.allowed = 1 AND u.signed = 1) OR (u.username = 'test' AND u.color = 'blue')"
    );
}

#[test]
fn test_where_close_empty() {
    let mut q = Select::with_columns(["id", "username", "pass"]);
    q.from("users")
        .from("u")
        .where_open()
        .where_("u.age", ">", 18)
        .or_where("u.adult", "=", 1)
        .where_close_empty()
        .and_where_open()
        .where_close_empty();
    assert_eq!(
        q.compile().unwrap(),
        "SELECT id, username, pass FROM users, u WHERE (u.age > 18 OR u.adult = 1)"
    );
}

#[test]
fn test_where_null_and_between() {
    let mut q = Select::new();
    q.from("people")
        .where_("age", "=", Value::Null)
        .or_where("age", "!=", None::<i64>)
        .or_where("age", "between", [6, 18]);
    assert_eq!(
        q.compile().unwrap(),
        "SELECT * FROM people WHERE age IS NULL OR age IS NOT NULL OR age BETWEEN 6 AND 18"
    );
}

#[test]
fn test_where_sub_query_value() {
    let mut sub = Select::with_columns(["user_id"]);
    sub.from("banned");

    let mut q = Select::new();
    q.from("users").where_("id", "NOT IN", sub);
    assert_eq!(
        q.compile().unwrap(),
        "SELECT * FROM users WHERE id NOT IN (SELECT user_id FROM banned)"
    );
}

#[test]
fn test_select_from_sub_query() {
    let mut sub = Select::with_columns(["id"]);
    sub.from("users").where_("active", "=", true);

    let mut q = Select::new();
    q.from((sub, "active_users"));
    assert_eq!(
        q.compile().unwrap(),
        "SELECT * FROM (SELECT id FROM users WHERE active = '1') AS active_users"
    );
}

// ==================== Parameters ====================

#[test]
fn test_params_resolved_at_compile() {
    let mut q = Select::new();
    q.from("users")
        .where_("name", "=", Value::param(":name"))
        .and_where("age", "BETWEEN", [Value::param(":min"), Value::param(":max")]);

    q.param(":name", "alice").parameters([(":min", 18), (":max", 30)]);
    assert_eq!(
        q.compile().unwrap(),
        "SELECT * FROM users WHERE name = 'alice' AND age BETWEEN 18 AND 30"
    );

    // Rebinding changes the output without touching the conditions.
    q.param(":name", "bob");
    assert!(q.compile().unwrap().contains("name = 'bob'"));
}

#[test]
fn test_param_resolving_to_null_becomes_is() {
    let mut q = Select::new();
    q.from("users").where_("deleted_at", "=", Value::param(":d"));
    q.param(":d", Value::Null);
    assert_eq!(
        q.compile().unwrap(),
        "SELECT * FROM users WHERE deleted_at IS NULL"
    );
}

#[test]
fn test_literal_equal_to_param_key_is_escaped() {
    let mut q = Select::new();
    q.from("users").where_("name", "=", ":name").param(":name", "alice");
    assert_eq!(q.compile().unwrap(), "SELECT * FROM users WHERE name = ':name'");
}

#[test]
fn test_unbound_param_fails_compile() {
    let mut q = Select::new();
    q.from("users").where_("id", "=", Value::param(":id"));
    assert_eq!(q.compile(), Err(QueryError::unbound(":id")));
    assert_eq!(q.last_sql(), None);
    assert_eq!(q.to_string(), "Unbound parameter: :id");
}

#[test]
fn test_chained_params_resolve_in_every_position() {
    let mut select = Select::new();
    select
        .from("t")
        .where_("a", "=", Value::param(":a"))
        .and_where("b", "IN", [Value::param(":a"), Value::param(":b")])
        .param(":a", Value::param(":b"))
        .param(":b", 3);
    assert_eq!(
        select.compile().unwrap(),
        "SELECT * FROM t WHERE a = 3 AND b IN (3, 3)"
    );

    let mut update = Update::with_table("t");
    update
        .value("a", Value::param(":a"))
        .param(":a", Value::param(":b"))
        .param(":b", 3);
    assert_eq!(update.compile().unwrap(), "UPDATE t SET a = 3");

    let mut insert = Insert::with_columns("t", ["a"]);
    insert.values([Value::param(":a")]).unwrap();
    insert.param(":a", Value::param(":b")).param(":b", 3);
    assert_eq!(insert.compile().unwrap(), "INSERT INTO t (a) VALUES (3)");
}

#[test]
fn test_param_cycle_is_rejected() {
    let mut q = Update::with_table("t");
    q.value("a", Value::param(":a"))
        .param(":a", Value::param(":b"))
        .param(":b", Value::param(":a"));
    assert!(q.compile().unwrap_err().is_invalid_argument());

    let mut q = Select::new();
    q.from("t")
        .where_("a", "=", Value::param(":a"))
        .param(":a", Value::param(":a"));
    assert!(q.compile().unwrap_err().is_invalid_argument());
}

// ==================== INSERT ====================

const INSERT_ROWS: &str = "INSERT INTO posts (posts.username, posts.email, posts.age) \
VALUES ('test1', 'test1@test.com', '13'), ('test2', 'test2@test.com', '23'), \
('test3', 'test3@test.com', '33')";

fn user_filter() -> Select {
    let mut q = Select::with_columns(["name", "email"]);
    q.from(("users", "u"))
        .left_join(("posts", "p"))
        .on("p.user_id", "=", "u.id")
        .unwrap()
        .where_("u.name", "=", "test")
        .having_open()
        .having("u.age", ">", "10")
        .or_having("u.age", "<", "14")
        .having_close()
        .order_by("u.age", "DESC");
    q
}

#[test]
fn test_insert_rows() {
    let mut q = Insert::new();
    q.table("posts")
        .unwrap()
        .columns(["posts.username", "posts.email", "posts.age"])
        .values_rows([
            ["test1", "test1@test.com", "13"],
            ["test2", "test2@test.com", "23"],
            ["test3", "test3@test.com", "33"],
        ])
        .unwrap();
    assert_eq!(q.compile().unwrap(), INSERT_ROWS);
}

#[test]
fn test_insert_with_columns() {
    let mut q = Insert::with_columns("posts", ["posts.username", "posts.email", "posts.age"]);
    q.values_rows([
        ["test1", "test1@test.com", "13"],
        ["test2", "test2@test.com", "23"],
        ["test3", "test3@test.com", "33"],
    ])
    .unwrap();
    assert_eq!(q.compile().unwrap(), INSERT_ROWS);
}

#[test]
fn test_insert_repeated_values() {
    let mut q = Insert::with_table("posts");
    q.columns(["posts.username", "posts.email", "posts.age"]);
    q.values(["test1", "test1@test.com", "13"]).unwrap();
    q.values(["test2", "test2@test.com", "23"]).unwrap();
    q.values(["test3", "test3@test.com", "33"]).unwrap();
    assert_eq!(q.compile().unwrap(), INSERT_ROWS);
}

#[test]
fn test_insert_mixed_values() {
    let mut q = Insert::with_table("events");
    q.columns(["name", "at", "attendees", "ratio", "public", "note"])
        .values([
            Value::from("launch"),
            Expression::new("NOW()").into(),
            Value::from(40),
            Value::from(0.5),
            Value::from(true),
            Value::Null,
        ])
        .unwrap();
    assert_eq!(
        q.compile().unwrap(),
        "INSERT INTO events (name, at, attendees, ratio, public, note) \
         VALUES ('launch', NOW(), 40, 0.500000, '1', NULL)"
    );
}

#[test]
fn test_insert_reset() {
    let mut q = Insert::new();
    q.table("posts")
        .unwrap()
        .columns(["posts.username", "posts.email", "posts.age"])
        .values(["test1", "test1@test.com", "13"])
        .unwrap();
    q.reset();
    assert_eq!(q.compile().unwrap(), "INSERT INTO  () VALUES ");
    assert_eq!(q.compile(), Insert::new().compile());
}

#[test]
fn test_insert_select() {
    let mut q = Insert::with_table("posts");
    q.columns(["posts.username", "posts.posts", "posts.age"])
        .select(user_filter())
        .unwrap();
    assert_eq!(
        q.compile().unwrap(),
        "INSERT INTO posts (posts.username, posts.posts, posts.age) SELECT name, email \
         FROM users AS u LEFT JOIN posts AS p ON (p.user_id = u.id) WHERE u.name = 'test' \
         HAVING (u.age > '10' OR u.age < '14') ORDER BY u.age DESC"
    );
}

#[test]
fn test_insert_values_after_select() {
    let mut q = Insert::with_table("posts");
    q.columns(["posts.username", "posts.posts", "posts.age"])
        .select(user_filter())
        .unwrap();
    let err = q.values(["posts.username"]).unwrap_err();
    assert!(err.is_incompatible_clause());
}

#[test]
fn test_insert_select_after_values() {
    let mut q = Insert::with_table("posts");
    q.values(["a"]).unwrap();
    let err = q.select(user_filter()).unwrap_err();
    assert!(err.is_incompatible_clause());
}

#[test]
fn test_insert_select_requires_select() {
    let mut q = Insert::with_table("posts");
    let err = q.select(Insert::with_table("posts")).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(q.select(posts_delete()).unwrap_err().is_invalid_argument());
}

#[test]
fn test_insert_table_alias_rejected() {
    let mut q = Insert::new();
    let err = q.table(("posts", "p")).unwrap_err();
    assert!(err.is_invalid_table_alias());
    assert_eq!(err.to_string(), "INSERT INTO syntax does not allow table aliasing");

    let err = q.table(Expression::new("posts p")).unwrap_err();
    assert!(err.is_invalid_table_alias());
}

// ==================== UPDATE ====================

#[test]
fn test_update_set() {
    let mut q = Update::with_table(("posts", "p"));
    q.set([("p.views", 300), ("p.active", 1)])
        .where_("posts.id", "IN", [1, 2, 3]);
    assert_eq!(
        q.compile().unwrap(),
        "UPDATE posts AS p SET p.views = 300, p.active = 1 WHERE posts.id IN (1, 2, 3)"
    );
}

#[test]
fn test_update_order_and_limit() {
    let mut q = Update::with_table(("posts", "p"));
    q.set([("p.views", 300), ("p.active", 1)])
        .where_("posts.id", "IN", [1, 2, 3])
        .order_by("p.views", "ASC")
        .limit(5);
    assert_eq!(
        q.compile().unwrap(),
        "UPDATE posts AS p SET p.views = 300, p.active = 1 WHERE posts.id IN (1, 2, 3) \
         ORDER BY p.views ASC LIMIT 5"
    );
}

#[test]
fn test_update_value_method() {
    let mut q = Update::with_table(("posts", "p"));
    q.value("p.views", 300)
        .value("p.active", 1)
        .where_("posts.id", "IN", [1, 2, 3]);
    assert_eq!(
        q.compile().unwrap(),
        "UPDATE posts AS p SET p.views = 300, p.active = 1 WHERE posts.id IN (1, 2, 3)"
    );

    let mut q = Update::with_table(("posts", "p"));
    q.value("p.views", 123).where_("posts.id", "IN", [1, 2, 3]);
    assert_eq!(
        q.compile().unwrap(),
        "UPDATE posts AS p SET p.views = 123 WHERE posts.id IN (1, 2, 3)"
    );
}

#[test]
fn test_update_repeated_column() {
    let mut q = Update::with_table("posts");
    q.value("views", 1).value("title", "x").value("views", 2);
    assert_eq!(q.compile().unwrap(), "UPDATE posts SET views = 2, title = 'x'");
}

#[test]
fn test_update_reset() {
    let mut q = Update::with_table(("posts", "p"));
    q.set([("p.views", 300), ("p.active", 1)])
        .where_("posts.id", "IN", [1, 2, 3]);
    q.reset();
    assert_eq!(q.compile().unwrap(), "UPDATE  SET ");
    assert_eq!(q.compile(), Update::new().compile());
}

// ==================== DELETE ====================

#[test]
fn test_delete_where_groups() {
    let mut q = posts_delete();
    assert_eq!(
        q.compile().unwrap(),
        "DELETE FROM posts WHERE posts.id IN ('1', '2', '3') \
         OR (posts.title LIKE '%test%' OR posts.title LIKE '%qwer%')"
    );
}

#[test]
fn test_delete_order_and_limit() {
    let mut q = posts_delete();
    q.order_by("posts.views", "ASC").limit(5);
    assert_eq!(
        q.compile().unwrap(),
        "DELETE FROM posts WHERE posts.id IN ('1', '2', '3') \
         OR (posts.title LIKE '%test%' OR posts.title LIKE '%qwer%') \
         ORDER BY posts.views ASC LIMIT 5"
    );
}

#[test]
fn test_delete_scenario() {
    let mut q = Delete::with_table("posts");
    q.where_("posts.id", "IN", ["1", "2", "3"])
        .order_by("posts.views", "ASC")
        .limit(5);
    assert_eq!(
        q.compile().unwrap(),
        "DELETE FROM posts WHERE posts.id IN ('1', '2', '3') ORDER BY posts.views ASC LIMIT 5"
    );
}

#[test]
fn test_delete_reset() {
    let mut q = posts_delete();
    q.reset();
    assert_eq!(q.compile().unwrap(), "DELETE FROM ");
    assert_eq!(q.compile(), Delete::new().compile());
}

#[test]
fn test_delete_table_alias_rejected() {
    let mut q = posts_delete();
    let err = q.table(("posts", "p")).unwrap_err();
    assert!(err.is_invalid_table_alias());

    q.table("articles").unwrap();
    assert!(q.compile().unwrap().starts_with("DELETE FROM articles WHERE"));
}

// ==================== Quoting / misc ====================

#[test]
fn test_quoted_prefixed_select() {
    let quoter = Quoter::new(QuoterConfig::mysql().with_table_prefix("app_"));
    let mut q = Select::with_columns([("u.id", "id")]);
    q.from(("users", "u"))
        .left_join(("posts", "p"))
        .on("p.user_id", "=", "u.id")
        .unwrap()
        .where_("u.name", "=", "o'neil");
    assert_eq!(
        q.compile_with(&quoter).unwrap(),
        "SELECT `app_u`.`id` AS `id` FROM `app_users` AS `app_u` \
         LEFT JOIN `app_posts` AS `app_p` ON (`app_p`.`user_id` = `app_u`.`id`) \
         WHERE `app_u`.`name` = 'o\\'neil'"
    );
}

#[test]
fn test_statement_types() {
    assert_eq!(Select::new().statement_type(), StatementType::Select);
    assert_eq!(Insert::new().statement_type(), StatementType::Insert);
    assert_eq!(Update::new().statement_type(), StatementType::Update);
    assert_eq!(Delete::new().statement_type(), StatementType::Delete);
    assert_eq!(StatementType::Delete.to_string(), "DELETE");

    let stmt = Statement::from(posts_delete());
    assert_eq!(SqlQuery::statement_type(&stmt), StatementType::Delete);
}

#[test]
fn test_display_matches_compile() {
    let mut q = posts_delete();
    assert_eq!(q.to_string(), q.compile().unwrap());
    assert_eq!(Statement::from(q.clone()).to_string(), q.compile().unwrap());
}

#[test]
fn test_compile_is_repeatable() {
    let mut q = user_filter();
    let first = q.compile().unwrap();
    assert_eq!(q.compile().unwrap(), first);
    assert_eq!(q.last_sql(), Some(first.as_str()));
    assert_eq!(q.to_sql().unwrap(), first);
}
