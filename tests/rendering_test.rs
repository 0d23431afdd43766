use pretty_assertions::assert_eq;
use rql::prelude::*;

fn users() -> Table {
    Table::new("users")
}

#[test]
fn test_projection_only() {
    let query = users().project(["id", "name"]);
    assert_eq!(
        render(&query).unwrap(),
        r#"SELECT "users"."id", "users"."name" FROM "users""#
    );
}

#[test]
fn test_numeric_filter_renders_unquoted() {
    let t = users();
    let query = t.filter(t.attr("id").eq(1));
    assert_eq!(
        render(&query).unwrap(),
        r#"SELECT  FROM "users" WHERE "users"."id" = 1"#
    );
}

#[test]
fn test_string_filter_renders_single_quoted() {
    let t = users();
    let query = t.filter(t.attr("name").eq("bob"));
    assert_eq!(
        render(&query).unwrap(),
        r#"SELECT  FROM "users" WHERE "users"."name" = 'bob'"#
    );
}

#[test]
fn test_star_projection_is_unquoted() {
    let query = users().project([star()]);
    assert_eq!(render(&query).unwrap(), r#"SELECT * FROM "users""#);
}

#[test]
fn test_no_filter_means_no_where_clause() {
    let query = users().project(["id"]);
    assert!(!render(&query).unwrap().contains(" WHERE "));
}

#[test]
fn test_chained_filters_conjoin() {
    let t = users();
    let query = t
        .filter(t.attr("id").eq(1))
        .filter(t.attr("name").eq("bob"));
    assert_eq!(
        render(&query).unwrap(),
        r#"SELECT  FROM "users" WHERE "users"."id" = 1 AND "users"."name" = 'bob'"#
    );
}

#[test]
fn test_chained_filters_match_direct_and() {
    let t = users();
    let a = t.attr("id").eq(1);
    let b = t.attr("name").eq("bob");

    let chained = t.filter(a.clone()).filter(b.clone());
    let direct = t.filter(a.and(b));
    assert_eq!(render(&chained).unwrap(), render(&direct).unwrap());
}

#[test]
fn test_or_filter_disjoins() {
    let t = users();
    let query = t
        .filter(t.attr("id").eq(1))
        .or_filter(t.attr("id").eq(2));
    assert_eq!(
        render(&query).unwrap(),
        r#"SELECT  FROM "users" WHERE "users"."id" = 1 OR "users"."id" = 2"#
    );
}

#[test]
fn test_grouped_predicate() {
    let t = users();
    let grouped = Node::grouping(t.attr("id").eq(1).and(t.attr("name").eq("bob")));
    let query = t.filter(grouped).project([star()]);
    assert_eq!(
        render(&query).unwrap(),
        r#"SELECT * FROM "users" WHERE ("users"."id" = 1 AND "users"."name" = 'bob')"#
    );
}

#[test]
fn test_builder_is_immutable() {
    let t = users();
    let base = t.project(["id"]);
    let before = render(&base).unwrap();

    let _ignored = base.filter(t.attr("id").eq(1)).project(["name"]);
    assert_eq!(render(&base).unwrap(), before);
}

#[test]
fn test_coerced_attribute_renders_like_the_attribute() {
    let t = users();
    let direct = t.project([t.attr("id")]);
    let coerced = t.project([Node::from(t.attr("id"))]);
    assert_eq!(render(&direct).unwrap(), render(&coerced).unwrap());
}

#[test]
fn test_from_retargets_a_built_query() {
    let t = users();
    let query = t.project(["id"]).from(Table::new("admins"));
    // Projections were bound eagerly, so they still reference "users".
    assert_eq!(
        render(&query).unwrap(),
        r#"SELECT "users"."id" FROM "admins""#
    );
}

#[test]
fn test_raw_sql_passes_through_verbatim() {
    let t = users();
    let query = t.project([sql("count(1) AS total")]);
    assert_eq!(
        render(&query).unwrap(),
        r#"SELECT count(1) AS total FROM "users""#
    );
}

#[test]
fn test_select_serde_round_trip() {
    let t = users();
    let query = t.project(["id"]).filter(t.attr("name").eq("bob"));

    let json = serde_json::to_string(&query).unwrap();
    let back: Select = serde_json::from_str(&json).unwrap();
    assert_eq!(back, query);
    assert_eq!(render(&back).unwrap(), render(&query).unwrap());
}
