use cassata_core::stmt;
use cassata_cql::Serializer;

fn serialize(stmt: &stmt::Statement) -> (String, Vec<stmt::Value>) {
    let mut params = vec![];
    let cql = Serializer::new().serialize(stmt, &mut params);
    (cql, params)
}

#[test]
fn insert_lists_columns_in_assignment_order() {
    let mut insert = stmt::Insert::new("songs");
    insert.values.set("id", 1i64);
    insert.values.set("title", "Ramble On");
    insert.values.set("ranking", 9i64);

    let (cql, params) = serialize(&insert.into());

    assert_eq!(cql, "INSERT INTO songs (id, title, ranking) VALUES (?, ?, ?);");
    assert_eq!(
        params,
        [
            stmt::Value::I64(1),
            stmt::Value::from("Ramble On"),
            stmt::Value::I64(9)
        ]
    );
}

#[test]
fn update_binds_assignments_before_the_filter() {
    let mut update = stmt::Update::new("songs");
    update.assignments.set("title", "Kashmir");
    update.filter.apply("id", 1i64, stmt::Operator::Eq);

    let (cql, params) = serialize(&update.into());

    assert_eq!(cql, "UPDATE songs SET title = ? WHERE id = ?;");
    assert_eq!(params, [stmt::Value::from("Kashmir"), stmt::Value::I64(1)]);
}

#[test]
fn counter_deltas_reference_the_column() {
    let mut update = stmt::Update::new("song_plays");
    update.assignments.add("plays", 1i64);
    update.assignments.sub("skips", 2i64);
    update.filter.apply("id", 1i64, stmt::Operator::Eq);

    let (cql, params) = serialize(&update.into());

    assert_eq!(
        cql,
        "UPDATE song_plays SET plays = plays + ?, skips = skips - ? WHERE id = ?;"
    );
    assert_eq!(params.len(), 3);
}

#[test]
fn delete_whole_rows() {
    let mut delete = stmt::Delete::rows("songs");
    delete.filter.apply("id", 1i64, stmt::Operator::Eq);

    let (cql, params) = serialize(&delete.into());

    assert_eq!(cql, "DELETE FROM songs WHERE id = ?;");
    assert_eq!(params, [stmt::Value::I64(1)]);
}

#[test]
fn delete_clears_a_named_column() {
    let mut delete = stmt::Delete::column("songs", "ranking");
    delete.filter.apply("id", 1i64, stmt::Operator::Eq);

    let (cql, params) = serialize(&delete.into());

    assert_eq!(cql, "DELETE ranking FROM songs WHERE id = ?;");
    assert_eq!(params, [stmt::Value::I64(1)]);
}

#[test]
fn raw_text_passes_through() {
    let raw = stmt::Raw::from("SELECT release_version FROM system.local");

    let (cql, params) = serialize(&raw.into());

    assert_eq!(cql, "SELECT release_version FROM system.local;");
    assert!(params.is_empty());
}

#[test]
fn raw_text_keeps_a_single_terminator() {
    let raw = stmt::Raw::from("SELECT now() FROM system.local; \n");

    let (cql, _) = serialize(&raw.into());

    assert_eq!(cql, "SELECT now() FROM system.local;");
}

#[test]
fn batch_repeats_the_template_per_tuple() {
    let batch = stmt::Batch::new(
        "INSERT INTO songs (id, title) VALUES (?, ?)",
        vec![
            vec![1i64.into(), "a".into()],
            vec![2i64.into(), "b".into()],
            vec![3i64.into(), "c".into()],
        ],
    );

    let (cql, params) = serialize(&batch.into());

    assert_eq!(
        cql,
        "BEGIN BATCH\n    INSERT INTO songs (id, title) VALUES (?, ?);\n    INSERT INTO songs (id, title) VALUES (?, ?);\n    INSERT INTO songs (id, title) VALUES (?, ?);\nAPPLY BATCH;"
    );
    assert_eq!(params.len(), 6);
    assert_eq!(params[0], stmt::Value::I64(1));
    assert_eq!(params[5], stmt::Value::from("c"));
}

#[test]
fn batch_trims_the_template_terminator() {
    let batch = stmt::Batch::new(
        "UPDATE songs SET title = ? WHERE id = ?;",
        vec![vec!["a".into(), 1i64.into()]],
    );

    let (cql, _) = serialize(&batch.into());

    assert_eq!(
        cql,
        "BEGIN BATCH\n    UPDATE songs SET title = ? WHERE id = ?;\nAPPLY BATCH;"
    );
}
