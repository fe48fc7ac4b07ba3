use cassata_core::{driver::ConnectOptions, stmt, Connection, Driver};
use cassata_driver_mem::Mem;

async fn connect(mem: &Mem) -> Box<dyn Connection> {
    let options = ConnectOptions {
        keyspace: Some("beat".into()),
        ..ConnectOptions::default()
    };
    mem.connect(&options).await.unwrap()
}

async fn seed(connection: &dyn Connection, count: i64) {
    for id in 1..=count {
        let mut insert = stmt::Insert::new("songs");
        insert.values.set("id", id);
        insert.values.set("title", format!("song-{id}"));
        let response = connection.exec(insert.into()).await.unwrap();
        assert_eq!(response.rows.into_count(), 1);
    }
}

#[test]
fn from_url_checks_the_scheme() {
    assert!(Mem::from_url("mem:").is_ok());
    assert!(Mem::from_url("mem://shared").is_ok());

    let err = Mem::from_url("sqlite::memory:").unwrap_err();
    assert!(err.is_invalid_configuration());
    assert!(err.to_string().contains("`mem` scheme"));

    let err = Mem::from_url("not a url").unwrap_err();
    assert!(err.is_invalid_configuration());
}

#[tokio::test]
async fn statement_round_trip() {
    let mem = Mem::new();
    let connection = connect(&mem).await;
    seed(&*connection, 2).await;

    let response = connection
        .exec(stmt::Select::all("songs").into())
        .await
        .unwrap();
    let rows = response.rows.into_cursor().collect().await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get_i64("id"), Some(1));
    assert_eq!(rows[1].get_str("title"), Some("song-2"));

    let mut update = stmt::Update::new("songs");
    update.assignments.set("title", "renamed");
    update.filter.apply("id", 1i64, stmt::Operator::Eq);
    let response = connection.exec(update.into()).await.unwrap();
    assert_eq!(response.rows.into_count(), 1);

    let mut delete = stmt::Delete::rows("songs");
    delete.filter.apply("id", 2i64, stmt::Operator::Eq);
    let response = connection.exec(delete.into()).await.unwrap();
    assert_eq!(response.rows.into_count(), 1);

    let response = connection
        .exec(stmt::Select::all("songs").into())
        .await
        .unwrap();
    let rows = response.rows.into_cursor().collect().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get_str("title"), Some("renamed"));
}

#[tokio::test]
async fn raw_text_executes() {
    let mem = Mem::new();
    let connection = connect(&mem).await;

    let raw = |text: &str| stmt::Statement::Raw(text.into());

    connection
        .exec(raw("INSERT INTO songs (id, title) VALUES (1, 'one')"))
        .await
        .unwrap();
    connection
        .exec(raw("INSERT INTO songs (id, title) VALUES (2, 'two')"))
        .await
        .unwrap();

    let response = connection
        .exec(raw("SELECT title FROM songs WHERE id >= 2"))
        .await
        .unwrap();
    let rows = response.rows.into_cursor().collect().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get_str("title"), Some("two"));

    // Raw text carries no bound values, so placeholders cannot resolve
    let err = connection
        .exec(raw("SELECT * FROM songs WHERE id = ?"))
        .await
        .unwrap_err();
    assert!(err.is_execution());
}

#[tokio::test]
async fn batch_counts_every_bound_statement() {
    let mem = Mem::new();
    let connection = connect(&mem).await;

    let batch = stmt::Batch::new(
        "INSERT INTO songs (id, title) VALUES (?, ?)",
        vec![
            vec![1i64.into(), "one".into()],
            vec![2i64.into(), "two".into()],
            vec![3i64.into(), "three".into()],
        ],
    );
    let response = connection.exec(batch.into()).await.unwrap();
    assert_eq!(response.rows.into_count(), 3);

    let response = connection
        .exec(stmt::Select::all("songs").into())
        .await
        .unwrap();
    assert_eq!(response.rows.into_cursor().collect().await.unwrap().len(), 3);
}

#[tokio::test]
async fn batch_rejects_select_statements() {
    let mem = Mem::new();
    let connection = connect(&mem).await;

    let batch = stmt::Batch::new("SELECT * FROM songs", vec![vec![]]);
    let err = connection.exec(batch.into()).await.unwrap_err();
    assert!(err.is_execution());
    assert!(err.to_string().contains("not allowed in a batch"));
}

#[tokio::test]
async fn counter_updates_through_raw_text() {
    let mem = Mem::new();
    let connection = connect(&mem).await;

    let raw = |text: &str| stmt::Statement::Raw(text.into());

    connection
        .exec(raw("INSERT INTO plays (id) VALUES (1)"))
        .await
        .unwrap();
    connection
        .exec(raw("UPDATE plays SET count = count + 3 WHERE id = 1"))
        .await
        .unwrap();
    connection
        .exec(raw("UPDATE plays SET count = count - 1 WHERE id = 1"))
        .await
        .unwrap();

    let response = connection.exec(raw("SELECT * FROM plays")).await.unwrap();
    let rows = response.rows.into_cursor().collect().await.unwrap();
    assert_eq!(rows[0].get_i64("count"), Some(2));
}

#[tokio::test]
async fn connections_share_the_store() {
    let mem = Mem::new();

    let writer = connect(&mem).await;
    seed(&*writer, 1).await;
    writer.close().await.unwrap();

    let reader = connect(&mem).await;
    let response = reader
        .exec(stmt::Select::all("songs").into())
        .await
        .unwrap();
    assert_eq!(response.rows.into_cursor().collect().await.unwrap().len(), 1);
}

#[tokio::test]
async fn unqualified_tables_need_a_keyspace() {
    let mem = Mem::new();
    let connection = mem.connect(&ConnectOptions::default()).await.unwrap();

    let err = connection
        .exec(stmt::Select::all("songs").into())
        .await
        .unwrap_err();
    assert!(err.is_execution());
    assert!(err.to_string().contains("no keyspace"));

    // A qualified table carries its own keyspace
    let mut insert = stmt::Insert::new("beat.songs");
    insert.values.set("id", 1i64);
    connection.exec(insert.into()).await.unwrap();

    let response = connection
        .exec(stmt::Select::all("beat.songs").into())
        .await
        .unwrap();
    assert_eq!(response.rows.into_cursor().collect().await.unwrap().len(), 1);
}

#[tokio::test]
async fn exec_after_close_fails() {
    let mem = Mem::new();
    let connection = connect(&mem).await;
    connection.close().await.unwrap();

    let err = connection
        .exec(stmt::Select::all("songs").into())
        .await
        .unwrap_err();
    assert!(err.is_execution());
    assert!(err.to_string().contains("connection is closed"));
}

#[tokio::test]
async fn close_keeps_the_first_page_readable() {
    let mem = Mem::new().page_size(2);
    let connection = connect(&mem).await;
    seed(&*connection, 4).await;

    let response = connection
        .exec(stmt::Select::all("songs").into())
        .await
        .unwrap();
    let mut cursor = response.rows.into_cursor();
    connection.close().await.unwrap();

    assert_eq!(cursor.next().await.unwrap().unwrap().get_i64("id"), Some(1));
    assert_eq!(cursor.next().await.unwrap().unwrap().get_i64("id"), Some(2));

    // The second page needs the connection
    let err = cursor.next().await.unwrap().unwrap_err();
    assert!(err.is_execution());
    assert!(err.to_string().contains("connection closed"));
}

#[tokio::test]
async fn exhausted_cursors_end_cleanly_after_close() {
    let mem = Mem::new().page_size(2);
    let connection = connect(&mem).await;
    seed(&*connection, 2).await;

    let response = connection
        .exec(stmt::Select::all("songs").into())
        .await
        .unwrap();
    let mut cursor = response.rows.into_cursor();
    connection.close().await.unwrap();

    assert!(cursor.next().await.unwrap().is_ok());
    assert!(cursor.next().await.unwrap().is_ok());
    assert!(cursor.next().await.is_none());
}
