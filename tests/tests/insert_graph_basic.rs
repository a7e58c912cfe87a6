use pretty_assertions::assert_eq;
use seedling::stmt::Value;
use tests::*;

async fn auto_key_is_read_back(s: impl Setup) {
    let db = s.setup(fixtures::user_todo()).await;

    let mut graph = db.graph();
    let user = graph.insert("User").unwrap();
    graph.assign(user, "name", "alice").unwrap();

    let summary = db.insert_graph(&mut graph).await.unwrap();
    assert_eq!(summary.written, 1);
    assert!(summary.unlinked.is_empty());

    let id = graph.get(user, "id").unwrap().clone();
    assert!(matches!(id, Value::I64(_)), "{id:?}");
    assert_eq!(s.stored_column("user", "id").await, vec![id.clone()]);

    let executed = s.exec_log().last();
    assert_eq!(executed.inserts.len(), 1);
    assert_eq!(executed.inserts[0].returning, vec!["id".to_string()]);
    assert_eq!(executed.results.entries[0].value, id);
}

async fn foreign_key_follows_pending_identity(s: impl Setup) {
    let db = s.setup(fixtures::user_todo()).await;

    let mut graph = db.graph();
    let first = graph.insert("Todo").unwrap();
    let second = graph.insert("Todo").unwrap();
    let user = graph.insert("User").unwrap();

    graph.assign(user, "name", "alice").unwrap();
    for (todo, title) in [(first, "one"), (second, "two")] {
        graph.assign(todo, "title", title).unwrap();
        graph.depends_on(todo, user);
    }

    db.insert_graph(&mut graph).await.unwrap();

    // The user is queued first even though it was added last
    assert_eq!(s.exec_log().last_tables(), ["user", "todo", "todo"]);

    let user_id = graph.get(user, "id").unwrap().clone();
    assert_eq!(graph.get(first, "user_id").unwrap(), &user_id);
    assert_eq!(graph.get(second, "user_id").unwrap(), &user_id);

    assert_eq!(
        s.stored_column("todo", "user_id").await,
        vec![user_id.clone(), user_id]
    );
    assert_eq!(
        s.stored_column("todo", "title").await,
        vec![Value::from("one"), Value::from("two")]
    );
}

async fn identities_are_read_back_positionally(s: impl Setup) {
    let db = s.setup(fixtures::user_todo()).await;

    let mut graph = db.graph();
    let users: Vec<_> = (0..3)
        .map(|i| {
            let user = graph.insert("User").unwrap();
            graph.assign(user, "name", format!("user {i}")).unwrap();
            user
        })
        .collect();

    db.insert_graph(&mut graph).await.unwrap();

    let stored_ids = s.stored_column("user", "id").await;
    let stored_names = s.stored_column("user", "name").await;

    for (i, user) in users.into_iter().enumerate() {
        assert_eq!(graph.get(user, "id").unwrap(), &stored_ids[i]);
        assert_eq!(graph.get(user, "name").unwrap(), &stored_names[i]);
    }
}

async fn explicit_foreign_key_needs_no_prerequisite(s: impl Setup) {
    let db = s.setup(fixtures::user_todo()).await;

    let mut users = db.graph();
    let user = users.insert("User").unwrap();
    users.assign(user, "name", "alice").unwrap();
    db.insert_graph(&mut users).await.unwrap();
    let user_id = users.get(user, "id").unwrap().clone();

    let mut todos = db.graph();
    let todo = todos.insert("Todo").unwrap();
    todos.set(todo, "user_id", user_id.clone()).unwrap();
    todos.assign(todo, "title", "later").unwrap();
    db.insert_graph(&mut todos).await.unwrap();

    assert_eq!(s.exec_log().len(), 2);
    assert_eq!(todos.get(todo, "user_id").unwrap(), &user_id);
    assert_eq!(s.stored_column("todo", "user_id").await, vec![user_id]);
}

async fn empty_graph_executes_empty_batch(s: impl Setup) {
    let db = s.setup(fixtures::user_todo()).await;

    let mut graph = db.graph();
    let summary = db.insert_graph(&mut graph).await.unwrap();

    assert_eq!(summary.written, 0);
    assert!(s.exec_log().last().inserts.is_empty());
    assert!(s.exec_log().last().results.is_empty());
}

async fn table_name_prefix(s: impl Setup) {
    let mut builder = fixtures::user_todo();
    builder.table_name_prefix("t1_");
    let db = s.setup(builder).await;

    let mut graph = db.graph();
    let user = graph.insert("User").unwrap();
    graph.assign(user, "name", "alice").unwrap();
    db.insert_graph(&mut graph).await.unwrap();

    assert_eq!(s.exec_log().last_tables(), ["t1_user"]);
    assert_eq!(s.stored_column("t1_user", "name").await, vec![Value::from("alice")]);
}

async fn explicit_auto_key_is_kept(s: impl Setup) {
    let db = s.setup(fixtures::user_todo()).await;

    let mut graph = db.graph();
    let user = graph.insert("User").unwrap();
    let todo = graph.insert("Todo").unwrap();
    graph.set(user, "id", 500_i64).unwrap();
    graph.assign(user, "name", "alice").unwrap();
    graph.assign(todo, "title", "one").unwrap();
    graph.depends_on(todo, user);

    db.insert_graph(&mut graph).await.unwrap();

    assert_eq!(graph.get(user, "id").unwrap(), &Value::I64(500));
    assert_eq!(graph.get(todo, "user_id").unwrap(), &Value::I64(500));
    assert_eq!(s.stored_column("user", "id").await, vec![Value::I64(500)]);
    assert_eq!(s.stored_column("todo", "user_id").await, vec![Value::I64(500)]);

    let executed = s.exec_log().last();
    assert!(executed.inserts[0].returning.is_empty());
}

tests!(
    auto_key_is_read_back,
    explicit_auto_key_is_kept,
    foreign_key_follows_pending_identity,
    identities_are_read_back_positionally,
    explicit_foreign_key_needs_no_prerequisite,
    empty_graph_executes_empty_batch,
    table_name_prefix,
);
