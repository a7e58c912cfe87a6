use pretty_assertions::assert_eq;
use seedling::stmt::{Symbol, Value};
use tests::*;

async fn manual_key_is_copied_before_execution(s: impl Setup) {
    let db = s.setup(fixtures::primary_foreign()).await;

    let mut graph = db.graph();
    let foreign = graph.insert("Foreign").unwrap();
    let primary = graph.insert("Primary").unwrap();
    graph.assign(primary, "K1", "X").unwrap();
    graph.depends_on(foreign, primary);

    db.insert_graph(&mut graph).await.unwrap();

    assert_eq!(graph.get(foreign, "primary_k1").unwrap(), &Value::from("X"));
    assert_eq!(s.exec_log().last_tables(), ["primary", "foreign"]);

    // The key was known at write time, so only the identity is read back
    let executed = s.exec_log().last();
    assert!(executed.inserts[0].returning.is_empty());
    assert_eq!(executed.inserts[1].returning, vec!["id".to_string()]);
    assert_eq!(
        executed.inserts[1].column("primary_k1"),
        Some(&Symbol::Known(Value::from("X")))
    );
}

async fn keys_chain_through_composite_key(s: impl Setup) {
    let db = s.setup(fixtures::chained_keys()).await;

    let mut graph = db.graph();
    let grant = graph.insert("Grant").unwrap();
    let membership = graph.insert("Membership").unwrap();
    let account = graph.insert("Account").unwrap();

    graph.set(membership, "seq", 7_i32).unwrap();
    graph.depends_on(membership, account);
    graph.depends_on(grant, membership);

    db.insert_graph(&mut graph).await.unwrap();

    assert_eq!(
        s.exec_log().last_tables(),
        ["account", "membership", "grant"]
    );

    let account_id = graph.get(account, "id").unwrap().clone();
    assert_eq!(graph.get(membership, "account_id").unwrap(), &account_id);
    assert_eq!(graph.get(grant, "account_id").unwrap(), &account_id);
    assert_eq!(graph.get(grant, "seq").unwrap(), &Value::I32(7));

    assert_eq!(s.stored_column("grant", "account_id").await, vec![account_id]);
    assert_eq!(s.stored_column("grant", "seq").await, vec![Value::I32(7)]);
}

async fn first_prerequisite_of_target_model_wins(s: impl Setup) {
    let db = s.setup(fixtures::user_todo()).await;

    let mut graph = db.graph();
    let alice = graph.insert("User").unwrap();
    let bob = graph.insert("User").unwrap();
    let todo = graph.insert("Todo").unwrap();
    graph.assign(alice, "name", "alice").unwrap();
    graph.assign(bob, "name", "bob").unwrap();
    graph.depends_on(todo, bob).depends_on(todo, alice);

    db.insert_graph(&mut graph).await.unwrap();

    assert_eq!(
        graph.get(todo, "user_id").unwrap(),
        graph.get(bob, "id").unwrap()
    );
}

tests!(
    manual_key_is_copied_before_execution,
    keys_chain_through_composite_key,
    first_prerequisite_of_target_model_wins,
);
