use pretty_assertions::assert_eq;
use seedling::{
    engine::{CyclePolicy, UnlinkedReference},
    stmt::Value,
    Graph,
};
use tests::*;

async fn missing_dependency_queues_nothing(s: impl Setup) {
    let db = s.setup(fixtures::user_todo()).await;

    let mut graph = db.graph();
    let todo = graph.insert("Todo").unwrap();
    graph.assign(todo, "title", "orphan").unwrap();

    let err = db.insert_graph(&mut graph).await.unwrap_err();

    assert!(err.is_dependency_not_found());
    assert_eq!(
        err.to_string(),
        "dependency not found: Todo (table `todo`) column `user_id` references User column `id`, \
         but no operation for User is a prerequisite in this batch"
    );
    assert!(s.exec_log().is_empty());
    assert!(s.stored_column("todo", "id").await.is_empty());
}

async fn optional_reference_without_dependency_is_null(s: impl Setup) {
    let db = s.setup(fixtures::reviewed_doc()).await;

    let mut graph = db.graph();
    let author = graph.insert("Author").unwrap();
    let doc = graph.insert("Doc").unwrap();
    graph.depends_on(doc, author);

    db.insert_graph(&mut graph).await.unwrap();

    assert_eq!(graph.get(doc, "reviewer_id").unwrap(), &Value::Null);
    assert_eq!(
        graph.get(doc, "author_id").unwrap(),
        graph.get(author, "id").unwrap()
    );
    assert_eq!(s.stored_column("doc", "reviewer_id").await, vec![Value::Null]);
}

fn ring(graph: &mut Graph) -> [seedling::NodeId; 3] {
    let a = graph.insert("A").unwrap();
    let b = graph.insert("B").unwrap();
    let c = graph.insert("C").unwrap();
    graph.depends_on(a, b).depends_on(b, c).depends_on(c, a);
    [a, b, c]
}

async fn cycle_is_reported(s: impl Setup) {
    let db = s.setup(fixtures::ring()).await;

    let mut graph = db.graph();
    let [a, b, c] = ring(&mut graph);

    let summary = db.insert_graph(&mut graph).await.unwrap();

    // Writing `a` walks `b` then `c`, whose reference back to `a` is cut
    assert_eq!(summary.written, 3);
    assert_eq!(
        summary.unlinked,
        vec![UnlinkedReference {
            node: c,
            field: db.schema().model_by_name("C").unwrap().id.field(1),
            target: a,
        }]
    );
    assert_eq!(s.exec_log().last_tables(), ["c", "b", "a"]);

    assert_eq!(graph.get(c, "a_id").unwrap(), &Value::Null);
    assert_eq!(graph.get(b, "c_id").unwrap(), graph.get(c, "id").unwrap());
    assert_eq!(graph.get(a, "b_id").unwrap(), graph.get(b, "id").unwrap());
}

async fn cycle_is_rejected(s: impl Setup) {
    let mut builder = fixtures::ring();
    builder.cycle_policy(CyclePolicy::Reject);
    let db = s.setup(builder).await;

    let mut graph = db.graph();
    ring(&mut graph);

    let err = db.insert_graph(&mut graph).await.unwrap_err();

    assert!(err.is_unresolved_cycle());
    assert!(
        err.to_string()
            .contains("C (table `c`) column `a_id` references A column `id`"),
        "{err}"
    );
    assert!(s.exec_log().is_empty());
}

async fn graph_from_other_db_is_rejected(s: impl Setup) {
    let db = s.setup(fixtures::user_todo()).await;
    let other = s.connect(fixtures::user_todo()).await.unwrap();

    let mut graph = other.graph();
    graph.insert("User").unwrap();

    assert!(db.insert_graph(&mut graph).await.is_err());
    assert!(s.exec_log().is_empty());
}

tests!(
    missing_dependency_queues_nothing,
    optional_reference_without_dependency_is_null,
    cycle_is_reported,
    cycle_is_rejected,
    graph_from_other_db_is_rejected,
);
