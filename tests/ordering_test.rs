use jenkins_ui_suite::error::UiTestError;
use jenkins_ui_suite::ordering::{MethodState, MethodsOrder};

type Method = (&'static str, Vec<&'static str>);

fn order(methods: Vec<Method>) -> Result<MethodsOrder<Method>, UiTestError> {
    MethodsOrder::new(
        methods,
        |(name, _)| name.to_string(),
        |(_, deps)| deps.iter().map(|d| d.to_string()).collect(),
    )
}

#[test]
fn test_independent_methods_keep_declaration_order() {
    let o = order(vec![("c", vec![]), ("a", vec![]), ("b", vec![])]).unwrap();
    assert_eq!(o.names(), vec!["c", "a", "b"]);
    assert_eq!(o.len(), 3);
}

#[test]
fn test_groups_run_one_after_another() {
    let o = order(vec![
        ("x", vec![]),
        ("a", vec![]),
        ("y", vec!["x"]),
        ("b", vec!["a"]),
    ])
    .unwrap();
    assert_eq!(o.names(), vec!["x", "y", "a", "b"]);
    assert_eq!(o.group_of("x"), o.group_of("y"));
    assert_ne!(o.group_of("x"), o.group_of("a"));
}

#[test]
fn test_prerequisite_declared_later_runs_first() {
    let o = order(vec![("rename", vec!["create"]), ("create", vec![])]).unwrap();
    assert_eq!(o.names(), vec!["create", "rename"]);
}

#[test]
fn test_group_lifecycle() {
    let mut o = order(vec![
        ("create", vec![]),
        ("rename", vec!["create"]),
        ("delete", vec!["rename"]),
    ])
    .unwrap();

    assert!(!o.is_group_started("create"));
    assert!(!o.is_group_finished("create"));
    assert_eq!(o.state("create"), Some(MethodState::NotInvoked));

    o.mark_as_invoked("create");
    assert_eq!(o.state("create"), Some(MethodState::GroupOpen));
    assert!(o.is_group_started("rename"));
    assert!(!o.is_group_finished("rename"));

    o.mark_as_invoked("rename");
    assert!(o.is_group_finished("delete"));

    o.mark_as_invoked("delete");
    for name in ["create", "rename", "delete"] {
        assert_eq!(o.state(name), Some(MethodState::GroupFinished), "{}", name);
    }
}

#[test]
fn test_single_method_group_is_finished_by_itself() {
    let o = order(vec![("alone", vec![])]).unwrap();
    assert!(!o.is_group_started("alone"));
    assert!(o.is_group_finished("alone"));
}

#[test]
fn test_skipped_methods_close_their_group() {
    let mut o = order(vec![("a", vec![]), ("b", vec!["a"])]).unwrap();
    o.mark_as_invoked("a");
    o.mark_as_skipped("b");
    assert_eq!(o.state("a"), Some(MethodState::GroupFinished));
}

#[test]
fn test_dependents_are_transitive() {
    let o = order(vec![
        ("a", vec![]),
        ("b", vec!["a"]),
        ("c", vec!["b"]),
        ("d", vec!["a"]),
        ("e", vec![]),
    ])
    .unwrap();
    assert_eq!(o.dependents_of("a"), vec!["b", "c", "d"]);
    assert_eq!(o.dependents_of("b"), vec!["c"]);
    assert!(o.dependents_of("e").is_empty());
}

#[test]
fn test_unknown_prerequisite_is_rejected() {
    let err = order(vec![("a", vec!["missing"])]).unwrap_err();
    assert!(matches!(err, UiTestError::Ordering(_)));
    assert!(err.to_string().contains("'missing'"));
}

#[test]
fn test_duplicate_name_is_rejected() {
    let err = order(vec![("a", vec![]), ("a", vec![])]).unwrap_err();
    assert!(err.to_string().contains("more than once"));
}

#[test]
fn test_cycle_names_its_members() {
    let err = order(vec![
        ("ok", vec![]),
        ("a", vec!["b"]),
        ("b", vec!["a"]),
    ])
    .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("cycle"));
    assert!(message.contains("a") && message.contains("b"));
    assert!(!message.contains("ok"));
}

#[test]
fn test_second_root_joins_a_started_group() {
    let mut o = order(vec![("a", vec![]), ("c", vec![]), ("b", vec!["a", "c"])]).unwrap();
    assert_eq!(o.names(), vec!["a", "c", "b"]);
    assert_eq!(o.group_of("a"), o.group_of("c"));

    assert!(!o.is_group_started("c"));
    o.mark_as_invoked("a");
    assert!(o.is_group_started("c"));
    assert!(!o.is_group_finished("c"));
    o.mark_as_invoked("c");
    assert!(o.is_group_finished("b"));
}
