use super::*;

#[test]
fn registered_names_are_visible() {
    let mut reg = FunctionRegistry::new();
    reg.register("f1", Curve::from([0.1, 0.5, 0.9])).unwrap();
    reg.register("f2", Curve::from(vec![0.5])).unwrap();

    assert!(reg.contains("f1"));
    assert!(reg.contains(BUILTIN_LINEAR));
    assert!(!reg.contains("f3"));
    assert_eq!(reg.get("f1").unwrap().len(), 3);
    assert!(reg.get(BUILTIN_LINEAR).is_none());
    assert_eq!(reg.len(), 2);
    assert_eq!(reg.names().collect::<Vec<_>>(), vec!["f1", "f2"]);
}

#[test]
fn duplicate_name_is_rejected() {
    let mut reg = FunctionRegistry::new();
    reg.register("ease", Curve::from([0.5])).unwrap();
    let err = reg.register("ease", Curve::from([0.2])).unwrap_err();
    assert!(err.to_string().contains("duplicate function name 'ease'"));
    assert_eq!(reg.get("ease").unwrap().samples(), &[0.5]);
}

#[test]
fn malformed_registrations_are_rejected() {
    let mut reg = FunctionRegistry::new();
    assert!(reg.register("", Curve::default()).is_err());
    assert!(reg.register("two words", Curve::default()).is_err());
    assert!(reg.register(BUILTIN_LINEAR, Curve::default()).is_err());
    assert!(reg.register("nan", Curve::from([f64::NAN])).is_err());
    assert!(reg.is_empty());
}
