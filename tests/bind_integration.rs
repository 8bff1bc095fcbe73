//! Integration tests for binding checks and running them the way a caller
//! validating its own arguments would.

use bad_checks::prelude::*;
use bad_checks::{checks, is_bad_array, is_bad_null, is_bad_type};
use std::collections::BTreeMap;

/// A function that validates its arguments with bound checks and reports
/// every problem at once.
fn create_user(name: &Value, age: &Value, admin: &Value, tags: &Value) -> Result<(), Vec<String>> {
    let (msgs, [is_bad_string, is_bad_integer, is_bad_boolean, is_bad_string_array]) =
        bind_bad_checks(
            &"create_user()".into(),
            [
                checks::string().into(),
                checks::integer().into(),
                checks::boolean().into(),
                checks::string_array().into(),
            ],
        )
        .map_err(|fault| vec![fault.to_string()])?;

    let run = |check: &BoundCheck, args: &[Value]| {
        check.call(args).map_err(|fault| vec![fault.to_string()])
    };
    run(&is_bad_string, &[name.clone(), "name".into()])?;
    run(&is_bad_integer, &[age.clone(), "age".into(), 0.into(), 150.into()])?;
    run(&is_bad_boolean, &[admin.clone(), "admin".into()])?;
    run(&is_bad_string_array, &[tags.clone(), "tags".into()])?;

    if msgs.is_empty() {
        Ok(())
    } else {
        Err(msgs.strings())
    }
}

#[test]
fn test_all_arguments_valid() {
    let tags = Value::from(vec![Value::from("staff")]);
    assert_eq!(
        create_user(&"ada".into(), &36.into(), &false.into(), &tags),
        Ok(())
    );
}

#[test]
fn test_every_problem_is_reported_in_order() {
    let tags = Value::from(vec![Value::from("staff"), Value::from(1)]);
    let result = create_user(&Value::Null, &(-1).into(), &"yes".into(), &tags);
    assert_eq!(
        result,
        Err(vec![
            "create_user(): name is null not type 'string'".to_string(),
            "create_user(): age is -1 which is less than the minimum 0".to_string(),
            "create_user(): admin is type 'string' not 'boolean'".to_string(),
            "create_user(): tags[1] is type 'number' not 'string'".to_string(),
        ])
    );
}

#[test]
fn test_binding_nothing_returns_just_the_list() {
    let (msgs, bound) = bind_bad_checks(&"".into(), []).unwrap();
    assert!(msgs.is_empty());
    assert!(bound.is_empty());
}

#[test]
fn test_two_checks_give_two_bound_checks() {
    let (msgs, [b1, b2]) =
        bind_bad_checks(&"p".into(), [checks::boolean().into(), checks::string().into()]).unwrap();
    assert!(msgs.is_empty());
    assert_eq!(b1.check().name(), "is_bad_boolean");
    assert_eq!(b2.check().name(), "is_bad_string");
}

#[test]
fn test_invalid_appends_exactly_the_returned_explanation() {
    let (msgs, [is_bad_boolean]) =
        bind_bad_checks(&"p".into(), [checks::boolean().into()]).unwrap();

    let result = is_bad_boolean.call(&[Value::Null, "flag".into()]).unwrap();
    assert_eq!(msgs.len(), 1);
    assert_eq!(msgs.get(0), result.explanation().map(Value::from));

    let result = is_bad_boolean.call(&[Value::from(true), "flag".into()]).unwrap();
    assert_eq!(result, CheckResult::Valid);
    assert_eq!(msgs.len(), 1);
}

#[test]
fn test_repeated_failures_are_logged_twice() {
    let (msgs, [is_bad_string]) = bind_bad_checks(&"p".into(), [checks::string().into()]).unwrap();
    let args = [Value::from(5), "s".into()];
    is_bad_string.call(&args).unwrap();
    is_bad_string.call(&args).unwrap();
    assert_eq!(
        msgs.strings(),
        vec![
            "p: s is type 'number' not 'string'".to_string(),
            "p: s is type 'number' not 'string'".to_string(),
        ]
    );
}

#[test]
fn test_caller_pushing_a_non_string_makes_later_checks_fault() {
    let (msgs, [is_bad_string]) = bind_bad_checks(&"p".into(), [checks::string().into()]).unwrap();
    msgs.push(Value::Null);

    let err = is_bad_string.call(&["fine".into()]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Error: is_bad_string(): check_msgs[0] is null not type 'string'"
    );
    assert_eq!(msgs.len(), 1);
}

#[test]
fn test_direct_calls_without_binding() {
    let msgs = Value::from(Array::new());
    assert_eq!(
        is_bad_boolean(&"a".into(), &msgs, &Value::Null, "b")
            .unwrap()
            .explanation(),
        Some("a: b is null not type 'boolean'")
    );
    assert!(is_bad_boolean(&"a".into(), &msgs, &true.into(), "b")
        .unwrap()
        .is_valid());
    assert_eq!(
        is_bad_string(&"e".into(), &msgs, &Value::Object(BTreeMap::new()), "f")
            .unwrap()
            .explanation(),
        Some("e: f is type 'object' not 'string'")
    );
    assert!(is_bad_string(&"e".into(), &msgs, &"".into(), "f")
        .unwrap()
        .is_valid());

    let n = |min: f64, max: f64, d: f64| IntegerBounds::new().identifier("n").min(min).max(max).divisible_by(d);
    assert!(is_bad_integer(&"p".into(), &msgs, &7.into(), &n(0.0, 10.0, 1.0))
        .unwrap()
        .is_valid());
    assert_eq!(
        is_bad_integer(&"p".into(), &msgs, &11.into(), &n(0.0, 10.0, 1.0))
            .unwrap()
            .explanation(),
        Some("p: n is 11 which is greater than the maximum 10")
    );
    assert_eq!(
        is_bad_integer(&"p".into(), &msgs, &3.into(), &n(0.0, 10.0, 2.0))
            .unwrap()
            .explanation(),
        Some("p: n is 3 which is not divisible by 2")
    );
}

#[test]
fn test_primitives_never_touch_a_list() {
    assert!(is_bad_type("p", &Value::Null, "x", Kind::Object).is_valid());
    assert!(is_bad_array("p", &Value::from(vec![]), "x").is_valid());
    assert!(is_bad_null("p", &Value::Null, "x").is_valid());
    assert_eq!(
        is_bad_null("p", &Value::from(vec![]), "").explanation(),
        Some("p: A value is an array not null")
    );
}

#[test]
fn test_custom_check_binds_like_the_builtin_ones() {
    let non_empty = BadCheck::new("is_bad_non_empty", |msg_prefix, check_msgs, args| {
        let prefix = msg_prefix.as_str().unwrap_or_default();
        let result = match args.first() {
            Some(Value::String(s)) if !s.is_empty() => CheckResult::Valid,
            _ => CheckResult::Invalid(format!("{}: value is empty", prefix)),
        };
        if let (CheckResult::Invalid(msg), Some(msgs)) = (&result, check_msgs.as_array()) {
            msgs.push(msg.as_str());
        }
        Ok(result)
    });

    let (msgs, [check]) = bind_bad_checks(&"save()".into(), [non_empty.into()]).unwrap();
    assert!(check.call(&["x".into()]).unwrap().is_valid());
    assert_eq!(
        check.call(&["".into()]).unwrap().explanation(),
        Some("save(): value is empty")
    );
    assert_eq!(msgs.len(), 1);
}
