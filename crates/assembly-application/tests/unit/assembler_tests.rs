//! Registration and release tests

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use assembly_application::{Assembler, AssemblerOptions};
use assembly_domain::{Error, Literals, NO_DEPENDENCIES, Producer};

fn chain() -> Assembler {
    let mut assembler = Assembler::create();
    assembler
        .register("var1", NO_DEPENDENCIES, || 1)
        .unwrap()
        .register("var2", ["var1"], |var1: &i32| 2 + var1)
        .unwrap()
        .register("var3", ["var1", "var2"], |var1: &i32, var2: &i32| {
            var1 * 10 + var2
        })
        .unwrap();
    assembler
}

#[test]
fn test_release_multiple_values() {
    let mut assembler = chain();
    let (v1, v3) = assembler
        .assemble()
        .unwrap()
        .release_into::<(i32, i32)>(&["var1", "var3"])
        .unwrap();

    assert_eq!(*v1, 1);
    assert_eq!(*v3, 13);
}

#[test]
fn test_release_single_value() {
    let mut assembler = chain();
    let v3 = assembler.assemble().unwrap().release_as::<i32>("var3").unwrap();
    assert_eq!(*v3, 13);
}

#[test]
fn test_release_follows_requested_order() {
    let mut assembler = chain();
    assembler.assemble().unwrap();

    let (v3, v1, v2) = assembler
        .release_into::<(i32, i32, i32)>(&["var3", "var1", "var2"])
        .unwrap();
    assert_eq!((*v3, *v1, *v2), (13, 1, 3));

    let values = assembler.release_all(["var2", "var3"]).unwrap();
    let values: Vec<i32> = values
        .iter()
        .map(|value| *value.downcast_ref::<i32>().unwrap())
        .collect();
    assert_eq!(values, vec![3, 13]);
}

#[test]
fn test_producer_arity_must_match_dependencies() {
    let mut assembler = Assembler::create();
    let err = assembler
        .register("var1", ["a", "b"], |a: &i32| *a)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidProducerKind { ref name, .. } if name == "var1"));
    assert!(!assembler.contains("var1"));
}

#[test]
fn test_assemble_returns_the_assembler() {
    let mut assembler = chain();
    let returned = assembler.assemble().unwrap();
    assert_eq!(returned.len(), 3);
    assert!(returned.is_resolved("var3"));
}

#[test]
fn test_resolved_value_cannot_be_overwritten() {
    let mut assembler = Assembler::create();
    assembler
        .register("var1", NO_DEPENDENCIES, || 1)
        .unwrap()
        .assemble()
        .unwrap();
    assert_eq!(*assembler.release_as::<i32>("var1").unwrap(), 1);

    assembler.register("var1", NO_DEPENDENCIES, || 2).unwrap();
    assert_eq!(*assembler.release_as::<i32>("var1").unwrap(), 1);
    assembler.assemble().unwrap();
    assert_eq!(*assembler.release_as::<i32>("var1").unwrap(), 1);
}

#[test]
fn test_literals_feed_producers() {
    let mut assembler = Assembler::with_literals(Literals::new().with("foo", String::from("bar")));
    assembler
        .register("dosomething", ["foo"], |foo: &String| format!("{foo}{foo}"))
        .unwrap()
        .assemble()
        .unwrap();

    let (test1, test2) = assembler
        .release_into::<(String, String)>(&["dosomething", "foo"])
        .unwrap();
    assert_eq!(test1.as_str(), "barbar");
    assert_eq!(test2.as_str(), "bar");
}

#[test]
fn test_literals_are_immutable() {
    let mut assembler = Assembler::with_literals(Literals::new().with("foo", String::from("bar")));
    assembler
        .register("foo", NO_DEPENDENCIES, || String::from("baz"))
        .unwrap()
        .assemble()
        .unwrap();

    assert_eq!(assembler.release_as::<String>("foo").unwrap().as_str(), "bar");
}

#[test]
fn test_strict_registration_rejects_immutable_names() {
    let options = AssemblerOptions::default().with_strict_registration(true);
    let mut assembler =
        Assembler::with_literals(Literals::new().with("foo", String::from("bar"))).with_options(options);

    let err = assembler
        .register("foo", NO_DEPENDENCIES, || String::from("baz"))
        .unwrap_err();
    assert!(matches!(err, Error::ImmutableEntry { ref name } if name == "foo"));
    assert_eq!(assembler.release_as::<String>("foo").unwrap().as_str(), "bar");
}

#[test]
fn test_parameters_are_bound_in_declared_order() {
    let literals = Literals::new()
        .with("v1", false)
        .with("v2", String::from("foo"))
        .with("v3", 4_i32);
    let mut assembler = Assembler::with_literals(literals);
    assembler
        .register(
            "foo",
            ["v3", "v2", "v1"],
            |v3: &i32, v2: &String, v1: &bool| {
                format!("{v3}{v2} {}", if *v1 { "true" } else { "false" })
            },
        )
        .unwrap()
        .assemble()
        .unwrap();

    assert_eq!(assembler.release_as::<String>("foo").unwrap().as_str(), "4foo false");
}

#[test]
fn test_release_unknown_name() {
    let mut assembler = chain();
    assembler.assemble().unwrap();
    let err = assembler.release("missing").unwrap_err();
    assert!(matches!(err, Error::UnknownDependency { ref name, required_by: None } if name == "missing"));
    assert!(assembler.release_all(["var1", "missing"]).is_err());
}

#[test]
fn test_release_before_assemble_is_not_resolved() {
    let assembler = chain();
    assert!(matches!(
        assembler.release("var1"),
        Err(Error::NotResolved { ref name }) if name == "var1"
    ));
}

#[test]
fn test_release_with_wrong_type() {
    let mut assembler = chain();
    assembler.assemble().unwrap();
    let err = assembler.release_as::<String>("var1").unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { ref name, found: "i32", .. } if name == "var1"));

    let err = assembler
        .release_into::<(i32, i32)>(&["var1"])
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn test_prepared_and_untyped_producers() {
    let counter = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&counter);
    let mut assembler = Assembler::create();
    assembler
        .register_producer(
            "n",
            Producer::new(NO_DEPENDENCIES, move || seen.fetch_add(1, Ordering::SeqCst) + 10),
        )
        .unwrap()
        .register_producer(
            "len",
            Producer::from_values(["n"], |args| {
                let n = args[0].downcast_ref::<usize>().ok_or("n is not a usize")?;
                Ok(assembly_domain::Value::new(n.to_string().len()))
            }),
        )
        .unwrap()
        .assemble()
        .unwrap();

    assert_eq!(*assembler.release_as::<usize>("n").unwrap(), 10);
    assert_eq!(*assembler.release_as::<usize>("len").unwrap(), 2);
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}
