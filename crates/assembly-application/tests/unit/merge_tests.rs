//! Merge tests

use assembly_application::Assembler;
use assembly_domain::{Literals, NO_DEPENDENCIES};

fn assembled(name: &str, value: i32) -> Assembler {
    let mut assembler = Assembler::create();
    assembler
        .register(name, NO_DEPENDENCIES, move || value)
        .unwrap()
        .assemble()
        .unwrap();
    assembler
}

#[test]
fn test_merge_two_assemblies() {
    let sut1 = assembled("var1", 1);
    let sut2 = assembled("var2", 2);

    let (v1, v2) = sut1
        .merge(&sut2)
        .release_into::<(i32, i32)>(&["var1", "var2"])
        .unwrap();
    assert_eq!((*v1, *v2), (1, 2));
}

#[test]
fn test_merge_with_empty_assembly_changes_nothing() {
    let sut1 = assembled("var1", 1).merge(&assembled("var2", 2));
    let merged = sut1.merge(&Assembler::create());

    assert_eq!(merged.len(), sut1.len());
    assert_eq!(
        merged.registry().names().collect::<Vec<_>>(),
        sut1.registry().names().collect::<Vec<_>>()
    );
    let (v1, v2) = merged
        .release_into::<(i32, i32)>(&["var1", "var2"])
        .unwrap();
    assert_eq!((*v1, *v2), (1, 2));
}

#[test]
fn test_merge_is_left_biased() {
    let left = assembled("shared", 1);
    let right = assembled("shared", 99);

    assert_eq!(*left.merge(&right).release_as::<i32>("shared").unwrap(), 1);
    assert_eq!(*right.merge(&left).release_as::<i32>("shared").unwrap(), 99);
}

#[test]
fn test_pending_left_entry_still_wins() {
    let mut left = Assembler::create();
    left.register("shared", NO_DEPENDENCIES, || String::from("left"))
        .unwrap();
    let right = Assembler::with_literals(Literals::new().with("shared", String::from("right")));

    let mut merged = left.merge(&right);
    assert!(!merged.is_resolved("shared"));
    merged.assemble().unwrap();
    assert_eq!(merged.release_as::<String>("shared").unwrap().as_str(), "left");
}

#[test]
fn test_merged_assembly_is_independent_of_sources() {
    let mut left = Assembler::create();
    left.register("a", NO_DEPENDENCIES, || 1).unwrap();
    let right = assembled("b", 2);

    let mut merged = left.merge(&right);
    left.register("late", NO_DEPENDENCIES, || 3).unwrap();
    left.assemble().unwrap();

    assert!(!merged.contains("late"));
    assert!(!merged.is_resolved("a"));
    merged.assemble().unwrap();
    assert_eq!(*merged.release_as::<i32>("a").unwrap(), 1);
    assert_eq!(merged.len(), 2);
}
