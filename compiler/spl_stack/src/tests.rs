use super::*;

/// Depth of a right-leaning chain of nested nodes.
enum Nest {
    Leaf,
    Inner(Box<Nest>),
}

fn depth(node: &Nest) -> u64 {
    ensure_sufficient_stack(|| match node {
        Nest::Leaf => 0,
        Nest::Inner(child) => depth(child) + 1,
    })
}

fn chain(len: u64) -> Nest {
    let mut node = Nest::Leaf;
    for _ in 0..len {
        node = Nest::Inner(Box::new(node));
    }
    node
}

/// Iterative drop so the deep chain does not overflow while being freed.
fn dismantle(mut node: Nest) {
    while let Nest::Inner(child) = node {
        node = *child;
    }
}

#[test]
fn test_shallow_nesting() {
    let tree = chain(10);
    assert_eq!(depth(&tree), 10);
    dismantle(tree);
}

#[test]
fn test_deep_nesting() {
    // Far deeper than an 8MB stack survives without growth
    let tree = chain(100_000);
    assert_eq!(depth(&tree), 100_000);
    dismantle(tree);
}

#[test]
fn test_returns_closure_result() {
    assert_eq!(ensure_sufficient_stack(|| 42), 42);
}

#[test]
fn test_works_with_result_type() {
    let result: Result<i32, &str> = ensure_sufficient_stack(|| Ok(123));
    assert_eq!(result, Ok(123));
}
