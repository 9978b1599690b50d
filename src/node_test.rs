use super::*;

#[test]
fn test_node() {
    let mut node: Node<u32, u32> = Node::new(10, 200, Handle::NIL);
    assert_eq!(node.is_red(), true);
    assert_eq!(node.left.is_nil(), true);
    assert_eq!(node.right.is_nil(), true);
    assert_eq!(node.as_entry().key, 10);
    assert_eq!(node.as_entry().value, 200);

    node.set_black();
    assert_eq!(node.is_black(), true);
    node.set_red();
    assert_eq!(node.is_black(), false);

    node.as_mut_entry().value = 300;
    assert_eq!(node.as_entry().value, 300);
}

#[test]
fn test_sentinel() {
    let node: Node<u32, u32> = Node::sentinel();
    assert_eq!(node.is_black(), true);
    assert_eq!(node.entry.is_none(), true);
    assert_eq!(node.parent, Handle::NIL);
    assert_eq!(format!("{}{}", Color::Black, Color::Red), "BR");
}

#[test]
#[should_panic(expected = "sentinel has no entry")]
fn test_sentinel_entry() {
    let node: Node<u32, u32> = Node::sentinel();
    node.as_entry();
}
