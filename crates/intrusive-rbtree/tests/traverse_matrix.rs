use intrusive_rbtree::{Node, RbNode, RbTree};

fn build(keys: impl IntoIterator<Item = i32>) -> (Vec<RbNode<i32, ()>>, RbTree<i32>) {
    let mut arena: Vec<RbNode<i32, ()>> = keys.into_iter().map(|k| RbNode::new(k, ())).collect();
    let mut tree = RbTree::new();
    for i in 0..arena.len() as u32 {
        tree.insert(&mut arena, i).unwrap();
    }
    (arena, tree)
}

#[test]
fn inorder_is_ascending_for_shuffled_input() {
    let (arena, tree) = build([41, 7, 93, 18, 66, 2, 55, 30, 84, 12]);
    let mut keys = Vec::new();
    tree.foreach_inorder::<_, (), _>(&arena, |arena, i| {
        keys.push(arena[i as usize].k);
        Ok(())
    })
    .unwrap();
    assert_eq!(keys, vec![2, 7, 12, 18, 30, 41, 55, 66, 84, 93]);
}

#[test]
fn preorder_visits_parent_before_children() {
    let (arena, tree) = build(0..31);
    let mut seen = vec![false; arena.len()];
    tree.foreach_preorder::<_, String, _>(&arena, |arena, i| {
        if let Some(p) = arena[i as usize].p() {
            if !seen[p as usize] {
                return Err(format!("node {i} visited before parent {p}"));
            }
        }
        seen[i as usize] = true;
        Ok(())
    })
    .unwrap();
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn postorder_visits_children_before_parent() {
    let (arena, tree) = build(0..31);
    let mut seen = vec![false; arena.len()];
    tree.foreach_postorder::<_, String, _>(&arena, |arena, i| {
        let n = &arena[i as usize];
        for child in [n.l(), n.r()].into_iter().flatten() {
            if !seen[child as usize] {
                return Err(format!("parent {i} visited before child {child}"));
            }
        }
        seen[i as usize] = true;
        Ok(())
    })
    .unwrap();
    assert_eq!(tree.root().map(|r| seen[r as usize]), Some(true));
}

#[test]
fn print_order_starts_with_root_then_its_children() {
    let (arena, tree) = build(0..7);
    let mut order = Vec::new();
    tree.foreach_print::<_, (), _>(&arena, |_, i| {
        order.push(i);
        Ok(())
    })
    .unwrap();

    let root = tree.root().unwrap();
    let children: Vec<u32> = [arena[root as usize].l(), arena[root as usize].r()]
        .into_iter()
        .flatten()
        .collect();
    assert_eq!(order.len(), 7);
    assert_eq!(order[0], root);
    assert_eq!(&order[1..1 + children.len()], &children[..]);
}

#[test]
fn visitor_code_is_propagated_verbatim() {
    let (arena, tree) = build(0..100);
    let mut visited = 0;
    let res = tree.foreach_inorder(&arena, |arena, i| {
        visited += 1;
        if arena[i as usize].k == 42 {
            Err(-42)
        } else {
            Ok(())
        }
    });
    assert_eq!(res, Err(-42));
    assert_eq!(visited, 43);
}

#[test]
fn empty_tree_never_calls_visitor() {
    let (arena, tree) = build([]);
    let fail = |_: &[RbNode<i32, ()>], _: u32| Err::<(), _>("called");
    assert_eq!(tree.foreach_preorder(&arena, fail), Ok(()));
    assert_eq!(tree.foreach_inorder(&arena, fail), Ok(()));
    assert_eq!(tree.foreach_postorder(&arena, fail), Ok(()));
    assert_eq!(tree.foreach_print(&arena, fail), Ok(()));
}
