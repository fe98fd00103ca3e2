//! Pre-order traversal of a Starlark syntax tree

use tree_sitter::Node;

use super::starlark_parser::StarlarkAst;

/// Receives every named node reached by [`walk`].
///
/// `ancestors` runs from the statement being walked down to the node's parent.
pub trait Visitor<'tree> {
    fn visit(&mut self, node: Node<'tree>, ancestors: &[Node<'tree>]);
}

impl<'tree, F> Visitor<'tree> for F
where
    F: FnMut(Node<'tree>, &[Node<'tree>]),
{
    fn visit(&mut self, node: Node<'tree>, ancestors: &[Node<'tree>]) {
        self(node, ancestors)
    }
}

/// Walk every top-level statement of a module in source order
pub fn walk_module<'tree, V>(ast: &'tree StarlarkAst, visitor: &mut V)
where
    V: Visitor<'tree>,
{
    for statement in ast.statements() {
        walk(statement, visitor);
    }
}

/// Depth-first, pre-order walk of `root` and all of its named descendants.
///
/// Anonymous tokens (punctuation, keywords) are not reported, but the walk
/// still descends through them.
pub fn walk<'tree, V>(root: Node<'tree>, visitor: &mut V)
where
    V: Visitor<'tree>,
{
    let mut cursor = root.walk();
    let mut ancestors: Vec<Node<'tree>> = Vec::new();

    loop {
        let node = cursor.node();
        if node.is_named() {
            visitor.visit(node, &ancestors);
        }

        if cursor.goto_first_child() {
            ancestors.push(node);
            continue;
        }

        // Climb until a sibling is found; the cursor cannot leave `root`
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return;
            }
            ancestors.pop();
        }
    }
}
