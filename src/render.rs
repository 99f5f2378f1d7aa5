/*!
 * Markdown rendering of directory trees
 */

use crate::types::DirectoryNode;

const CONNECTOR: &str = "├── ";
const INDENT: &str = "  ";

/// Render one tree as an indented markdown listing.
///
/// The root line carries no indentation or connector, only the name
/// (with a trailing slash for directories). Every descendant line is
/// indented two spaces per depth level behind a branch connector.
pub fn render_tree(node: &DirectoryNode) -> String {
    let mut out = String::new();
    render_node(node, 0, &mut out);
    out
}

/// Render several independently-selected trees back-to-back, separated
/// by one blank line between trees.
pub fn render_forest(nodes: &[DirectoryNode]) -> String {
    let rendered: Vec<String> = nodes.iter().map(render_tree).collect();
    rendered.join("\n")
}

fn render_node(node: &DirectoryNode, depth: usize, out: &mut String) {
    let suffix = if node.is_dir() { "/" } else { "" };

    if depth == 0 {
        // Top of each selected tree (workspace root included, which
        // carries the sentinel path): no indentation, no connector.
        out.push_str(&format!("{}{}\n", node.name, suffix));
    } else {
        out.push_str(&format!(
            "{}{}{}{}\n",
            INDENT.repeat(depth),
            CONNECTOR,
            node.name,
            suffix
        ));
    }

    for child in &node.children {
        render_node(child, depth + 1, out);
    }
}
