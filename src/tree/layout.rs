use std::path::PathBuf;

use super::node::{Directory, Node};

/// One row of a flattened tree, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    /// Display name (filename component only).
    pub name: String,
    /// Full filesystem path.
    pub path: PathBuf,
    /// Nesting depth (1 = direct child of root).
    pub depth: usize,
    pub is_dir: bool,
    /// Whether this is the last sibling in its parent group.
    pub is_last: bool,
    /// Box-drawing prefix for tree display.
    pub prefix: String,
}

/// Flatten a tree into pre-order rows with `is_last` flags and prefixes.
///
/// Contents are emitted in their stored order; sort the tree first for a
/// canonical listing.
pub fn flatten(root: &Directory) -> Vec<TreeLine> {
    let mut lines = Vec::with_capacity(root.count_files(true) + root.count_directories(true));
    push_contents(root, 1, &mut lines);
    compute_prefixes(&mut lines);
    lines
}

fn push_contents(dir: &Directory, depth: usize, out: &mut Vec<TreeLine>) {
    let last = dir.contents().len().saturating_sub(1);
    for (i, node) in dir.contents().iter().enumerate() {
        out.push(TreeLine {
            name: node.name().to_string(),
            path: node.path().to_path_buf(),
            depth,
            is_dir: node.is_directory(),
            is_last: i == last,
            prefix: String::new(), // computed below
        });
        if let Node::Directory(child) = node {
            push_contents(child, depth + 1, out);
        }
    }
}

/// Compute prefix strings for all rows.
/// Uses the is_last flag of ancestors to determine continuation lines.
fn compute_prefixes(lines: &mut [TreeLine]) {
    // ancestor_is_last[d] = true means the ancestor at depth d + 1 was the last sibling
    let mut ancestor_is_last: Vec<bool> = Vec::new();

    for line in lines.iter_mut() {
        let depth = line.depth;
        ancestor_is_last.truncate(depth.saturating_sub(1));

        let mut prefix = String::new();
        for &was_last in &ancestor_is_last {
            if was_last {
                prefix.push_str("    ");
            } else {
                prefix.push_str("\u{2502}   "); // │
            }
        }

        if line.is_last {
            prefix.push_str("\u{2514}\u{2500}\u{2500} "); // └──
        } else {
            prefix.push_str("\u{251c}\u{2500}\u{2500} "); // ├──
        }

        line.prefix = prefix;
        ancestor_is_last.push(line.is_last);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::File;

    fn dir(path: &str, children: Vec<Node>) -> Directory {
        let mut d = Directory::empty(PathBuf::from(path));
        for c in children {
            d.push(c);
        }
        d
    }

    fn file(path: &str) -> Node {
        Node::File(File::from_path(PathBuf::from(path)))
    }

    #[test]
    fn flatten_is_pre_order_with_depths() {
        let root = dir(
            "/r",
            vec![
                Node::Directory(dir("/r/a", vec![file("/r/a/deep.txt")])),
                file("/r/b.txt"),
            ],
        );
        let lines = flatten(&root);
        let rows: Vec<(&str, usize)> = lines.iter().map(|l| (l.name.as_str(), l.depth)).collect();
        assert_eq!(rows, vec![("a", 1), ("deep.txt", 2), ("b.txt", 1)]);
    }

    #[test]
    fn prefixes_use_box_drawing() {
        let root = dir(
            "/r",
            vec![
                Node::Directory(dir("/r/a", vec![file("/r/a/deep.txt")])),
                file("/r/b.txt"),
            ],
        );
        let lines = flatten(&root);
        assert_eq!(lines[0].prefix, "\u{251c}\u{2500}\u{2500} ");
        assert_eq!(lines[1].prefix, "\u{2502}   \u{2514}\u{2500}\u{2500} ");
        assert_eq!(lines[2].prefix, "\u{2514}\u{2500}\u{2500} ");
    }

    #[test]
    fn last_ancestor_leaves_blank_column() {
        let root = dir(
            "/r",
            vec![Node::Directory(dir(
                "/r/a",
                vec![Node::Directory(dir("/r/a/b", vec![file("/r/a/b/c.txt")]))],
            ))],
        );
        let lines = flatten(&root);
        let c = lines.iter().find(|l| l.name == "c.txt").unwrap();
        assert_eq!(c.depth, 3);
        assert_eq!(c.prefix, "        \u{2514}\u{2500}\u{2500} ");
    }

    #[test]
    fn empty_root_has_no_lines() {
        assert!(flatten(&dir("/r", vec![])).is_empty());
    }
}
