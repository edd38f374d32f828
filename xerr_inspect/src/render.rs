//! Text rendering of hierarchies.

use xerr::hierarchy::ErrorHierarchy;
use xerr::kind::KindId;

/// Separator between kinds in a rendered ancestor chain.
pub const CHAIN_ARROW: &str = " → ";

/// Render the hierarchy as an indented box-drawing tree.
pub fn render_tree(hierarchy: &ErrorHierarchy) -> String {
    let mut out = String::new();
    out.push_str(hierarchy.root().name());
    out.push('\n');
    render_children(hierarchy, hierarchy.root().id(), "", &mut out);
    out
}

fn render_children(hierarchy: &ErrorHierarchy, id: KindId, prefix: &str, out: &mut String) {
    let children = hierarchy.children(id);
    for (i, &child) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        let (branch, extend) = if last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        let name = hierarchy.kind(child).map_or("?", |k| k.name());
        out.push_str(prefix);
        out.push_str(branch);
        out.push_str(name);
        out.push('\n');
        render_children(hierarchy, child, &format!("{prefix}{extend}"), out);
    }
}

/// Render `id` followed by its ancestors, e.g. `OrderNotFound → InvalidOrder → ...`.
pub fn render_chain(hierarchy: &ErrorHierarchy, id: KindId) -> String {
    let own = hierarchy.kind(id).into_iter();
    own.chain(hierarchy.ancestors(id))
        .map(|k| k.name())
        .collect::<Vec<_>>()
        .join(CHAIN_ARROW)
}

/// Deepest kind depth in the hierarchy.
pub fn max_depth(hierarchy: &ErrorHierarchy) -> usize {
    hierarchy.iter().map(|k| k.depth()).max().unwrap_or(0)
}
