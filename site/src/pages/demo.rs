use super::layout;
use blocktree_core::{Branch, ChainSnapshot, TreeNode};
use maud::{Markup, PreEscaped, html};

/// Outcome of the last mine/reset trigger on this render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoStatus {
    Idle,
    Mined,
    Reset,
    Error,
}

impl DemoStatus {
    pub fn label(self) -> &'static str {
        match self {
            DemoStatus::Idle => "idle",
            DemoStatus::Mined => "mined",
            DemoStatus::Reset => "reset",
            DemoStatus::Error => "error",
        }
    }
}

// Disable the trigger buttons while a request is in flight.
const DISABLE_ON_SUBMIT: &str = r#"
document.querySelectorAll("form.trigger").forEach(function (f) {
  f.addEventListener("submit", function () {
    document.querySelectorAll("form.trigger button").forEach(function (b) { b.disabled = true; });
  });
});
"#;

fn render_node(node: &TreeNode) -> Markup {
    html! {
        li {
            @match &node.attributes {
                Some(attrs) => span title=(attrs.full_hash) { (node.name) " · " (attrs.location) },
                None => strong { (node.name) },
            }
            @if !node.children.is_empty() {
                ul {
                    @for child in &node.children {
                        (render_node(child))
                    }
                }
            }
        }
    }
}

pub fn demo_page(snapshot: &ChainSnapshot, tree: &TreeNode, status: DemoStatus) -> Markup {
    // Optional branches are listed only once the service reports blocks for them.
    let always_listed = [Branch::Main, Branch::Earth, Branch::Mars];

    layout(
        "Demo",
        html! {
            section class="hero" {
                h1 { "Blocktree Demo" }
                p { "Watch the blockchain split into Earth and Mars branches!" }
            }
            section {
                p { "Status: " strong class={ "status-" (status.label()) } { (status.label()) } }
                form class="trigger" method="post" action="/demo/mine" style="display:inline" {
                    button type="submit" class="button" { "Mine Block" }
                }
                " "
                form class="trigger" method="post" action="/demo/reset" style="display:inline" {
                    button type="submit" class="button" { "Reset Chain" }
                }
                script { (PreEscaped(DISABLE_ON_SUBMIT)) }
            }
            section class="tree" {
                h2 { "Blocktree" }
                @if tree.children.is_empty() {
                    p { "Loading tree..." }
                } @else {
                    // Root is synthetic and not counted.
                    p class="tree-summary" {
                        (tree.node_count() - 1) " blocks, depth " (tree.depth() - 1)
                        @if tree.is_linear() { ", no splits yet" }
                    }
                    ul { (render_node(tree)) }
                }
            }
            @for branch in Branch::ALL {
                @let blocks = snapshot.branch(branch);
                @if always_listed.contains(&branch) || !blocks.is_empty() {
                    section {
                        h2 { (branch.title()) }
                        ul {
                            @for block in blocks {
                                li {
                                    (block.location) " Block " (block.id) " (Hash: " (block.hash) ")"
                                    @if let Some(at) = block.timestamp_utc() {
                                        " mined " (at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use blocktree_core::{Block, build_tree};

    fn block(id: u64, location: &str) -> Block {
        Block {
            id,
            location: location.to_string(),
            hash: format!("hash{:04}", id),
            timestamp: 1_700_000_000_000,
        }
    }

    #[test]
    fn empty_snapshot_shows_loading() {
        let snapshot = ChainSnapshot::default();
        let page = demo_page(&snapshot, &build_tree(&snapshot), DemoStatus::Error).into_string();
        assert!(page.contains("Loading tree..."));
        assert!(page.contains("status-error"));
        assert!(page.contains("Main Chain"));
        assert!(!page.contains("Venus Branch"));
    }

    #[test]
    fn renders_blocks_and_tree() {
        let snapshot = ChainSnapshot {
            main_chain: vec![block(1, "Earth")],
            venus_branch: vec![block(2, "Venus")],
            ..Default::default()
        };
        let page = demo_page(&snapshot, &build_tree(&snapshot), DemoStatus::Mined).into_string();
        assert!(!page.contains("Loading tree..."));
        assert!(page.contains("Earth Block 1 (Hash: hash0001)"));
        assert!(page.contains("Venus Branch"));
        assert!(page.contains("R1 (hash0001)"));
        assert!(page.contains("2023-11-14 22:13:20 UTC"));
        // venus grafts onto the main tail when earth is empty
        assert!(page.contains("2 blocks, depth 2, no splits yet"));
    }

    #[test]
    fn summary_counts_split_branches() {
        let snapshot = ChainSnapshot {
            main_chain: vec![block(1, "Earth"), block(2, "Earth")],
            earth_branch: vec![block(3, "Earth")],
            mars_branch: vec![block(3, "Mars"), block(4, "Mars")],
            ..Default::default()
        };
        let page = demo_page(&snapshot, &build_tree(&snapshot), DemoStatus::Idle).into_string();
        assert!(page.contains("5 blocks, depth 4"));
        assert!(!page.contains("no splits yet"));
    }
}
