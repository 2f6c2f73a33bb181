use super::layout;
use maud::{Markup, html};

const FEATURES: [(&str, &str); 5] = [
    (
        "Spatial Scalability with Blocktree Architecture",
        "Blocktree introduces a \"blocktree\" structure that spatially scales blockchain networks, enabling growth without compromising performance. By partitioning the mining process, Blocktree ensures scalability for global and extraterrestrial applications.",
    ),
    (
        "AI Integration for Autonomous DeFi",
        "Integrate AI agents into Blocktree's ecosystem for autonomous decentralized finance (DeFi) operations. From borrowing to arbitrage and investing, AI-driven transactions are executed without human intervention.",
    ),
    (
        "Edge DApp Support for Low Latency",
        "Blocktree powers low-latency decentralized applications (DApps) at the network edge, supporting IoT, gaming, and real-time data processing with minimal delays.",
    ),
    (
        "Interstellar-Ready Finance",
        "Designed for space economies, Blocktree facilitates secure, scalable transactions for interstellar commerce, mining, and colonization.",
    ),
    (
        "Permissionless, Borderless Blockchain",
        "Blocktree's permissionless and borderless network enables global and extraterrestrial adoption, allowing anyone, anywhere, to participate.",
    ),
];

pub fn features_page() -> Markup {
    layout(
        "Features",
        html! {
            section class="hero" {
                h1 { "Blocktree Features" }
                p { "Discover the features that make Blocktree a blockchain scaling solution for the future." }
            }
            ol class="features" {
                @for (title, text) in FEATURES {
                    li {
                        h2 { (title) }
                        p { (text) }
                    }
                }
            }
        },
    )
}
