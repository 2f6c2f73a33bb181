use super::{call_to_action, layout};
use maud::{Markup, html};

const USE_CASES: [(&str, &str); 3] = [
    (
        "Space Economies",
        "Blocktree is designed to support financial systems for interstellar exploration. Whether it is facilitating commerce on Mars, managing mining operations on asteroids, or supporting colonization efforts, its permissionless network lets transactions occur across planets with the same efficiency as on Earth.",
    ),
    (
        "AI Economies",
        "Blocktree enables autonomous AI agents to participate in decentralized finance (DeFi) ecosystems, trading, investing, and performing arbitrage without human intervention. AI-driven economies can operate at scale, supporting machine-to-machine transactions in a trustless environment.",
    ),
    (
        "Edge DApps",
        "Blocktree powers low-latency decentralized applications at the network edge for IoT, gaming, and real-time data processing. Its spatially scalable structure lets edge DApps handle large transaction volumes with minimal delays, for smart cities, autonomous vehicles, and immersive gaming.",
    ),
];

pub fn use_cases_page() -> Markup {
    layout(
        "Use Cases",
        html! {
            section class="hero" {
                h1 { "Blocktree Use Cases" }
                p { "See how Blocktree is transforming the future with scalable blockchain solutions for AI, edge computing, and interstellar economies." }
            }
            @for (title, text) in USE_CASES {
                section {
                    h2 { (title) }
                    p { (text) }
                }
            }
            (call_to_action(
                "Ready to Explore Blocktree's Potential?",
                "Contact us to learn how Blocktree can enable your future with its blockchain solutions.",
                "Get in Touch",
            ))
        },
    )
}
