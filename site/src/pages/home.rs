use super::{CONTACT_MAILTO, layout};
use maud::{Markup, html};

const KEY_FEATURES: [&str; 5] = [
    "Spatial scalability with the blocktree architecture for infinite growth.",
    "AI integration for autonomous DeFi and machine-to-machine transactions.",
    "Edge DApp support for low-latency, decentralized applications.",
    "Interstellar-ready finance, supporting space economies and cross-planetary transactions.",
    "Permissionless, borderless blockchain for global and extraterrestrial adoption.",
];

const USE_CASES: [(&str, &str); 3] = [
    (
        "AI Economies",
        "Enable autonomous AI agents to trade, invest, and operate in decentralized finance (DeFi) without human intervention.",
    ),
    (
        "Edge DApps",
        "Power low-latency, decentralized apps for IoT, gaming, and real-time data processing at the network edge.",
    ),
    (
        "Space Economies",
        "Facilitate secure, scalable transactions for interstellar commerce, mining, and colonization.",
    ),
];

pub fn home_page() -> Markup {
    layout(
        "Powering Interstellar DApps and Space Economies",
        html! {
            section class="hero" {
                h1 { "Blocktree - Powering Interstellar DApps and Space Economies" }
                p { "Revolutionizing blockchain for the future of AI, edge computing, and beyond the stars." }
            }
            section {
                h2 { "What is Blocktree?" }
                p {
                    "Blocktree is a blockchain scaling solution that transforms traditional blockchain \
                     architectures into a spatially scalable \"blocktree\" structure. It enables efficient, \
                     permissionless networks for AI-driven economies, decentralized applications (DApps) \
                     at the edge, and financial systems for interstellar exploration."
                }
            }
            section {
                h2 { "Key Features" }
                ul {
                    @for feature in KEY_FEATURES {
                        li { (feature) }
                    }
                }
            }
            section {
                h2 { "Use Cases" }
                @for (title, text) in USE_CASES {
                    article {
                        h3 { (title) }
                        p { (text) }
                    }
                }
            }
            section class="cta" {
                h2 { "Join the Blocktree Revolution" }
                p { "Be part of the future of blockchain and space economies. Contact us to learn more or collaborate." }
                a class="button" href=(CONTACT_MAILTO) { "Get in Touch" }
                " "
                a class="button" href="/demo" { "See the Demo" }
            }
        },
    )
}
