use super::{call_to_action, layout};
use maud::{Markup, html};

struct TeamMember {
    name: &'static str,
    role: &'static str,
    photo: &'static str,
    bio: &'static str,
}

const TEAM: [TeamMember; 2] = [
    TeamMember {
        name: "Ibai Basabe",
        role: "Co-Founder & Developer",
        photo: "/ibai.jpg",
        bio: "Ibai Basabe is a blockchain pioneer with over a decade of experience in decentralized systems, leading Blocktree's mission to scale blockchain for the stars.",
    },
    TeamMember {
        name: "Rebekah Yu",
        role: "Co-Founder & Designer",
        photo: "/rebekah.jpg",
        bio: "Rebekah is a financial technologist with a passion for design and innovation, responsible for Blocktree's visual identity and user experience.",
    },
];

const SECTIONS: [(&str, &str); 3] = [
    (
        "Our Mission",
        "Our mission is to redefine the boundaries of blockchain technology by creating a spatially scalable \"blocktree\" architecture that empowers the next generation of decentralized applications. We aim to build a permissionless, borderless network that supports AI-driven economies, edge DApps, and financial systems for interstellar exploration.",
    ),
    (
        "Our Vision",
        "We envision a world where blockchain technology is the backbone of global and extraterrestrial economies: a scalable, efficient, and trustless infrastructure that supports autonomous AI agents and space-faring civilizations, from machine-to-machine transactions on Earth to interstellar commerce on Mars and beyond.",
    ),
    (
        "Our History",
        "Blocktree was founded in 2024 by blockchain enthusiasts, AI researchers, and space technology advocates. The concept of a \"blocktree\" as a spatially scalable blockchain structure sparked the idea for a new kind of decentralized network, one that could handle the demands of AI economies, edge computing, and interstellar finance.",
    ),
];

pub fn about_page() -> Markup {
    layout(
        "About Us",
        html! {
            section class="hero" {
                h1 { "About Blocktree" }
                p { "Pioneering the future of blockchain with scalable solutions for AI, edge computing, and interstellar exploration." }
            }
            @for (heading, text) in SECTIONS {
                section {
                    h2 { (heading) }
                    p { (text) }
                }
            }
            section {
                h2 { "Meet Our Team" }
                @for member in &TEAM {
                    article {
                        img src=(member.photo) alt=(member.name) width="96";
                        h3 { (member.name) }
                        p { strong { (member.role) } }
                        p { (member.bio) }
                    }
                }
            }
            (call_to_action(
                "Join Our Journey",
                "Want to be part of the Blocktree revolution? Get in touch with us to learn more or collaborate.",
                "Contact Us",
            ))
        },
    )
}
