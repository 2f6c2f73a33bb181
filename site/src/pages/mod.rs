//! Server-rendered pages.

mod about;
mod contact;
mod demo;
mod features;
mod home;
mod use_cases;

pub use about::about_page;
pub use contact::{ContactOutcome, DELIVERY_FAILED_MESSAGE, contact_page};
pub use demo::{DemoStatus, demo_page};
pub use features::features_page;
pub use home::home_page;
pub use use_cases::use_cases_page;

use maud::{DOCTYPE, Markup, PreEscaped, html};

macro_rules! contact_email {
    () => {
        "contact@blocktree.com"
    };
}

pub const CONTACT_EMAIL: &str = contact_email!();
pub const CONTACT_MAILTO: &str = concat!("mailto:", contact_email!());

const NAV: [(&str, &str); 5] = [
    ("/about", "About"),
    ("/features", "Features"),
    ("/use-cases", "Use Cases"),
    ("/demo", "Demo"),
    ("/contact", "Contact"),
];

/// Shared header, footer and document shell.
pub fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Blocktree - " (title) }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                header {
                    nav {
                        a class="brand" href="/" { "Blocktree" }
                        @for (href, label) in NAV {
                            a href=(href) { (label) }
                        }
                    }
                }
                main { (content) }
                footer {
                    p { "© 2025 Blocktree. All rights reserved." }
                    nav {
                        @for (href, label) in NAV {
                            a href=(href) { (label) }
                        }
                    }
                }
            }
        }
    }
}

/// Call-to-action block linking to the contact page.
fn call_to_action(heading: &str, text: &str, link_label: &str) -> Markup {
    html! {
        section class="cta" {
            h2 { (heading) }
            p { (text) }
            a class="button" href="/contact" { (link_label) }
        }
    }
}

const PAGE_CSS: &str = r#"
body{margin:0;font-family:system-ui,sans-serif;line-height:1.5;color:#1f2937;background:#f9fafb}
header nav,footer nav{display:flex;gap:1rem;align-items:center}
header{padding:.75rem 1rem;background:#fff;box-shadow:0 1px 3px rgba(0,0,0,.1)}
.brand{font-weight:700;margin-right:auto}
main{max-width:56rem;margin:0 auto;padding:2rem 1rem}
footer{padding:1.5rem 1rem;background:#e5e7eb}
.button{display:inline-block;padding:.5rem 1rem;border-radius:1rem;background:#111;color:#fff;text-decoration:none}
.error{color:#b91c1c}.success{color:#15803d}
.tree ul{list-style:none;padding-left:1.25rem;border-left:1px dashed #9ca3af}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_escapes_and_links() {
        let page = layout("<About>", html! { p { "body" } }).into_string();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("Blocktree - &lt;About&gt;"));
        assert!(page.contains(r#"href="/use-cases""#));
        assert!(page.contains("<p>body</p>"));
    }
}
