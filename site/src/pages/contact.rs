use super::{CONTACT_EMAIL, CONTACT_MAILTO, layout};
use blocktree_core::ContactForm;
use maud::{Markup, html};

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! We'll get back to you soon.";
pub const DELIVERY_FAILED_MESSAGE: &str = "We could not deliver your message. Please try again later.";

/// Result of a form submission, shown above the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    Error(String),
    Success,
}

const OTHER_CHANNELS: [(&str, &str, &str, &str); 3] = [
    ("Email", CONTACT_EMAIL, CONTACT_MAILTO, "Send Email"),
    ("X", "@IbaiBasabe", "https://x.com/IbaiBasabe", "Visit X Profile"),
    ("Telegram", "@dribai", "https://t.me/dribai", "Message Us"),
];

/// Contact form. `form` prefills the inputs so a rejected submission keeps
/// what the visitor typed.
pub fn contact_page(form: &ContactForm, outcome: Option<&ContactOutcome>) -> Markup {
    layout(
        "Contact Us",
        html! {
            section {
                h1 { "CONTACT US" }
                p {
                    "Have questions about Blocktree or want to collaborate? "
                    strong { "Reach out" }
                    " to our team, we'd love to hear from you!"
                }
            }
            section class="contact-form" {
                @match outcome {
                    Some(ContactOutcome::Error(msg)) => p class="error" { (msg) },
                    Some(ContactOutcome::Success) => p class="success" { (SUCCESS_MESSAGE) },
                    None => {}
                }
                form method="post" action="/contact" {
                    p {
                        label for="name" { "Name" } br;
                        input type="text" id="name" name="name" value=(form.name) required;
                    }
                    p {
                        label for="email" { "Your Email" } br;
                        input type="email" id="email" name="email" value=(form.email) required;
                    }
                    p {
                        label for="message" { "Message" } br;
                        textarea id="message" name="message" rows="5" required { (form.message) }
                    }
                    button type="submit" class="button" { "Send Message" }
                }
            }
            section {
                h2 { "OTHER WAYS TO REACH US" }
                @for (channel, handle, href, label) in OTHER_CHANNELS {
                    article {
                        h3 { (channel) }
                        p { (handle) }
                        a class="button" href=(href) rel="noopener noreferrer" { (label) }
                    }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_keeps_input() {
        let form = ContactForm {
            name: "Ada".to_string(),
            email: "ada.example.com".to_string(),
            message: "<hi>".to_string(),
        };
        let outcome = ContactOutcome::Error("Please provide a valid email address.".to_string());
        let page = contact_page(&form, Some(&outcome)).into_string();
        assert!(page.contains(r#"class="error""#));
        assert!(page.contains(r#"value="ada.example.com""#));
        assert!(page.contains("&lt;hi&gt;"));
    }

    #[test]
    fn blank_form_has_no_banner() {
        let page = contact_page(&ContactForm::default(), None).into_string();
        assert!(!page.contains(r#"class="error""#));
        assert!(!page.contains(SUCCESS_MESSAGE));
        assert!(page.contains(r#"action="/contact""#));
        assert!(page.contains(r#"href="mailto:contact@blocktree.com""#));
    }
}
