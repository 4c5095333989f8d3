// ============================================================================
// LEGAL PAGES - Privacy, Terms, Security (static text)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{text_element, ElementBuilder};
use crate::state::{AppState, Route};
use crate::views::shared::{legal_footer, route_link};

pub enum LegalPage {
    Privacy,
    Terms,
    Security,
}

struct Section {
    heading: &'static str,
    paragraphs: &'static [&'static str],
    bullets: &'static [&'static str],
}

const PRIVACY: &[Section] = &[
    Section {
        heading: "1. Information We Collect",
        paragraphs: &["We collect information that you provide directly to us, including when you create an account, make a transaction, or contact us for support. This may include your name, email address, company information, and transaction details."],
        bullets: &[],
    },
    Section {
        heading: "2. How We Use Your Information",
        paragraphs: &["We use the information we collect to:"],
        bullets: &[
            "Provide, maintain, and improve our services",
            "Process transactions and send related information",
            "Send technical notices and support messages",
            "Respond to your comments and questions",
            "Protect against fraud and abuse",
        ],
    },
    Section {
        heading: "3. Data Security",
        paragraphs: &["We implement appropriate technical and organizational measures to protect your personal information against unauthorized access, alteration, disclosure, or destruction. This includes encryption of data in transit and at rest."],
        bullets: &[],
    },
    Section {
        heading: "4. Your Rights",
        paragraphs: &["You have the right to access, update, or delete your personal information at any time. You can do this through your account settings or by contacting us directly."],
        bullets: &[],
    },
    Section {
        heading: "5. Contact Us",
        paragraphs: &["If you have any questions about this Privacy Policy, please contact us at privacy@b2bplatform.com"],
        bullets: &[],
    },
];

const TERMS: &[Section] = &[
    Section {
        heading: "1. Acceptance of Terms",
        paragraphs: &["By accessing and using this B2B Transaction Platform, you accept and agree to be bound by the terms and provision of this agreement. If you do not agree to these terms, please do not use this service."],
        bullets: &[],
    },
    Section {
        heading: "2. Use License",
        paragraphs: &["Permission is granted to temporarily use this platform for business-to-business transactions. This is the grant of a license, not a transfer of title, and under this license you may not:"],
        bullets: &[
            "Modify or copy the materials",
            "Use the materials for any commercial purpose outside intended B2B transactions",
            "Attempt to decompile or reverse engineer any software",
            "Remove any copyright or proprietary notations",
        ],
    },
    Section {
        heading: "3. User Accounts",
        paragraphs: &["You are responsible for maintaining the confidentiality of your account and password. You agree to accept responsibility for all activities that occur under your account."],
        bullets: &[],
    },
    Section {
        heading: "4. Transaction Terms",
        paragraphs: &["All transactions conducted through this platform are subject to verification and approval. We reserve the right to refuse or cancel any transaction for any reason."],
        bullets: &[],
    },
    Section {
        heading: "5. Limitation of Liability",
        paragraphs: &["In no event shall the B2B Platform or its suppliers be liable for any damages arising out of the use or inability to use the platform."],
        bullets: &[],
    },
    Section {
        heading: "6. Modifications",
        paragraphs: &["We reserve the right to modify these terms at any time. Your continued use of the platform following any changes indicates your acceptance of the new terms."],
        bullets: &[],
    },
];

const SECURITY: &[Section] = &[
    Section {
        heading: "Data Encryption",
        paragraphs: &["All data transmitted between your browser and our servers is encrypted using TLS 1.3. Data at rest is encrypted using AES-256 encryption."],
        bullets: &[],
    },
    Section {
        heading: "Secure Authentication",
        paragraphs: &["We use JWT-based authentication with bcrypt password hashing to ensure your account credentials are protected."],
        bullets: &[],
    },
    Section {
        heading: "Privacy Protection",
        paragraphs: &["We implement strict access controls and regularly audit our systems to ensure your data remains private and secure."],
        bullets: &[],
    },
    Section {
        heading: "Infrastructure Security",
        paragraphs: &["Our infrastructure is hosted on secure, enterprise-grade servers with regular backups and disaster recovery plans."],
        bullets: &[],
    },
    Section {
        heading: "Best Practices for Account Security",
        paragraphs: &[],
        bullets: &[
            "Use a strong, unique password for your account",
            "Never share your password with anyone",
            "Log out when using shared computers",
            "Keep your contact information up to date",
            "Report any suspicious activity immediately",
        ],
    },
    Section {
        heading: "Report Security Issues",
        paragraphs: &["If you discover a security vulnerability or have concerns about the security of our platform, please contact us immediately at security@b2bplatform.com"],
        bullets: &[],
    },
];

const SECURITY_INTRO: &str = "At B2B Platform, we take the security of your data seriously. We implement industry-standard security measures to protect your information and transactions.";

impl LegalPage {
    fn title(&self) -> &'static str {
        match self {
            LegalPage::Privacy => "Privacy Policy",
            LegalPage::Terms => "Terms and Conditions",
            LegalPage::Security => "Security",
        }
    }

    fn sections(&self) -> &'static [Section] {
        match self {
            LegalPage::Privacy => PRIVACY,
            LegalPage::Terms => TERMS,
            LegalPage::Security => SECURITY,
        }
    }
}

pub fn render_legal(state: &AppState, page: LegalPage) -> Result<Element, JsValue> {
    let back = if state.session.is_authenticated() {
        route_link("← Back to dashboard", &Route::Dashboard.to_hash())?
    } else {
        route_link("← Back to sign in", &Route::Login.to_hash())?
    };

    let mut article = ElementBuilder::new("article")?
        .class("legal-page")
        .child(back)?
        .child(text_element("h1", "legal-title", page.title())?)?;

    if matches!(page, LegalPage::Security) {
        article = article.child(text_element("p", "legal-intro", SECURITY_INTRO)?)?;
    }
    for section in page.sections() {
        article = article.child(render_section(section)?)?;
    }

    let updated = format!("Last updated: {}", chrono::Local::now().date_naive().format("%Y-%m-%d"));
    let article = article
        .child(text_element("p", "legal-updated", &updated)?)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("static-page")
        .child(article)?
        .child(legal_footer()?)?
        .build())
}

fn render_section(section: &Section) -> Result<Element, JsValue> {
    let mut block = ElementBuilder::new("section")?
        .class("legal-section")
        .child(text_element("h2", "", section.heading)?)?;
    for paragraph in section.paragraphs {
        block = block.child(text_element("p", "", paragraph)?)?;
    }
    if !section.bullets.is_empty() {
        let items = section
            .bullets
            .iter()
            .map(|item| text_element("li", "", item))
            .collect::<Result<Vec<_>, _>>()?;
        block = block.child(ElementBuilder::new("ul")?.children(items)?.build())?;
    }
    Ok(block.build())
}
