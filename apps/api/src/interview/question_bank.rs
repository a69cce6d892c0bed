//! Static question bank, one ordered list per role.

use rand::Rng;

use crate::interview::models::Role;

const SOFTWARE_ENGINEER: &[&str] = &[
    "Tell me about yourself and your experience in software development.",
    "What programming languages are you most comfortable with and why?",
    "Describe a challenging technical problem you solved recently.",
    "How do you approach debugging a complex issue?",
    "What's your experience with version control systems like Git?",
];

const DATA_SCIENTIST: &[&str] = &[
    "Tell me about your background in data science and analytics.",
    "What machine learning algorithms are you most familiar with?",
    "Describe a data analysis project you've worked on.",
    "How do you handle missing or dirty data in your analysis?",
    "What tools and programming languages do you use for data science?",
];

const PRODUCT_MANAGER: &[&str] = &[
    "Tell me about your experience in product management.",
    "How do you prioritize features in a product roadmap?",
    "Describe a time when you had to make a difficult product decision.",
    "How do you gather and analyze user feedback?",
    "What metrics do you use to measure product success?",
];

const MARKETING_MANAGER: &[&str] = &[
    "Tell me about your marketing experience and background.",
    "How do you develop and execute marketing campaigns?",
    "Describe a successful marketing campaign you've managed.",
    "How do you measure the effectiveness of marketing efforts?",
    "What digital marketing channels have you worked with?",
];

const SALES_REPRESENTATIVE: &[&str] = &[
    "Tell me about your sales experience and approach.",
    "How do you handle objections from potential customers?",
    "Describe your most successful sales achievement.",
    "How do you build and maintain client relationships?",
    "What CRM tools and sales methodologies are you familiar with?",
];

/// All roles in a stable order.
pub fn roles() -> &'static [Role] {
    &Role::ALL
}

pub fn questions(role: Role) -> &'static [&'static str] {
    match role {
        Role::SoftwareEngineer => SOFTWARE_ENGINEER,
        Role::DataScientist => DATA_SCIENTIST,
        Role::ProductManager => PRODUCT_MANAGER,
        Role::MarketingManager => MARKETING_MANAGER,
        Role::SalesRepresentative => SALES_REPRESENTATIVE,
    }
}

/// Picks the question list for a new session.
///
/// `limit` of `None` (or one at least as large as the bank) yields the full list.
/// A smaller limit picks a random subset, kept in bank order.
pub fn draw<R: Rng + ?Sized>(role: Role, limit: Option<usize>, rng: &mut R) -> Vec<String> {
    let bank = questions(role);
    let amount = match limit {
        Some(n) if n > 0 && n < bank.len() => n,
        _ => return bank.iter().map(|q| q.to_string()).collect(),
    };

    let mut picked = rand::seq::index::sample(rng, bank.len(), amount).into_vec();
    picked.sort_unstable();
    picked.into_iter().map(|i| bank[i].to_string()).collect()
}
