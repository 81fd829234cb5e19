//! Vocabulary the generator draws from.

pub(crate) const PRODUCTS: &[&str] = &[
  "Smart Watch X1",
  "Smart Watch X2",
  "Fitness Tracker Pro",
  "Wireless Earbuds",
  "Smart Speaker",
  "Gaming Headset",
];

pub(crate) const FIRST_NAMES: &[&str] = &[
  "John", "Jane", "Mike", "Sarah", "David", "Emily", "James", "Lisa", "Robert", "Maria",
  "Michael", "Emma",
];

pub(crate) const LAST_NAMES: &[&str] = &[
  "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
  "Martinez", "Wilson", "Anderson",
];

/// Openers; `{product}` is replaced with the product name.
pub(crate) const POSITIVE_TEMPLATES: &[&str] = &[
  "This {product} is amazing!",
  "Excellent product!",
  "Really happy with my {product}.",
  "Best purchase ever!",
  "Highly recommend this {product}.",
];

pub(crate) const NEGATIVE_TEMPLATES: &[&str] = &[
  "Disappointed with this {product}.",
  "Not worth the money.",
  "Would not recommend.",
  "Poor quality {product}.",
  "Save your money.",
];

pub(crate) const NEUTRAL_TEMPLATES: &[&str] = &[
  "This {product} is okay.",
  "Average product.",
  "Could be better but works fine.",
  "Decent {product} for the price.",
  "Not great, not terrible.",
];

pub(crate) const POSITIVE_DETAILS: &[&str] = &[
  "Great battery life and comfortable to wear.",
  "The features are intuitive and work perfectly.",
  "Build quality is outstanding.",
  "Customer service was excellent.",
  "Performance exceeds expectations.",
];

pub(crate) const NEGATIVE_DETAILS: &[&str] = &[
  "Battery life is terrible.",
  "Stopped working after a few days.",
  "Poor build quality and unreliable.",
  "Customer service was unhelpful.",
  "Not worth the premium price.",
];

pub(crate) const NEUTRAL_DETAILS: &[&str] = &[
  "Some features work well, others need improvement.",
  "Good features but battery life could be better.",
  "Nice design but a bit expensive.",
  "Works as intended but nothing special.",
  "Basic functionality is good but lacks advanced features.",
];
