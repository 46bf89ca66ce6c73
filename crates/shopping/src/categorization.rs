use serde::Serialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Category for grocery store organization
///
/// Declaration order is the shopping list section order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    VariantArray,
    AsRefStr,
    Serialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Category {
    Produce,
    Meat,
    #[strum(to_string = "Dry Goods", serialize = "DryGoods")]
    #[serde(rename = "Dry Goods")]
    DryGoods,
    Sauces,
    Dairy,
    Frozen,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }
}

/// Keyword taxonomy, scanned in declaration order.
///
/// First substring match wins, so compound keywords ("ice cream", "peanut
/// butter", "garlic powder") sit above the single words they contain.
pub static TAXONOMY: &[(&str, Category)] = &[
    // Frozen
    ("frozen", Category::Frozen),
    ("ice cream", Category::Frozen),
    ("sorbet", Category::Frozen),
    ("fish fingers", Category::Frozen),
    // Sauces & condiments
    ("sauce", Category::Sauces),
    ("broth", Category::Sauces),
    ("stock", Category::Sauces),
    ("paste", Category::Sauces),
    ("ketchup", Category::Sauces),
    ("mayonnaise", Category::Sauces),
    ("mustard", Category::Sauces),
    ("vinegar", Category::Sauces),
    ("salsa", Category::Sauces),
    ("pesto", Category::Sauces),
    ("peanut butter", Category::Sauces),
    ("honey", Category::Sauces),
    ("syrup", Category::Sauces),
    ("dressing", Category::Sauces),
    // Dry goods named after produce
    ("powder", Category::DryGoods),
    ("black pepper", Category::DryGoods),
    ("cornstarch", Category::DryGoods),
    ("breadcrumbs", Category::DryGoods),
    // Produce
    ("bell pepper", Category::Produce),
    ("green bean", Category::Produce),
    ("chili", Category::Produce),
    ("eggplant", Category::Produce),
    ("tomato", Category::Produce),
    ("onion", Category::Produce),
    ("garlic", Category::Produce),
    ("carrot", Category::Produce),
    ("potato", Category::Produce),
    ("lettuce", Category::Produce),
    ("spinach", Category::Produce),
    ("cucumber", Category::Produce),
    ("zucchini", Category::Produce),
    ("broccoli", Category::Produce),
    ("mushroom", Category::Produce),
    ("celery", Category::Produce),
    ("squash", Category::Produce),
    ("avocado", Category::Produce),
    ("lemon", Category::Produce),
    ("lime", Category::Produce),
    ("apple", Category::Produce),
    ("banana", Category::Produce),
    ("ginger", Category::Produce),
    ("cilantro", Category::Produce),
    ("parsley", Category::Produce),
    ("basil", Category::Produce),
    // Meat & seafood
    ("chicken", Category::Meat),
    ("beef", Category::Meat),
    ("pork", Category::Meat),
    ("bacon", Category::Meat),
    ("ham", Category::Meat),
    ("lamb", Category::Meat),
    ("turkey", Category::Meat),
    ("sausage", Category::Meat),
    ("salmon", Category::Meat),
    ("shrimp", Category::Meat),
    ("tuna", Category::Meat),
    ("fish", Category::Meat),
    ("steak", Category::Meat),
    ("mince", Category::Meat),
    // Dairy
    ("milk", Category::Dairy),
    ("butter", Category::Dairy),
    ("cheese", Category::Dairy),
    ("cream", Category::Dairy),
    ("yogurt", Category::Dairy),
    ("egg", Category::Dairy),
    ("parmesan", Category::Dairy),
    ("mozzarella", Category::Dairy),
    // Dry goods
    ("flour", Category::DryGoods),
    ("sugar", Category::DryGoods),
    ("rice", Category::DryGoods),
    ("pasta", Category::DryGoods),
    ("spaghetti", Category::DryGoods),
    ("noodle", Category::DryGoods),
    ("oats", Category::DryGoods),
    ("lentil", Category::DryGoods),
    ("bean", Category::DryGoods),
    ("chickpea", Category::DryGoods),
    ("quinoa", Category::DryGoods),
    ("salt", Category::DryGoods),
    ("pepper", Category::DryGoods),
    ("oil", Category::DryGoods),
    ("yeast", Category::DryGoods),
    ("cumin", Category::DryGoods),
    ("paprika", Category::DryGoods),
    ("cinnamon", Category::DryGoods),
    ("bread", Category::DryGoods),
];

/// Categorization Service
///
/// Stateless domain service that maps ingredient names to grocery store
/// categories using the keyword [`TAXONOMY`].
pub struct CategorizationService;

impl CategorizationService {
    /// Categorize an ingredient by name
    ///
    /// The name is trimmed and lowercased, then matched exactly against the
    /// taxonomy, then by substring in taxonomy order. Unmatched names fall
    /// back to [`Category::Other`].
    pub fn categorize(ingredient_name: &str) -> Category {
        lookup(TAXONOMY, ingredient_name)
    }
}

fn lookup(taxonomy: &[(&str, Category)], ingredient_name: &str) -> Category {
    let normalized = ingredient_name.trim().to_lowercase();

    if let Some((_, category)) = taxonomy
        .iter()
        .find(|(keyword, _)| *keyword == normalized)
    {
        return *category;
    }

    taxonomy
        .iter()
        .find(|(keyword, _)| normalized.contains(keyword))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Other)
}
