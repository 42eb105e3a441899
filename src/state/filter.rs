// Search and category filtering
// Pure derivation of the visible agent list from the catalog

use crate::state::catalog::{AgentKey, AgentRecord};

/// Category filter choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// No narrowing
    #[default]
    All,
    Learning,
    Curriculum,
    Materials,
    Insights,
}

/// Category to agent key relation; `All` has no entry
const CATEGORY_KEYS: [(Category, AgentKey); 4] = [
    (Category::Learning, AgentKey::Main),
    (Category::Curriculum, AgentKey::Curriculum),
    (Category::Materials, AgentKey::Materials),
    (Category::Insights, AgentKey::Enhanced),
];

impl Category {
    /// Every category, in selector order
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::Learning,
        Category::Curriculum,
        Category::Materials,
        Category::Insights,
    ];

    /// Selector label
    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All agents",
            Category::Learning => "Learning paths",
            Category::Curriculum => "Curriculum",
            Category::Materials => "Materials",
            Category::Insights => "Insights",
        }
    }

    /// The single agent key this category narrows to
    pub fn agent_key(self) -> Option<AgentKey> {
        CATEGORY_KEYS
            .iter()
            .find(|(category, _)| *category == self)
            .map(|(_, key)| *key)
    }
}

/// User-controlled filter inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text search
    pub query: String,
    /// Selected category
    pub category: Category,
}

impl FilterState {
    /// True when nothing narrows the catalog
    pub fn is_default(&self) -> bool {
        self.query.trim().is_empty() && self.category == Category::All
    }

    /// Apply this filter to a record slice
    pub fn apply<'a>(&self, records: &'a [AgentRecord]) -> Vec<&'a AgentRecord> {
        filter_agents(records, &self.query, self.category)
    }
}

/// Select the records matching both the query and the category,
/// keeping catalog order
pub fn filter_agents<'a>(
    records: &'a [AgentRecord],
    query: &str,
    category: Category,
) -> Vec<&'a AgentRecord> {
    let needle = if query.trim().is_empty() {
        String::new()
    } else {
        query.to_lowercase()
    };
    records
        .iter()
        .filter(|record| matches_query(record, &needle) && matches_category(record, category))
        .collect()
}

fn matches_query(record: &AgentRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record.key.display_name().to_lowercase().contains(needle)
        || record.address.to_lowercase().contains(needle)
}

fn matches_category(record: &AgentRecord, category: Category) -> bool {
    match category {
        Category::All => true,
        other => other.agent_key() == Some(record.key),
    }
}
