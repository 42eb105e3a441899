// Agent catalog
// The fixed, ordered set of agents shown by the directory

use once_cell::sync::Lazy;
use std::fmt;

/// Base URL for agent profile pages on AgentVerse
const PROFILE_BASE_URL: &str = "https://agentverse.ai/agents/details";

/// Process-wide catalog, built once on first access
pub static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::builtin);

/// Stable identifier of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentKey {
    /// Learning path agent
    Main,
    /// Curriculum builder
    Curriculum,
    /// Learning materials finder
    Materials,
    /// Insights agent
    Enhanced,
}

impl AgentKey {
    /// Every key, in catalog order
    #[allow(dead_code)] // Used for exhaustiveness checks
    pub const ALL: [AgentKey; 4] = [
        AgentKey::Main,
        AgentKey::Curriculum,
        AgentKey::Materials,
        AgentKey::Enhanced,
    ];

    /// Identifier text, e.g. `main_agent`
    pub fn id(self) -> &'static str {
        match self {
            AgentKey::Main => "main_agent",
            AgentKey::Curriculum => "curriculum_agent",
            AgentKey::Materials => "materials_agent",
            AgentKey::Enhanced => "enhanced_agent",
        }
    }

    /// Human-readable form of the identifier (underscores become spaces)
    pub fn display_name(self) -> String {
        self.id().replace('_', " ")
    }

    /// Card heading, upper-cased display name
    pub fn title(self) -> String {
        self.display_name().to_uppercase()
    }
}

impl fmt::Display for AgentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A single agent entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRecord {
    /// Stable key
    pub key: AgentKey,
    /// Opaque agent network address
    pub address: String,
    /// Profile page URL
    pub profile_link: String,
    /// Local port, only known for some deployments
    pub port: Option<u16>,
    /// Static image reference, never resolved here
    pub image_ref: String,
    /// What the agent does
    pub description: String,
}

impl AgentRecord {
    fn new(key: AgentKey, address: &str, port: Option<u16>, image: &str, description: &str) -> Self {
        Self {
            key,
            address: address.to_string(),
            profile_link: format!("{}/{}/profile", PROFILE_BASE_URL, address),
            port,
            image_ref: format!("images/{}", image),
            description: description.to_string(),
        }
    }
}

/// Immutable ordered collection of agent records
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<AgentRecord>,
}

impl Catalog {
    /// The EduFinder agent set
    pub fn builtin() -> Self {
        Self {
            records: vec![
                AgentRecord::new(
                    AgentKey::Main,
                    "agent1q2ygnhcc5xj3davnvu0g0p0qytuyc7dsz8dh538ks49y7sru5t9skwn5gne",
                    Some(8000),
                    "learningpath.jpeg",
                    "Creates personalized learning paths and routes requests to the specialist agents.",
                ),
                AgentRecord::new(
                    AgentKey::Curriculum,
                    "agent1q2t29q262rsp660k727g3nhejn2sftdesfrc4k6dttydwzs2nsp2ypfzww8",
                    Some(8001),
                    "curriculum.jpeg",
                    "Builds structured, week-by-week curricula for a chosen domain and skill level.",
                ),
                AgentRecord::new(
                    AgentKey::Materials,
                    "agent1qdq2ynx5e5qcyyhnzzr4cmvpg4wufvqskqp2dl9nldm9w7da6lvysdxwnuf",
                    Some(8002),
                    "materials.jpeg",
                    "Finds courses, videos, and reading material for any topic.",
                ),
                AgentRecord::new(
                    AgentKey::Enhanced,
                    "agent1qdeqahn3pr4ta7zxgtwee5ts0klrkeh30an7wmsdhagsfyy28udtqs2tsk4",
                    Some(8003),
                    "enhanced.jpeg",
                    "Provides learning insights, progress analysis, and career guidance.",
                ),
            ],
        }
    }

    /// All records in catalog order
    pub fn records(&self) -> &[AgentRecord] {
        &self.records
    }

    /// Look up the record for a key
    pub fn get(&self, key: AgentKey) -> Option<&AgentRecord> {
        self.records.iter().find(|r| r.key == key)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[allow(dead_code)] // Pairs with len(); the builtin catalog is never empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_has_one_record_per_key() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), AgentKey::ALL.len());
        assert!(!catalog.is_empty());
        for key in AgentKey::ALL {
            assert_eq!(catalog.get(key).unwrap().key, key);
        }
    }

    #[test]
    fn test_catalog_order_matches_key_order() {
        let keys: Vec<AgentKey> = CATALOG.records().iter().map(|r| r.key).collect();
        assert_eq!(keys, AgentKey::ALL.to_vec());
    }

    #[test]
    fn test_fields_are_unique() {
        let records = CATALOG.records();
        let addresses: HashSet<_> = records.iter().map(|r| r.address.as_str()).collect();
        let links: HashSet<_> = records.iter().map(|r| r.profile_link.as_str()).collect();
        let images: HashSet<_> = records.iter().map(|r| r.image_ref.as_str()).collect();
        let ports: HashSet<_> = records.iter().filter_map(|r| r.port).collect();
        assert_eq!(addresses.len(), records.len());
        assert_eq!(links.len(), records.len());
        assert_eq!(images.len(), records.len());
        assert_eq!(ports.len(), records.len());
    }

    #[test]
    fn test_profile_link_embeds_address() {
        for record in CATALOG.records() {
            assert!(record.profile_link.starts_with("https://agentverse.ai/agents/details/"));
            assert!(record.profile_link.contains(&record.address));
            assert!(record.profile_link.ends_with("/profile"));
        }
    }

    #[test]
    fn test_key_names() {
        assert_eq!(AgentKey::Curriculum.id(), "curriculum_agent");
        assert_eq!(AgentKey::Main.display_name(), "main agent");
        assert_eq!(AgentKey::Enhanced.title(), "ENHANCED AGENT");
        assert_eq!(AgentKey::Materials.to_string(), "materials_agent");
    }
}
