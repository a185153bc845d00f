use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_company_name")]
    pub company_name: String,

    #[serde(default = "default_departments")]
    pub departments: Vec<String>,

    /// Per-department intro sentence overrides.
    #[serde(default)]
    pub intros: HashMap<String, String>,

    /// Per-department footer sentence overrides.
    #[serde(default)]
    pub footers: HashMap<String, String>,
}

fn default_company_name() -> String {
    "TriVector Services".to_string()
}

fn default_departments() -> Vec<String> {
    [
        "HR",
        "Engineering",
        "Finance",
        "Operations",
        "Marketing",
        "IT",
        "Legal",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            company_name: default_company_name(),
            departments: default_departments(),
            intros: HashMap::new(),
            footers: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.company_name, "TriVector Services");
        assert_eq!(config.departments.len(), 7);
        assert_eq!(config.departments[0], "HR");
        assert!(config.intros.is_empty());
        assert!(config.footers.is_empty());
    }

    #[test]
    fn test_deserialize_full_config() {
        let json = r#"{
            "company_name": "Acme Corp",
            "departments": ["Sales", "Support"],
            "intros": {"Sales": "Quarterly targets and account plans."},
            "footers": {"Sales": "Questions go to the sales desk."}
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.company_name, "Acme Corp");
        assert_eq!(config.departments, vec!["Sales", "Support"]);
        assert_eq!(
            config.intros.get("Sales"),
            Some(&"Quarterly targets and account plans.".to_string())
        );
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: Config = serde_json::from_str(r#"{"company_name": "Acme"}"#).unwrap();
        assert_eq!(config.company_name, "Acme");
        assert_eq!(config.departments.len(), 7);
    }
}
