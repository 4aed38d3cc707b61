use std::env;

use crate::errors::GroupsError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub groups_table: String,
    /// Overrides the DynamoDB endpoint, e.g. for a local emulator.
    pub dynamodb_endpoint: Option<String>,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns an error if `GROUPS_TABLE` is unset or empty.
    pub fn from_env() -> Result<Self, GroupsError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable lookup. Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if `GROUPS_TABLE` is unset or empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GroupsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Ok(Self {
            groups_table: var("GROUPS_TABLE")
                .ok_or_else(|| GroupsError::ConfigError("GROUPS_TABLE is not set".to_string()))?,
            dynamodb_endpoint: var("DYNAMODB_ENDPOINT"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn reads_table_and_endpoint() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("GROUPS_TABLE", "Groups-dev"),
            ("DYNAMODB_ENDPOINT", "http://localhost:8000"),
        ]))
        .unwrap();

        assert_eq!(config.groups_table, "Groups-dev");
        assert_eq!(
            config.dynamodb_endpoint.as_deref(),
            Some("http://localhost:8000")
        );
    }

    #[test]
    fn endpoint_is_optional() {
        let config = AppConfig::from_lookup(lookup_from(&[("GROUPS_TABLE", "Groups-dev")])).unwrap();
        assert!(config.dynamodb_endpoint.is_none());
    }

    #[test]
    fn missing_or_blank_table_is_rejected() {
        let missing = AppConfig::from_lookup(lookup_from(&[]));
        assert!(matches!(missing, Err(GroupsError::ConfigError(_))));

        let blank = AppConfig::from_lookup(lookup_from(&[("GROUPS_TABLE", "  ")]));
        assert!(matches!(blank, Err(GroupsError::ConfigError(_))));
    }
}
