use serde::{Deserialize, Serialize};

/// The sole persisted entity. Keyed in storage by `("trees", id)`.
///
/// Every field is optional at the serde level: the write endpoints accept
/// whatever JSON object the client sends and persist missing fields as
/// `null` rather than rejecting the request. There is no range constraint
/// on `age` and no format constraint on the strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct Tree {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub age: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
}

impl Tree {
    /// Identifier segment of the storage key. A body without an `id`
    /// degrades to the empty string instead of failing.
    pub fn key_id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    /// Species as rendered into response messages.
    pub fn species_label(&self) -> &str {
        self.species.as_deref().unwrap_or_default()
    }

    /// Location as rendered into response messages.
    pub fn location_label(&self) -> &str {
        self.location.as_deref().unwrap_or_default()
    }
}

/// Request body for `PUT /trees/:id`: same shape as [`Tree`] minus the id,
/// which comes from the path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct TreeInput {
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub age: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
}

impl TreeInput {
    /// Combine the path id with the body fields into a full record.
    pub fn into_tree(self, id: String) -> Tree {
        Tree { id: Some(id), species: self.species, age: self.age, location: self.location }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_record() {
        let tree: Tree = serde_json::from_str(
            r#"{"id":"3","species":"oak","age":3,"location":"The Park"}"#,
        )
        .unwrap();
        assert_eq!(tree.id.as_deref(), Some("3"));
        assert_eq!(tree.species.as_deref(), Some("oak"));
        assert_eq!(tree.age, Some(3.0));
        assert_eq!(tree.location.as_deref(), Some("The Park"));
    }

    #[test]
    fn missing_fields_become_none() {
        let tree: Tree = serde_json::from_str(r#"{"id":"7"}"#).unwrap();
        assert_eq!(tree.id.as_deref(), Some("7"));
        assert!(tree.species.is_none());
        assert!(tree.age.is_none());
        assert!(tree.location.is_none());
        // round-trips as explicit nulls
        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(json["species"], serde_json::Value::Null);
    }

    #[test]
    fn input_takes_id_from_path() {
        let input: TreeInput =
            serde_json::from_str(r#"{"species":"willow","age":12,"location":"Riverside"}"#).unwrap();
        let tree = input.into_tree("42".into());
        assert_eq!(tree.id.as_deref(), Some("42"));
        assert_eq!(tree.key_id(), "42");
        assert_eq!(tree.location_label(), "Riverside");
    }

    #[test]
    fn key_id_defaults_to_empty() {
        let tree = Tree::default();
        assert_eq!(tree.key_id(), "");
        assert_eq!(tree.species_label(), "");
    }
}
