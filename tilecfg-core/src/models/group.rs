use serde::{Deserialize, Serialize};

/// A named virtual desktop.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    /// Text shown in the group box; the name is shown when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
        }
    }

    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_falls_back_to_name() {
        let mut group = Group::new("www");
        assert_eq!(group.label(), "www");
        group.label = Some("web".to_owned());
        assert_eq!(group.label(), "web");
    }
}
