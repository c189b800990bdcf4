//! Data returned by remote calls.

use std::collections::BTreeMap;

/// One element of a SOAP response body.
///
/// Records are returned as-is; no schema is imposed on them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SoapRecord {
    /// Local element name, without namespace prefix.
    pub name: String,
    /// Text content, if the element carries any.
    pub text: Option<String>,
    /// XML attributes keyed by local name.
    pub attributes: BTreeMap<String, String>,
    /// Child elements in document order.
    pub children: Vec<SoapRecord>,
}

impl SoapRecord {
    /// Empty record named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    /// Set the text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append a child element.
    pub fn with_child(mut self, child: SoapRecord) -> Self {
        self.children.push(child);
        self
    }

    /// First child with the given name.
    pub fn child(&self, name: &str) -> Option<&SoapRecord> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Text of the first child with the given name.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.child(name).and_then(|c| c.text.as_deref())
    }

    /// True for elements with neither text nor children.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_lookup() {
        let cycle = SoapRecord::new("CycleDTO")
            .with_child(SoapRecord::new("name").with_text("2024/1"))
            .with_child(SoapRecord::new("start"));
        assert_eq!(cycle.field("name"), Some("2024/1"));
        assert_eq!(cycle.field("start"), None);
        assert!(cycle.child("start").unwrap().is_empty());
        assert!(cycle.child("end").is_none());
    }
}
