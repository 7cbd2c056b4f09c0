//! Attribute vocabulary recognized by the generator
//!
//! Markers are matched by fully qualified name. Both `ProtoBuf.ProtoContract`
//! and `global::ProtoBuf.ProtoContractAttribute` match the contract marker.

use serde::{Deserialize, Serialize};

/// Fully qualified names of the serialization markers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeVocabulary {
    /// Marks a type as a serialization contract
    #[serde(default = "default_contract")]
    pub contract: String,

    /// Manual tag marker with a single integer argument
    #[serde(default = "default_member")]
    pub member: String,

    /// Excludes a property from serialization
    #[serde(default = "default_ignore")]
    pub ignore: String,

    /// Declares a derived type on its base: `(int slot, Type | string derived)`
    #[serde(default = "default_include")]
    pub include: String,

    /// Per-type generator options
    #[serde(default = "default_options")]
    pub options: String,

    /// Named argument of the options marker holding the alternate attribute type
    #[serde(default = "default_options_property")]
    pub options_property: String,
}

fn default_contract() -> String {
    "ProtoBuf.ProtoContractAttribute".to_string()
}

fn default_member() -> String {
    "ProtoBuf.ProtoMemberAttribute".to_string()
}

fn default_ignore() -> String {
    "ProtoBuf.ProtoIgnoreAttribute".to_string()
}

fn default_include() -> String {
    "ProtoBuf.ProtoIncludeAttribute".to_string()
}

fn default_options() -> String {
    "ProtobufSourceGenerator.GeneratorOptionsAttribute".to_string()
}

fn default_options_property() -> String {
    "PropertyAttributeType".to_string()
}

impl Default for AttributeVocabulary {
    fn default() -> Self {
        Self {
            contract: default_contract(),
            member: default_member(),
            ignore: default_ignore(),
            include: default_include(),
            options: default_options(),
            options_property: default_options_property(),
        }
    }
}

impl AttributeVocabulary {
    pub fn is_contract(&self, name: &str) -> bool {
        attribute_names_match(name, &self.contract)
    }

    pub fn is_member(&self, name: &str) -> bool {
        attribute_names_match(name, &self.member)
    }

    pub fn is_ignore(&self, name: &str) -> bool {
        attribute_names_match(name, &self.ignore)
    }

    pub fn is_include(&self, name: &str) -> bool {
        attribute_names_match(name, &self.include)
    }

    pub fn is_options(&self, name: &str) -> bool {
        attribute_names_match(name, &self.options)
    }

    /// The member attribute as it is written in generated code
    pub fn member_attribute_syntax(&self) -> String {
        format!("global::{}", strip_attribute_suffix(&normalize_type_name(&self.member)))
    }

    /// Names that must be non-empty for the vocabulary to be usable
    pub(crate) fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("contract", &self.contract),
            ("member", &self.member),
            ("ignore", &self.ignore),
            ("include", &self.include),
            ("options", &self.options),
            ("options_property", &self.options_property),
        ]
    }
}

/// Strip a leading `global::` alias and surrounding whitespace from a type name
pub fn normalize_type_name(name: &str) -> String {
    let trimmed = name.trim();
    trimmed
        .strip_prefix("global::")
        .unwrap_or(trimmed)
        .to_string()
}

fn strip_attribute_suffix(name: &str) -> String {
    name.strip_suffix("Attribute").unwrap_or(name).to_string()
}

fn attribute_names_match(actual: &str, expected: &str) -> bool {
    let actual = normalize_type_name(actual);
    let expected = normalize_type_name(expected);
    actual == expected || strip_attribute_suffix(&actual) == strip_attribute_suffix(&expected)
}
