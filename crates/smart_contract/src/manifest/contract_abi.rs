//! The contract ABI: methods and events.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// The application binary interface a manifest declares.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContractAbi {
    /// Callable methods, with their entry-point offsets.
    #[serde(default)]
    pub methods: Vec<ContractMethod>,

    /// Events the contract may emit.
    #[serde(default)]
    pub events: Vec<ContractEvent>,
}

/// A single ABI method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractMethod {
    /// Method name, matched case-sensitively by permission evaluation.
    pub name: String,

    /// Declared parameters, in call order.
    #[serde(default)]
    pub parameters: Vec<ContractParameter>,

    /// Declared return type name.
    #[serde(rename = "returntype")]
    pub return_type: String,

    /// Entry-point offset into the contract's script. Non-negative by
    /// construction; the wire format rejects negative offsets at decode.
    pub offset: u32,

    /// Marks the method as free of side effects. Informational to the ABI;
    /// permission evaluation does not consult it.
    pub safe: bool,
}

/// A single ABI event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractEvent {
    /// Event name.
    pub name: String,

    /// Declared parameters, in emission order.
    #[serde(default)]
    pub parameters: Vec<ContractParameter>,
}

/// A named, typed method or event parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractParameter {
    /// Parameter name.
    pub name: String,

    /// Declared type name.
    #[serde(rename = "type")]
    pub parameter_type: String,
}

impl ContractAbi {
    /// Looks a method up by name.
    pub fn get_method(&self, name: &str) -> Option<&ContractMethod> {
        self.methods.iter().find(|method| method.name == name)
    }

    /// Looks an event up by name.
    pub fn get_event(&self, name: &str) -> Option<&ContractEvent> {
        self.events.iter().find(|event| event.name == name)
    }

    /// Structural validation applied at decode time.
    pub fn validate(&self) -> Result<()> {
        for method in &self.methods {
            if method.name.is_empty() {
                return Err(Error::InvalidManifest(
                    "ABI method name cannot be empty".to_string(),
                ));
            }
        }
        for event in &self.events {
            if event.name.is_empty() {
                return Err(Error::InvalidManifest(
                    "ABI event name cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_method(name: &str) -> ContractMethod {
        ContractMethod {
            name: name.to_string(),
            parameters: vec![ContractParameter {
                name: "amount".to_string(),
                parameter_type: "Integer".to_string(),
            }],
            return_type: "Boolean".to_string(),
            offset: 0,
            safe: false,
        }
    }

    #[test]
    fn method_lookup_is_by_exact_name() {
        let abi = ContractAbi {
            methods: vec![sample_method("transfer")],
            events: vec![],
        };
        assert!(abi.get_method("transfer").is_some());
        assert!(abi.get_method("Transfer").is_none());
        assert!(abi.get_event("transfer").is_none());
    }

    #[test]
    fn serde_field_names_match_wire_format() {
        let abi = ContractAbi {
            methods: vec![sample_method("transfer")],
            events: vec![ContractEvent {
                name: "Transfer".to_string(),
                parameters: vec![],
            }],
        };
        let value = serde_json::to_value(&abi).unwrap();
        assert_eq!(value["methods"][0]["returntype"], "Boolean");
        assert_eq!(value["methods"][0]["parameters"][0]["type"], "Integer");
        assert_eq!(value["events"][0]["name"], "Transfer");

        let back: ContractAbi = serde_json::from_value(value).unwrap();
        assert_eq!(back, abi);
    }

    #[test]
    fn negative_offset_is_rejected_at_decode() {
        let json = r#"{"methods":[{"name":"m","parameters":[],"returntype":"Void","offset":-1,"safe":false}],"events":[]}"#;
        let result: serde_json::Result<ContractAbi> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn validate_rejects_unnamed_members() {
        let abi = ContractAbi {
            methods: vec![sample_method("")],
            events: vec![],
        };
        assert!(abi.validate().is_err());
        assert!(ContractAbi::default().validate().is_ok());
    }
}
