//! Operation kinds accepted by the binding

use crate::error::BindingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of operations, in the order they are advertised
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum OperationKind {
    Reset,
    Version,
    Heartbeat,
    CreateCollection,
    DeleteCollection,
    ListCollections,
    GetCollection,
}

impl OperationKind {
    pub const ALL: [OperationKind; 7] = [
        OperationKind::Reset,
        OperationKind::Version,
        OperationKind::Heartbeat,
        OperationKind::CreateCollection,
        OperationKind::DeleteCollection,
        OperationKind::ListCollections,
        OperationKind::GetCollection,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Reset => "reset",
            OperationKind::Version => "version",
            OperationKind::Heartbeat => "heartbeat",
            OperationKind::CreateCollection => "createCollection",
            OperationKind::DeleteCollection => "deleteCollection",
            OperationKind::ListCollections => "listCollections",
            OperationKind::GetCollection => "getCollection",
        }
    }

    /// Whether the operation reads a JSON payload
    pub fn takes_payload(&self) -> bool {
        matches!(
            self,
            OperationKind::CreateCollection | OperationKind::DeleteCollection | OperationKind::GetCollection
        )
    }

    /// `[reset version ...]`, used in unsupported-operation errors
    pub fn supported_list() -> String {
        let names: Vec<&str> = Self::ALL.iter().map(|op| op.as_str()).collect();
        format!("[{}]", names.join(" "))
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationKind {
    type Err = BindingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| BindingError::UnsupportedOperation {
                operation: s.to_string(),
                expected: Self::supported_list(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_names() {
        for op in OperationKind::ALL {
            assert_eq!(op.as_str().parse::<OperationKind>().unwrap(), op);
            assert_eq!(serde_json::to_value(op).unwrap(), op.as_str());
        }
    }

    #[test]
    fn test_unknown_operation_lists_all() {
        let err = "dropDatabase".parse::<OperationKind>().unwrap_err();
        let message = err.to_string();

        assert!(matches!(err, BindingError::UnsupportedOperation { .. }));
        assert!(message.contains("dropDatabase"));
        for op in OperationKind::ALL {
            assert!(message.contains(op.as_str()), "missing {op}");
        }
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert!("Reset".parse::<OperationKind>().is_err());
        assert!("createcollection".parse::<OperationKind>().is_err());
    }

    #[test]
    fn test_payload_operations() {
        let with_payload: Vec<_> = OperationKind::ALL.into_iter().filter(|op| op.takes_payload()).collect();
        assert_eq!(
            with_payload,
            vec![
                OperationKind::CreateCollection,
                OperationKind::DeleteCollection,
                OperationKind::GetCollection
            ]
        );
    }
}
