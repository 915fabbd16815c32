#![allow(clippy::missing_errors_doc)]

use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};
use tactics_core::{CardId, MoveCardDefinition};
use tactics_world::{query, World};
use thiserror::Error;

const TRANSFER_DOMAIN: &str = "tactics";
const TRANSFER_VERSION: &str = "v1";

/// Identifier prefix emitted before the encoded catalog payload.
pub(crate) const TRANSFER_HEADER: &str = "tactics:v1";
/// Delimiter used to separate the prefix, card count and payload.
const FIELD_DELIMITER: char = ':';

/// Snapshot of an installed move-card catalog, in catalog index order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct CatalogSnapshot {
    /// Card definitions composing the catalog.
    pub cards: Vec<MoveCardDefinition>,
}

impl CatalogSnapshot {
    /// Captures the catalog currently installed in the world.
    #[must_use]
    pub(crate) fn from_world(world: &World) -> Self {
        let cards = (0..query::catalog_len(world))
            .filter_map(|index| {
                query::card_definition(world, CardId::new(index as u32)).cloned()
            })
            .collect();
        Self { cards }
    }

    /// Encodes the catalog into a single-line string suitable for clipboard
    /// transfer.
    #[must_use]
    pub(crate) fn encode(&self) -> String {
        let json = serde_json::to_vec(self).expect("catalog serialization never fails");
        let encoded = STANDARD_NO_PAD.encode(json);
        format!("{TRANSFER_HEADER}:{}:{encoded}", self.cards.len())
    }

    /// Decodes a catalog from the provided string representation.
    pub(crate) fn decode(value: &str) -> Result<Self, CatalogTransferError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(CatalogTransferError::EmptyPayload);
        }

        let mut parts = trimmed.split(FIELD_DELIMITER);
        let domain = parts.next().ok_or(CatalogTransferError::MissingPrefix)?;
        let version = parts.next().ok_or(CatalogTransferError::MissingVersion)?;
        let count = parts.next().ok_or(CatalogTransferError::MissingCount)?;
        let payload = parts.next().ok_or(CatalogTransferError::MissingPayload)?;

        if domain != TRANSFER_DOMAIN {
            return Err(CatalogTransferError::InvalidPrefix(domain.to_owned()));
        }
        if version != TRANSFER_VERSION {
            return Err(CatalogTransferError::UnsupportedVersion(
                version.to_owned(),
            ));
        }
        let expected = count
            .trim()
            .parse::<usize>()
            .map_err(|_| CatalogTransferError::InvalidCount(count.to_owned()))?;

        let bytes = STANDARD_NO_PAD.decode(payload.as_bytes())?;
        let decoded: Self = serde_json::from_slice(&bytes)?;
        if decoded.cards.len() != expected {
            return Err(CatalogTransferError::CountMismatch {
                expected,
                actual: decoded.cards.len(),
            });
        }

        Ok(decoded)
    }
}

/// Errors that can occur while decoding catalog transfer strings.
#[derive(Debug, Error)]
pub(crate) enum CatalogTransferError {
    /// The provided string was empty or contained only whitespace.
    #[error("catalog payload was empty")]
    EmptyPayload,
    /// The prefix segment was missing from the encoded catalog.
    #[error("transfer string is missing the prefix")]
    MissingPrefix,
    /// The encoded catalog did not contain a version segment.
    #[error("transfer string is missing the version")]
    MissingVersion,
    /// The encoded catalog did not include the card count.
    #[error("transfer string is missing the card count")]
    MissingCount,
    /// The encoded catalog did not include the payload segment.
    #[error("transfer string is missing the payload")]
    MissingPayload,
    /// The encoded catalog used an unexpected prefix segment.
    #[error("transfer prefix '{0}' is not supported")]
    InvalidPrefix(String),
    /// The encoded catalog used an unsupported version identifier.
    #[error("transfer version '{0}' is not supported")]
    UnsupportedVersion(String),
    /// The card count could not be parsed from the encoded catalog.
    #[error("could not parse card count '{0}'")]
    InvalidCount(String),
    /// The declared card count does not match the decoded payload.
    #[error("card count {expected} does not match the payload ({actual} cards)")]
    CountMismatch {
        /// Count declared in the transfer string.
        expected: usize,
        /// Number of cards actually present in the payload.
        actual: usize,
    },
    /// The base64 payload could not be decoded.
    #[error("could not decode catalog payload: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),
    /// The decoded payload could not be deserialised.
    #[error("could not parse catalog payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactics_core::{GridOffset, MovePattern};

    fn sample_catalog() -> CatalogSnapshot {
        CatalogSnapshot {
            cards: vec![
                MoveCardDefinition {
                    name: "Step".to_owned(),
                    description: "Move one tile in any cardinal direction.".to_owned(),
                    cost: 0,
                    pattern: MovePattern::Offsets(vec![
                        GridOffset::new(0, -1),
                        GridOffset::new(1, 0),
                        GridOffset::new(0, 1),
                        GridOffset::new(-1, 0),
                    ]),
                },
                MoveCardDefinition {
                    name: "Lance".to_owned(),
                    description: "Slide any distance along the file.".to_owned(),
                    cost: 2,
                    pattern: MovePattern::Sliding(vec![
                        GridOffset::new(0, -1),
                        GridOffset::new(0, 1),
                    ]),
                },
            ],
        }
    }

    #[test]
    fn round_trip_built_in_catalog() {
        let snapshot = CatalogSnapshot::from_world(&World::new());
        assert!(!snapshot.cards.is_empty());

        let encoded = snapshot.encode();
        assert!(encoded.starts_with(&format!(
            "{TRANSFER_HEADER}:{}:",
            snapshot.cards.len()
        )));

        let decoded = CatalogSnapshot::decode(&encoded).expect("catalog decodes");
        assert_eq!(snapshot, decoded);
    }

    #[test]
    fn round_trip_custom_catalog() {
        let snapshot = sample_catalog();
        let decoded = CatalogSnapshot::decode(&snapshot.encode()).expect("catalog decodes");
        assert_eq!(snapshot, decoded);
    }

    #[test]
    fn decode_rejects_foreign_prefixes() {
        let encoded = sample_catalog().encode();
        let foreign = encoded.replacen("tactics", "chess", 1);
        assert!(matches!(
            CatalogSnapshot::decode(&foreign),
            Err(CatalogTransferError::InvalidPrefix(_))
        ));

        let future = encoded.replacen("v1", "v9", 1);
        assert!(matches!(
            CatalogSnapshot::decode(&future),
            Err(CatalogTransferError::UnsupportedVersion(_))
        ));
    }

    #[test]
    fn decode_rejects_count_mismatches() {
        let snapshot = sample_catalog();
        let encoded = snapshot.encode();
        let tampered = encoded.replacen(
            &format!("{TRANSFER_HEADER}:{}:", snapshot.cards.len()),
            &format!("{TRANSFER_HEADER}:7:"),
            1,
        );
        assert!(matches!(
            CatalogSnapshot::decode(&tampered),
            Err(CatalogTransferError::CountMismatch {
                expected: 7,
                actual: 2
            })
        ));
    }

    #[test]
    fn decode_rejects_empty_input() {
        assert!(matches!(
            CatalogSnapshot::decode("   "),
            Err(CatalogTransferError::EmptyPayload)
        ));
        assert!(matches!(
            CatalogSnapshot::decode("tactics:v1"),
            Err(CatalogTransferError::MissingCount)
        ));
        assert!(matches!(
            CatalogSnapshot::decode("tactics:v1:2"),
            Err(CatalogTransferError::MissingPayload)
        ));
    }
}
