//! # Holder-Type Table
//!
//! The fourth character of a PAN encodes the legal status of the holder.
//! [`HolderType`] is the single definition of that table; every `match` on
//! it is exhaustive.
//!
//! | Code | Type name |
//! |------|-----------|
//! | P | Individual (Person) |
//! | C | Company |
//! | H | Hindu Undivided Family (HUF) |
//! | F | Firm/Partnership Firm |
//! | A | Association of Persons (AOP) |
//! | T | Trust (AOP) |
//! | B | Body of Individuals (BOI) |
//! | L | Local Authority |
//! | J | Artificial Juridical Person |
//! | G | Government |
//!
//! Codes outside the table are not validation failures. The decoder reports
//! them through [`HolderTypeInfo::resolve`] with the `Unknown` marker.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::HolderCodeError;

/// Type name reported for codes outside the table.
pub const UNKNOWN_TYPE_NAME: &str = "Unknown";

/// Description reported for codes outside the table.
pub const UNKNOWN_DESCRIPTION: &str = "Unknown holder type";

/// Number of recognised holder-type codes.
pub const HOLDER_TYPE_COUNT: usize = 10;

/// Holder status encoded at position 3 of a PAN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolderType {
    /// `P` — individual taxpayer.
    Individual,
    /// `C` — company.
    Company,
    /// `H` — Hindu Undivided Family.
    HinduUndividedFamily,
    /// `F` — firm or partnership.
    Firm,
    /// `A` — association of persons.
    AssociationOfPersons,
    /// `T` — trust.
    Trust,
    /// `B` — body of individuals.
    BodyOfIndividuals,
    /// `L` — local authority.
    LocalAuthority,
    /// `J` — artificial juridical person.
    ArtificialJuridicalPerson,
    /// `G` — government.
    Government,
}

impl HolderType {
    /// All holder types in canonical order.
    pub fn all() -> &'static [HolderType] {
        &[
            Self::Individual,
            Self::Company,
            Self::HinduUndividedFamily,
            Self::Firm,
            Self::AssociationOfPersons,
            Self::Trust,
            Self::BodyOfIndividuals,
            Self::LocalAuthority,
            Self::ArtificialJuridicalPerson,
            Self::Government,
        ]
    }

    /// Look up a code. Expects an uppercase letter; lowercase is not folded
    /// here because callers work on normalized candidates.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'P' => Some(Self::Individual),
            'C' => Some(Self::Company),
            'H' => Some(Self::HinduUndividedFamily),
            'F' => Some(Self::Firm),
            'A' => Some(Self::AssociationOfPersons),
            'T' => Some(Self::Trust),
            'B' => Some(Self::BodyOfIndividuals),
            'L' => Some(Self::LocalAuthority),
            'J' => Some(Self::ArtificialJuridicalPerson),
            'G' => Some(Self::Government),
            _ => None,
        }
    }

    /// The one-letter code.
    pub fn code(&self) -> char {
        match self {
            Self::Individual => 'P',
            Self::Company => 'C',
            Self::HinduUndividedFamily => 'H',
            Self::Firm => 'F',
            Self::AssociationOfPersons => 'A',
            Self::Trust => 'T',
            Self::BodyOfIndividuals => 'B',
            Self::LocalAuthority => 'L',
            Self::ArtificialJuridicalPerson => 'J',
            Self::Government => 'G',
        }
    }

    /// Short display name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Individual => "Individual (Person)",
            Self::Company => "Company",
            Self::HinduUndividedFamily => "Hindu Undivided Family (HUF)",
            Self::Firm => "Firm/Partnership Firm",
            Self::AssociationOfPersons => "Association of Persons (AOP)",
            Self::Trust => "Trust (AOP)",
            Self::BodyOfIndividuals => "Body of Individuals (BOI)",
            Self::LocalAuthority => "Local Authority",
            Self::ArtificialJuridicalPerson => "Artificial Juridical Person",
            Self::Government => "Government",
        }
    }

    /// Longer explanation of who carries this status.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Individual => "Individual taxpayer (most common type)",
            Self::Company => "Company registered under the Companies Act",
            Self::HinduUndividedFamily => {
                "Hindu Undivided Family - a specific form of family arrangement recognized under Hindu Law"
            }
            Self::Firm => "Partnership Firm or Limited Liability Partnership",
            Self::AssociationOfPersons => {
                "Association of Persons or a body of individuals or a local authority or an artificial juridical person"
            }
            Self::Trust => "Trust entities including public or private trusts",
            Self::BodyOfIndividuals => {
                "Body of Individuals - group of individuals carrying on business"
            }
            Self::LocalAuthority => "Local Authority like Municipalities, Panchayats, etc.",
            Self::ArtificialJuridicalPerson => "Artificial Juridical Person not covered above",
            Self::Government => "Government agencies and departments",
        }
    }
}

impl std::fmt::Display for HolderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}

impl FromStr for HolderType {
    type Err = HolderCodeError;

    /// Parse a single-letter code, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                let code = c.to_ascii_uppercase();
                Self::from_code(code).ok_or(HolderCodeError::UnknownCode(code))
            }
            _ => Err(HolderCodeError::NotSingleLetter(s.to_string())),
        }
    }
}

/// Holder-type view embedded in a [`Report`](crate::Report).
///
/// `code` is empty when the candidate is too short to have a fourth
/// character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolderTypeInfo {
    /// The raw code character, or empty.
    pub code: String,
    /// Table type name, or `Unknown`.
    pub type_name: String,
    /// Table description, or `Unknown holder type`.
    pub description: String,
}

impl HolderTypeInfo {
    /// Resolve an optional code against the table.
    pub fn resolve(code: Option<char>) -> Self {
        let code_str = code.map(String::from).unwrap_or_default();
        match code.and_then(HolderType::from_code) {
            Some(holder) => Self {
                code: code_str,
                type_name: holder.type_name().to_string(),
                description: holder.description().to_string(),
            },
            None => Self {
                code: code_str,
                type_name: UNKNOWN_TYPE_NAME.to_string(),
                description: UNKNOWN_DESCRIPTION.to_string(),
            },
        }
    }

    /// Whether the code resolved to a table entry.
    pub fn is_known(&self) -> bool {
        self.type_name != UNKNOWN_TYPE_NAME
    }
}
