//! Institution letterhead metadata
//!
//! The letterhead is the branding block every renderer prefixes to its
//! output: institution name, affiliation, accreditation and certification
//! lines, plus an optional logo image. It is owned by the caller's settings
//! layer and passed explicitly into each render call, never read from
//! ambient state.

use serde::{Deserialize, Serialize};

/// Fallback institution name when the configured name is blank
pub const DEFAULT_NAME: &str = "MODEL COLLEGE OF ARTS AND SCIENCE";
/// Fallback affiliation line
pub const DEFAULT_AFFILIATION: &str = "(Affiliated to the State University)";
/// Fallback accreditation line
pub const DEFAULT_ACCREDITATION: &str = "Re-accredited by NAAC with 'A' Grade";
/// Fallback certifications line
pub const DEFAULT_CERTIFICATIONS: &str = "An ISO 9001:2015 Certified Institution";

/// Institution display data supplied by the caller per render
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Letterhead {
    /// Institution name (headline of the letterhead)
    pub name: String,
    /// Affiliation line shown under the name
    pub affiliation: String,
    /// Accreditation line
    pub accreditation: String,
    /// Certifications line
    pub certifications: String,
    /// Optional logo image; a failed logo fetch means `None`, never an error
    #[serde(skip)]
    pub logo: Option<Logo>,
}

/// Raw logo image bytes (PNG or JPEG), already fetched by the caller
#[derive(Debug, Clone, PartialEq)]
pub struct Logo {
    /// Encoded image bytes
    pub bytes: Vec<u8>,
}

impl Letterhead {
    /// Copy of this letterhead with every blank text field replaced by its
    /// fixed default, so renderers always see non-blank institution text.
    pub fn resolved(&self) -> Letterhead {
        fn or_default(value: &str, fallback: &str) -> String {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                fallback.to_string()
            } else {
                trimmed.to_string()
            }
        }

        Letterhead {
            name: or_default(&self.name, DEFAULT_NAME),
            affiliation: or_default(&self.affiliation, DEFAULT_AFFILIATION),
            accreditation: or_default(&self.accreditation, DEFAULT_ACCREDITATION),
            certifications: or_default(&self.certifications, DEFAULT_CERTIFICATIONS),
            logo: self.logo.clone(),
        }
    }
}
