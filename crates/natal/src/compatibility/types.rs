use crate::reference::ZodiacSign;
use serde::{Deserialize, Serialize};

/// A well-known couple whose sun signs match a scored pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamousPair {
    pub names: String,
    pub description: String,
}

/// Scored sign-pair compatibility. Every score is in `0..=100`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResult {
    pub sign_a: ZodiacSign,
    pub sign_b: ZodiacSign,
    pub overall_score: u8,
    pub emotional: u8,
    pub communication: u8,
    pub passion: u8,
    pub values: u8,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    pub advice: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub famous_pairs: Vec<FamousPair>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CelebrityMatch {
    pub name: String,
    pub sun_sign: ZodiacSign,
    pub match_percentage: u8,
    pub fun_fact: String,
}
