use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tones the backend accepts. The backend is the authoritative validator;
/// this enum just pins the wire strings in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Friendly,
    Formal,
    Persuasive,
    Casual,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Friendly, Tone::Formal, Tone::Persuasive, Tone::Casual];

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Friendly => "Friendly",
            Tone::Formal => "Formal",
            Tone::Persuasive => "Persuasive",
            Tone::Casual => "Casual",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "friendly" => Ok(Tone::Friendly),
            "formal" => Ok(Tone::Formal),
            "persuasive" => Ok(Tone::Persuasive),
            "casual" => Ok(Tone::Casual),
            _ => Err(format!(
                "unknown tone: {s} (expected friendly, formal, persuasive or casual)"
            )),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenerationRequest {
    pub text: String,
    pub tone: Tone,
}

#[derive(Debug, Deserialize)]
pub struct GenerationResponse {
    pub alternatives: Vec<String>,
}
