use crate::error::Result;
use crate::models::Pet;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;

const MODEL_NAME: &str = "gemini-2.5-flash";
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const DISABLED_MESSAGE: &str =
    "AI features are disabled. Please set your PAWHUB_API_KEY.";

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<Tool>>,
}

#[derive(Serialize, Deserialize, Debug)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Debug)]
struct Part {
    text: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f64>,
}

#[derive(Serialize, Debug)]
struct Tool {
    google_search: serde_json::Value,
}

#[derive(Deserialize, Debug)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Deserialize, Debug)]
struct GroundingChunk {
    web: Option<WebSource>,
}

#[derive(Deserialize, Debug, Clone)]
struct WebSource {
    uri: Option<String>,
    title: Option<String>,
}

impl GenerateResponse {
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| {
                c.parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }

    fn sources(&self) -> Vec<SourceLink> {
        self.candidates
            .first()
            .and_then(|c| c.grounding_metadata.as_ref())
            .map(|g| {
                g.grounding_chunks
                    .iter()
                    .filter_map(|chunk| chunk.web.clone())
                    .filter_map(|web| match (web.uri, web.title) {
                        (Some(uri), Some(title)) => Some(SourceLink { uri, title }),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLink {
    pub uri: String,
    pub title: String,
}

#[derive(Debug)]
pub struct ResourceAnswer {
    pub text: String,
    pub sources: Vec<SourceLink>,
}

/// Client for the generative-language API. Without an API key every
/// method answers with a fixed disabled-state message instead of
/// failing; transport errors degrade to a per-feature apology.
pub struct Assistant {
    api_key: Option<String>,
    client: reqwest::Client,
}

impl Assistant {
    pub fn from_env() -> Self {
        let api_key = std::env::var("PAWHUB_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .ok()
            .filter(|k| !k.is_empty());
        if api_key.is_none() {
            warn!("no API key set, assistant features are disabled");
        }
        Self {
            api_key,
            client: reqwest::Client::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(
        &self,
        api_key: &str,
        prompt: String,
        config: GenerationConfig,
        with_search: bool,
    ) -> Result<GenerateResponse> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: Some(config),
            tools: with_search.then(|| {
                vec![Tool {
                    google_search: serde_json::json!({}),
                }]
            }),
        };

        let url = format!(
            "{}/{}:generateContent?key={}",
            API_BASE, MODEL_NAME, api_key
        );
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<GenerateResponse>()
            .await?;
        Ok(response)
    }

    pub async fn care_plan(&self, pet: &Pet) -> String {
        let Some(api_key) = self.api_key.as_deref() else {
            return DISABLED_MESSAGE.into();
        };

        let prompt = care_plan_prompt(pet);
        let config = GenerationConfig {
            temperature: 0.7,
            top_p: Some(0.95),
        };
        match self.generate(api_key, prompt, config, false).await {
            Ok(response) => response.text(),
            Err(err) => {
                warn!(%err, "care plan generation failed");
                "Sorry, I couldn't generate a care plan at this time. Please try again later."
                    .into()
            }
        }
    }

    pub async fn symptom_triage(&self, pet: &Pet, symptoms: &str) -> String {
        let Some(api_key) = self.api_key.as_deref() else {
            return DISABLED_MESSAGE.into();
        };

        let prompt = triage_prompt(pet, symptoms);
        let config = GenerationConfig {
            temperature: 0.5,
            top_p: None,
        };
        match self.generate(api_key, prompt, config, false).await {
            Ok(response) => response.text(),
            Err(err) => {
                warn!(%err, "symptom triage failed");
                "Sorry, I couldn't analyze the symptoms at this time. If you are concerned, \
                 please contact your veterinarian."
                    .into()
            }
        }
    }

    /// Answer a free-form pet-care question with search grounding.
    pub async fn resource_info(&self, query: &str) -> ResourceAnswer {
        let Some(api_key) = self.api_key.as_deref() else {
            return ResourceAnswer {
                text: DISABLED_MESSAGE.into(),
                sources: Vec::new(),
            };
        };

        let prompt = resource_prompt(query);
        let config = GenerationConfig {
            temperature: 0.2,
            top_p: None,
        };
        match self.generate(api_key, prompt, config, true).await {
            Ok(response) => ResourceAnswer {
                text: response.text(),
                sources: response.sources(),
            },
            Err(err) => {
                warn!(%err, "resource lookup failed");
                ResourceAnswer {
                    text: "Sorry, I couldn't find information on that topic. Please try \
                           rephrasing your search or check your connection."
                        .into(),
                    sources: Vec::new(),
                }
            }
        }
    }
}

fn care_plan_prompt(pet: &Pet) -> String {
    let age = pet.age_years(Utc::now().date_naive());
    let allergies = pet
        .health_records
        .iter()
        .filter(|hr| hr.kind == crate::models::HealthRecordKind::Allergy)
        .map(|hr| hr.title.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let allergies = if allergies.is_empty() {
        "None".to_string()
    } else {
        allergies
    };

    format!(
        "Based on the following pet profile, generate a personalized care plan.\n\
         The plan should include recommendations for diet, exercise/activity, and a \
         suggested grooming schedule.\n\
         Format the output as a friendly, easy-to-read text. Be concise and practical.\n\n\
         Pet Profile:\n\
         - Name: {}\n\
         - Species: {:?}\n\
         - Breed: {}\n\
         - Age: {} years\n\
         - Gender: {:?}\n\
         - Known Health Issues/Allergies: {}\n\n\
         Generate the care plan now.",
        pet.name, pet.species, pet.breed, age, pet.gender, allergies
    )
}

fn triage_prompt(pet: &Pet, symptoms: &str) -> String {
    let age = pet.age_years(Utc::now().date_naive());
    format!(
        "Act as a helpful pet care assistant providing triage advice. THIS IS NOT A \
         SUBSTITUTE FOR PROFESSIONAL VETERINARY ADVICE.\n\
         A pet owner is reporting symptoms for their pet. Provide a calm, clear assessment \
         with potential causes and a recommendation on the urgency of seeking veterinary \
         care (e.g., \"monitor at home,\" \"schedule a vet visit soon,\" \"seek emergency \
         care immediately\").\n\n\
         IMPORTANT: Start your response with the disclaimer: \"Disclaimer: I am an AI \
         assistant and not a veterinarian. This advice is for informational purposes only. \
         Please consult a licensed veterinarian for any health concerns.\"\n\n\
         Pet Details:\n\
         - Species: {:?}\n\
         - Breed: {}\n\
         - Age: {} years\n\n\
         Reported Symptoms:\n\
         \"{}\"\n\n\
         Provide your triage advice now.",
        pet.species, pet.breed, age, symptoms
    )
}

fn resource_prompt(query: &str) -> String {
    format!(
        "Act as a helpful and knowledgeable pet care expert. Provide a comprehensive, \
         easy-to-understand answer for the following query from a pet owner: \"{}\".\n\
         Structure the answer with clear headings, paragraphs, and bullet points where \
         appropriate to make it easy to read.\n\
         Focus on providing practical and safe advice.\n\
         Do not repeat the user's query in your response.",
        query
    )
}
