//! Gemini API client for the chef features.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used for the support chat (low temperature, factual).
const SUPPORT_MODEL: &str = "gemini-2.5-flash";
/// Model used for recipe text (higher temperature for creativity).
const RECIPE_MODEL: &str = "gemini-3-pro-preview";
/// Model used for recipe imagery.
const IMAGE_MODEL: &str = "gemini-2.5-flash-image";

const SUPPORT_SYSTEM_INSTRUCTION: &str = "\
You are the bbqp Product Specialist, an expert on the bbqp dual-mode grill/oven. \
Help potential customers understand the product and guide them towards a model.

Key features to emphasize:
1. Dual mode: a folding partition switches between a high-heat oven and a scattered-heat grill.
2. AutoDraft: physics-based airflow, no fans; coals ignite faster and heat stays even.
3. Materials: 3mm heat-resistant stainless steel.
4. Personalization: laser engraving for logos, names, or messages.
5. Military edition: matte tactical coating, reinforced construction.

Tone: professional, knowledgeable, concise, premium. If asked about price or \
ordering, point to the configurator and the contact channel. Keep answers \
under 100 words unless a detailed technical explanation is requested.";

const RECIPE_SYSTEM_INSTRUCTION: &str = "\
You are the bbqp AI Chef, a world-class pitmaster specializing in American BBQ \
(Texas, Carolina, Kansas City) and German grill cuisine (Bratwurst, Schwenker, \
Spiessbraten). Generate detailed recipes for the user's request.

Rules:
1. Stick strictly to American BBQ or German grill styles; politely steer other \
cuisines back to the grill.
2. Format: bold title, ingredients with metric units, preparation (marinades, \
rubs), grilling process with direct vs indirect heat zones, and internal \
temperatures for doneness.
3. Tone: passionate, appetizing, encouraging. Keep it concise but informative.";

/// Errors from the chef service boundary.
///
/// Remote failures are a single recoverable condition: the caller shows an
/// inert message and the rest of the application keeps working.
#[derive(Debug, Error)]
pub enum ChefError {
    #[error("Chef service unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("GEMINI_API_KEY environment variable is not set")]
    MissingApiKey,

    #[error("Unexpected response from chef service: {0}")]
    InvalidResponse(String),
}

/// A generated recipe: text plus an optional food photograph.
#[derive(Debug, Clone)]
pub struct Recipe {
    /// Recipe text (markdown-ish prose from the model)
    pub text: String,
    /// Optional generated image, base64-encoded
    pub image: Option<RecipeImage>,
}

/// Inline image data returned by the image model.
#[derive(Debug, Clone)]
pub struct RecipeImage {
    /// MIME type (e.g., "image/png")
    pub mime_type: String,
    /// Base64-encoded image bytes
    pub data: String,
}

impl RecipeImage {
    /// Decodes the base64 payload into raw image bytes.
    pub fn decode(&self) -> Result<Vec<u8>, ChefError> {
        use base64::Engine as _;
        base64::engine::general_purpose::STANDARD
            .decode(&self.data)
            .map_err(|e| ChefError::InvalidResponse(format!("invalid image payload: {e}")))
    }
}

// Wire types for the generateContent endpoint

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Client for the chef features.
///
/// One logical operation: submit a prompt, get back text and optionally an
/// image, or fail with [`ChefError::RemoteUnavailable`]. No retry policy;
/// a failed call is reported and the user may simply try again.
pub struct ChefClient {
    api_key: String,
    client: Client,
}

impl ChefClient {
    /// Creates a new client with the given API key.
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            client: Client::new(),
        }
    }

    /// Creates a client from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, ChefError> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| ChefError::MissingApiKey)?;
        Ok(Self::new(api_key))
    }

    /// Asks the product specialist a support question.
    pub async fn ask_specialist(&self, prompt: &str) -> Result<String, ChefError> {
        let response = self
            .generate(
                SUPPORT_MODEL,
                prompt,
                Some(SUPPORT_SYSTEM_INSTRUCTION),
                Some(0.3),
            )
            .await?;

        Ok(extract_text(&response).unwrap_or_else(|| {
            "Sorry, I cannot answer right now. Please reach out through the contact channel."
                .to_string()
        }))
    }

    /// Generates a BBQ recipe with an accompanying food photograph.
    ///
    /// Text and image are requested concurrently; a missing image is not an
    /// error, a failed text generation is.
    pub async fn generate_recipe(&self, prompt: &str) -> Result<Recipe, ChefError> {
        let image_prompt = format!(
            "Professional, mouth-watering food photography of {prompt} prepared on a \
             high-end BBQ grill. Dark moody lighting, smoke, embers, 4k, cinematic, \
             detailed texture."
        );

        let (text_response, image_response) = tokio::join!(
            self.generate(RECIPE_MODEL, prompt, Some(RECIPE_SYSTEM_INSTRUCTION), Some(0.7)),
            self.generate(IMAGE_MODEL, &image_prompt, None, None),
        );

        let text = extract_text(&text_response?).unwrap_or_else(|| {
            "The chef stepped away from the grill. Try asking again!".to_string()
        });

        // Image generation failing is tolerated; the recipe stands alone
        let image = image_response.ok().and_then(|r| extract_image(&r));

        Ok(Recipe { text, image })
    }

    /// Sends one generateContent request.
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        system_instruction: Option<&str>,
        temperature: Option<f32>,
    ) -> Result<GenerateResponse, ChefError> {
        let url = format!("{GEMINI_API_BASE}/models/{model}:generateContent");
        debug!(model, "sending generateContent request");

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                    inline_data: None,
                }],
            }],
            system_instruction: system_instruction.map(|text| Content {
                parts: vec![Part {
                    text: Some(text.to_string()),
                    inline_data: None,
                }],
            }),
            generation_config: temperature.map(|t| GenerationConfig { temperature: t }),
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ChefError::RemoteUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(ChefError::RemoteUnavailable(format!(
                "{model} returned {status}"
            )));
        }

        response
            .json::<GenerateResponse>()
            .await
            .map_err(|e| ChefError::InvalidResponse(e.to_string()))
    }
}

/// Extracts the first text part from a response.
fn extract_text(response: &GenerateResponse) -> Option<String> {
    response
        .candidates
        .first()?
        .content
        .as_ref()?
        .parts
        .iter()
        .find_map(|p| p.text.clone())
        .filter(|t| !t.is_empty())
}

/// Extracts the first inline image from a response.
fn extract_image(response: &GenerateResponse) -> Option<RecipeImage> {
    response
        .candidates
        .first()?
        .content
        .as_ref()?
        .parts
        .iter()
        .find_map(|p| p.inline_data.as_ref())
        .map(|d| RecipeImage {
            mime_type: d.mime_type.clone(),
            data: d.data.clone(),
        })
}
