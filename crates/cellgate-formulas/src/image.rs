//! Image generation formula

use cellgate_gateway::{Gateway, LogicalRequest, Result};

/// Default size for generated images
pub const DEFAULT_IMAGE_SIZE: &str = "512x512";

/// Options for the image formula
#[derive(Debug, Clone)]
pub struct ImageFormulaOptions {
    /// Image size; defaults to [`DEFAULT_IMAGE_SIZE`]
    pub size: String,
    /// Style name, resolved through the gateway's style table; unknown
    /// names land in the prompt verbatim
    pub style: Option<String>,
}

impl Default for ImageFormulaOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_IMAGE_SIZE.to_owned(),
            style: None,
        }
    }
}

/// Generate an image and return it as a `data:image/png;base64,` URI
pub async fn image(gateway: &Gateway, text: &str, options: &ImageFormulaOptions) -> Result<String> {
    if text.is_empty() {
        return Ok(String::new());
    }

    tracing::debug!(size = %options.size, "running image formula");

    let mut request = LogicalRequest::image(text);
    request.style = options.style.clone();
    request.size = Some(options.size.clone());

    gateway.complete(&request).await
}
