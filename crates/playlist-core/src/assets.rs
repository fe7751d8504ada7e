//! Page template and player scripts compiled into the binary

use crate::render::{Renderer, Scripts};

/// HTML shell with the `MainScript` / `BodyScript` slots
pub const TEMPLATE_HTML: &str = include_str!("../assets/template.html");

/// Player logic; holds the answer slots
pub const MAIN_SCRIPT: &str = include_str!("../assets/main.js");

/// Startup code run once the document is parsed
pub const BODY_SCRIPT: &str = include_str!("../assets/body.js");

/// Renderer loaded with the embedded assets
pub fn default_renderer() -> Renderer {
    Renderer::new(
        TEMPLATE_HTML,
        Scripts {
            main_script: MAIN_SCRIPT.to_string(),
            body_script: BODY_SCRIPT.to_string(),
        },
    )
}
