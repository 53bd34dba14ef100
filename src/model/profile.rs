//! Portfolio owner profile

use serde::Deserialize;

/// Who the portfolio belongs to, shown on the splash, About and Contact sections
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    pub email: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Fatma Esam".to_string(),
            tagline: "Graphic, UI/UX designer and front-end developer".to_string(),
            email: "fatmaesam263@gmail.com".to_string(),
            about: "I design brands, interfaces and the web pages that carry them. \
                    Browse the Projects section for graphic design work, UI/UX case \
                    studies on Behance and live web builds with their source on GitHub."
                .to_string(),
            skills: vec![
                "Adobe Photoshop".to_string(),
                "Adobe Illustrator".to_string(),
                "Figma".to_string(),
                "HTML / CSS".to_string(),
                "JavaScript".to_string(),
            ],
        }
    }
}
