//! Project catalog - categories of images with optional external links
//!
//! The catalog is static configuration: built once at startup and never
//! mutated afterwards. Category order is display order.

use crate::error::CatalogError;
use serde::Deserialize;
use std::collections::HashSet;

/// Presentation kind of a category, controls which link buttons a tile shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Graphic,
    Ux,
    Web,
    #[default]
    #[serde(other)]
    Default,
}

impl CategoryKind {
    /// Link kinds meaningful for this category kind, in render order
    pub fn link_kinds(&self) -> &'static [LinkKind] {
        match self {
            CategoryKind::Ux => &[LinkKind::Behance],
            CategoryKind::Web => &[LinkKind::Github, LinkKind::Demo],
            CategoryKind::Graphic | CategoryKind::Default => &[],
        }
    }
}

/// Purpose of an external link attached to an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    Behance,
    Github,
    Demo,
}

impl LinkKind {
    /// Button caption
    pub fn label(&self) -> &'static str {
        match self {
            LinkKind::Behance => "View on Behance",
            LinkKind::Github => "GitHub",
            LinkKind::Demo => "Live Demo",
        }
    }

    /// Key that triggers this link for the focused tile
    pub fn shortcut(&self) -> char {
        match self {
            LinkKind::Behance => 'b',
            LinkKind::Github => 'g',
            LinkKind::Demo => 'd',
        }
    }
}

/// An external link target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLink {
    pub kind: LinkKind,
    pub url: String,
}

/// A single image in a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    pub src: String,
    pub links: Vec<ImageLink>,
}

impl ImageEntry {
    /// Image without any links
    pub fn plain(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            links: Vec::new(),
        }
    }

    pub fn with_link(mut self, kind: LinkKind, url: impl Into<String>) -> Self {
        self.links.push(ImageLink {
            kind,
            url: url.into(),
        });
        self
    }

    pub fn link(&self, kind: LinkKind) -> Option<&ImageLink> {
        self.links.iter().find(|l| l.kind == kind)
    }

    /// Links that should be rendered for the given category kind
    pub fn visible_links(&self, kind: CategoryKind) -> Vec<&ImageLink> {
        kind.link_kinds()
            .iter()
            .filter_map(|k| self.link(*k))
            .collect()
    }

    /// File name portion of the source path
    pub fn file_name(&self) -> &str {
        self.src.rsplit('/').next().unwrap_or(&self.src)
    }
}

/// Image entry as written in the portfolio file: a bare path or a mapping
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawImageEntry {
    Path(String),
    Detailed {
        src: String,
        #[serde(default)]
        behance: Option<String>,
        #[serde(default)]
        github: Option<String>,
        #[serde(default)]
        demo: Option<String>,
    },
}

impl From<RawImageEntry> for ImageEntry {
    fn from(raw: RawImageEntry) -> Self {
        match raw {
            RawImageEntry::Path(src) => ImageEntry::plain(src),
            RawImageEntry::Detailed {
                src,
                behance,
                github,
                demo,
            } => {
                let links = [
                    (LinkKind::Behance, behance),
                    (LinkKind::Github, github),
                    (LinkKind::Demo, demo),
                ]
                .into_iter()
                .filter_map(|(kind, url)| {
                    url.filter(|u| !u.trim().is_empty())
                        .map(|url| ImageLink { kind, url })
                })
                .collect();
                ImageEntry { src, links }
            }
        }
    }
}

/// A named group of project images
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub key: String,
    pub title: String,
    pub kind: CategoryKind,
    pub images: Vec<ImageEntry>,
}

impl Category {
    /// Image sources in display order, used as the lightbox sequence
    pub fn sources(&self) -> Vec<String> {
        self.images.iter().map(|img| img.src.clone()).collect()
    }
}

/// Category as written in the portfolio file
#[derive(Debug, Deserialize)]
pub struct RawCategory {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub kind: CategoryKind,
    #[serde(default)]
    pub images: Vec<RawImageEntry>,
}

impl From<RawCategory> for Category {
    fn from(raw: RawCategory) -> Self {
        Category {
            key: raw.key,
            title: raw.title,
            kind: raw.kind,
            images: raw.images.into_iter().map(ImageEntry::from).collect(),
        }
    }
}

/// Ordered, read-only collection of categories with unique keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog, rejecting empty or duplicate keys
    pub fn new(categories: Vec<Category>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for category in &categories {
            if category.key.trim().is_empty() {
                return Err(CatalogError::EmptyKey(category.title.clone()));
            }
            if !seen.insert(category.key.as_str()) {
                return Err(CatalogError::DuplicateKey(category.key.clone()));
            }
        }
        Ok(Self { categories })
    }

    pub fn from_raw(raw: Vec<RawCategory>) -> Result<Self, CatalogError> {
        Self::new(raw.into_iter().map(Category::from).collect())
    }

    pub fn get(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Catalog shipped with the binary, used when no portfolio file exists
    pub fn builtin() -> Self {
        let graphic = Category {
            key: "graphic".to_string(),
            title: "Graphic Design Projects".to_string(),
            kind: CategoryKind::Graphic,
            images: (1..=5)
                .map(|i| ImageEntry::plain(format!("images/graphic-{}.jpg", i)))
                .collect(),
        };

        let behance = [
            "175196361/Ui-Design",
            "239480243/Couply",
            "239480383/Krypto",
            "214701203/Friskay",
            "172704195/App_DAH",
            "239480575/Time-App",
            "172816069/Website-Page-Design",
            "172984981/Socially_Webpage",
        ];
        let ux = Category {
            key: "ux".to_string(),
            title: "UI/UX Design Projects".to_string(),
            kind: CategoryKind::Ux,
            images: behance
                .iter()
                .enumerate()
                .map(|(i, path)| {
                    ImageEntry::plain(format!("images/ui-ux-project-{}.jpg", i + 1)).with_link(
                        LinkKind::Behance,
                        format!("https://www.behance.net/gallery/{}", path),
                    )
                })
                .collect(),
        };

        let repos = [
            "Socially-webpage-Design",
            "science-project-2",
            "project-3",
            "Rose-Project--One",
        ];
        let web = Category {
            key: "web".to_string(),
            title: "Web Development Projects".to_string(),
            kind: CategoryKind::Web,
            images: repos
                .iter()
                .enumerate()
                .map(|(i, repo)| {
                    ImageEntry::plain(format!("images/web/web-{}.jpg", i + 1))
                        .with_link(
                            LinkKind::Github,
                            format!("https://github.com/FatmaEsam/{}", repo),
                        )
                        .with_link(
                            LinkKind::Demo,
                            format!("https://fatmaesam.github.io/{}/", repo),
                        )
                })
                .collect(),
        };

        Self {
            categories: vec![graphic, ux, web],
        }
    }
}
