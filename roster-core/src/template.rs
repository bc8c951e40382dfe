//! Shared page template and content injection.

use lol_html::errors::{RewritingError, SelectorError};
use lol_html::html_content::ContentType;
use lol_html::{element, rewrite_str, RewriteStrSettings, Selector};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("failed to read template {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid container selector `{selector}`: {source}")]
    InvalidContainer {
        selector: String,
        #[source]
        source: SelectorError,
    },

    #[error("container not found: template has no `{0}` element")]
    ContainerNotFound(String),

    #[error("failed to rewrite template: {0}")]
    Rewrite(#[from] RewritingError),
}

/// The site page that every profile is injected into.
///
/// Loaded once per build. Composing a page replaces the `<title>` text and
/// the children of the content container, leaving the rest of the markup
/// untouched.
#[derive(Debug, Clone)]
pub struct PageTemplate {
    source: String,
    container: String,
    site_name: String,
}

impl PageTemplate {
    /// Load the template from disk
    pub fn load<P: AsRef<Path>>(
        path: P,
        container: &str,
        site_name: &str,
    ) -> Result<Self, TemplateError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| TemplateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded page template from {:?}", path);
        Self::from_source(source, container, site_name)
    }

    /// Use already loaded template markup
    pub fn from_source(
        source: String,
        container: &str,
        site_name: &str,
    ) -> Result<Self, TemplateError> {
        container
            .parse::<Selector>()
            .map_err(|source| TemplateError::InvalidContainer {
                selector: container.to_string(),
                source,
            })?;

        Ok(Self {
            source,
            container: container.to_string(),
            site_name: site_name.to_string(),
        })
    }

    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    /// Produce a full page for `fragment`, titled `"{title} - {site name}"`.
    ///
    /// Only the first `<title>` and the first container element are
    /// rewritten. A template without a container is an error.
    pub fn compose(&self, title: &str, fragment: &str) -> Result<String, TemplateError> {
        let page_title = format!("{} - {}", title, self.site_name);
        let mut title_replaced = false;
        let mut container_found = false;

        let output = rewrite_str(
            &self.source,
            RewriteStrSettings {
                element_content_handlers: vec![
                    element!("title", |el| {
                        if !title_replaced {
                            el.set_inner_content(&page_title, ContentType::Text);
                            title_replaced = true;
                        }
                        Ok(())
                    }),
                    element!(self.container, |el| {
                        if !container_found {
                            el.set_inner_content(fragment, ContentType::Html);
                            container_found = true;
                        }
                        Ok(())
                    }),
                ],
                ..RewriteStrSettings::new()
            },
        )?;

        if !container_found {
            return Err(TemplateError::ContainerNotFound(self.container.clone()));
        }
        if !title_replaced {
            tracing::warn!("Template has no <title>; page title left unset");
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="fr">
<head>
  <meta charset="utf-8">
  <title>Accueil - Les Cuvees</title>
</head>
<body>
  <nav><a href="/">Accueil</a></nav>
  <main>
    <article>
      <h1>Bienvenue</h1>
      <p>Contenu d'accueil.</p>
    </article>
  </main>
</body>
</html>
"#;

    fn template() -> PageTemplate {
        PageTemplate::from_source(TEMPLATE.to_string(), "article", "Les Cuvees").unwrap()
    }

    #[test]
    fn test_title_gets_site_suffix() {
        let page = template().compose("Aldric", "<p>x</p>").unwrap();
        assert!(page.contains("<title>Aldric - Les Cuvees</title>"));
        assert!(!page.contains("Accueil - Les Cuvees"));
    }

    #[test]
    fn test_title_text_is_escaped() {
        let page = template().compose("A & B", "<p>x</p>").unwrap();
        assert!(page.contains("<title>A &amp; B - Les Cuvees</title>"));
    }

    #[test]
    fn test_container_children_are_replaced() {
        let fragment = "\n<h1 class=\"page-title\">Aldric</h1>\n<p>Bio</p>\n";
        let page = template().compose("Aldric", fragment).unwrap();

        assert!(page.contains(&format!("<article>{}</article>", fragment)));
        assert!(!page.contains("Bienvenue"));
        assert!(!page.contains("Contenu d'accueil."));
    }

    #[test]
    fn test_rest_of_template_is_preserved() {
        let page = template().compose("Aldric", "<p>x</p>").unwrap();
        assert!(page.starts_with("<!DOCTYPE html>\n<html lang=\"fr\">"));
        assert!(page.contains("<nav><a href=\"/\">Accueil</a></nav>"));
        assert!(page.contains("<meta charset=\"utf-8\">"));
    }

    #[test]
    fn test_only_first_container_is_used() {
        let source = "<html><head><title>t</title></head><body><article>one</article><article>two</article></body></html>";
        let template =
            PageTemplate::from_source(source.to_string(), "article", "Site").unwrap();
        let page = template.compose("P", "<p>new</p>").unwrap();
        assert!(page.contains("<article><p>new</p></article><article>two</article>"));
    }

    #[test]
    fn test_missing_container() {
        let source = "<html><head><title>t</title></head><body><main></main></body></html>";
        let template =
            PageTemplate::from_source(source.to_string(), "article", "Site").unwrap();
        let err = template.compose("P", "<p>x</p>").unwrap_err();
        assert!(matches!(err, TemplateError::ContainerNotFound(ref tag) if tag == "article"));
        assert!(err.to_string().starts_with("container not found"));
    }

    #[test]
    fn test_missing_title_is_tolerated() {
        let source = "<html><body><article></article></body></html>";
        let template =
            PageTemplate::from_source(source.to_string(), "article", "Site").unwrap();
        let page = template.compose("P", "<p>x</p>").unwrap();
        assert!(page.contains("<article><p>x</p></article>"));
    }

    #[test]
    fn test_invalid_selector() {
        let result = PageTemplate::from_source(String::new(), "article[", "Site");
        assert!(matches!(result, Err(TemplateError::InvalidContainer { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = PageTemplate::load(dir.path().join("index.html"), "article", "Site");
        assert!(matches!(result, Err(TemplateError::Read { .. })));
    }
}
