//! Site building logic - discovers profiles, renders them, writes pages.

use crate::{
    config::Config,
    frontmatter::{split_frontmatter, FrontmatterError},
    markdown::MarkdownProcessor,
    models::Profile,
    render::render_profile,
    slug::slug_from_path,
    template::{PageTemplate, TemplateError},
};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Output file written inside each profile's directory
const PAGE_FILE_NAME: &str = "index.html";

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed document {}: {source}", path.display())]
    MalformedDocument {
        path: PathBuf,
        #[source]
        source: FrontmatterError,
    },

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
}

impl BuildError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A profile document that was left out of a keep-going build
#[derive(Debug, Clone)]
pub struct SkippedProfile {
    pub path: PathBuf,
    pub reason: String,
}

/// Pages written by a build, in processing order
#[derive(Debug, Clone, Default)]
pub struct BuildSummary {
    pub pages: Vec<PathBuf>,
    pub skipped: Vec<SkippedProfile>,
}

impl BuildSummary {
    /// Number of pages written
    pub fn built(&self) -> usize {
        self.pages.len()
    }
}

#[derive(Debug, Clone)]
pub enum BuildOutcome {
    /// The profiles directory does not exist; nothing was written
    NoProfilesDirectory,
    Built(BuildSummary),
}

/// A discovered profile document
#[derive(Debug, Clone)]
struct ProfileSource {
    path: PathBuf,
    slug: String,
}

/// Main site builder
pub struct SiteBuilder {
    config: Config,
    processor: MarkdownProcessor,
}

impl SiteBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            processor: MarkdownProcessor::new(),
        }
    }

    /// Build every profile page
    pub fn build(&self) -> Result<BuildOutcome, BuildError> {
        let profiles_dir = self.config.profiles_dir();
        if !profiles_dir.exists() {
            tracing::info!("No profiles directory at {:?}", profiles_dir);
            return Ok(BuildOutcome::NoProfilesDirectory);
        }

        let sources = self.discover_profiles(&profiles_dir)?;
        tracing::info!("Found {} profile documents", sources.len());

        let mut summary = BuildSummary::default();
        if sources.is_empty() {
            return Ok(BuildOutcome::Built(summary));
        }

        let template = PageTemplate::load(
            self.config.template_path(),
            &self.config.container,
            &self.config.site_name,
        )?;
        let output_dir = self.config.output_dir();

        for source in &sources {
            let profile = match self.load_profile(source) {
                Ok(profile) => profile,
                Err(err) if self.config.keep_going => {
                    tracing::error!("Skipping {:?}: {}", source.path, err);
                    summary.skipped.push(SkippedProfile {
                        path: source.path.clone(),
                        reason: err.to_string(),
                    });
                    continue;
                }
                Err(err) => return Err(err),
            };

            let target = self.write_page(&template, &profile, &output_dir)?;
            summary.pages.push(target);
        }

        tracing::info!(
            "Built {} pages for {} ({} skipped)",
            summary.built(),
            template.site_name(),
            summary.skipped.len()
        );

        Ok(BuildOutcome::Built(summary))
    }

    /// Find profile documents directly inside the profiles directory,
    /// sorted by file name. README files and hidden files are not profiles.
    fn discover_profiles(&self, profiles_dir: &Path) -> Result<Vec<ProfileSource>, BuildError> {
        let mut sources = Vec::new();

        for entry in WalkDir::new(profiles_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
        {
            let entry = entry.map_err(|e| BuildError::io(profiles_dir, e.into()))?;
            let path = entry.path();
            // Follows symlinks; a dangling link is not a file
            if !path.is_file() {
                continue;
            }

            if path.extension().and_then(|ext| ext.to_str()) != Some(self.config.extension.as_str()) {
                continue;
            }
            let Some(slug) = slug_from_path(path) else {
                continue;
            };
            if slug.to_lowercase() == "readme" {
                tracing::debug!("Ignoring {:?}", path);
                continue;
            }

            sources.push(ProfileSource {
                path: path.to_path_buf(),
                slug,
            });
        }

        Ok(sources)
    }

    /// Read, split and normalize a single profile document
    fn load_profile(&self, source: &ProfileSource) -> Result<Profile, BuildError> {
        let content =
            fs::read_to_string(&source.path).map_err(|e| BuildError::io(&source.path, e))?;
        let (metadata, body) =
            split_frontmatter(&content).map_err(|e| BuildError::MalformedDocument {
                path: source.path.clone(),
                source: e,
            })?;

        Ok(Profile::from_metadata(&source.slug, &metadata, body))
    }

    /// Render a profile into the template and write `<slug>/index.html`
    fn write_page(
        &self,
        template: &PageTemplate,
        profile: &Profile,
        output_dir: &Path,
    ) -> Result<PathBuf, BuildError> {
        let fragment = render_profile(profile, &self.processor);
        let page = template.compose(&profile.name, &fragment)?;

        let page_dir = output_dir.join(&profile.slug);
        fs::create_dir_all(&page_dir).map_err(|e| BuildError::io(&page_dir, e))?;
        let target = page_dir.join(PAGE_FILE_NAME);
        fs::write(&target, page).map_err(|e| BuildError::io(&target, e))?;

        tracing::debug!("Wrote {} -> {:?}", profile.slug, target);
        Ok(target)
    }
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}
