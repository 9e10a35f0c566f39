use anyhow::{Context, Result, bail};
use mdsite_config::Config;
use mdsite_engine::{extract_title, markdown_to_html};
use std::fs;
use std::path::Path;

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Copies static assets into the public directory and renders every page.
pub fn build_site(config: &Config) -> Result<()> {
    copy_static(&config.static_dir, &config.public_dir)?;
    let template = fs::read_to_string(&config.template_path).with_context(|| {
        format!(
            "Failed to read template {}",
            config.template_path.display()
        )
    })?;
    generate_pages_recursive(&config.content_dir, &template, &config.public_dir)
}

/// Replaces `dest` with a recursive copy of `src`.
pub fn copy_static(src: &Path, dest: &Path) -> Result<()> {
    if !src.is_dir() {
        bail!("Static directory not found: {}", src.display());
    }
    if dest.exists() {
        log::info!("Clearing {}", dest.display());
        fs::remove_dir_all(dest)
            .with_context(|| format!("Failed to clear {}", dest.display()))?;
    }
    copy_dir_recursive(src, dest)
}

fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest).with_context(|| format!("Failed to create {}", dest.display()))?;

    for entry in fs::read_dir(src).with_context(|| format!("Failed to read {}", src.display()))? {
        let entry = entry?;
        let from = entry.path();
        let to = dest.join(entry.file_name());

        if from.is_dir() {
            copy_dir_recursive(&from, &to)?;
        } else {
            log::info!("Copying {} -> {}", from.display(), to.display());
            fs::copy(&from, &to).with_context(|| {
                format!("Failed to copy {} to {}", from.display(), to.display())
            })?;
        }
    }

    Ok(())
}

/// Renders one markdown file into `template` and writes it to `dest`.
pub fn generate_page(from: &Path, template: &str, dest: &Path) -> Result<()> {
    log::info!("Generating page from {} to {}", from.display(), dest.display());

    let markdown = fs::read_to_string(from)
        .with_context(|| format!("Failed to read {}", from.display()))?;
    let content = markdown_to_html(&markdown)
        .with_context(|| format!("Failed to convert {}", from.display()))?;
    let title = extract_title(&markdown)
        .with_context(|| format!("Failed to find a title in {}", from.display()))?;

    let page = template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &content);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(dest, page).with_context(|| format!("Failed to write {}", dest.display()))
}

/// Renders every `.md` file under `content_dir` to the same relative path
/// under `dest_dir`, with an `.html` extension.
pub fn generate_pages_recursive(content_dir: &Path, template: &str, dest_dir: &Path) -> Result<()> {
    let entries = fs::read_dir(content_dir)
        .with_context(|| format!("Failed to read {}", content_dir.display()))?;

    for entry in entries {
        let path = entry?.path();
        let Some(name) = path.file_name() else {
            continue;
        };
        let dest = dest_dir.join(name);

        if path.is_dir() {
            generate_pages_recursive(&path, template, &dest)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            generate_page(&path, template, &dest.with_extension("html"))?;
        }
    }

    Ok(())
}
