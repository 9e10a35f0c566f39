use mdsite_cli::{build_site, copy_static, generate_page, generate_pages_recursive};
use mdsite_config::Config;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const TEMPLATE: &str = "<html><head><title>{{ Title }}</title></head><body>{{ Content }}</body></html>";

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn generates_a_page_from_template() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "index.md", "# Home\n\nWelcome *in*.");
    let dest = dir.path().join("out/index.html");

    generate_page(&dir.path().join("index.md"), TEMPLATE, &dest).unwrap();

    assert_eq!(
        fs::read_to_string(dest).unwrap(),
        "<html><head><title>Home</title></head><body><div><h1>Home</h1><p>Welcome <i>in</i>.</p></div></body></html>"
    );
}

#[test]
fn page_without_title_is_an_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "untitled.md", "just text");

    let err = generate_page(
        &dir.path().join("untitled.md"),
        TEMPLATE,
        &dir.path().join("untitled.html"),
    )
    .unwrap_err();

    assert!(format!("{err:#}").contains("no h1 title"));
}

#[test]
fn malformed_markdown_names_the_file() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "broken.md", "# Broken\n\nan *odd star");

    let err = generate_page(
        &dir.path().join("broken.md"),
        TEMPLATE,
        &dir.path().join("broken.html"),
    )
    .unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("broken.md"));
    assert!(message.contains("unbalanced delimiter"));
}

#[test]
fn generates_pages_recursively() {
    let dir = TempDir::new().unwrap();
    let content = dir.path().join("content");
    write(&content, "index.md", "# Index");
    write(&content, "blog/post.md", "# Post\n\n- one\n- two");
    write(&content, "blog/notes.txt", "ignored");
    let public = dir.path().join("public");

    generate_pages_recursive(&content, "{{ Content }}", &public).unwrap();

    assert_eq!(
        fs::read_to_string(public.join("index.html")).unwrap(),
        "<div><h1>Index</h1></div>"
    );
    assert_eq!(
        fs::read_to_string(public.join("blog/post.html")).unwrap(),
        "<div><h1>Post</h1><ul><li>one</li><li>two</li></ul></div>"
    );
    assert!(!public.join("blog/notes.txt").exists());
    assert!(!public.join("blog/notes.html").exists());
}

#[test]
fn copy_static_replaces_destination() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("static");
    let dest = dir.path().join("public");
    write(&src, "index.css", "body {}");
    write(&src, "images/logo.png", "png");
    write(&dest, "stale.html", "old");

    copy_static(&src, &dest).unwrap();

    assert_eq!(fs::read_to_string(dest.join("index.css")).unwrap(), "body {}");
    assert_eq!(fs::read_to_string(dest.join("images/logo.png")).unwrap(), "png");
    assert!(!dest.join("stale.html").exists());
}

#[test]
fn copy_static_requires_source() {
    let dir = TempDir::new().unwrap();
    let err = copy_static(&dir.path().join("missing"), &dir.path().join("public")).unwrap_err();
    assert!(err.to_string().contains("Static directory not found"));
}

#[test]
fn builds_whole_site_from_config() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "static/index.css", "body {}");
    write(root, "content/index.md", "# Site\n\n> quoted");
    write(root, "template.html", TEMPLATE);

    let config = Config {
        content_dir: root.join("content"),
        template_path: root.join("template.html"),
        static_dir: root.join("static"),
        public_dir: root.join("public"),
    };
    build_site(&config).unwrap();

    assert!(root.join("public/index.css").exists());
    assert_eq!(
        fs::read_to_string(root.join("public/index.html")).unwrap(),
        "<html><head><title>Site</title></head><body><div><h1>Site</h1><blockquote>quoted</blockquote></div></body></html>"
    );
}
