//! Runs the `pdfchunk` binary and checks its exit status, report and output file.

use lopdf::{
    content::{Content, Operation},
    dictionary, Document, Object, Stream,
};
use std::{
    path::{Path, PathBuf},
    process::{Command, Output},
};

/// Temporary working directory removed on drop.
struct TestDir(PathBuf);

impl TestDir {
    fn new() -> Self {
        let path = std::env::temp_dir().join(format!("pdfchunk-cli-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&path).unwrap();
        Self(path)
    }

    fn path(&self, name: &str) -> PathBuf {
        self.0.join(name)
    }

    /// Run the binary with `args` from inside this directory.
    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_pdfchunk"))
            .args(args)
            .current_dir(&self.0)
            .env("RUST_LOG", "off")
            .output()
            .unwrap()
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

/// Write a PDF with one single-line page per entry in `pages`.
fn write_pdf(path: &Path, pages: &[&str]) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });

    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = vec![];

    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![50.into(), 750.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });

        kids.push(page_id.into());
    }

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(pages.len() as i64),
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc.save(path).unwrap();
}

#[test]
fn no_arguments_is_usage_error() {
    let dir = TestDir::new();

    let output = dir.run(&[]);

    assert_eq!(Some(1), output.status.code());
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
    assert!(!dir.path("chunks.txt").exists());
}

#[test]
fn two_arguments_is_usage_error() {
    let dir = TestDir::new();

    let output = dir.run(&["a.pdf", "b.pdf"]);

    assert_eq!(Some(1), output.status.code());
    assert!(output.stdout.is_empty());
    assert!(!dir.path("chunks.txt").exists());
}

#[test]
fn missing_file_fails_without_count() {
    let dir = TestDir::new();

    let output = dir.run(&["nope.pdf"]);

    assert_eq!(Some(1), output.status.code());
    assert!(output.stdout.is_empty());
    assert!(!dir.path("chunks.txt").exists());
}

#[test]
fn help_exits_successfully() {
    let dir = TestDir::new();

    let output = dir.run(&["--help"]);

    assert_eq!(Some(0), output.status.code());
    assert!(String::from_utf8_lossy(&output.stdout).contains("pdfchunk"));
}

#[test]
fn writes_chunks_and_reports_count() {
    let dir = TestDir::new();
    write_pdf(&dir.path("doc.pdf"), &["Hello World", "Second page"]);

    let output = dir.run(&["doc.pdf"]);

    assert_eq!(Some(0), output.status.code());
    assert_eq!(
        "Split into 2 chunks\n",
        String::from_utf8(output.stdout).unwrap()
    );

    let written = std::fs::read_to_string(dir.path("chunks.txt")).unwrap();
    let lines = written.lines().collect::<Vec<_>>();
    assert_eq!(2, lines.len());
    assert_eq!("Hello World", lines[0]);
    assert_eq!("Second page", lines[1]);
}
