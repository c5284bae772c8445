use std::fs;
use std::path::Path;
use vertexmap::core::scanner::FileScanner;

fn touch<P: AsRef<Path>>(p: P) {
    fs::write(p, "// test").unwrap();
}

#[test]
fn scanner_collects_only_java_files() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("a")).unwrap();
    fs::create_dir_all(root.join("b")).unwrap();

    touch(root.join("a/Foo.java"));
    touch(root.join("b/Bar.java"));
    touch(root.join("b/readme.txt")); // ignored
    touch(root.join("notes.md")); // ignored

    let scanner = FileScanner::new();
    let files = scanner.scan_directory(root).unwrap();

    let mut relatives: Vec<_> = files.iter().map(|f| f.relative.as_str()).collect();
    relatives.sort();
    assert_eq!(relatives, vec!["a/Foo.java", "b/Bar.java"]);
}

#[test]
fn relative_keys_use_forward_slashes_from_the_root() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("com/example")).unwrap();
    touch(root.join("com/example/App.java"));

    let files = FileScanner::new().scan_directory(root).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].relative, "com/example/App.java");
    assert!(files[0].path.is_absolute() || files[0].path.starts_with(root));
}

#[test]
fn discovery_order_is_stable_across_runs() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    touch(root.join("Zeta.java"));
    touch(root.join("Alpha.java"));
    touch(root.join("Mid.java"));

    let scanner = FileScanner::new();
    let first: Vec<_> = scanner
        .scan_directory(root)
        .unwrap()
        .into_iter()
        .map(|f| f.relative)
        .collect();
    let second: Vec<_> = scanner
        .scan_directory(root)
        .unwrap()
        .into_iter()
        .map(|f| f.relative)
        .collect();

    assert_eq!(first, second);
    assert_eq!(first, vec!["Alpha.java", "Mid.java", "Zeta.java"]);
}

#[test]
fn read_source_substitutes_invalid_utf8() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    let path = root.join("Broken.java");
    fs::write(&path, b"package com.a;\n\xff\xfe class X {}\n").unwrap();

    let scanner = FileScanner::new();
    let files = scanner.scan_directory(root).unwrap();
    assert_eq!(files.len(), 1);

    let content = scanner.read_source(&files[0]).unwrap();
    assert!(content.starts_with("package com.a;"));
    assert!(content.contains('\u{FFFD}'));
}
