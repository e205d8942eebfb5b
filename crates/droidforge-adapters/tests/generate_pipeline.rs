//! End-to-end pipeline tests with real adapters: built-in templates, strict
//! rendering, local filesystem, zip assembly. No provider credentials are
//! configured, so every run takes the deterministic fallback path.

use std::io::{Cursor, Read};
use std::path::Path;

use droidforge_adapters::{
    InMemoryStore, LocalFilesystem, ProviderSelector, ProviderSettings, StrictRenderer,
    ZipArchiver, build_chain,
};
use droidforge_core::{
    application::{FragmentService, GenerateService},
    domain::{ProjectConfig, Template},
    prelude::TemplateStore,
};
use tempfile::TempDir;

fn offline_service() -> GenerateService {
    let chain = build_chain(ProviderSelector::Auto, &ProviderSettings::default());
    GenerateService::new(
        Box::new(InMemoryStore::with_builtin().unwrap()),
        Box::new(StrictRenderer::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(ZipArchiver::new()),
        FragmentService::new(chain),
    )
}

fn demo_config() -> ProjectConfig {
    ProjectConfig::builder()
        .app_name("DemoApp")
        .package_name("com.example.demo")
        .min_sdk(24)
        .target_sdk(34)
        .prompt("Simple screen with a title and a button")
        .build()
        .unwrap()
}

#[test]
fn render_produces_the_full_project_tree() {
    let out = TempDir::new().unwrap();
    let project = out.path().join("DemoApp");

    offline_service().render(&demo_config(), &project).unwrap();

    let expected = [
        "settings.gradle.kts",
        "build.gradle.kts",
        "gradle.properties",
        ".gitignore",
        "app/build.gradle.kts",
        "app/src/main/AndroidManifest.xml",
        "app/src/main/java/com/example/demo/MainActivity.kt",
        "app/src/main/res/values/strings.xml",
        "app/src/main/res/values/themes.xml",
        "app/src/main/res/values/colors.xml",
        "app/src/main/res/mipmap-anydpi-v26/ic_launcher.xml",
        "app/src/main/res/mipmap-anydpi-v26/ic_launcher_round.xml",
        "app/src/main/res/values/ic_launcher_background.xml",
        "app/src/main/res/drawable/ic_launcher_foreground.xml",
    ];
    for rel in expected {
        let path = project.join(rel);
        assert!(path.is_file(), "missing {rel}");
        assert!(
            !std::fs::read_to_string(&path).unwrap().is_empty(),
            "{rel} is empty"
        );
    }
}

#[test]
fn rendered_files_carry_the_config_values() {
    let out = TempDir::new().unwrap();
    let project = out.path().join("DemoApp");

    offline_service().render(&demo_config(), &project).unwrap();

    let settings = std::fs::read_to_string(project.join("settings.gradle.kts")).unwrap();
    assert!(settings.contains("rootProject.name = \"DemoApp\""));

    let build = std::fs::read_to_string(project.join("app/build.gradle.kts")).unwrap();
    assert!(build.contains("namespace = \"com.example.demo\""));
    assert!(build.contains("minSdk = 24"));
    assert!(build.contains("targetSdk = 34"));
    assert!(build.contains("kotlinCompilerExtensionVersion = \"1.5.14\""));

    // No unexpanded placeholders anywhere in the tree.
    for entry in walkdir(&project) {
        let content = std::fs::read_to_string(&entry).unwrap();
        assert!(
            !content.contains("{{"),
            "unexpanded placeholder in {}",
            entry.display()
        );
    }
}

#[test]
fn activity_lands_in_the_package_directory_with_the_fallback_title() {
    let out = TempDir::new().unwrap();
    let project = out.path().join("DemoApp");

    offline_service().render(&demo_config(), &project).unwrap();

    // Two dots in the package name: three directories below java/.
    let activity = project.join("app/src/main/java/com/example/demo/MainActivity.kt");
    let content = std::fs::read_to_string(&activity).unwrap();
    assert!(content.starts_with("package com.example.demo"));
    assert!(content.contains("Text(\"Simple screen with a title and a button\""));
    assert!(content.contains("generated without an external provider"));
}

#[test]
fn sanitizer_overrides_a_tampered_template_store() {
    // Simulate the out-of-band template edit the sanitizer defends against.
    let store = InMemoryStore::with_builtin().unwrap();
    store
        .insert(Template::new(
            "app/build.gradle.kts",
            "composeOptions {\n    kotlinCompilerExtensionVersion = \"9.0.0\"\n}\n",
        ))
        .unwrap();

    let service = GenerateService::new(
        Box::new(store),
        Box::new(StrictRenderer::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(ZipArchiver::new()),
        FragmentService::new(vec![]),
    );

    let out = TempDir::new().unwrap();
    let project = out.path().join("DemoApp");
    service.render(&demo_config(), &project).unwrap();

    let build = std::fs::read_to_string(project.join("app/build.gradle.kts")).unwrap();
    assert!(build.contains("kotlinCompilerExtensionVersion = \"1.5.14\""));
    assert!(!build.contains("9.0.0"));
}

#[test]
fn generate_returns_an_extractable_zip() {
    let bytes = offline_service().generate(&demo_config()).unwrap();

    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    assert_eq!(archive.len(), 14);

    let mut names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();
    names.sort();
    assert!(names.contains(&"settings.gradle.kts".to_string()));
    assert!(
        names.contains(&"app/src/main/java/com/example/demo/MainActivity.kt".to_string())
    );
    // Relative names only - nothing resembling a temp root.
    for name in &names {
        assert!(!name.starts_with('/'));
        assert!(!name.contains("droidforge_"));
    }

    let mut manifest = String::new();
    archive
        .by_name("app/src/main/AndroidManifest.xml")
        .unwrap()
        .read_to_string(&mut manifest)
        .unwrap();
    assert!(manifest.contains("android.intent.action.MAIN"));
}

#[test]
fn generate_is_deterministic_without_providers() {
    let service = offline_service();
    let first = service.generate(&demo_config()).unwrap();
    let second = service.generate(&demo_config()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn concurrent_requests_do_not_interfere() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let config = ProjectConfig::builder()
                    .app_name(format!("App{i}"))
                    .package_name(format!("com.example.app{i}"))
                    .prompt("a screen")
                    .build()
                    .unwrap();
                offline_service().generate(&config).unwrap()
            })
        })
        .collect();

    for handle in handles {
        let bytes = handle.join().unwrap();
        assert!(zip::ZipArchive::new(Cursor::new(bytes)).is_ok());
    }
}

fn walkdir(root: &Path) -> Vec<std::path::PathBuf> {
    walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().to_path_buf())
        .collect()
}
