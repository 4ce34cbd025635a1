//! End-to-end pipeline tests over a starter template tree built in a
//! temporary directory.

use std::fs;
use std::path::Path;

use zui_scaffold::answers::{Answers, RawAnswers};
use zui_scaffold::scaffold::Scaffolder;
use zui_scaffold::template::PLACEHOLDER_ID;
use zui_scaffold::ErrorCode;

fn write_template(root: &Path) {
    let module = root.join("src/uni_modules").join(PLACEHOLDER_ID);
    let component = module.join("components").join(PLACEHOLDER_ID);
    fs::create_dir_all(&component).unwrap();
    fs::create_dir_all(root.join("src/pages/index")).unwrap();

    fs::write(
        root.join("package.json"),
        format!(
            "{{\"name\":\"{id}\",\"description\":\"{id}-description\",\"author\":\"{id}-author\"}}",
            id = PLACEHOLDER_ID
        ),
    )
    .unwrap();
    fs::write(
        root.join("README.md"),
        format!("# {id}-name\n\n{id}-description\n", id = PLACEHOLDER_ID),
    )
    .unwrap();
    fs::write(
        root.join("src/manifest.json"),
        format!("{{\"name\":\"{}-name\"}}", PLACEHOLDER_ID),
    )
    .unwrap();
    fs::write(
        root.join("src/pages.json"),
        format!(
            "{{\"pages\":[{{\"path\":\"pages/index/index\",\"style\":{{\"navigationBarTitleText\":\"{}-name\"}}}}]}}",
            PLACEHOLDER_ID
        ),
    )
    .unwrap();
    fs::write(
        module.join("readme.md"),
        format!("# {id}-name\n\nby {id}-author\n", id = PLACEHOLDER_ID),
    )
    .unwrap();
    fs::write(
        module.join("package.json"),
        format!(
            "{{\"id\":\"{id}\",\"displayName\":\"{id}-name\",\"description\":\"{id}-description\",\"keywords\":[\"{id}-tags\"],\"author\":\"{id}-author\"}}",
            id = PLACEHOLDER_ID
        ),
    )
    .unwrap();
    fs::write(
        component.join(format!("{}.vue", PLACEHOLDER_ID)),
        format!(
            "<template>\n  <view class=\"{id}\">{id}-name</view>\n</template>\n",
            id = PLACEHOLDER_ID
        ),
    )
    .unwrap();
    fs::write(
        root.join("src/pages/index/index.vue"),
        format!("<template>\n  <{id} />\n</template>\n", id = PLACEHOLDER_ID),
    )
    .unwrap();
}

fn answers() -> Answers {
    Answers::from_raw(RawAnswers {
        plugin_id: "my-plugin".to_string(),
        display_name: "My Plugin".to_string(),
        description: "desc".to_string(),
        tags: "x,y".to_string(),
        author: "Bob".to_string(),
    })
}

#[test]
fn transform_renames_and_substitutes_everything() {
    let tmp = tempfile::tempdir().unwrap();
    write_template(tmp.path());

    let output = Scaffolder::new(tmp.path(), answers()).transform().unwrap();

    assert_eq!(output.plugin_id, "my-plugin");
    assert_eq!(output.renamed.len(), 3);
    assert_eq!(output.rewritten.len(), 8);
    assert!(!output.committed);

    let component_file = tmp
        .path()
        .join("src/uni_modules/my-plugin/components/my-plugin/my-plugin.vue");
    assert!(component_file.exists());
    assert!(!tmp.path().join("src/uni_modules").join(PLACEHOLDER_ID).exists());

    // No residual placeholder substrings in any target file.
    for rel in &output.rewritten {
        let content = fs::read_to_string(tmp.path().join(rel)).unwrap();
        assert!(
            !content.contains(PLACEHOLDER_ID),
            "residual placeholder in {}: {}",
            rel,
            content
        );
    }

    let module_manifest =
        fs::read_to_string(tmp.path().join("src/uni_modules/my-plugin/package.json")).unwrap();
    assert!(module_manifest.contains("\"id\":\"my-plugin\""));
    assert!(module_manifest.contains("\"displayName\":\"My Plugin\""));
    assert!(module_manifest.contains("\"keywords\":[\"x\",\"y\"]"));
    assert!(module_manifest.contains("\"author\":\"Bob\""));

    let index = fs::read_to_string(tmp.path().join("src/pages/index/index.vue")).unwrap();
    assert!(index.contains("<my-plugin />"));
}

#[test]
fn second_run_fails_at_first_rename() {
    let tmp = tempfile::tempdir().unwrap();
    write_template(tmp.path());

    let scaffolder = Scaffolder::new(tmp.path(), answers());
    scaffolder.transform().unwrap();

    let err = scaffolder.transform().unwrap_err();
    assert_eq!(err.code, ErrorCode::TemplateMissingSource);
}

#[test]
fn existing_destination_aborts_and_leaves_mixed_state() {
    let tmp = tempfile::tempdir().unwrap();
    write_template(tmp.path());
    fs::create_dir_all(tmp.path().join("src/uni_modules/my-plugin")).unwrap();

    let err = Scaffolder::new(tmp.path(), answers())
        .transform()
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::TemplateDestinationExists);

    // The earlier renames are not rolled back.
    let old_module = tmp.path().join("src/uni_modules").join(PLACEHOLDER_ID);
    assert!(old_module.join("components/my-plugin/my-plugin.vue").exists());
}

#[test]
fn missing_target_file_aborts_after_renames() {
    let tmp = tempfile::tempdir().unwrap();
    write_template(tmp.path());
    fs::remove_file(tmp.path().join("README.md")).unwrap();

    let err = Scaffolder::new(tmp.path(), answers())
        .transform()
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::TemplateTargetNotFound);

    // Renames already happened by the time the rewrite failed.
    assert!(tmp.path().join("src/uni_modules/my-plugin").exists());
}

#[test]
fn run_creates_initial_commit() {
    if std::process::Command::new("git")
        .arg("--version")
        .output()
        .is_err()
    {
        return; // environment without git
    }

    let tmp = tempfile::tempdir().unwrap();
    write_template(tmp.path());

    // Commit identity for environments without a global git config.
    std::env::set_var("GIT_AUTHOR_NAME", "Test");
    std::env::set_var("GIT_AUTHOR_EMAIL", "test@example.com");
    std::env::set_var("GIT_COMMITTER_NAME", "Test");
    std::env::set_var("GIT_COMMITTER_EMAIL", "test@example.com");

    let output = Scaffolder::new(tmp.path(), answers()).run().unwrap();
    assert!(output.committed);
    assert!(zui_scaffold::git::is_git_repo(tmp.path()));
}
