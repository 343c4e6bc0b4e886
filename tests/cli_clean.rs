#![cfg(unix)]

mod common;

use common::*;

#[test]
fn clean_removes_the_output_directory() {
    let env = TestEnv::new();
    env.write("dist/index.html", "old");
    env.write("dist/nested/page.html", "old");

    let result = env.run(&["clean"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(!env.exists("dist"));
    assert!(env.exists("sitetask.toml"));
    assert!(env.task_log().is_empty());
}

#[test]
fn clean_is_idempotent() {
    let env = TestEnv::new();
    env.write("dist/index.html", "old");

    let first = env.run(&["clean"]);
    let second = env.run(&["clean"]);

    assert!(first.success);
    assert!(second.success, "{}", second.combined_output());
    assert!(second.stdout.contains("nothing to remove"));
}

#[test]
fn clean_refuses_to_remove_the_project_root() {
    let env = TestEnv::new();
    env.write("sitetask.toml", "[paths]\noutput = \".\"\n");

    let result = env.run(&["clean"]);

    assert_eq!(result.exit_code, 2);
    assert!(result.stderr.contains("refusing to remove"));
    assert!(env.exists("sitetask.toml"));
}

#[test]
fn output_dir_env_override_is_honored() {
    let env = TestEnv::new();
    env.write("public/index.html", "old");
    env.write("dist/index.html", "keep");

    let result = env.run_with_env(&["clean"], &[("SITETASK_OUTPUT_DIR", "public")]);

    assert!(result.success, "{}", result.combined_output());
    assert!(!env.exists("public"));
    assert!(env.exists("dist/index.html"));
}
