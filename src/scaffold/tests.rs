//! Tests for project skeleton creation.

use super::*;
use crate::session::ProjectInputs;
use std::fs;
use tempfile::TempDir;

fn session_in(top: &Path) -> Session {
    Session::with_timestamp(
        ProjectInputs {
            project: "j_doe_00_00".to_string(),
            top_dir: top.to_path_buf(),
            uppmax_project_id: "b2013001".to_string(),
            mail_user: "doe@example.org".to_string(),
        },
        "Mon Oct 19 14:03:11 2026",
    )
}

#[test]
fn test_has_existing_descriptor() {
    let temp_dir = TempDir::new().unwrap();
    let git_dir = temp_dir.path().join("p_git");

    assert!(!has_existing_descriptor(&git_dir));

    fs::create_dir_all(&git_dir).unwrap();
    assert!(!has_existing_descriptor(&git_dir));

    fs::write(git_dir.join(PROJ_CONF_FILE_NAME), "").unwrap();
    assert!(!has_existing_descriptor(&git_dir));

    fs::write(git_dir.join(PAVEMENT_FILE_NAME), "").unwrap();
    assert!(has_existing_descriptor(&git_dir));
}

#[test]
fn test_descriptor_directory_is_not_a_conflict() {
    let temp_dir = TempDir::new().unwrap();
    let git_dir = temp_dir.path().join("p_git");
    fs::create_dir_all(git_dir.join(PAVEMENT_FILE_NAME)).unwrap();

    assert!(!has_existing_descriptor(&git_dir));
}

#[test]
fn test_create_directories() {
    let temp_dir = TempDir::new().unwrap();
    let session = session_in(temp_dir.path());

    let created = create_directories(&session.paths).unwrap();

    assert_eq!(created.len(), 4);
    assert!(session.paths.git_dir.is_dir());
    assert!(session.paths.sbatch_dir.is_dir());
    assert!(session.paths.log_dir.is_dir());
    assert!(session.paths.sphinx_dir.is_dir());
    assert!(!session.paths.intermediate_dir.exists());
}

#[test]
fn test_create_directories_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let session = session_in(temp_dir.path());
    fs::create_dir_all(&session.paths.log_dir).unwrap();
    fs::write(session.paths.log_dir.join("old.log"), "keep").unwrap();

    let created = create_directories(&session.paths).unwrap();
    assert_eq!(created.len(), 3);
    assert!(!created.contains(&session.paths.log_dir));

    let again = create_directories(&session.paths).unwrap();
    assert!(again.is_empty());
    assert_eq!(
        fs::read_to_string(session.paths.log_dir.join("old.log")).unwrap(),
        "keep"
    );
}

#[test]
fn test_create_directories_under_missing_top() {
    let temp_dir = TempDir::new().unwrap();
    let session = session_in(&temp_dir.path().join("new").join("top"));

    create_directories(&session.paths).unwrap();
    assert!(session.paths.sphinx_dir.is_dir());
}

#[test]
fn test_render_project_files() {
    let temp_dir = TempDir::new().unwrap();
    let session = session_in(temp_dir.path());

    let files = render_project_files(&session, &Config::default()).unwrap();

    let names: Vec<&str> = files.iter().map(|f| f.name).collect();
    assert_eq!(
        names,
        vec![PAVEMENT_FILE_NAME, SBATCH_TEMPLATE_FILE_NAME, PROJ_CONF_FILE_NAME]
    );
    assert_eq!(files[1].content, SBATCH_TEMPLATE);
    assert!(!files[0].content.contains("${"));
    assert!(!files[2].content.contains("${"));
}

#[test]
fn test_write_project_files() {
    let temp_dir = TempDir::new().unwrap();
    let session = session_in(temp_dir.path());
    create_directories(&session.paths).unwrap();

    let written = write_project_files(&session, &Config::default(), &Interrupt::new()).unwrap();

    assert_eq!(written.len(), 3);
    for path in &written {
        assert!(path.is_file(), "{} missing", path.display());
        assert_eq!(path.parent().unwrap(), session.paths.git_dir);
    }

    let conf = fs::read_to_string(session.paths.git_dir.join(PROJ_CONF_FILE_NAME)).unwrap();
    assert!(conf.contains(&format!("top_dir: {}", temp_dir.path().display())));

    let sbatch = fs::read_to_string(session.paths.git_dir.join(SBATCH_TEMPLATE_FILE_NAME)).unwrap();
    assert!(sbatch.contains("#SBATCH -A ${project_id}"));
}

#[test]
fn test_write_without_git_dir_fails() {
    let temp_dir = TempDir::new().unwrap();
    let session = session_in(temp_dir.path());

    let err = write_project_files(&session, &Config::default(), &Interrupt::new()).unwrap_err();
    assert!(matches!(err, InitError::Io { .. }));
    assert!(!session.paths.git_dir.exists());
}

#[test]
fn test_interrupt_stops_writes_between_files() {
    let temp_dir = TempDir::new().unwrap();
    let session = session_in(temp_dir.path());
    create_directories(&session.paths).unwrap();
    let interrupt = Interrupt::new();
    interrupt.notify();

    let err = write_project_files(&session, &Config::default(), &interrupt).unwrap_err();

    assert!(matches!(err, InitError::Interrupted));
    assert_eq!(fs::read_dir(&session.paths.git_dir).unwrap().count(), 1);
    assert!(session.paths.git_dir.join("doc").is_dir());
    assert!(!interrupt.take_pending());
    // the section is closed again, so a later interrupt is not deferred
    assert!(!interrupt.notify());
}
