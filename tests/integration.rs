// SPDX-License-Identifier: MPL-2.0
use iced_uploader::config::{self, Config, GeneralConfig, UploadConfig};
use iced_uploader::i18n::fluent::I18n;
use iced_uploader::ui::uploader::{self, Event, FileSummary};
use iced_uploader::upload::{
    merge_refs, DropZone, DropZoneOptions, FileInput, NotificationQueue, RejectionReason,
    SelectedFile, SelectionConstraints, SelectionController,
};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_file(dir: &Path, name: &str, size: usize) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, vec![0_u8; size]).expect("Failed to write test file");
    path
}

fn english() -> I18n {
    I18n::new(Some("en-US".to_string()), &Config::default())
}

#[test]
fn test_drop_remove_and_drop_again_on_disk() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let resume = write_file(dir.path(), "resume.pdf", 5 * 1024 * 1024);
    let i18n = english();

    let mut state = uploader::State::new(SelectionConstraints::default());

    let _ = state.update(uploader::Message::FileHovered(resume.clone()), &i18n);
    let (event, _) = state.update(uploader::Message::FileDropped(resume.clone()), &i18n);
    let Event::FileSelected(Some(file)) = event else {
        panic!("expected a selection, got {event:?}");
    };
    assert_eq!(file.path(), resume.as_path());
    assert_eq!(file.mime_type(), "application/pdf");
    assert_eq!(
        state.summary(),
        Some(FileSummary {
            name: "resume.pdf".to_string(),
            size_label: "5.0 MB".to_string(),
        })
    );

    let (event, _) = state.update(uploader::Message::RemovePressed, &i18n);
    assert_eq!(event, Event::FileSelected(None));
    assert!(state.summary().is_none());

    let (event, _) = state.update(uploader::Message::FileDropped(resume.clone()), &i18n);
    assert!(matches!(event, Event::FileSelected(Some(_))));

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_rejections_on_disk() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let big = write_file(dir.path(), "big.pdf", 2 * 1024 * 1024);
    let photo = write_file(dir.path(), "photo.png", 10);
    let constraints = SelectionConstraints::default().with_max_size_bytes(1024 * 1024);

    let mut zone = DropZone::new(DropZoneOptions {
        single_file: true,
        constraints,
    });

    let outcome = zone.file_dropped(big.clone()).expect("gesture closed");
    assert!(outcome.accepted.is_empty());
    assert!(matches!(
        outcome.rejected[0].reasons[0],
        RejectionReason::FileTooLarge { .. }
    ));

    let outcome = zone.file_dropped(photo).expect("gesture closed");
    assert_eq!(outcome.rejected[0].reasons[0].code(), "file-invalid-type");

    let outcome = zone
        .file_dropped(dir.path().to_path_buf())
        .expect("gesture closed");
    assert_eq!(outcome.rejected[0].reasons[0].code(), "file-unreadable");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_controller_with_closure_observer_and_real_zone() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let first = write_file(dir.path(), "first.pdf", 100);
    let second = write_file(dir.path(), "second.pdf", 200);

    let mut zone = DropZone::new(DropZoneOptions::default());
    let mut seen: Vec<Option<String>> = Vec::new();
    {
        let mut controller = SelectionController::new(|file: Option<&SelectedFile>| {
            seen.push(file.map(|f| f.name().to_string()));
        });
        let mut binding = merge_refs(
            controller.bridge().slot(),
            Some(zone.input_ref_target()),
        );
        binding.attach(Some(FileInput::new()));

        zone.file_hovered(&first);
        zone.file_hovered(&second);
        assert!(zone.file_dropped(first.clone()).is_none());
        let outcome = zone.file_dropped(second.clone()).expect("gesture closed");
        assert_eq!(outcome.accepted.len(), 1);
        assert_eq!(outcome.ignored[0].path(), second.as_path());
        controller.handle_drop_event(&outcome.accepted);
        controller.sync_from_adapter_state(zone.accepted_files());

        controller.clear_selection();
        controller.clear_selection();
        binding.detach();
    }

    assert_eq!(
        seen,
        vec![Some("first.pdf".to_string()), None],
        "one notification per logical change"
    );

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_queue_observer_sees_silent_mirror() {
    let mut controller = SelectionController::new(NotificationQueue::new());
    let file = SelectedFile::new("/docs/a.pdf", 1, "application/pdf");

    controller.sync_from_adapter_state(std::slice::from_ref(&file));
    assert_eq!(controller.selected(), Some(&file));
    assert!(controller.observer().is_empty());
}

#[test]
fn test_config_drives_constraints_and_language() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let mut accepted_types = BTreeMap::new();
    accepted_types.insert("application/pdf".to_string(), vec![".pdf".to_string()]);
    accepted_types.insert(
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document".to_string(),
        vec![".docx".to_string()],
    );
    let saved = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
        },
        upload: UploadConfig {
            max_size_mb: Some(5),
            accepted_types: Some(accepted_types),
        },
    };
    config::save_to_path(&saved, &temp_config_file_path).expect("Failed to write config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load config from path");
    assert_eq!(loaded, saved);

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");

    let state = uploader::State::new(loaded.constraints());
    let english = english();
    assert_eq!(state.hint(&english), "PDF, DOCX (max 5.0 MB)");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_broken_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[upload\nmax_size_mb = ")
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some(config::CONFIG_LOAD_WARNING));

    dir.close().expect("Failed to close temporary directory");
}
