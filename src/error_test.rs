use super::*;

#[test]
fn missing_mount_target_names_the_id() {
    let err = BootError::MissingMountTarget { id: "app".to_owned() };
    assert_eq!(err.to_string(), "mount target #app not found");
}

#[test]
fn mount_error_carries_the_framework_message() {
    let err = BootError::Mount("element is not an HtmlElement".to_owned());
    assert_eq!(err.to_string(), "mount failed: element is not an HtmlElement");
}

#[test]
fn environment_errors_have_stable_messages() {
    assert_eq!(BootError::NoWindow.to_string(), "no window available");
    assert_eq!(BootError::NoDocument.to_string(), "no document available");
}
