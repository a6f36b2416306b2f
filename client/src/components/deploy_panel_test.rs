use super::*;

#[test]
fn badge_class_carries_status_modifier() {
    for status in [DeployStatus::Idle, DeployStatus::Deploying, DeployStatus::Success, DeployStatus::Error] {
        let class = status_badge_class(status);
        assert!(class.starts_with("deploy-badge "));
        assert!(class.ends_with(status.as_str()), "{class}");
    }
}

#[test]
fn badge_labels() {
    assert_eq!(status_badge_label(DeployStatus::Success), "Deployed");
    assert_eq!(status_badge_label(DeployStatus::Error), "Failed");
}
