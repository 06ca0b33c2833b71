use super::*;

#[test]
fn signal_navigator_queues_path() {
    let owner = Owner::new();
    owner.with(|| {
        let pending = RwSignal::new(None::<String>);
        let nav = SignalNavigator::new(pending);

        nav.navigate("/credentials");
        assert_eq!(pending.get_untracked().as_deref(), Some("/credentials"));

        nav.navigate("/login");
        assert_eq!(pending.get_untracked().as_deref(), Some("/login"));
    });
}

#[test]
fn load_config_without_build_env_uses_defaults() {
    if option_env!("LOCKBOX_API_URL").is_none() && option_env!("LOCKBOX_BACKEND").is_none() {
        assert_eq!(load_config(), AppConfig::default());
    }
}
