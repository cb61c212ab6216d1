use analytics_portal::error::PortalError;
use analytics_portal::models::{
    LoginRequest, NavigationGroup, NavigationResult, PageHandle, Role, SectionName,
};

#[test]
fn role_wire_tokens_match_the_portal_ui() {
    // The JSON tokens must be the exact strings the original login selector
    // used, including the space in "Decision Maker".
    assert_eq!(serde_json::to_string(&Role::Pc).unwrap(), r#""PC""#);
    assert_eq!(
        serde_json::to_string(&Role::DecisionMaker).unwrap(),
        r#""Decision Maker""#
    );
    assert_eq!(
        serde_json::to_string(&Role::Unauthenticated).unwrap(),
        r#""Unauthenticated""#
    );
}

#[test]
fn role_parse_inverts_as_token() {
    for role in Role::REGISTRY {
        assert_eq!(Role::parse(role.as_token()).unwrap(), role);
    }
}

#[test]
fn role_parse_rejects_out_of_registry_tokens() {
    for bad in ["Wizard", "admin", "pc", "", "Decision  Maker"] {
        assert!(
            matches!(Role::parse(bad), Err(PortalError::InvalidRole(_))),
            "token {bad:?} must be rejected"
        );
    }
}

#[test]
fn role_serde_round_trips_through_json() {
    for role in Role::REGISTRY {
        let json = serde_json::to_string(&role).unwrap();
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, role);
    }
}

#[test]
fn section_name_tokens_use_display_labels() {
    assert_eq!(serde_json::to_string(&SectionName::Eda).unwrap(), r#""EDA""#);
    assert_eq!(
        serde_json::to_string(&SectionName::MachineLearning).unwrap(),
        r#""Machine Learning""#
    );
}

#[test]
fn navigation_result_omits_absent_default_page() {
    let result = NavigationResult {
        groups: vec![NavigationGroup {
            name: "Login".to_string(),
            pages: vec![PageHandle::new("Login", ":material/login:", "login")],
        }],
        default_page: None,
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(!json.contains("default_page"));

    // And it must still deserialize when the field is missing.
    let back: NavigationResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}

#[test]
fn navigation_result_serializes_present_default_page() {
    let dashboard = PageHandle::new("Dashboard", ":material/monitoring:", "dashboard");
    let result = NavigationResult {
        groups: vec![NavigationGroup {
            name: "Visualization".to_string(),
            pages: vec![dashboard.clone()],
        }],
        default_page: Some(dashboard),
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains(r#""default_page""#));
    assert!(json.contains(r#""callback":"dashboard""#));
}

#[test]
fn login_request_carries_the_raw_token() {
    // The payload deliberately carries a raw string, not a typed Role: the
    // parse boundary (and its 422) lives in the handler.
    let payload: LoginRequest = serde_json::from_str(r#"{"role":"Decision Maker"}"#).unwrap();
    assert_eq!(payload.role, "Decision Maker");
    assert_eq!(Role::parse(&payload.role).unwrap(), Role::DecisionMaker);
}
