mod common;

use common::{fixed_instant, RecordingHost};
use serde_json::json;
use timesub::clock::FixedClock;
use timesub::config::TimeSubstitutionConfig;
use timesub::constants::HOOK;
use timesub::error::Error;
use timesub::hooks::TimeSubstitutionPlugin;
use timesub::host::{Host, ServiceHost};

fn deployment_template() -> serde_json::Value {
    json!({
        "Resources": {
            "APIGatewayDeployment_##time##": {
                "Type": "AWS::APIGateway::Deployment",
                "Properties": {
                    "Description": "Description ##time_long##"
                }
            }
        }
    })
}

#[test]
fn test_registers_single_hook() {
    let host = RecordingHost::default();
    let plugin = TimeSubstitutionPlugin::new(&host).unwrap();
    let hooks = plugin.hooks();

    assert_eq!(hooks.len(), 1);
    assert_eq!(
        hooks.keys().copied().collect::<Vec<_>>(),
        vec!["after:aws:package:finalize:mergeCustomProviderResources"]
    );
}

#[test]
fn test_default_patterns_without_config() {
    let host = RecordingHost::default();
    let plugin = TimeSubstitutionPlugin::new(&host).unwrap();

    assert_eq!(plugin.patterns().short.as_str(), "##time##");
    assert_eq!(plugin.patterns().long.as_str(), "##time_long##");
}

#[test]
fn test_configured_short_pattern() {
    let config = TimeSubstitutionConfig {
        pattern_short: Some("some pattern".to_string()),
        pattern_long: None,
    };
    let host = RecordingHost::new(Some(config), json!({}));
    let plugin = TimeSubstitutionPlugin::new(&host).unwrap();

    assert_eq!(plugin.patterns().short.as_str(), "some pattern");
    assert_eq!(plugin.patterns().long.as_str(), "##time_long##");
}

#[test]
fn test_invalid_pattern_fails_construction() {
    let config = TimeSubstitutionConfig {
        pattern_short: Some("[".to_string()),
        pattern_long: None,
    };
    let host = RecordingHost::new(Some(config), json!({}));

    assert!(matches!(
        TimeSubstitutionPlugin::new(&host),
        Err(Error::PatternCompileError { slot: "short", .. })
    ));
}

#[test]
fn test_handle_updates_template() {
    let mut host = RecordingHost::new(None, deployment_template());
    let plugin = TimeSubstitutionPlugin::new(&host)
        .unwrap()
        .with_clock(FixedClock(fixed_instant()));

    plugin.handle(&mut host).unwrap();

    assert_eq!(
        host.template,
        json!({
            "Resources": {
                "APIGatewayDeployment_19800131123016": {
                    "Type": "AWS::APIGateway::Deployment",
                    "Properties": {
                        "Description": "Description Thu Jan 31 1980 12:30:16 GMT-0600 (GMT-06:00)"
                    }
                }
            }
        })
    );
    assert_eq!(host.messages.borrow().len(), 2);
}

#[test]
fn test_handle_keeps_template_on_corruption() {
    let config = TimeSubstitutionConfig {
        pattern_short: Some("\\{".to_string()),
        pattern_long: None,
    };
    let mut host = RecordingHost::new(Some(config), deployment_template());
    let plugin = TimeSubstitutionPlugin::new(&host)
        .unwrap()
        .with_clock(FixedClock(fixed_instant()));

    let result = plugin.handle(&mut host);

    assert!(matches!(result, Err(Error::TemplateCorruptionError(_))));
    assert_eq!(host.template, deployment_template());
}

#[test]
fn test_run_hook_dispatches_registered_event() {
    let mut host = RecordingHost::new(None, json!({ "Description": "##time##" }));
    let plugin = TimeSubstitutionPlugin::new(&host)
        .unwrap()
        .with_clock(FixedClock(fixed_instant()));

    assert!(plugin.run_hook(HOOK, &mut host).unwrap());
    assert_eq!(host.template, json!({ "Description": "19800131123016" }));
}

#[test]
fn test_run_hook_ignores_other_events() {
    let mut host = RecordingHost::new(None, json!({ "Description": "##time##" }));
    let plugin = TimeSubstitutionPlugin::new(&host).unwrap();

    assert!(!plugin.run_hook("before:package:initialize", &mut host).unwrap());
    assert_eq!(host.template, json!({ "Description": "##time##" }));
    assert!(host.messages.borrow().is_empty());
}

#[test_log::test]
fn test_service_host_round_trip() {
    let mut host = ServiceHost::new(Default::default(), deployment_template());
    let plugin = TimeSubstitutionPlugin::new(&host)
        .unwrap()
        .with_clock(FixedClock(fixed_instant()));

    plugin.handle(&mut host).unwrap();

    let template = host.into_template();
    assert!(template["Resources"]
        .get("APIGatewayDeployment_19800131123016")
        .is_some());
}

#[test]
fn test_service_host_exposes_config() {
    let config = timesub::config::parse_config(
        "custom:\n  timeSubstitution:\n    patternLong: \"@@long@@\"\n",
    )
    .unwrap();
    let host = ServiceHost::new(config, json!({}));

    assert_eq!(
        host.time_substitution().and_then(|c| c.pattern_long.as_deref()),
        Some("@@long@@")
    );
}
