use crate::integrations::{args::IntegrationArgs, config::IntegrationConfig, format::Format};

#[test]
fn build_with_defaults() {
    let config = IntegrationConfig::from(IntegrationArgs::new("my-int", Format::SingleLine));

    assert_eq!(config.name, "my-int");
    assert_eq!(config.format, Format::SingleLine);
    assert_eq!(config.queue, "");
    assert_eq!(config.location, "");
    assert_eq!(config.lines, None);
}

#[test]
fn build_multi_line() {
    let args = IntegrationArgs::new("apache", Format::MultiLine)
        .queue("logcollector")
        .location("/var/log/apache2/error.log")
        .lines(3);
    let config = IntegrationConfig::from(args);

    assert_eq!(
        config,
        IntegrationConfig::new("apache", Format::MultiLine)
            .queue("logcollector")
            .location("/var/log/apache2/error.log")
            .lines(3)
    );
    assert_eq!(config.lines, Some(3));
}

#[test]
fn lines_dropped_for_other_formats() {
    let config = IntegrationConfig::from(IntegrationArgs::new("syslog", Format::Syslog).lines(3));
    assert_eq!(config.lines, None);

    let config = IntegrationConfig::new("syslog", Format::Syslog).lines(3);
    assert_eq!(config.lines, None);
}

#[test]
fn serialized_layout() {
    let config = IntegrationConfig::new("my-int", Format::SingleLine);
    let value = serde_json::to_value(&config).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "name": "my-int",
            "format": "single-line",
            "queue": "",
            "location": "",
            "lines": null,
        })
    );
}

#[test]
fn deserialize_fills_missing_optionals() {
    let config: IntegrationConfig =
        serde_json::from_str(r#"{"name": "json", "format": "json"}"#).unwrap();
    assert_eq!(config, IntegrationConfig::new("json", Format::Json));
}
