use crate::integrations::{
    args::IntegrationArgs, error::IntegrationError, format::Format, validator::ArgsValidator,
};

#[test]
fn accept_single_line_without_options() {
    let args = IntegrationArgs::new("my-int", Format::SingleLine);
    assert!(ArgsValidator::validate(&args).is_ok());
}

#[test]
fn accept_multi_line_with_lines() {
    let args = IntegrationArgs::new("my-int", Format::MultiLine).lines(4);
    assert!(ArgsValidator::validate(&args).is_ok());
}

#[test]
fn accept_complete_arguments() {
    let args = IntegrationArgs::new("windows", Format::EventChannel)
        .queue("windows-eventchannel")
        .location("EventChannel");
    assert!(ArgsValidator::validate(&args).is_ok());
}

#[test]
fn reject_multi_line_without_lines() {
    let args = IntegrationArgs::new("my-int", Format::MultiLine);
    match ArgsValidator::validate(&args) {
        Err(IntegrationError::MissingArgument(_)) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn reject_unpaired_queue() {
    let args = IntegrationArgs::new("my-int", Format::Syslog).queue("logcollector");
    match ArgsValidator::validate(&args) {
        Err(IntegrationError::InconsistentArguments(_)) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn missing_lines_is_reported_first() {
    let args = IntegrationArgs::new("my-int", Format::MultiLine).location("file");
    match ArgsValidator::validate(&args) {
        Err(IntegrationError::MissingArgument(_)) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}
