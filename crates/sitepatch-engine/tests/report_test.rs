use sitepatch_engine::condition::Condition;
use sitepatch_engine::formatter::ReportContext;
use sitepatch_engine::operation::{Operation, OperationAndFailure};
use sitepatch_engine::protocol::{DependencyFailure, OperationFailure};
use sitepatch_engine::report::failure_describer;

#[test]
fn test_describer_renders_a_full_diagnostic() {
    let describe = failure_describer(ReportContext {
        site_name: "Example Forum".into(),
        extension_name: "Forum Fixes".into(),
        location: "https://forum.example.com/t/1".into(),
    });

    let record = OperationAndFailure {
        operation: Operation::independent("remove the sidebar ad", Condition::Always, || Ok(())),
        failure: OperationFailure::Dependencies {
            dependencies: vec![DependencyFailure::DoesNotExist {
                key: "ad".into(),
                selector: "#sidebar .ad".into(),
            }],
        },
    };

    let message = describe(&record);
    assert!(message.starts_with("Could not remove the sidebar ad on this page:"));
    assert!(message.contains("https://forum.example.com/t/1"));
    assert!(message.contains("ad: nothing matches '#sidebar .ad'"));
    assert!(message.contains("Forum Fixes"));
}

#[test]
fn test_describer_is_reusable_across_failures() {
    let describe = failure_describer(ReportContext {
        site_name: "Example".into(),
        extension_name: "Fixes".into(),
        location: "https://example.com/".into(),
    });

    let dependency = OperationAndFailure {
        operation: Operation::independent("a", Condition::Always, || Ok(())),
        failure: OperationFailure::Dependencies {
            dependencies: vec![],
        },
    };
    let internal = OperationAndFailure {
        operation: Operation::independent("b", Condition::Always, || Ok(())),
        failure: OperationFailure::Internal {
            message: "broke".into(),
        },
    };

    assert!(describe(&dependency).contains("Could not a on this page"));
    assert!(describe(&internal).contains("The operation failed with this error"));
    assert!(describe(&internal).contains("broke"));
}
