mod common;

use common::{run, transfer_status, Call, MockService, ScriptedConsole, SERVICE_NODE, TASK_ID};
use pantos_client_cli::types::{Chain, DestinationDetails, DestinationTransfer, SourceTransfer};
use uuid::Uuid;

#[test]
fn status_passes_block_window_and_renders_sub_states() {
    let config = common::config(&[]);
    let mut service = MockService::new();
    service.status = transfer_status(
        SourceTransfer::Confirmed {
            transfer_id: 2,
            transaction_id: "0xsource".to_string(),
        },
        DestinationTransfer::Confirmed(DestinationDetails {
            transfer_id: 3,
            transaction_id: "0xdest".to_string(),
            validator_nonce: 11111,
            signer_addresses: vec!["0xBb60".parse().unwrap()],
            signatures: vec!["665b".to_string()],
        }),
    );
    let mut console = ScriptedConsole::default();

    let code = run(
        &["status", "ethereum", SERVICE_NODE, TASK_ID, "-b", "100"],
        &config,
        &service,
        &mut console,
    )
    .unwrap();

    assert_eq!(code, 0);
    assert_eq!(
        service.calls(),
        vec![Call::Status {
            source: Chain::Ethereum,
            service_node: SERVICE_NODE.to_string(),
            task_id: Uuid::parse_str(TASK_ID).unwrap(),
            blocks: Some(100),
        }]
    );
    let output = console.output();
    assert!(output.starts_with("Transfer status:\n\n"));
    assert!(output.contains("Source transfer status:\t\tCONFIRMED\nSource transfer ID:\t\t2\n"));
    assert!(output.contains("Destination transfer status:\tCONFIRMED\n"));
    assert!(output.contains("Signer addresses:\t\t[0xBb60]\n"));
}

#[test]
fn status_without_blocks_queries_everything() {
    let config = common::config(&[]);
    let service = MockService::new();
    let mut console = ScriptedConsole::default();

    run(
        &["status", "polygon", SERVICE_NODE, TASK_ID],
        &config,
        &service,
        &mut console,
    )
    .unwrap();

    let Call::Status { blocks, .. } = &service.calls()[0] else {
        unreachable!()
    };
    assert_eq!(*blocks, None);
    let output = console.output();
    assert!(output.contains("Source transfer status:\t\tACCEPTED\n\n"));
    assert!(!output.contains("Validator nonce"));
}
