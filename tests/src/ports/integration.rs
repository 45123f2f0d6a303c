use std::time::Duration;

use netmon_common::cancel::CancelToken;
use netmon_common::config::Config;
use netmon_common::network::host::COMMON_PORTS;
use netmon_common::network::probe::ProbeOutcome;
use netmon_common::network::target::Target;
use netmon_core::ports;
use tokio::net::TcpListener;

async fn listen() -> (TcpListener, u16) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    (listener, port)
}

/// A port that was just released, so nothing is listening on it.
async fn released_port() -> u16 {
    let (listener, port) = listen().await;
    drop(listener);
    port
}

fn config() -> Config {
    Config { connect_timeout: Duration::from_millis(500), ..Config::default() }
}

#[tokio::test]
async fn only_listening_ports_are_reported_in_scan_order() {
    let (_ssh, first) = listen().await;
    let (_https, second) = listen().await;
    let closed_a = released_port().await;
    let closed_b = released_port().await;
    let target: Target = "127.0.0.1".parse().unwrap();

    let open = ports::probe_ports_on(
        &target,
        &[closed_a, first, closed_b, second],
        &config(),
        &CancelToken::new(),
        |_| {},
    )
    .await;

    assert_eq!(open.as_slice(), &[first, second]);
    assert_eq!(open.to_lines(), vec![first.to_string(), second.to_string()]);
}

#[tokio::test]
async fn refused_connections_are_closed_not_indeterminate() {
    let port = released_port().await;
    let target: Target = "127.0.0.1".parse().unwrap();

    let outcomes = ports::scan_ports(&target, &[port], &config(), &CancelToken::new(), |_, _| {}).await;

    assert_eq!(outcomes, vec![(port, ProbeOutcome::Closed)]);
}

#[tokio::test]
async fn unresolvable_target_yields_no_open_ports() {
    let target: Target = "no-such-host.invalid".parse().unwrap();

    let outcomes = ports::scan_ports(&target, &COMMON_PORTS, &config(), &CancelToken::new(), |_, _| {}).await;

    assert_eq!(outcomes.len(), COMMON_PORTS.len());
    assert!(outcomes.iter().all(|(_, o)| *o == ProbeOutcome::Indeterminate));
}

#[tokio::test]
async fn cancelled_scan_reports_nothing_open() {
    let (_listener, port) = listen().await;
    let cancel = CancelToken::new();
    cancel.cancel();
    let target: Target = "127.0.0.1".parse().unwrap();

    let open = ports::probe_ports_on(&target, &[port], &config(), &cancel, |_| {}).await;

    assert!(open.is_empty());
}
