use std::net::Ipv4Addr;
use std::time::Duration;

use netmon_common::cancel::CancelToken;
use netmon_common::config::Config;
use netmon_common::network::probe::Reachability;
use netmon_common::network::subnet::SubnetPrefix;
use netmon_common::network::target::Target;
use netmon_core::{monitor, sweep, watch};

use crate::util::{FakeNetwork, lan};

fn test_config() -> Config {
    Config {
        workers: 16,
        watch_interval: Duration::ZERO,
        monitor_interval: Duration::ZERO,
        ..Config::default()
    }
}

/// Octets {1, 5, 254} answer, everything else stays silent.
#[tokio::test]
async fn sweep_finds_exactly_the_answering_hosts() {
    let net = FakeNetwork::with_octets([192, 168, 1], &[1, 5, 254]);

    let hosts = sweep::probe_subnet(
        Ipv4Addr::new(192, 168, 1, 42),
        &net,
        &test_config(),
        &CancelToken::new(),
        |_| {},
    )
    .await;

    assert_eq!(hosts.to_lines(), vec!["192.168.1.1", "192.168.1.5", "192.168.1.254"]);
}

#[tokio::test]
async fn sweep_result_stays_inside_the_candidate_range() {
    // Answers outside the candidate range must never leak into the result.
    let net = FakeNetwork::with_hosts(&["10.0.0.0", "10.0.0.255", "10.0.1.7", "10.0.0.7", "10.0.0.200"]);
    let local_ip = Ipv4Addr::new(10, 0, 0, 33);
    let prefix = SubnetPrefix::from_local(local_ip);

    let hosts = sweep::probe_subnet(local_ip, &net, &test_config(), &CancelToken::new(), |_| {}).await;

    assert!(hosts.iter().all(|ip| prefix.contains(ip)));
    assert_eq!(hosts.to_lines(), vec!["10.0.0.7", "10.0.0.200"]);
}

#[tokio::test]
async fn progress_is_reported_in_ascending_order() {
    let net = FakeNetwork::with_octets([172, 16, 0], &[200, 3, 77, 9]);
    let mut seen = Vec::new();

    sweep::probe_subnet(
        Ipv4Addr::new(172, 16, 0, 1),
        &net,
        &test_config(),
        &CancelToken::new(),
        |ip| seen.push(ip.octets()[3]),
    )
    .await;

    assert_eq!(seen, vec![3, 9, 77, 200]);
}

/// Baseline {1,5}; cycle one sees {1,5,9}; cycle two sees {5,9}.
#[tokio::test]
async fn watcher_reports_joins_and_never_forgets() {
    let cfg = test_config();
    let cancel = CancelToken::new();
    let networks = vec![
        FakeNetwork::with_octets([192, 168, 1], &[1, 5]),
        FakeNetwork::with_octets([192, 168, 1], &[1, 5, 9]),
        FakeNetwork::with_octets([192, 168, 1], &[5, 9]),
    ];
    let silent = FakeNetwork::with_hosts(&[]);

    let networks = &networks;
    let silent = &silent;
    let cfg_ref = &cfg;
    let cancel_ref = &cancel;
    let mut call = 0;
    let mut reports = Vec::new();

    let known = watch::watch_for_new_devices(
        move || {
            let net = networks.get(call).unwrap_or(silent);
            call += 1;
            if call > networks.len() {
                cancel_ref.cancel();
            }
            sweep::probe_subnet(Ipv4Addr::new(192, 168, 1, 42), net, cfg_ref, cancel_ref, |_| {})
        },
        cfg.watch_interval,
        &cancel,
        |new| reports.push(new.clone()),
    )
    .await;

    assert_eq!(reports, vec![lan(&[9])]);
    assert_eq!(known.hosts(), &lan(&[1, 5, 9]));
}

#[tokio::test]
async fn monitor_prints_every_cycle_until_cancelled() {
    let net = FakeNetwork::with_hosts(&["10.0.0.1"]);
    let cancel = CancelToken::new();
    let mut ticks = Vec::new();

    let cycles = monitor::monitor(
        &Target::Addr("10.0.0.1".parse().unwrap()),
        &net,
        Duration::ZERO,
        &cancel,
        |state| {
            ticks.push(state);
            if ticks.len() == 3 {
                cancel.cancel();
            }
        },
    )
    .await;

    assert_eq!(cycles, 3);
    assert_eq!(ticks, vec![Reachability::Reachable; 3]);
    assert_eq!(net.asked.lock().unwrap().len(), 3);
}
