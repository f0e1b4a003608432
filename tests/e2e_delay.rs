use std::time::{Duration, Instant};

use jobflow_rust::job_core::{AttributeStore, InMemoryAttributeStore, ManualClock, NeverStopped, NoVariables,
                             RunEventKind};
use jobflow_rust::prelude::*;

fn fast_config() -> RunnerConfig { RunnerConfig::default().with_poll_interval(Duration::from_millis(100)) }

#[tokio::test]
async fn unbounded_wait_is_stopped_from_another_task() {
    let mut run = JobRun::new().with_config(fast_config());
    let flag = run.stop_flag();
    let entry = DelayEntry::new("pause"); // "0" = sin límite

    let started = Instant::now();
    let handle = tokio::task::spawn_blocking(move || {
        let outcome = run.run_entry(&entry, &SystemClock, &NoVariables, None);
        (outcome, run)
    });
    tokio::time::sleep(Duration::from_millis(300)).await;
    flag.stop();

    let (outcome, run) = handle.await.expect("wait task");
    assert!(!outcome.succeeded);
    assert!(started.elapsed() < Duration::from_secs(2));
    assert!(run.events()
               .iter()
               .any(|e| e.kind == RunEventKind::EntryFinished { entry_id: "pause".into(), succeeded: false }));
}

#[tokio::test]
async fn one_second_wait_elapses_on_the_real_clock() {
    let mut run = JobRun::new().with_config(fast_config());
    let entry = DelayEntry::new("pause").with_max_duration("1");

    let started = Instant::now();
    let outcome = tokio::task::spawn_blocking(move || run.run_entry(&entry, &SystemClock, &NoVariables, None))
        .await
        .expect("wait task");

    assert!(outcome.succeeded);
    // El inicio se trunca al segundo: la espera real es de (0, 1] s más un sondeo.
    assert!(started.elapsed() <= Duration::from_millis(1_500));
}

#[test]
fn restored_config_behaves_like_the_original() {
    let original = DelayEntry::new("pause").with_config(WaitConfig::new("3", TimeUnit::Seconds));

    // Vía atributos con nombre.
    let mut store = InMemoryAttributeStore::new();
    original.save_attributes(&mut store).unwrap();
    assert_eq!(store.get_integer("scaletime").unwrap(), Some(0));
    let mut from_attrs = DelayEntry::new("pause");
    from_attrs.load_attributes(&store).unwrap();

    // Vía serde.
    let json = serde_json::to_string(&original.config).unwrap();
    let from_json = DelayEntry::new("pause").with_config(serde_json::from_str(&json).unwrap());

    let run_once = |entry: &DelayEntry| {
        let clock = ManualClock::new(9_000);
        let ctx = EntryContext::new(&NeverStopped, &clock, &NoVariables);
        (entry.execute(&ctx), clock.millis())
    };
    let expected = run_once(&original);
    assert_eq!(run_once(&from_attrs), expected);
    assert_eq!(run_once(&from_json), expected);
    assert_eq!(expected.1, 12_000);
}
