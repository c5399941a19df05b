/*!
 * Alarm Queue Demo
 *
 * Driver for the two reference interleavings:
 * - Scenario A: a second alarm blocks until the first is received,
 *   then still beats an older normal message (expected 1, 2, 3)
 * - Scenario B: an alarm sent last is delivered first (expected 3, 1, 2)
 *
 * Usage: alarm-queue-demo [a|b|all]
 */

use alarm_queue::payload::{get, put_alarm, put_normal};
use alarm_queue::queue::handle;
use alarm_queue::{init_tracing, QueueHandle, QueueResult};
use anyhow::{bail, Context};
use std::thread;
use std::time::Duration;
use tracing::{error, info};

const PRODUCER_DELAY: Duration = Duration::from_millis(500);
const CONSUMER_DELAY: Duration = Duration::from_millis(1000);

struct Scenario {
    name: &'static str,
    run: fn() -> anyhow::Result<Vec<i32>>,
    expected: [i32; 3],
}

const SCENARIO_A: Scenario = Scenario {
    name: "A",
    run: scenario_a,
    expected: [1, 2, 3],
};

const SCENARIO_B: Scenario = Scenario {
    name: "B",
    run: scenario_b,
    expected: [3, 1, 2],
};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let which = std::env::args().nth(1).unwrap_or_else(|| "all".to_string());
    let scenarios = match which.to_ascii_lowercase().as_str() {
        "a" => vec![SCENARIO_A],
        "b" => vec![SCENARIO_B],
        "all" => vec![SCENARIO_A, SCENARIO_B],
        other => bail!("unknown scenario '{}', expected a, b or all", other),
    };

    for scenario in scenarios {
        let name = scenario.name;
        info!(scenario = name, "Running scenario");
        let delivered = (scenario.run)().with_context(|| format!("scenario {} failed", name))?;
        println!("Scenario {}: received {:?}", name, delivered);

        if delivered != scenario.expected {
            error!(scenario = name, ?delivered, expected = ?scenario.expected, "Unexpected delivery order");
            bail!(
                "scenario {} delivered {:?}, expected {:?}",
                name,
                delivered,
                scenario.expected
            );
        }
    }

    info!("All scenarios delivered in the expected order");
    Ok(())
}

/// Receive `count` values after `delay`
fn consume(queue: QueueHandle<i32>, delay: Duration, count: usize) -> QueueResult<Vec<i32>> {
    thread::sleep(delay);
    (0..count)
        .map(|_| {
            let value = get(&queue)?;
            info!(value, "Consumer: received");
            Ok(value)
        })
        .collect()
}

fn join<T>(handle: thread::JoinHandle<QueueResult<T>>, role: &str) -> anyhow::Result<T> {
    match handle.join() {
        Ok(result) => result.with_context(|| format!("{} reported an error", role)),
        Err(_) => bail!("{} thread panicked", role),
    }
}

fn scenario_a() -> anyhow::Result<Vec<i32>> {
    let queue = handle::create::<i32>()?;

    let alarm_producer = {
        let queue = queue.clone();
        thread::spawn(move || -> QueueResult<()> {
            put_alarm(&queue, 1)?;
            info!("Alarm producer: sent alarm 1");
            // Blocks until alarm 1 is received
            put_alarm(&queue, 2)?;
            info!("Alarm producer: sent alarm 2");
            Ok(())
        })
    };

    let normal_producer = {
        let queue = queue.clone();
        thread::spawn(move || -> QueueResult<()> {
            thread::sleep(PRODUCER_DELAY);
            put_normal(&queue, 3)?;
            info!("Normal producer: sent normal 3");
            Ok(())
        })
    };

    let consumer = {
        let queue = queue.clone();
        thread::spawn(move || consume(queue, CONSUMER_DELAY, 3))
    };

    join(alarm_producer, "alarm producer")?;
    join(normal_producer, "normal producer")?;
    let delivered = join(consumer, "consumer")?;

    handle::destroy(queue);
    Ok(delivered)
}

fn scenario_b() -> anyhow::Result<Vec<i32>> {
    let queue = handle::create::<i32>()?;

    let producer = {
        let queue = queue.clone();
        thread::spawn(move || -> QueueResult<()> {
            put_normal(&queue, 1)?;
            info!("Producer: sent normal 1");
            put_normal(&queue, 2)?;
            info!("Producer: sent normal 2");
            thread::sleep(PRODUCER_DELAY);
            put_alarm(&queue, 3)?;
            info!("Producer: sent alarm 3");
            Ok(())
        })
    };

    let consumer = {
        let queue = queue.clone();
        thread::spawn(move || consume(queue, CONSUMER_DELAY, 3))
    };

    join(producer, "producer")?;
    let delivered = join(consumer, "consumer")?;

    handle::destroy(queue);
    Ok(delivered)
}
