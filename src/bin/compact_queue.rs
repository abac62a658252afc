use compact_queue::{logger, DemoConfig, Queue};

const VALUES: [i32; 4] = [1, 2, 8, 4];
const REPEAT: usize = 3;

fn fill(queue: &mut Queue<i32>) {
    queue.extend(VALUES.iter().copied().cycle().take(VALUES.len() * REPEAT));
    log::info!(
        "filled queue: {} items, capacity {}",
        queue.len(),
        queue.capacity()
    );
}

fn drain(queue: &mut Queue<i32>) -> anyhow::Result<()> {
    while !queue.is_empty() {
        println!("{}", queue.dequeue()?);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::load_from_env()?;
    let records = logger::init_logger(config.log_level)?;

    let mut queue = Queue::new(config.initial_size);
    println!("{}", queue.len());

    for round in 0..config.rounds {
        log::debug!("round {}", round + 1);
        fill(&mut queue);

        println!("==========================");
        drain(&mut queue)?;
    }

    fill(&mut queue);
    log::info!("left {} items in the queue", queue.len());

    for record in records.drain() {
        eprintln!("{record}");
    }

    Ok(())
}
