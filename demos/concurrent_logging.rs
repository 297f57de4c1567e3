//! Concurrent logging demo
//!
//! Three producer threads submit messages while the consumer drains them to
//! `application.log`; stopping the pipeline flushes everything that was
//! submitted.
//!
//! Run with: cargo run --example concurrent_logging

use log_pipeline::prelude::*;
use std::thread;

fn main() -> Result<()> {
    let mut pipeline = Pipeline::with_file("application.log")?;
    pipeline.start()?;

    thread::scope(|s| {
        for thread_id in 1..=3 {
            let pipeline = &pipeline;
            s.spawn(move || {
                for i in 0..10 {
                    pipeline
                        .submit(
                            Level::Info,
                            format!("Thread {} is logging message {}", thread_id, i),
                        )
                        .expect("pipeline is running");
                }
            });
        }
    });

    pipeline.warning("all producers finished")?;
    pipeline.stop();

    println!(
        "Wrote {} lines to application.log",
        pipeline.metrics().written()
    );
    Ok(())
}
