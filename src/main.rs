use std::path::{Path, PathBuf};

use anyhow::Result;
use log::info;

use student_rooms::{
    config::{Config, USAGE},
    core::job::{Job, JobBuilder},
    item::json::JsonLoaderBuilder,
};

fn run(config: &Config) -> Result<PathBuf> {
    let rooms = JsonLoaderBuilder::new().from_path(&config.rooms_file);
    let students = JsonLoaderBuilder::new().from_path(&config.students_file);
    let exporter = config.format.exporter_for(&config.output_file);

    let job = JobBuilder::new()
        .name("student-rooms".to_string())
        .rooms(&rooms)
        .students(&students)
        .exporter(exporter.as_ref())
        .build()?;

    let execution = job.run()?;

    info!(
        "Exported {} rooms, {} students ({} unassigned) in {:?}",
        execution.room_count,
        execution.student_count,
        execution.unassigned_count,
        execution.duration
    );

    Ok(output_location(&config.output_file))
}

/// Absolute form of the output path, or the path as given when it cannot be resolved.
fn output_location(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let outcome = Config::from_args(&args)
        .map_err(anyhow::Error::msg)
        .and_then(|config| {
            if config.show_help {
                println!("{}", USAGE);
                return Ok(None);
            }
            run(&config).map(Some)
        });

    match outcome {
        Ok(Some(path)) => println!("Data export success in: {}", path.display()),
        Ok(None) => {}
        Err(error) => {
            println!("Error: {:#}", error);
            std::process::exit(1);
        }
    }
}
