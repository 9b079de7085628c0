use std::time::{Duration, Instant};

use log::{debug, info};
use uuid::Uuid;

use crate::{BatchError, model::MergedRoom};

use super::{
    build_name,
    item::{Exporter, Loader},
    merger::RoomStudentMerger,
};

/// Type alias for job execution results.
type JobResult<T> = Result<T, BatchError>;

/// Represents a job that can be executed.
///
/// A job loads the rooms, loads the students, merges them and exports the result, in
/// that order. The first failure aborts the run and is returned unchanged.
pub trait Job {
    /// Runs the job and returns the result of the job execution.
    ///
    /// # Returns
    /// - `Ok(JobExecution)` when every stage succeeds
    /// - `Err(BatchError)` carrying the error of the first failing stage
    fn run(&self) -> JobResult<JobExecution>;
}

/// Represents the execution of a job.
///
/// Besides timing information, it reports how many rooms were exported (the unassigned
/// bucket included), how many students were distributed and how many of them ended up
/// unassigned.
#[derive(Debug)]
pub struct JobExecution {
    /// The time when the job started executing
    pub start: Instant,
    /// The time when the job finished executing
    pub end: Instant,
    /// The total duration of the job execution
    pub duration: Duration,
    /// Number of exported rooms
    pub room_count: usize,
    /// Number of students across all rooms
    pub student_count: usize,
    /// Number of students in the unassigned bucket
    pub unassigned_count: usize,
}

/// Represents an instance of a job.
///
/// A job instance is created through the `JobBuilder` and executed by calling the `run`
/// method.
pub struct JobInstance<'a> {
    /// Unique identifier for this job instance
    id: Uuid,
    /// Human-readable name for the job
    name: String,
    rooms: &'a dyn Loader,
    students: &'a dyn Loader,
    exporter: &'a dyn Exporter,
}

impl JobInstance<'_> {
    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Job for JobInstance<'_> {
    fn run(&self) -> JobResult<JobExecution> {
        let start = Instant::now();

        info!("Start of job: {}, id: {}", self.name, self.id);

        let rooms = self.rooms.load()?;
        debug!("Rooms loaded");

        let students = self.students.load()?;
        debug!("Students loaded");

        let merged = RoomStudentMerger::from_values(rooms, students)?.merge()?;

        self.exporter.export(&merged)?;

        info!("End of job: {}, id: {}", self.name, self.id);

        Ok(JobExecution {
            start,
            end: Instant::now(),
            duration: start.elapsed(),
            room_count: merged.len(),
            student_count: merged.iter().map(|room| room.students.len()).sum(),
            unassigned_count: unassigned_count(&merged),
        })
    }
}

fn unassigned_count(merged: &[MergedRoom]) -> usize {
    merged
        .iter()
        .find(|room| room.id().is_unassigned())
        .map_or(0, |room| room.students.len())
}

/// Builder for creating a job instance.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use student_rooms::core::job::{Job, JobBuilder};
/// use student_rooms::item::json::{JsonExporterBuilder, JsonLoaderBuilder};
///
/// let rooms = JsonLoaderBuilder::new()
///     .source_name("rooms")
///     .from_reader(Cursor::new(r#"[{"id": 1, "name": "Room #1"}]"#));
/// let students = JsonLoaderBuilder::new()
///     .source_name("students")
///     .from_reader(Cursor::new(r#"[{"id": 101, "name": "Alice", "room": 1}]"#));
/// let exporter = JsonExporterBuilder::new().from_writer(Vec::<u8>::new());
///
/// let job = JobBuilder::new()
///     .name("roster".to_string())
///     .rooms(&rooms)
///     .students(&students)
///     .exporter(&exporter)
///     .build()
///     .unwrap();
///
/// let execution = job.run().unwrap();
/// assert_eq!(execution.room_count, 2);
/// assert_eq!(execution.unassigned_count, 0);
/// ```
#[derive(Default)]
pub struct JobBuilder<'a> {
    /// Optional name for the job (generated randomly if not specified)
    name: Option<String>,
    rooms: Option<&'a dyn Loader>,
    students: Option<&'a dyn Loader>,
    exporter: Option<&'a dyn Exporter>,
}

impl<'a> JobBuilder<'a> {
    pub fn new() -> Self {
        Self {
            name: None,
            rooms: None,
            students: None,
            exporter: None,
        }
    }

    /// Sets the name of the job.
    pub fn name(mut self, name: String) -> JobBuilder<'a> {
        self.name = Some(name);
        self
    }

    /// Sets the loader providing the room records.
    pub fn rooms(mut self, loader: &'a dyn Loader) -> JobBuilder<'a> {
        self.rooms = Some(loader);
        self
    }

    /// Sets the loader providing the student records.
    pub fn students(mut self, loader: &'a dyn Loader) -> JobBuilder<'a> {
        self.students = Some(loader);
        self
    }

    /// Sets the exporter receiving the merged rooms.
    pub fn exporter(mut self, exporter: &'a dyn Exporter) -> JobBuilder<'a> {
        self.exporter = Some(exporter);
        self
    }

    /// Builds a `JobInstance`.
    ///
    /// If no name has been provided, a random name is generated. Fails with
    /// [`BatchError::Configuration`] when a loader or the exporter is missing.
    pub fn build(self) -> JobResult<JobInstance<'a>> {
        let rooms = self
            .rooms
            .ok_or_else(|| BatchError::Configuration("rooms loader is required".to_string()))?;
        let students = self
            .students
            .ok_or_else(|| BatchError::Configuration("students loader is required".to_string()))?;
        let exporter = self
            .exporter
            .ok_or_else(|| BatchError::Configuration("exporter is required".to_string()))?;

        Ok(JobInstance {
            id: Uuid::new_v4(),
            name: self.name.unwrap_or_else(build_name),
            rooms,
            students,
            exporter,
        })
    }
}
