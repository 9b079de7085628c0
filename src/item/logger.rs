use log::info;

use crate::{
    core::item::{Exporter, ExporterResult},
    model::MergedRoom,
};

#[derive(Default)]
pub struct LoggerExporter {}

impl Exporter for LoggerExporter {
    fn export(&self, rooms: &[MergedRoom]) -> ExporterResult {
        rooms.iter().for_each(|room| {
            let names: Vec<&str> = room.students.iter().map(|s| s.name.as_str()).collect();
            info!("Room {} ({}): {:?}", room.id(), room.name(), names)
        });
        Ok(())
    }
}
