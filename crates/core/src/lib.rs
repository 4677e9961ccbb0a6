use serde::{Deserialize, Serialize};

mod catalog;
mod seed;

pub use catalog::{CatalogError, DiskCatalog};
pub use seed::seed_disks;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Disk {
    pub letter: char,
    #[serde(rename = "sizeMB")]
    pub size_mb: u32,
    pub partitions: Vec<Partition>, // display order
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Partition {
    pub name: String,
    #[serde(rename = "sizeKB")]
    pub size_kb: u32,
    #[serde(rename = "type")]
    pub kind: PartitionType,
    pub fit: FitLabel,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum PartitionType {
    #[serde(rename = "P")]
    Primary,
    #[serde(rename = "E")]
    Extended,
}

/// Fit strategy label carried on a partition record. Nothing in this crate
/// runs an allocator; the value is shown to clients as-is.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum FitLabel {
    #[serde(rename = "FF")]
    FirstFit,
    #[serde(rename = "WF")]
    WorstFit,
    #[serde(rename = "BF")]
    BestFit,
}

impl Disk {
    pub fn new(letter: char, size_mb: u32, partitions: Vec<Partition>) -> Self {
        Self {
            letter,
            size_mb,
            partitions,
        }
    }
}

impl Partition {
    pub fn new(name: impl Into<String>, size_kb: u32, kind: PartitionType, fit: FitLabel) -> Self {
        Self {
            name: name.into(),
            size_kb,
            kind,
            fit,
        }
    }
}
